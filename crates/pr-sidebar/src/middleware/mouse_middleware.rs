//! MouseMiddleware - hit tests primary presses against the sidebar
//!
//! Only a left-button *down* counts as a press; releases, drags, scrolls and
//! other buttons are dropped.

use crate::actions::{Action, GlobalAction, SidebarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::layout::{entry_index_at, scroll_offset, visible_entries, AppLayout};
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

pub struct MouseMiddleware;

impl MouseMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Index of the sidebar entry under a primary press, if any
    fn pressed_entry(event: &MouseEvent, state: &AppState) -> Option<usize> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let layout = AppLayout::new(state.viewport, state.app_config.sidebar_width);
        let list = layout.sidebar_list();
        let offset = scroll_offset(state.sidebar.cursor, visible_entries(list));

        entry_index_at(list, event.column, event.row, offset)
            .filter(|index| *index < state.sidebar.pull_requests.len())
    }
}

impl Default for MouseMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for MouseMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::Mouse(event)) = action else {
            return true;
        };

        if let Some(index) = Self::pressed_entry(event, state) {
            log::debug!(
                "MouseMiddleware: press at ({}, {}) hits entry {}",
                event.column,
                event.row,
                index
            );
            dispatcher.dispatch(Action::Sidebar(SidebarAction::EntryPressed(index)));
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::PullRequest;
    use crate::views::layout::ENTRY_HEIGHT;
    use ratatui::crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use std::sync::mpsc;

    fn state() -> AppState {
        let mut state = AppState::default();
        state.viewport = Rect::new(0, 0, 100, 30);
        state.app_config.sidebar_width = 40;
        state.sidebar.pull_requests = (1..=3)
            .map(|n| PullRequest::new(n, format!("PR {}", n)))
            .collect();
        state
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16, state: &AppState) -> Vec<Action> {
        let mut middleware = MouseMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        assert!(!middleware.handle(&Action::Global(GlobalAction::Mouse(event)), state, &dispatcher));
        rx.try_iter().collect()
    }

    #[test]
    fn test_left_down_on_entry() {
        let state = state();
        // Border row is y = 0, second entry starts one entry height below the first
        let row = 1 + ENTRY_HEIGHT;
        let dispatched = mouse(MouseEventKind::Down(MouseButton::Left), 5, row, &state);
        assert_eq!(
            dispatched,
            vec![Action::Sidebar(SidebarAction::EntryPressed(1))]
        );
    }

    #[test]
    fn test_other_buttons_and_release_ignored() {
        let state = state();
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
        ] {
            assert!(mouse(kind, 5, 1, &state).is_empty());
        }
    }

    #[test]
    fn test_press_outside_sidebar_ignored() {
        let state = state();
        // Detail pane
        assert!(mouse(MouseEventKind::Down(MouseButton::Left), 60, 1, &state).is_empty());
        // Below the last entry
        assert!(mouse(MouseEventKind::Down(MouseButton::Left), 5, 20, &state).is_empty());
    }
}
