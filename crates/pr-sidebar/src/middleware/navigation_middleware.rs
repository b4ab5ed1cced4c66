//! Navigation Translation Middleware
//!
//! Translates generic Navigation and ViewContext actions into sidebar and
//! router actions. The translated actions go through the full middleware chain.

use crate::actions::{Action, ContextAction, NavigationAction, RouterAction, SidebarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn translate(action: &Action, state: &AppState) -> Option<Action> {
        match action {
            Action::Navigate(nav) => {
                let sidebar_action = match nav {
                    NavigationAction::Next => SidebarAction::CursorNext,
                    NavigationAction::Previous => SidebarAction::CursorPrevious,
                    NavigationAction::ToTop => SidebarAction::CursorToTop,
                    NavigationAction::ToBottom => SidebarAction::CursorToBottom,
                };
                Some(Action::Sidebar(sidebar_action))
            }
            Action::ViewContext(ContextAction::Confirm) => {
                // Enter is a press on the entry under the cursor
                state
                    .sidebar
                    .cursor_pull_request()
                    .map(|_| Action::Sidebar(SidebarAction::EntryPressed(state.sidebar.cursor)))
            }
            Action::ViewContext(ContextAction::Back) => Some(Action::Router(RouterAction::Back)),
            _ => None,
        }
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::Navigate(_) | Action::ViewContext(_)) {
            return true;
        }

        match Self::translate(action, state) {
            Some(translated) => {
                log::debug!(
                    "NavigationMiddleware: Translating {:?} to {:?}",
                    action,
                    translated
                );
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Navigation action not handled: {:?}", action),
        }

        // Generic actions are consumed either way
        false
    }
}
