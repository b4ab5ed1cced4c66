//! KeyboardMiddleware - translates raw key events into semantic actions
//!
//! Raw keys never reach the reducer. Each known key becomes a generic
//! navigation/context action or a targeted one, which re-enters the chain.

use crate::actions::{Action, ContextAction, GlobalAction, NavigationAction, PullRequestAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Map a key to the action it stands for
    fn translate(key: &KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Global(GlobalAction::Quit)),
                _ => None,
            };
        }

        let action = match key.code {
            KeyCode::Char('q') => Action::Global(GlobalAction::Quit),
            KeyCode::Char('j') | KeyCode::Down => Action::Navigate(NavigationAction::Next),
            KeyCode::Char('k') | KeyCode::Up => Action::Navigate(NavigationAction::Previous),
            KeyCode::Char('g') | KeyCode::Home => Action::Navigate(NavigationAction::ToTop),
            KeyCode::Char('G') | KeyCode::End => Action::Navigate(NavigationAction::ToBottom),
            KeyCode::Enter => Action::ViewContext(ContextAction::Confirm),
            KeyCode::Char('b') | KeyCode::Backspace => Action::ViewContext(ContextAction::Back),
            KeyCode::Char('r') => Action::PullRequest(PullRequestAction::Load),
            _ => return None,
        };
        Some(action)
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match Self::translate(key) {
            Some(translated) => {
                log::debug!("KeyboardMiddleware: {:?} -> {:?}", key.code, translated);
                dispatcher.dispatch(translated);
            }
            None => log::trace!("KeyboardMiddleware: unbound key {:?}", key.code),
        }

        // Raw keys never reach the reducer
        false
    }
}
