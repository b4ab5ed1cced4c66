//! Sidebar Middleware
//!
//! Turns a press on a sidebar entry into navigation. The entry view model
//! decides where to go; the dispatcher is its navigator.

use crate::actions::{Action, SidebarAction};
use crate::context::ViewContext;
use crate::dispatcher::Dispatcher;
use crate::error::{into_anyhow, AnyhowContextExt};
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::view_models::SidebarEntryViewModel;

pub struct SidebarMiddleware;

impl SidebarMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SidebarMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for SidebarMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Sidebar(SidebarAction::EntryPressed(index)) = action else {
            return true;
        };

        let Some(pr) = state.sidebar.pull_requests.get(*index) else {
            log::warn!("Entry {} pressed, but only {} loaded", index, state.sidebar.pull_requests.len());
            return false;
        };

        let ctx = ViewContext::from_state(state);
        match SidebarEntryViewModel::new(pr, &ctx) {
            Ok(entry) => entry.on_mouse_down(dispatcher),
            Err(err) => {
                log::error!("Cannot open PR #{}: {}", pr.number, into_anyhow(err).user_message());
            }
        }

        // Let the reducer move the cursor onto the pressed entry
        true
    }
}
