//! Logs every action before anything else sees it

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Mouse moves are far too chatty for debug level
            Action::Global(GlobalAction::Mouse(_)) => log::trace!("Action: {:?}", action),
            // Don't dump whole snapshots into the log
            Action::PullRequest(crate::actions::PullRequestAction::Loaded(prs)) => {
                log::debug!("Action: PullRequest(Loaded({} items))", prs.len())
            }
            _ => log::debug!("Action: {:?}", action),
        }
        true
    }
}
