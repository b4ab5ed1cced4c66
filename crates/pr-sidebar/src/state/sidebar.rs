//! Sidebar State

use crate::domain_models::{LoadingState, PullRequest};

#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    /// Pull requests in display order
    pub pull_requests: Vec<PullRequest>,
    /// Cursor position (keyboard focus), independent of the routed entry
    pub cursor: usize,
    pub loading_state: LoadingState,
    /// Timestamp of last successful load
    pub last_updated: Option<chrono::DateTime<chrono::Local>>,
}

impl SidebarState {
    /// Pull request under the cursor
    pub fn cursor_pull_request(&self) -> Option<&PullRequest> {
        self.pull_requests.get(self.cursor)
    }
}
