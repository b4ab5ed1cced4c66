//! PR Reducer
//!
//! Handles loading state and the loaded pull request list.

use crate::actions::PullRequestAction;
use crate::domain_models::LoadingState;
use crate::state::SidebarState;

pub fn reduce(mut state: SidebarState, action: &PullRequestAction) -> SidebarState {
    match action {
        PullRequestAction::Load => {
            state.loading_state = LoadingState::Loading;
            log::debug!("Pull request loading started");
        }
        PullRequestAction::Loaded(prs) => {
            state.pull_requests = prs.clone();
            state.loading_state = LoadingState::Loaded;
            state.last_updated = Some(chrono::Local::now());
            // Keep the cursor where it was if the list still reaches that far
            state.cursor = state.cursor.min(prs.len().saturating_sub(1));
            log::info!("Loaded {} pull requests", prs.len());
        }
        PullRequestAction::LoadError(error) => {
            state.loading_state = LoadingState::Error(error.clone());
            log::error!("Failed to load pull requests: {}", error);
        }
    }

    state
}
