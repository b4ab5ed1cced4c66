use crate::actions::{Action, GlobalAction, PullRequestAction};
use crate::reducers::{pull_request_reducer, router_reducer, sidebar_reducer};
use crate::state::AppState;
use ratatui::layout::Rect;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::Resize { width, height }) => {
            state.viewport = Rect::new(0, 0, *width, *height);
        }
        Action::Sidebar(sidebar_action) => {
            state.sidebar = sidebar_reducer::reduce(state.sidebar, sidebar_action);
        }
        Action::Router(router_action) => {
            state.router = router_reducer::reduce(state.router, router_action);
        }
        Action::PullRequest(pr_action) => {
            match pr_action {
                PullRequestAction::LoadError(err) => state.last_error = Some(err.clone()),
                PullRequestAction::Loaded(_) => state.last_error = None,
                PullRequestAction::Load => {}
            }
            state.sidebar = pull_request_reducer::reduce(state.sidebar, pr_action);
        }
        _ => {}
    }

    state
}
