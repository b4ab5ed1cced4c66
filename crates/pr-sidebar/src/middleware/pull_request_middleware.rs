//! Pull Request Middleware
//!
//! Loads the pull request snapshot named in the config. Fetching from a
//! forge is somebody else's job; this reads whatever it exported.

use anyhow::{Context as _, Result};
use std::path::Path;

use crate::actions::{Action, PullRequestAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::PullRequest;
use crate::error::{AnyhowContextExt, Code, Context};
use crate::middleware::Middleware;
use crate::state::AppState;

/// Read and parse a JSON array of pull requests
pub fn load_snapshot(path: &Path) -> Result<Vec<PullRequest>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
        .context(Context::new(
            Code::PullRequests,
            format!("Could not read pull requests from {}", path.display()),
        ))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
        .context(Context::new(
            Code::Validation,
            format!("{} is not a valid pull request snapshot", path.display()),
        ))
}

pub struct PullRequestMiddleware;

impl PullRequestMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PullRequestMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for PullRequestMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::PullRequest(PullRequestAction::Load)) {
            return true;
        }

        let result = match state.app_config.pull_requests_file.as_deref() {
            Some(file) => load_snapshot(Path::new(file)),
            None => {
                log::info!("No pull_requests_file configured, nothing to list");
                Ok(Vec::new())
            }
        };

        match result {
            Ok(prs) => dispatcher.dispatch(Action::PullRequest(PullRequestAction::Loaded(prs))),
            Err(err) => {
                log::error!("Loading pull requests failed: {:#}", err);
                dispatcher.dispatch(Action::PullRequest(PullRequestAction::LoadError(
                    err.user_message(),
                )));
            }
        }

        // Reducer marks the sidebar as loading
        true
    }
}
