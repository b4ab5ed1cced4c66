//! Pull request loading actions

use crate::domain_models::PullRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestAction {
    /// (Re)load the pull request snapshot
    Load,
    /// Snapshot loaded
    Loaded(Vec<PullRequest>),
    /// Snapshot could not be loaded; user-facing message
    LoadError(String),
}
