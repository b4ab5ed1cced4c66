//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod project;
pub mod pull_request;
pub mod route;

pub use project::Project;
#[allow(unused_imports)]
pub use pull_request::Author;
pub use pull_request::{LoadingState, PullRequest};
pub use route::Route;
