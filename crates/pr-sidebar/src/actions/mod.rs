//! Actions module
//!
//! Actions are organized by:
//! - Generic actions (Navigation, ViewContext) that get translated to sidebar actions
//! - Global actions that affect the entire application (raw input, quit, resize)
//! - Targeted actions for the sidebar, the router and pull request loading

pub mod context_action;
pub mod global;
pub mod navigation;
pub mod pull_request;
pub mod router;
pub mod sidebar;

pub use context_action::ContextAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use pull_request::PullRequestAction;
pub use router::RouterAction;
pub use sidebar::SidebarAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Generic actions (need translation)
    /// Generic navigation action - translated into a sidebar cursor move
    Navigate(NavigationAction),
    /// Context-sensitive action (Enter, Backspace, ...)
    ViewContext(ContextAction),

    /// Global application actions
    Global(GlobalAction),

    // Targeted actions
    /// Sidebar list actions
    Sidebar(SidebarAction),
    /// Route changes
    Router(RouterAction),
    /// Pull request loading
    PullRequest(PullRequestAction),
}
