//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod router;
mod sidebar;

pub use app::AppState;
pub use router::RouterState;
pub use sidebar::SidebarState;
