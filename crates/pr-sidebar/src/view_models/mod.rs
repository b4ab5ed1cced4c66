pub mod detail_view_model;
pub mod sidebar_entry_view_model;
pub mod sidebar_view_model;
pub mod status_bar;

pub use detail_view_model::DetailViewModel;
pub use sidebar_entry_view_model::{Avatar, EntryProps, SidebarEntryViewModel};
#[allow(unused_imports)]
pub use sidebar_entry_view_model::{pull_request_url, LastCommit, PullRequestDescriptor};
pub use sidebar_view_model::{SidebarContentViewModel, SidebarViewModel};
pub use status_bar::StatusBarViewModel;
