//! View model for the detail pane
//!
//! Shows whatever the current route points at. The routed pull request is
//! read through the same entry props the sidebar draws.

use crate::context::ViewContext;
use crate::domain_models::Route;
use crate::state::AppState;
use crate::view_models::sidebar_entry_view_model::{
    format_timestamp, SidebarEntryViewModel, UNKNOWN_AUTHOR,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailViewModel {
    /// The routed pull request is in the list
    PullRequest {
        heading: String,
        title: String,
        author: String,
        modified: String,
        /// Avatar image URL, if the author has one
        avatar: Option<String>,
        url: String,
    },
    /// Nothing routed yet, or the route points elsewhere
    Hint(String),
}

impl DetailViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let route = Route::parse(&state.router.current_path);

        let Route::PullRequest { project_id, number } = &route else {
            return DetailViewModel::Hint(
                "Select a pull request (Enter or click) to open it".to_string(),
            );
        };

        let ctx = ViewContext::from_state(state);
        let in_project = ctx.project().is_ok_and(|p| &p.id == project_id);

        let entry = in_project
            .then(|| state.sidebar.pull_requests.iter().find(|pr| pr.number == *number))
            .flatten()
            .and_then(|pr| SidebarEntryViewModel::new(pr, &ctx).ok());

        match entry {
            Some(entry) => Self::for_entry(*number, &entry, ctx.timestamp_format()),
            None => DetailViewModel::Hint(format!("Pull request {} is not loaded", route)),
        }
    }

    fn for_entry(number: u64, entry: &SidebarEntryViewModel, timestamp_format: &str) -> Self {
        let props = &entry.props;

        let title = props
            .pull_request
            .as_ref()
            .map(|descriptor| descriptor.title.clone())
            .unwrap_or_else(|| props.title.clone());

        let author = props
            .last_commit
            .as_ref()
            .map(|lc| lc.author_name.clone())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        let modified = props
            .last_commit
            .as_ref()
            .and_then(|lc| lc.last_commit_at)
            .map(|at| format_timestamp(at, timestamp_format))
            .unwrap_or_else(|| "-".to_string());

        DetailViewModel::PullRequest {
            heading: format!("#{}", number),
            title,
            author,
            modified,
            avatar: props.avatars.first().map(|avatar| avatar.src_url.clone()),
            url: entry.url.clone(),
        }
    }
}
