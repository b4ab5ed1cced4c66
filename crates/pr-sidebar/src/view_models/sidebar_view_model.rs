//! View model for the sidebar list
//!
//! Builds one entry view model per pull request and decides what the sidebar
//! shows when there is nothing to list.

use ratatui::style::{Color, Style};

use crate::context::ViewContext;
use crate::domain_models::LoadingState;
use crate::error::{into_anyhow, AnyhowContextExt};
use crate::state::AppState;

use super::SidebarEntryViewModel;

#[derive(Debug, Clone)]
pub struct SidebarViewModel {
    /// Header: project name and PR count
    pub title: String,
    pub border_style: Style,
    pub content: SidebarContentViewModel,
}

#[derive(Debug, Clone)]
pub enum SidebarContentViewModel {
    /// One row per pull request
    Entries(Vec<SidebarRowViewModel>),
    /// Nothing to list (loading, empty, error)
    Message { text: String, style: Style },
}

#[derive(Debug, Clone)]
pub struct SidebarRowViewModel {
    pub entry: SidebarEntryViewModel,
    /// Row is under the keyboard cursor
    pub is_cursor: bool,
}

impl SidebarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let ctx = ViewContext::from_state(state);
        let sidebar = &state.sidebar;

        let title = match state.project.as_ref() {
            Some(project) => format!(
                " {} · {} PRs ",
                project.display_name(),
                sidebar.pull_requests.len()
            ),
            None => " Pull Requests ".to_string(),
        };

        let message = |text: String, color: Color| SidebarContentViewModel::Message {
            text,
            style: Style::default().fg(color),
        };

        let content = match &sidebar.loading_state {
            LoadingState::Loading if sidebar.pull_requests.is_empty() => {
                message("Loading...".to_string(), theme.status_warning)
            }
            LoadingState::Error(err) if sidebar.pull_requests.is_empty() => {
                message(format!("Error: {}", err), theme.status_error)
            }
            _ if sidebar.pull_requests.is_empty() => {
                message("No pull requests".to_string(), theme.text_muted)
            }
            _ => {
                let rows: Result<Vec<_>, _> = sidebar
                    .pull_requests
                    .iter()
                    .enumerate()
                    .map(|(index, pr)| {
                        SidebarEntryViewModel::new(pr, &ctx).map(|entry| SidebarRowViewModel {
                            entry,
                            is_cursor: index == sidebar.cursor,
                        })
                    })
                    .collect();

                match rows {
                    Ok(rows) => SidebarContentViewModel::Entries(rows),
                    Err(err) => message(into_anyhow(err).user_message(), theme.status_error),
                }
            }
        };

        Self {
            title,
            border_style: theme.panel_border(),
            content,
        }
    }
}
