//! Application State

use crate::domain_models::Project;
use crate::theme::Theme;
use pr_sidebar_config::AppConfig;
use ratatui::layout::Rect;

use super::{RouterState, SidebarState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// The project bound for all views; `None` when not configured
    pub project: Option<Project>,
    pub sidebar: SidebarState,
    pub router: RouterState,
    /// Last known terminal size, used for mouse hit testing
    pub viewport: Rect,
    /// Last user-facing error, shown in the status bar
    pub last_error: Option<String>,
    pub theme: Theme,
    pub app_config: AppConfig,
}

impl AppState {
    /// Initial state for the given configuration
    pub fn new(app_config: AppConfig) -> Self {
        let project_id = app_config.project_id.trim();
        let project = (!project_id.is_empty())
            .then(|| Project::new(project_id).with_title(app_config.project_title.clone()));

        let initial_path = project
            .as_ref()
            .map(|p| p.route().path())
            .unwrap_or_else(|| "/".to_string());

        Self {
            running: true,
            project,
            sidebar: SidebarState::default(),
            router: RouterState::new(initial_path, app_config.history_limit),
            viewport: Rect::default(),
            last_error: None,
            theme: Theme::default(),
            app_config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
