//! View model for the status bar

use ratatui::style::Style;

use crate::domain_models::LoadingState;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Current route path
    pub route: String,
    pub load_status: String,
    pub load_style: Style,
    /// Last error message, if any
    pub error: Option<String>,
    pub error_style: Style,
    pub hints: String,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        let (load_status, load_style) = match &state.sidebar.loading_state {
            LoadingState::Idle => ("Idle".to_string(), theme.muted()),
            LoadingState::Loading => (
                "Loading...".to_string(),
                Style::default().fg(theme.status_warning),
            ),
            LoadingState::Loaded => {
                let text = match state.sidebar.last_updated {
                    Some(ts) => format!("Updated {}", ts.format("%H:%M:%S")),
                    None => "Loaded".to_string(),
                };
                (text, Style::default().fg(theme.status_success))
            }
            LoadingState::Error(_) => ("Load failed".to_string(), theme.error()),
        };

        Self {
            route: state.router.current_path.clone(),
            load_status,
            load_style,
            error: state.last_error.clone(),
            error_style: theme.error(),
            hints: "j/k move · Enter open · b back · r reload · q quit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_shows_route_and_error() {
        let mut state = AppState::default();
        state.router.current_path = "/proj1/pull/42".to_string();
        state.sidebar.loading_state = LoadingState::Error("boom".to_string());
        state.last_error = Some("boom".to_string());

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.route, "/proj1/pull/42");
        assert_eq!(vm.load_status, "Load failed");
        assert_eq!(vm.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_status_bar_loaded_without_timestamp() {
        let mut state = AppState::default();
        state.sidebar.loading_state = LoadingState::Loaded;
        assert_eq!(StatusBarViewModel::from_state(&state).load_status, "Loaded");
    }
}
