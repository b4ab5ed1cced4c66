//! Ambient view context
//!
//! Values a subtree of views needs without every intermediate layer threading
//! them through: the current project and the current route path. The context
//! is built from the state once per render and handed down explicitly.

use crate::domain_models::Project;
use crate::error::{Code, Context, ErrorWithContext};
use crate::state::AppState;

/// Lookup failures for ambient values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("no project is bound in the current view context")]
    MissingProject,
}

impl ErrorWithContext for ContextError {
    fn context(&self) -> Option<Context> {
        match self {
            ContextError::MissingProject => Some(Context::new_static(
                Code::Projects,
                "No project configured (set project_id in .pr-sidebar.toml)",
            )),
        }
    }
}

/// Ambient values for one render pass
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    project: Option<&'a Project>,
    current_path: &'a str,
    timestamp_format: &'a str,
}

impl<'a> ViewContext<'a> {
    pub fn new(project: Option<&'a Project>, current_path: &'a str) -> Self {
        Self {
            project,
            current_path,
            timestamp_format: "%Y-%m-%d %H:%M",
        }
    }

    /// Context for the whole application as it is right now
    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(state.project.as_ref(), &state.router.current_path)
            .with_timestamp_format(&state.app_config.timestamp_format)
    }

    pub fn with_timestamp_format(self, timestamp_format: &'a str) -> Self {
        Self {
            timestamp_format,
            ..self
        }
    }

    pub fn project(&self) -> Result<&'a Project, ContextError> {
        self.project.ok_or(ContextError::MissingProject)
    }

    pub fn current_path(&self) -> &'a str {
        self.current_path
    }

    pub fn timestamp_format(&self) -> &'a str {
        self.timestamp_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnyhowContextExt;

    #[test]
    fn test_missing_project() {
        let ctx = ViewContext::new(None, "/");
        assert_eq!(ctx.project(), Err(ContextError::MissingProject));
    }

    #[test]
    fn test_from_state() {
        let mut state = AppState::default();
        state.project = Some(Project::new("proj1"));
        state.router.current_path = "/proj1/pull/3".to_string();

        let ctx = ViewContext::from_state(&state);
        assert_eq!(ctx.project().unwrap().id, "proj1");
        assert_eq!(ctx.current_path(), "/proj1/pull/3");
        assert_eq!(ctx.timestamp_format(), state.app_config.timestamp_format);
    }

    #[test]
    fn test_missing_project_error_code() {
        let err = crate::error::into_anyhow(ContextError::MissingProject);
        assert_eq!(err.custom_context().unwrap().code, Code::Projects);
    }
}
