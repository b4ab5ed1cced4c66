//! Project model

use serde::{Deserialize, Serialize};

use super::Route;

/// The project whose pull requests are listed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier, first segment of every route
    pub id: String,
    /// Optional display title
    pub title: Option<String>,
}

impl Project {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Title if set, id otherwise
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// Route of the project's landing page
    pub fn route(&self) -> Route {
        Route::Project {
            project_id: self.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let project = Project::new("proj1");
        assert_eq!(project.display_name(), "proj1");

        let project = project.with_title(Some("Project One".to_string()));
        assert_eq!(project.display_name(), "Project One");
    }

    #[test]
    fn test_route() {
        assert_eq!(Project::new("proj1").route().path(), "/proj1");
    }
}
