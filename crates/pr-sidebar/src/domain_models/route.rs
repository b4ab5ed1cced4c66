//! Route model
//!
//! Routes are plain path strings on the wire (`/{project}/pull/{number}`).
//! `Route` is the parsed form; `Route::path()` is the only place the path
//! format is written, so routing and selection compare against the same text.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PULL_REQUEST_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?P<project>[^/]+)/pull/(?P<number>[0-9]+)$").expect("valid regex")
});

static PROJECT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?P<project>[^/]+)/?$").expect("valid regex"));

/// A parsed navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/{project_id}/pull/{number}`
    PullRequest { project_id: String, number: u64 },
    /// `/{project_id}`
    Project { project_id: String },
    /// Anything this application does not know how to show
    Other(String),
}

impl Route {
    pub fn pull_request(project_id: impl Into<String>, number: u64) -> Self {
        Route::PullRequest {
            project_id: project_id.into(),
            number,
        }
    }

    /// Parse a path. Unknown shapes are kept verbatim as `Other`.
    pub fn parse(path: &str) -> Self {
        if let Some(caps) = PULL_REQUEST_PATH.captures(path) {
            if let Ok(number) = caps["number"].parse::<u64>() {
                return Route::PullRequest {
                    project_id: caps["project"].to_string(),
                    number,
                };
            }
        }

        if let Some(caps) = PROJECT_PATH.captures(path) {
            return Route::Project {
                project_id: caps["project"].to_string(),
            };
        }

        Route::Other(path.to_string())
    }

    /// Path string for this route
    pub fn path(&self) -> String {
        match self {
            Route::PullRequest { project_id, number } => format!("/{}/pull/{}", project_id, number),
            Route::Project { project_id } => format!("/{}", project_id),
            Route::Other(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
