//! Pull Request model
//!
//! The shape matches the pull request snapshots exported by the desktop app,
//! hence the camelCase field names on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request as listed in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// PR number, also the last segment of its route
    pub number: u64,
    /// PR title
    pub title: String,
    #[serde(default)]
    pub author: Option<Author>,
    /// When the PR was last updated
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

#[allow(dead_code)]
impl PullRequest {
    /// Create a PR without author or timestamp
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            author: None,
            modified_at: None,
        }
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_modified_at(mut self, modified_at: DateTime<Utc>) -> Self {
        self.modified_at = Some(modified_at);
        self
    }
}

/// Author of a pull request. Both fields may be missing in snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub gravatar_url: Option<String>,
}

#[allow(dead_code)]
impl Author {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            gravatar_url: None,
        }
    }

    pub fn with_gravatar_url(mut self, url: impl Into<String>) -> Self {
        self.gravatar_url = Some(url.into());
        self
    }
}

/// Loading state for PR data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// Not started loading
    #[default]
    Idle,
    /// Currently loading
    Loading,
    /// Successfully loaded
    Loaded,
    /// Failed to load
    Error(String),
}
