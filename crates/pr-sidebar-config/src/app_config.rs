//! Application configuration
//!
//! Configuration loaded from `.pr-sidebar.toml`.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from `.pr-sidebar.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Identifier of the project whose pull requests are listed.
    /// Used as the first path segment of every route.
    #[serde(default = "default_project_id")]
    pub project_id: String,

    /// Human readable project title (shown in the sidebar header)
    #[serde(default)]
    pub project_title: Option<String>,

    /// JSON snapshot with the pull requests to list
    #[serde(default)]
    pub pull_requests_file: Option<String>,

    /// Width of the sidebar column in terminal cells
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Maximum number of routes kept for "back" navigation
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// chrono format string for last-commit timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

/// Name of the current working directory, or "default"
fn default_project_id() -> String {
    env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().to_string()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "default".to_string())
}

fn default_sidebar_width() -> u16 {
    42
}

fn default_history_limit() -> usize {
    50
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            project_title: None,
            pull_requests_file: None,
            sidebar_width: default_sidebar_width(),
            history_limit: default_history_limit(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// True if chrono can render every specifier in `format`
fn is_valid_timestamp_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config content, replacing values that would break rendering
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        Ok(config.validated())
    }

    fn validated(mut self) -> Self {
        if !is_valid_timestamp_format(&self.timestamp_format) {
            log::warn!(
                "Invalid timestamp_format {:?}, using {:?}",
                self.timestamp_format,
                default_timestamp_format()
            );
            self.timestamp_format = default_timestamp_format();
        }
        self
    }
}
