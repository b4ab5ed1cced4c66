//! Router State

/// Current route plus a bounded history for "back"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState {
    pub current_path: String,
    /// Previous paths, most recent last
    pub history: Vec<String>,
    /// Oldest entries are dropped beyond this length
    pub history_limit: usize,
}

impl RouterState {
    pub fn new(initial_path: impl Into<String>, history_limit: usize) -> Self {
        Self {
            current_path: initial_path.into(),
            history: Vec::new(),
            history_limit,
        }
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new("/", 50)
    }
}
