use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".pr-sidebar.toml";

/// Load config file content, first match wins
///
/// Searches for `.pr-sidebar.toml` in:
/// 1. Current working directory
/// 2. Home directory
/// 3. The platform config directory as `config.toml`
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    for path in [home_config_path(), platform_config_path()].into_iter().flatten() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// ~/.pr-sidebar.toml if HOME is set
fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

fn platform_config_path() -> Option<PathBuf> {
    crate::paths::app_config_path()
        .map_err(|e| log::debug!("No platform config path: {}", e))
        .ok()
}
