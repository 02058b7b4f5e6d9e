use crate::error::ConfigError;
use std::{
    env,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = ".tally.toml";

/// Load config file content from CWD, home directory, then config directory
///
/// Searches for `.tally.toml` in:
/// 1. Current working directory
/// 2. Home directory
/// 3. Application config directory as `config.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(home_config) = get_home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    if let Ok(app_config) = crate::paths::app_config_path() {
        if let Ok(content) = std::fs::read_to_string(&app_config) {
            log::debug!("Loaded config from {}", app_config.display());
            return Some(content);
        }
    }

    None
}

/// Read an explicitly named config file
pub fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns ~/.tally.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let path = Path::new("/nonexistent/tally/config.toml");
        match read_config_file(path) {
            Err(ConfigError::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected read error, got {:?}", other),
        }
    }
}
