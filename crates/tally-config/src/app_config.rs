//! Application configuration
//!
//! Configuration loaded from `.tally.toml`.

use crate::error::ConfigError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from .tally.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Log level for the log file (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Caption shown next to the count
    #[serde(default = "default_label")]
    pub label: String,

    /// Keys for the interactive counter
    #[serde(default)]
    pub keys: KeyBindings,
}

/// Keys bound to counter actions in interactive mode
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    #[serde(default = "default_increment_key")]
    pub increment: char,

    #[serde(default = "default_decrement_key")]
    pub decrement: char,

    #[serde(default = "default_reset_key")]
    pub reset: char,

    #[serde(default = "default_quit_key")]
    pub quit: char,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_label() -> String {
    "Count".to_string()
}

fn default_increment_key() -> char {
    '+'
}

fn default_decrement_key() -> char {
    '-'
}

fn default_reset_key() -> char {
    'r'
}

fn default_quit_key() -> char {
    'q'
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            increment: default_increment_key(),
            decrement: default_decrement_key(),
            reset: default_reset_key(),
            quit: default_quit_key(),
        }
    }
}

impl KeyBindings {
    /// Reject configurations where one key triggers two actions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys = [self.increment, self.decrement, self.reset, self.quit];
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) {
                return Err(ConfigError::DuplicateKey(*key));
            }
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            label: default_label(),
            keys: KeyBindings::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// Problems are logged; call this only once a logger is installed.
    pub fn load() -> Self {
        let (config, error) = Self::load_checked();
        if let Some(e) = error {
            log::warn!("Failed to load config file, using defaults: {}", e);
        }
        config
    }

    /// Like [`AppConfig::load`], but hands back the parse error instead of
    /// logging it
    ///
    /// Used before logging is set up, since the config decides the log level.
    pub fn load_checked() -> (Self, Option<ConfigError>) {
        Self::resolve(crate::load_config_file().as_deref())
    }

    /// Turn the result of the config file search into a config
    ///
    /// Missing content gives the defaults; malformed content gives the
    /// defaults plus the error.
    pub fn resolve(content: Option<&str>) -> (Self, Option<ConfigError>) {
        match content.map(Self::from_toml) {
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (Self::default(), Some(e)),
            None => (Self::default(), None),
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = crate::read_config_file(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.keys.validate()?;
        Ok(config)
    }

    /// Configured log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
