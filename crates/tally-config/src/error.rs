use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for `AppConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two actions are bound to the same key.
    #[error("Key '{0}' is bound to more than one action")]
    DuplicateKey(char),
}
