//! Configuration and file management for tally
//!
//! This crate provides:
//! - Platform directories for config and cache files
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod error;
pub mod paths;

pub use app_config::{AppConfig, KeyBindings};
pub use config_file::{load_config_file, read_config_file};
pub use error::ConfigError;
pub use paths::{app_config_path, cache_dir, config_dir};
