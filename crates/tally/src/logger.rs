//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/tally/ on Linux)
//!
//! With `echo` enabled, records are also written to stderr.

use anyhow::{Context, Result};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::PathBuf;

fn log_file_name(timestamp: &chrono::DateTime<chrono::Local>) -> String {
    format!("tally-{}.log", timestamp.format("%Y%m%d-%H%M%S"))
}

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let filename = log_file_name(&chrono::Local::now());

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        tally_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Resolve the log level: RUST_LOG wins over the configured level
fn resolve_level(env_value: Option<&str>, configured: LevelFilter) -> LevelFilter {
    env_value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(configured)
}

/// Initialize logging
///
/// Creates a log file with timestamp and returns its path.
pub fn init(configured: LevelFilter, echo: bool) -> Result<PathBuf> {
    let log_file = log_file_path();
    let level = resolve_level(std::env::var("RUST_LOG").ok().as_deref(), configured);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(level, config.clone(), file)];
    if echo {
        loggers.push(TermLogger::new(
            level,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).context("Failed to initialize logger")?;

    Ok(log_file)
}
