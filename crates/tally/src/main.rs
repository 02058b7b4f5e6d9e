use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tally_config::{AppConfig, ConfigError};

mod app;
mod keymap;
mod logger;
mod replay;
mod scenarios;
mod views;

#[derive(Parser)]
#[command(name = "tally", about = "A counter driven by actions, a reducer and a store")]
struct Args {
    /// Config file to use instead of searching ./.tally.toml and ~/.tally.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Echo log records to stderr (scenarios and replay only)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the walkthrough scenarios and print the state after each
    Scenarios,
    /// Dispatch actions from a JSON file ("-" for stdin)
    Replay {
        /// Path to a JSON array of actions
        file: PathBuf,
    },
    /// Interactive counter in the terminal (default)
    Interactive,
}

/// Load the config before logging exists
///
/// An explicit `--config` must load. A searched config that fails to parse
/// falls back to defaults and its error is returned for logging once the
/// logger is up.
fn load_config(path: Option<&Path>) -> Result<(AppConfig, Option<ConfigError>)> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .map(|config| (config, None))
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(AppConfig::load_checked()),
    }
}

fn report_config_error(error: Option<&ConfigError>) {
    if let Some(e) = error {
        log::warn!("Failed to load config file, using defaults: {}", e);
    }
}

fn open_script(file: &Path) -> Result<Box<dyn Read>> {
    if file.as_os_str() == "-" {
        return Ok(Box::new(io::stdin()));
    }
    let handle = File::open(file)
        .with_context(|| format!("Failed to open action script {}", file.display()))?;
    Ok(Box::new(handle))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_error) = load_config(args.config.as_deref())?;
    let command = args.command.unwrap_or(Commands::Interactive);

    let echo = args.verbose && !matches!(command, Commands::Interactive);
    let log_file = logger::init(config.level_filter(), echo)?;

    log::info!("Starting tally (log file: {})", log_file.display());
    report_config_error(config_error.as_ref());

    match command {
        Commands::Scenarios => {
            scenarios::run(&mut io::stdout().lock())?;
        }
        Commands::Replay { file } => {
            let mut input = open_script(&file)?;
            replay::run(&mut input, &mut io::stdout().lock())?;
        }
        Commands::Interactive => app::run(&config)?,
    }

    log::info!("Exiting tally");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp_config(name: &str, content: &str) -> PathBuf {
        let file_name = format!("tally-{}-{}.toml", name, std::process::id());
        let path = std::env::temp_dir().join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_explicit_malformed_config_fails() {
        let path = write_temp_config("malformed", "label = \nlog_level = \"debug\"");
        let result = load_config(Some(&path));
        fs::remove_file(&path).unwrap();

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to load config from"));
        assert!(message.contains("Failed to parse config"));
    }

    #[test]
    fn test_explicit_config_applies_level() {
        let path = write_temp_config("valid", "log_level = \"debug\"");
        let result = load_config(Some(&path));
        fs::remove_file(&path).unwrap();

        let (config, error) = result.unwrap();
        assert!(error.is_none());
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let path = std::env::temp_dir().join("tally-does-not-exist.toml");
        assert!(load_config(Some(&path)).is_err());
    }
}
