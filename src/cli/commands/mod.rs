//! Subcommands of the noughts binary

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Args;

use crate::{
    app::{LogConfig, SessionConfig},
    tictactoe::Player,
};

pub mod analyze;
pub mod evaluate;
pub mod play;

/// Logging flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Terminal log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also write debug-level logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl LogArgs {
    /// Layer the flags over a base configuration
    pub fn apply(&self, base: LogConfig) -> LogConfig {
        let mut config = base;
        if let Some(level) = &self.log_level {
            config = config.with_level(level);
        }
        if let Some(file) = &self.log_file {
            config = config.with_file(file.clone());
        }
        config
    }
}

/// Read the config file when one was given, defaults otherwise
pub(crate) fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    match path {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SessionConfig::default()),
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Player::X),
        "o" | "second" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
