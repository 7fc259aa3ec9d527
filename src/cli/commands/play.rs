//! Play command - Interactive games at the terminal

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{LogArgs, load_config};
use crate::{
    adapters::TerminalConsole, app::SessionConfig, logging, search::SearchMode, session::Session,
};

#[derive(Parser, Debug)]
#[command(about = "Play noughts and crosses against the engine or a friend")]
pub struct PlayArgs {
    /// JSON config file (search mode, logging, seed)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Use the cached searcher instead of the plain exhaustive one
    #[arg(long)]
    pub memoize: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

impl PlayArgs {
    /// Resolve the effective configuration: file first, then flags
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if self.memoize {
            config = config.with_search(SearchMode::Memoized);
        }
        let log = self.log.apply(config.log.clone());
        Ok(config.with_log(log))
    }
}

/// Execute play command
pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.session_config()?;
    logging::init(&config.log)?;
    log::info!("starting session with {:?} search", config.search);

    let mut session = Session::new(TerminalConsole::new(), config);
    session.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = PlayArgs::parse_from(["play", "--memoize", "--log-level", "info"]);
        let config = args.session_config().unwrap();
        assert_eq!(config.search, SearchMode::Memoized);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let args = PlayArgs::parse_from(["play", "--config", "/nonexistent/noughts.json"]);
        let err = args.session_config().unwrap_err();
        assert!(format!("{err:#}").contains("loading config"));
    }
}
