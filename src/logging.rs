//! Logger setup for the binary.
//!
//! Library code only uses the `log` macros; nothing is printed until a
//! binary calls [`init`].

use std::fs::OpenOptions;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::{Error, Result, app::LogConfig};

/// Install a terminal logger at the configured level and, when a file is
/// configured, a debug-level file logger beside it.
///
/// Records are appended to the log file; existing contents are kept. A second
/// call leaves the first logger in place.
///
/// # Errors
///
/// Returns error for an unknown level name or an unwritable log file.
pub fn init(config: &LogConfig) -> Result<()> {
    let level = config.level_filter()?;
    let format = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        format.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = &config.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::Io {
                operation: format!("open log file {}", path.display()),
                source,
            })?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, format, file));
    }

    if CombinedLogger::init(loggers).is_err() {
        log::warn!("logger already initialised; keeping the existing one");
    }
    Ok(())
}
