//! Configuration types for sessions and logging.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, search::SearchMode};

/// Where log records go and how verbose they are
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Terminal verbosity: off, error, warn, info, debug or trace
    pub level: String,
    /// Optional file receiving every record at debug level
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    /// Parse `level` into a filter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for unknown level names.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|_| Error::InvalidConfiguration {
            message: format!(
                "unknown log level '{}' (expected off, error, warn, info, debug or trace)",
                self.level
            ),
        })
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

/// Settings for an interactive session or an evaluation run.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "search": "memoized", "log": { "level": "debug" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Searcher used by the engine
    pub search: SearchMode,
    /// Logging setup
    pub log: LogConfig,
    /// Random seed for reproducible baseline opponents
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON config file; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or names
    /// an unknown log level.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: SessionConfig = serde_json::from_str(&text)?;
        config.log.level_filter()?;
        Ok(config)
    }

    pub fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }

    pub fn with_log(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
