//! Application configuration.
//!
//! # Usage
//!
//! ```
//! use noughts::app::{LogConfig, SessionConfig};
//! use noughts::search::SearchMode;
//!
//! let config = SessionConfig::new()
//!     .with_search(SearchMode::Memoized)
//!     .with_log(LogConfig::default().with_level("info"));
//! assert_eq!(config.search, SearchMode::Memoized);
//! ```

pub mod config;

pub use config::{LogConfig, SessionConfig};
