//! Command-line interface for the noughts binary
//!
//! This module provides the `play`, `analyze` and `evaluate` commands.

pub mod commands;
pub mod output;
