//! Noughts and crosses with an unbeatable opponent
//!
//! This crate provides:
//! - The board model: cells, marks, win and draw detection
//! - Exhaustive minimax search with a deterministic lowest-index tie-break
//! - A turn orchestrator that alternates human and engine moves over a console
//! - A command-line front end for playing, analyzing and evaluating

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Score, SearchResult, best_move};
pub use tictactoe::{Board, Cell, Player};
