//! Noughts and crosses: board model, live game, and position enumeration

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use game::{Game, GameOutcome, Move};
pub use game_tree::{Position, reachable_positions};
pub use lines::{LineAnalyzer, WINNING_LINES};
