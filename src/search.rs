//! Exhaustive minimax search over the board model
//!
//! The search walks the full game tree below a board, always down to true
//! terminal positions, so scores are exact game-theoretic values:
//!
//! - [`WIN`] (+1): the maximizer forces a win
//! - [`DRAW`] (0): best play by both sides draws
//! - [`LOSS`] (-1): the minimizer forces a win
//!
//! Children are explored in ascending index order and the current best is only
//! replaced on strict improvement, so among equally good moves the lowest
//! index is returned. Callers rely on this to get reproducible play.

pub mod memoized;
pub mod minimax;

use serde::{Deserialize, Serialize};

pub use memoized::Memoized;
pub use minimax::Exhaustive;

use crate::tictactoe::{Board, Player};

/// Minimax value of a position from the maximizer's side
pub type Score = i32;

pub const WIN: Score = 1;
pub const DRAW: Score = 0;
pub const LOSS: Score = -1;

/// The move chosen at a node and its value.
///
/// `best_move` is `None` only when the searched board was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Option<usize>,
    pub score: Score,
}

impl SearchResult {
    fn terminal(score: Score) -> Self {
        SearchResult {
            best_move: None,
            score,
        }
    }
}

/// Counters accumulated by a searcher across calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions expanded or scored
    pub nodes: u64,
    /// Positions answered from a transposition cache
    pub cache_hits: u64,
}

/// A minimax searcher
pub trait Search: Send {
    /// Best move for `mover` on `board`, scored for `maximizer`.
    ///
    /// `maximizer` stays fixed for the whole tree below this call; `mover`
    /// alternates from ply to ply. Total over every board: terminal boards
    /// come back with no move and their exact score.
    fn search(&mut self, board: &Board, mover: Player, maximizer: Player) -> SearchResult;

    /// Short identifier used in logs and reports
    fn name(&self) -> &str;

    fn stats(&self) -> SearchStats;
}

/// Which searcher the engine uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Exhaustive,
    Memoized,
}

impl SearchMode {
    /// Creates a boxed searcher for this mode
    pub fn into_searcher(self) -> Box<dyn Search> {
        match self {
            SearchMode::Exhaustive => Box::new(Exhaustive::new()),
            SearchMode::Memoized => Box::new(Memoized::new()),
        }
    }
}

/// Optimal move for `mover`, scored for `maximizer`, by a fresh exhaustive search
pub fn best_move(board: &Board, mover: Player, maximizer: Player) -> SearchResult {
    Exhaustive::new().search(board, mover, maximizer)
}

/// Value of every legal move for `mover`, ascending by index.
///
/// Empty for terminal boards.
pub fn evaluate_moves(board: &Board, mover: Player, maximizer: Player) -> Vec<(usize, Score)> {
    Exhaustive::new().child_scores(board, mover, maximizer)
}

/// Exact score of a decided board, `None` while moves remain
fn terminal_score(board: &Board, maximizer: Player) -> Option<Score> {
    match board.winner() {
        Some(winner) if winner == maximizer => Some(WIN),
        Some(_) => Some(LOSS),
        None if board.is_full() => Some(DRAW),
        None => None,
    }
}

/// Score each child of `board` in ascending index order, valuing the child
/// boards with `value`. Empty for terminal boards.
fn expand(
    board: &Board,
    mover: Player,
    maximizer: Player,
    mut value: impl FnMut(&Board) -> Score,
) -> Vec<(usize, Score)> {
    if terminal_score(board, maximizer).is_some() {
        return Vec::new();
    }

    board
        .empty_cells()
        .into_iter()
        .filter_map(|pos| {
            let child = board.apply_move(pos, mover).ok()?;
            Some((pos, value(&child)))
        })
        .collect()
}

/// Pick the max (or min) pair, keeping the first one seen on ties
fn select(children: &[(usize, Score)], maximizing: bool) -> Option<(usize, Score)> {
    let mut best: Option<(usize, Score)> = None;
    for &(mv, score) in children {
        let improves = match best {
            None => true,
            Some((_, current)) if maximizing => score > current,
            Some((_, current)) => score < current,
        };
        if improves {
            best = Some((mv, score));
        }
    }
    best
}

/// Fold the child scores of a non-terminal node into its result
fn resolve(children: &[(usize, Score)], mover: Player, maximizer: Player) -> SearchResult {
    match select(children, mover == maximizer) {
        Some((mv, score)) => SearchResult {
            best_move: Some(mv),
            score,
        },
        // a board with no empty cell is full, so it was caught as terminal
        None => SearchResult::terminal(DRAW),
    }
}
