//! Plain recursive minimax without pruning or caching

use super::{Score, Search, SearchResult, SearchStats, expand, resolve, terminal_score};
use crate::tictactoe::{Board, Player};

/// Walks the whole tree below every queried board
#[derive(Debug, Clone, Default)]
pub struct Exhaustive {
    stats: SearchStats,
}

impl Exhaustive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score of each legal move for `mover`, in ascending index order
    pub fn child_scores(
        &mut self,
        board: &Board,
        mover: Player,
        maximizer: Player,
    ) -> Vec<(usize, Score)> {
        expand(board, mover, maximizer, |child| {
            self.minimax(child, mover.opponent(), maximizer).score
        })
    }

    /// The node's result together with the score of every legal move, from a
    /// single walk of the tree.
    pub fn search_with_moves(
        &mut self,
        board: &Board,
        mover: Player,
        maximizer: Player,
    ) -> (SearchResult, Vec<(usize, Score)>) {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board, maximizer) {
            return (SearchResult::terminal(score), Vec::new());
        }

        let children = self.child_scores(board, mover, maximizer);
        (resolve(&children, mover, maximizer), children)
    }

    fn minimax(&mut self, board: &Board, mover: Player, maximizer: Player) -> SearchResult {
        self.search_with_moves(board, mover, maximizer).0
    }
}

impl Search for Exhaustive {
    fn search(&mut self, board: &Board, mover: Player, maximizer: Player) -> SearchResult {
        self.minimax(board, mover, maximizer)
    }

    fn name(&self) -> &str {
        "exhaustive"
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
