//! Minimax with a transposition cache
//!
//! A node's result depends only on the board, the side to move and the
//! maximizer, so caching on exactly that triple returns the same move and
//! score the exhaustive search would, tie-break included.

use std::collections::HashMap;

use super::{Search, SearchResult, SearchStats, expand, resolve, terminal_score};
use crate::tictactoe::{Board, Player};

type NodeKey = (Board, Player, Player);

#[derive(Debug, Clone, Default)]
pub struct Memoized {
    cache: HashMap<NodeKey, SearchResult>,
    stats: SearchStats,
}

impl Memoized {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached positions
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    fn minimax(&mut self, board: &Board, mover: Player, maximizer: Player) -> SearchResult {
        let key = (*board, mover, maximizer);
        if let Some(&cached) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return cached;
        }
        self.stats.nodes += 1;

        let result = match terminal_score(board, maximizer) {
            Some(score) => SearchResult::terminal(score),
            None => {
                let children = expand(board, mover, maximizer, |child| {
                    self.minimax(child, mover.opponent(), maximizer).score
                });
                resolve(&children, mover, maximizer)
            }
        };

        self.cache.insert(key, result);
        result
    }
}

impl Search for Memoized {
    fn search(&mut self, board: &Board, mover: Player, maximizer: Player) -> SearchResult {
        self.minimax(board, mover, maximizer)
    }

    fn name(&self) -> &str {
        "memoized"
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
