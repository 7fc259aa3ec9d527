//! The minimax engine as an agent

use crate::{
    Error, Result,
    ports::Agent,
    search::{Search, SearchMode, SearchResult},
    tictactoe::{Board, Player},
};

/// Plays the move the searcher proves optimal for its own mark
pub struct EngineAgent {
    name: String,
    search: Box<dyn Search>,
    last: Option<SearchResult>,
}

impl EngineAgent {
    pub fn new(name: String, search: Box<dyn Search>) -> Self {
        Self {
            name,
            search,
            last: None,
        }
    }

    pub fn with_mode(name: String, mode: SearchMode) -> Self {
        Self::new(name, mode.into_searcher())
    }

    /// Result of the most recent search, for reporting the expected outcome
    pub fn last_result(&self) -> Option<SearchResult> {
        self.last
    }
}

impl Agent for EngineAgent {
    fn select_move(&mut self, board: &Board, mark: Player) -> Result<usize> {
        let before = self.search.stats();
        let result = self.search.search(board, mark, mark);
        let after = self.search.stats();
        self.last = Some(result);

        log::debug!(
            "{} ({}) on {} as {}: move {:?} score {} ({} nodes, {} cache hits)",
            self.name,
            self.search.name(),
            board.encode(),
            mark,
            result.best_move,
            result.score,
            after.nodes - before.nodes,
            after.cache_hits - before.cache_hits,
        );

        result.best_move.ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
