//! Uniform random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Board, Player},
};

/// Picks uniformly among the empty cells
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _mark: Player) -> Result<usize> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }
        let moves = board.empty_cells();
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_picks_empty_cell() {
        let mut agent = RandomAgent::with_seed("Random".to_string(), 7);
        let board = Board::from_string("XOXOX....").unwrap();
        for _ in 0..50 {
            let mv = agent.select_move(&board, Player::O).unwrap();
            assert!(board.is_empty(mv));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed("a".to_string(), 42);
        let mut b = RandomAgent::with_seed("b".to_string(), 42);
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Player::X).unwrap(),
                b.select_move(&board, Player::X).unwrap()
            );
        }
    }

    #[test]
    fn test_terminal_board_has_no_moves() {
        let mut agent = RandomAgent::new("Random".to_string());
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(matches!(
            agent.select_move(&board, Player::O),
            Err(Error::NoValidMoves)
        ));
    }
}
