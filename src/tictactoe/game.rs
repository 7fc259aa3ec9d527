//! The live game: one board, the side to move, and the moves played so far

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};
use crate::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while play continues
    pub fn from_board(board: &Board) -> Option<Self> {
        match board.winner() {
            Some(winner) => Some(GameOutcome::Win(winner)),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

/// A game in progress or finished
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    first: Player,
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game on an empty board with `first` to move
    pub fn new(first: Player) -> Self {
        Game {
            first,
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Place the mover's mark at `position`.
    ///
    /// Returns the outcome when this move ends the game.
    ///
    /// # Errors
    ///
    /// [`Error::GameOver`] once the game is decided; the illegal-move errors of
    /// [`Board::apply_move`] otherwise. The game is unchanged on error.
    pub fn play(&mut self, position: usize) -> Result<Option<GameOutcome>> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        self.board = self.board.apply_move(position, self.to_move)?;
        self.moves.push(Move {
            position,
            player: self.to_move,
        });
        self.to_move = self.to_move.opponent();
        self.outcome = GameOutcome::from_board(&self.board);

        Ok(self.outcome)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn first_player(&self) -> Player {
        self.first
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Rebuild the board by replaying the history from an empty grid
    ///
    /// # Errors
    ///
    /// Returns error if any recorded move is illegal, which means the history
    /// was tampered with.
    pub fn replay(&self) -> Result<Board> {
        self.moves
            .iter()
            .try_fold(Board::new(), |board, m| board.apply_move(m.position, m.player))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_and_history() {
        let mut game = Game::new(Player::O);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.first_player(), Player::O);

        game.play(4).unwrap();
        assert_eq!(game.to_move(), Player::X);
        game.play(0).unwrap();

        assert_eq!(
            game.moves(),
            &[
                Move {
                    position: 4,
                    player: Player::O
                },
                Move {
                    position: 0,
                    player: Player::X
                },
            ]
        );
        assert_eq!(game.replay().unwrap(), *game.board());
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new(Player::X);
        for pos in [0, 3, 1, 4] {
            assert_eq!(game.play(pos).unwrap(), None);
        }
        assert_eq!(game.play(2).unwrap(), Some(GameOutcome::Win(Player::X)));
        assert!(game.is_over());
        assert!(matches!(game.play(8), Err(Error::GameOver)));
    }

    #[test]
    fn test_draw_outcome() {
        let mut game = Game::new(Player::X);
        let mut last = None;
        for pos in [0, 1, 2, 4, 3, 6, 5, 8, 7] {
            last = game.play(pos).unwrap();
        }
        assert_eq!(last, Some(GameOutcome::Draw));
    }

    #[test]
    fn test_illegal_move_leaves_game_untouched() {
        let mut game = Game::new(Player::X);
        game.play(4).unwrap();
        let before = game.clone();

        assert!(game.play(4).unwrap_err().is_illegal_move());
        assert!(game.play(12).unwrap_err().is_illegal_move());
        assert_eq!(game.board(), before.board());
        assert_eq!(game.to_move(), before.to_move());
        assert_eq!(game.moves().len(), 1);
    }
}
