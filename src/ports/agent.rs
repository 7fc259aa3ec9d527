//! Agent port - anything that can choose a move

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// A computer source of moves: the search engine or a random baseline.
///
/// People at the terminal are not agents; the session prompts them directly.
///
/// # Examples
///
/// ```no_run
/// use noughts::{
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// struct FirstFree;
///
/// impl Agent for FirstFree {
///     fn select_move(&mut self, board: &Board, _mark: Player) -> noughts::Result<usize> {
///         board
///             .empty_cells()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait Agent: Send {
    /// Choose where `mark` plays on `board`.
    ///
    /// The returned position must be empty on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] when `board` is already terminal.
    fn select_move(&mut self, board: &Board, mark: Player) -> Result<usize>;

    /// Name shown in reports and logs
    fn name(&self) -> &str;
}
