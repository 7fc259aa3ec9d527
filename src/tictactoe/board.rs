//! Board representation and the pure queries over it

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::{Error, Result};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// One of the two marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// The 3x3 grid, row-major, indices 0-8.
///
/// `Board` is a plain `Copy` value: every operation that places a mark returns
/// a new board and leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; 9])
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Parse a board from nine cell characters (`X`, `O`, `.`), whitespace ignored.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not hold exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The mark counts differ by more than one
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let (x_count, o_count) = board.piece_counts();
        if x_count.abs_diff(o_count) > 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }
        Ok(board)
    }

    /// Cell at position (0-8), `None` off the board
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells.get(pos) == Some(&Cell::Empty)
    }

    /// Empty positions in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place `mark` at `pos` and return the resulting board.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] when `pos > 8`, [`Error::Occupied`] when the cell
    /// already holds a mark. The receiver is never modified.
    #[must_use = "apply_move returns a new board; the receiver is unchanged"]
    pub fn apply_move(&self, pos: usize, mark: Player) -> Result<Board> {
        match self.cells.get(pos) {
            None => Err(Error::OutOfBounds { position: pos }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[pos] = mark.to_cell();
                Ok(next)
            }
            Some(_) => Err(Error::Occupied { position: pos }),
        }
    }

    /// Check if a player has a completed line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The mark holding a completed line. X is checked first.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Number of X and O marks on the board
    pub fn piece_counts(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(x, o), cell| match cell {
                Cell::X => (x + 1, o),
                Cell::O => (x, o + 1),
                Cell::Empty => (x, o),
            })
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let (x, o) = self.piece_counts();
        x + o
    }

    /// The side to move under alternating play when `first` opened the game
    pub fn to_move(&self, first: Player) -> Player {
        if self.occupied_count() % 2 == 0 {
            first
        } else {
            first.opponent()
        }
    }

    /// Guess the side to move from the counts alone: the side behind moves,
    /// and X moves when the counts are level.
    pub fn infer_mover(&self) -> Player {
        let (x, o) = self.piece_counts();
        if x > o { Player::O } else { Player::X }
    }

    /// Compact nine-character encoding, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            let marks: Vec<char> = chunk
                .iter()
                .map(|&c| if c == Cell::Empty { ' ' } else { c.to_char() })
                .collect();
            write!(f, " {} | {} | {} ", marks[0], marks[1], marks[2])?;
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_apply_move() {
        let board = Board::new();

        let next = board.apply_move(4, Player::X).unwrap();
        assert_eq!(next.get(4), Some(Cell::X));
        assert_eq!(board.get(4), Some(Cell::Empty));
        assert_eq!(board.get(9), None);

        let err = next.apply_move(4, Player::O).unwrap_err();
        assert!(err.is_illegal_move());
        assert!(err.to_string().contains("occupied"));

        let err = next.apply_move(9, Player::O).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { position: 9 }));
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board = Board::from_string("X.O.X.O..").unwrap();
        assert_eq!(board.empty_cells(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert!(board.is_draw());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_winner_checks_x_first() {
        // Not reachable by alternating play, but the predicate must not assume it
        let board = Board::from_cells([
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::O,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XO. ... ...").unwrap();
        assert_eq!(board.get(0), Some(Cell::X));
        assert_eq!(board.get(1), Some(Cell::O));
        assert_eq!(board.occupied_count(), 2);

        assert!(matches!(
            Board::from_string("XO"),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(matches!(
            Board::from_string("XXX......"),
            Err(Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 0
            })
        ));
    }

    #[test]
    fn test_to_move_and_infer_mover() {
        let board = Board::from_string("X........").unwrap();
        assert_eq!(board.to_move(Player::X), Player::O);
        assert_eq!(board.infer_mover(), Player::O);

        let board = Board::from_string("O........").unwrap();
        assert_eq!(board.to_move(Player::O), Player::X);
        assert_eq!(board.infer_mover(), Player::X);

        assert_eq!(Board::new().to_move(Player::O), Player::O);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XO.......").unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " X | O |   ");
        assert_eq!(lines[1], "---+---+---");
    }

    #[test]
    fn test_encode() {
        let board = Board::new().apply_move(1, Player::O).unwrap();
        assert_eq!(board.encode(), ".O.......");
    }

    #[test]
    fn test_player_parsing() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" O ".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }
}
