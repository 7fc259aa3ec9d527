//! Winning lines of the 3x3 grid

use super::{Cell, Player};

/// The eight lines that win the game: three rows, three columns, two diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Queries over the winning lines of a cell array
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Whether `player` occupies all three cells of any line
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::completed_line(cells, player).is_some()
    }

    /// First line (in `WINNING_LINES` order) fully held by `player`
    pub fn completed_line(cells: &[Cell; 9], player: Player) -> Option<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Positions that would complete a line for `player`, ascending and deduplicated
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::open_square(cells, player, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    fn open_square(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut held = 0;
        let mut open = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty if open.is_none() => open = Some(idx),
                Cell::Empty => return None,
                c if c == target => held += 1,
                _ => return None,
            }
        }

        if held == 2 { open } else { None }
    }
}
