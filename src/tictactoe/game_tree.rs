//! Enumeration of the positions alternating play can reach

use std::collections::{HashSet, VecDeque};

use super::{Player, board::Board};

/// A board together with the side to move on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub to_move: Player,
}

/// Every position reachable from the empty board when `first` opens,
/// terminal ones included, in breadth-first order.
///
/// With X opening this is the classic 5478 legal positions.
pub fn reachable_positions(first: Player) -> Vec<Position> {
    let root = Position {
        board: Board::new(),
        to_move: first,
    };

    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut positions = Vec::new();

    while let Some(position) = queue.pop_front() {
        positions.push(position);

        if position.board.is_terminal() {
            continue;
        }

        for pos in position.board.empty_cells() {
            let Ok(board) = position.board.apply_move(pos, position.to_move) else {
                continue;
            };
            let next = Position {
                board,
                to_move: position.to_move.opponent(),
            };
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    positions
}
