//! Board model contract: win detection, move legality and value semantics

use noughts::{
    Error,
    tictactoe::{Board, Cell, Player, WINNING_LINES, reachable_positions},
};

fn board_with_line(line: [usize; 3], mark: Player) -> Board {
    let mut cells = [Cell::Empty; 9];
    for idx in line {
        cells[idx] = mark.to_cell();
    }
    Board::from_cells(cells)
}

mod win_detection {
    use super::*;

    #[test]
    fn every_line_wins_for_either_mark() {
        for line in WINNING_LINES {
            for mark in [Player::X, Player::O] {
                let board = board_with_line(line, mark);
                assert_eq!(board.winner(), Some(mark), "line {line:?} for {mark}");
                assert!(board.is_terminal());
                assert!(!board.is_full());
            }
        }
    }

    #[test]
    fn no_three_in_a_row_means_no_winner() {
        for text in [".........", "XO.......", "XOXXOOOXX", "XX.OO....", "X.O.X.O.."] {
            let board = Board::from_string(text).unwrap();
            assert_eq!(board.winner(), None, "{text}");
        }
    }

    #[test]
    fn two_in_a_row_plus_foreign_mark_is_not_a_win() {
        let board = Board::from_string("XXO......").unwrap();
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert!(board.is_draw());
        assert!(board.is_terminal());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn full_board_with_line_is_a_win_not_a_draw() {
        let board = Board::from_string("XXXOOXXOO").unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), Some(Player::X));
        assert!(!board.is_draw());
    }
}

mod move_legality {
    use super::*;

    #[test]
    fn occupied_cells_are_rejected() {
        let board = Board::from_string("XO.X.O...").unwrap();
        for idx in 0..9 {
            if board.get(idx) == Some(Cell::Empty) {
                continue;
            }
            for mark in [Player::X, Player::O] {
                let err = board.apply_move(idx, mark).unwrap_err();
                assert!(matches!(err, Error::Occupied { position } if position == idx));
                assert!(err.is_illegal_move());
            }
        }
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let board = Board::new();
        for idx in [9, 10, 42, usize::MAX] {
            let err = board.apply_move(idx, Player::X).unwrap_err();
            assert!(matches!(err, Error::OutOfBounds { position } if position == idx));
            assert!(err.is_illegal_move());
        }
    }

    #[test]
    fn other_errors_are_not_illegal_moves() {
        assert!(!Error::GameOver.is_illegal_move());
        assert!(!Error::NoValidMoves.is_illegal_move());
    }
}

mod value_semantics {
    use super::*;

    #[test]
    fn apply_move_changes_only_the_target_cell() {
        for position in reachable_positions(Player::X) {
            let before = position.board;
            for idx in before.empty_cells() {
                let after = before.apply_move(idx, position.to_move).unwrap();
                assert_eq!(before, position.board, "input was mutated");
                for other in 0..9 {
                    if other == idx {
                        assert_eq!(after.get(other), Some(position.to_move.to_cell()));
                    } else {
                        assert_eq!(after.get(other), before.get(other));
                    }
                }
            }
        }
    }

    #[test]
    fn reads_off_the_board_are_none() {
        let board = Board::from_string("XO.......").unwrap();
        for idx in [9, 10, usize::MAX] {
            assert_eq!(board.get(idx), None);
            assert!(!board.is_empty(idx));
        }
    }

    #[test]
    fn empty_cells_are_ascending() {
        for position in reachable_positions(Player::O) {
            let cells = position.board.empty_cells();
            assert!(cells.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(cells.len(), 9 - position.board.occupied_count());
        }
    }
}
