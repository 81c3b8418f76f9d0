//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// Only meaningful once `check_winner` has returned `None`: a full board
/// with a completed line is a win.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::win::check_winner;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!check_draw(&Board::new()));
    }

    #[test]
    fn test_any_single_gap_is_not_full() {
        for gap in Position::ALL {
            let mut board = Board::new();
            for (i, pos) in Position::ALL.into_iter().enumerate() {
                if pos != gap {
                    let player = if i % 2 == 0 { Player::X } else { Player::O };
                    board.place(pos, player).unwrap();
                }
            }
            assert!(!check_draw(&board), "gap at {}", gap);
        }
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(check_winner(&board), None);
        assert!(check_draw(&board));
    }
}
