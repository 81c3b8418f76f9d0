//! Game rules for tic-tac-toe.
//!
//! Pure functions over a `Board`. Rules are kept apart from board storage
//! so the game, the invariants and the console loop share one definition.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{LINES, check_winner};

use super::action::MoveError;
use super::{Board, GameResult, Player, Position};
use tracing::instrument;

/// Marks (row, col) for `player`.
///
/// # Errors
///
/// - `MoveError::OutOfRange` if either coordinate is outside `0..=2`
/// - `MoveError::SquareOccupied` if the square already holds a mark
///
/// The board is unchanged on error.
#[instrument(skip(board))]
pub fn apply_move(
    board: &mut Board,
    player: Player,
    row: usize,
    col: usize,
) -> Result<(), MoveError> {
    let pos = Position::from_coords(row, col)?;
    board.place(pos, player)
}

/// Evaluates the board: a completed line wins, otherwise a full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Win(winner)
    } else if check_draw(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_square() {
        let mut board = Board::new();
        apply_move(&mut board, Player::O, 2, 1).unwrap();
        assert_eq!(board.to_string(), "_ _ _\n_ _ _\n_ O _");
    }

    #[test]
    fn test_apply_move_out_of_range_leaves_board() {
        let mut board = Board::new();
        assert_eq!(
            apply_move(&mut board, Player::X, 0, 3),
            Err(MoveError::OutOfRange { row: 0, col: 3 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board: Board = "XXX OOX XOO".parse().unwrap();
        assert_eq!(evaluate(&board), GameResult::Win(Player::X));
    }

    #[test]
    fn test_evaluate_draw_and_in_progress() {
        let full: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(evaluate(&full), GameResult::Draw);
        let partial: Board = "XO_ ___ ___".parse().unwrap();
        assert_eq!(evaluate(&partial), GameResult::InProgress);
    }
}
