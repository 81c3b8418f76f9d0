//! Monotonic board invariant: marks are only ever added.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: The board is exactly the history replayed on an empty board.
///
/// A square written twice, or a mark with no matching move, breaks it.
pub struct MonotonicBoardInvariant;

impl Invariant for MonotonicBoardInvariant {
    const DESCRIPTION: &'static str =
        "Board only changes by marking empty squares from the move history";

    fn holds(game: &Game) -> bool {
        let mut replayed = Board::new();
        for action in game.history() {
            if replayed.place(action.position, action.player).is_err() {
                return false;
            }
        }
        &replayed == game.board()
    }
}
