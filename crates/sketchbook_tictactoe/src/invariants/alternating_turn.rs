//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and the player to move is X
/// exactly when the history has even length.
pub struct AlternatingTurnInvariant;

impl Invariant for AlternatingTurnInvariant {
    const DESCRIPTION: &'static str = "Players alternate turns (X, O, X, O, ...)";

    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        game.to_move() == expected_next
    }
}
