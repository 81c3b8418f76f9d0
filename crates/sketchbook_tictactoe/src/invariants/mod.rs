//! Properties every `Game` keeps between moves.
//!
//! `Game` checks the whole list after every accepted move in debug builds
//! and refuses the move if any check fails.

pub mod alternating_turn;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use super::Game;

/// A property of a game's board, turn and history.
pub trait Invariant {
    /// Shown when the property is broken.
    const DESCRIPTION: &'static str;

    /// Whether `game` satisfies the property.
    fn holds(game: &Game) -> bool;
}

/// A check paired with its description.
pub type Check = (fn(&Game) -> bool, &'static str);

/// Every invariant, in reporting order.
pub const GAME_INVARIANTS: [Check; 2] = [
    (MonotonicBoardInvariant::holds, MonotonicBoardInvariant::DESCRIPTION),
    (AlternatingTurnInvariant::holds, AlternatingTurnInvariant::DESCRIPTION),
];

/// Descriptions of the invariants `game` breaks, empty when it is sound.
pub fn violations(game: &Game) -> Vec<&'static str> {
    GAME_INVARIANTS
        .iter()
        .filter(|(holds, _)| !holds(game))
        .map(|(_, description)| *description)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_new_game_is_sound() {
        assert!(violations(&Game::new()).is_empty());
    }

    #[test]
    fn test_sound_after_moves() {
        let mut game = Game::new();
        game.play(0, 0).unwrap();
        game.play(1, 1).unwrap();
        game.play(0, 2).unwrap();
        assert!(violations(&game).is_empty());
    }

    #[test]
    fn test_reports_every_broken_invariant_in_order() {
        let mut game = Game::new();
        game.play(1, 1).unwrap();

        // Stray mark outside the history, and the wrong player to move.
        game.board.place(Position::TopLeft, Player::O).unwrap();
        game.to_move = Player::X;

        assert_eq!(
            violations(&game),
            vec![
                MonotonicBoardInvariant::DESCRIPTION,
                AlternatingTurnInvariant::DESCRIPTION,
            ]
        );
        assert_eq!(game.board.get(Position::TopLeft), Square::Occupied(Player::O));
    }
}
