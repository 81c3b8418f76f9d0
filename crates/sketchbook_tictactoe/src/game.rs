//! Tic-tac-toe game engine.
//!
//! `Game` owns the board, the player to move and the move history. The
//! result is recomputed from the board on demand, so it can never drift
//! from the squares it describes.

use super::action::{Move, MoveError};
use super::invariants;
use super::rules;
use super::{Board, GameResult, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single game of tic-tac-toe, X moving first.
///
/// Deserializing replays the saved history, so a saved board or player to
/// move that disagrees with it is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord", into = "GameRecord")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Move>,
}

/// Wire form of a [`Game`].
#[derive(Serialize, Deserialize)]
struct GameRecord {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        Self {
            board: game.board,
            to_move: game.to_move,
            history: game.history,
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = MoveError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Game::replay(&record.history)?;
        if game.board != record.board || game.to_move != record.to_move {
            return Err(MoveError::InvariantViolation(
                "Saved board or player to move does not match the move history".to_string(),
            ));
        }
        Ok(game)
    }
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the board.
    pub fn result(&self) -> GameResult {
        rules::evaluate(&self.board)
    }

    /// Returns the empty positions, or none once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.result().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current player's mark at (row, col).
    ///
    /// On success the turn passes to the opponent and the new result is
    /// returned.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` once the game is won or drawn
    /// - `MoveError::OutOfRange` for coordinates outside `0..=2`
    /// - `MoveError::SquareOccupied` for a marked square
    ///
    /// A rejected move changes neither the board nor the player to move.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameResult, MoveError> {
        if self.result().is_terminal() {
            return Err(MoveError::GameOver);
        }
        let position = Position::from_coords(row, col)?;
        self.make_move(Move::new(self.to_move, position))
    }

    /// Applies a fully specified move.
    ///
    /// # Errors
    ///
    /// As [`Game::play`], plus `MoveError::WrongPlayer` when `action.player`
    /// is not the player to move. In debug builds a
    /// `MoveError::InvariantViolation` reports a broken postcondition.
    ///
    /// The move is staged on a copy and only committed once every check
    /// passes, so an error leaves the game untouched.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, action: Move) -> Result<GameResult, MoveError> {
        if self.result().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }

        let pos = action.position;
        let mut next = self.clone();
        rules::apply_move(&mut next.board, action.player, pos.row(), pos.col())?;
        next.history.push(action);
        next.to_move = next.to_move.opponent();

        if cfg!(debug_assertions) {
            let broken = invariants::violations(&next);
            if !broken.is_empty() {
                return Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: {}",
                    broken.join("; ")
                )));
            }
        }

        *self = next;
        let result = self.result();
        debug!(%action, ?result, "Move applied");
        Ok(result)
    }

    /// Replays moves from an empty board.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for action in moves {
            game.make_move(*action)?;
        }
        Ok(game)
    }

    /// Clears the board for a new game, X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_player_switches_only_on_accepted_move() {
        let mut game = Game::new();
        game.play(1, 1).unwrap();
        assert_eq!(game.to_move(), Player::O);

        assert!(game.play(1, 1).is_err());
        assert!(game.play(4, 0).is_err());
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = Game::new();
        let result = game.make_move(Move::new(Player::O, Position::Center));
        assert_eq!(result, Err(MoveError::WrongPlayer(Player::O)));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_terminal_game_rejects_moves() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(row, col).unwrap();
        }
        assert_eq!(game.result(), GameResult::Win(Player::X));
        assert_eq!(game.play(2, 2), Err(MoveError::GameOver));
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_drawn_game_rejects_moves() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
            game.play(row, col).unwrap();
        }
        assert_eq!(game.result(), GameResult::Draw);

        let before = game.clone();
        assert_eq!(game.play(0, 0), Err(MoveError::GameOver));
        assert_eq!(
            game.make_move(Move::new(game.to_move(), Position::Center)),
            Err(MoveError::GameOver)
        );
        assert_eq!(game, before);
        assert_eq!(game.history().len(), 9);
        assert!(game.valid_moves().is_empty());
    }

    /// X at the centre with an empty history and X still to move.
    fn stray_mark_game() -> Game {
        let mut game = Game::new();
        game.board.place(Position::Center, Player::X).unwrap();
        game
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_leaves_game_untouched() {
        let mut game = stray_mark_game();
        let before = game.clone();

        let result = game.play(0, 0);

        assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
        assert_eq!(game, before);
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.board().get(Position::TopLeft), Square::Empty);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut game = Game::new();
        game.play(0, 0).unwrap();
        game.restart();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_game_serializes() {
        let mut game = Game::new();
        game.play(2, 0).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }

    #[test]
    fn test_deserialize_rejects_board_not_matching_history() {
        let json = serde_json::to_string(&stray_mark_game()).unwrap();
        let err = serde_json::from_str::<Game>(&json).unwrap_err();
        assert!(err.to_string().contains("does not match the move history"));
    }

    #[test]
    fn test_deserialize_rejects_wrong_player_to_move() {
        let mut game = Game::new();
        game.play(2, 2).unwrap();
        game.to_move = Player::X;
        let json = serde_json::to_string(&game).unwrap();
        assert!(serde_json::from_str::<Game>(&json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_illegal_history() {
        let mut game = Game::new();
        game.play(1, 1).unwrap();
        game.history.push(Move::new(Player::O, Position::Center));
        let json = serde_json::to_string(&game).unwrap();
        let err = serde_json::from_str::<Game>(&json).unwrap_err();
        assert!(err.to_string().contains("already occupied"));
    }
}
