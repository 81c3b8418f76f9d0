//! Pure tic-tac-toe game logic.
//!
//! - **Board**: fixed 3x3 grid of squares, marks are only ever added
//! - **Rules**: `apply_move`, `check_winner`, `check_draw`, `evaluate`
//! - **Game**: owned board + player to move + history, checked moves
//! - **Invariants**: properties verified after every move in debug builds
//!
//! # Example
//!
//! ```
//! use sketchbook_tictactoe::{Game, GameResult, Player};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.play(row, col).unwrap();
//! }
//! assert_eq!(game.result(), GameResult::Win(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use rules::{apply_move, check_draw, check_winner, evaluate};
pub use types::{Board, BoardParseError, GameResult, Player, Square};
