//! Sketchbook - console tic-tac-toe and a terminal smoothing plot.
//!
//! # Architecture
//!
//! - **Console**: turn loop for two players on stdin/stdout
//! - **Chart**: ratatui rendering of a smoothed series
//! - **Config**: TOML settings for sample generation and smoothing
//!
//! Game rules live in `sketchbook_tictactoe`, numerics in
//! `sketchbook_smoothing`; both are re-exported here.
//!
//! # Example
//!
//! ```
//! use sketchbook::{ConsoleSession, SessionOutcome};
//! use sketchbook::tictactoe::{GameResult, Player};
//!
//! let moves = "0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n";
//! let mut session = ConsoleSession::new(moves.as_bytes(), Vec::new());
//! let outcome = session.play_game().unwrap();
//! assert_eq!(outcome, SessionOutcome::Finished(GameResult::Win(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chart;
mod config;
mod console;

pub use sketchbook_smoothing as smoothing;
pub use sketchbook_tictactoe as tictactoe;

pub use chart::{CHART_TITLE, render_chart, show_chart};
pub use config::{ConfigError, SmoothingConfig};
pub use console::{
    COLUMN_PROMPT, ConsoleError, ConsoleSession, ROW_PROMPT, SessionOutcome, TurnError,
    parse_coordinate,
};
