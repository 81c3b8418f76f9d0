//! Console turn loop for two players sharing one terminal.
//!
//! Each turn prints the board, reads a row and a column, and applies the
//! move for the player whose turn it is. Bad input never ends the game:
//! unparsable coordinates are asked for again and illegal moves restart the
//! turn with the same player.

use derive_more::Display;
use sketchbook_tictactoe::{Game, GameResult, MoveError};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Prompt for the row coordinate.
pub const ROW_PROMPT: &str = "Enter row (0-2): ";

/// Prompt for the column coordinate.
pub const COLUMN_PROMPT: &str = "Enter column (0-2): ";

/// A turn that could not be played.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TurnError {
    /// Input that is not a non-negative whole number.
    #[display("Invalid input {:?}: enter a whole number", _0)]
    InvalidInput(String),

    /// A coordinate pair the game refused.
    #[display("Illegal move: {}", _0)]
    IllegalMove(MoveError),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::IllegalMove(e) => Some(e),
            TurnError::InvalidInput(_) => None,
        }
    }
}

impl From<MoveError> for TurnError {
    fn from(err: MoveError) -> Self {
        TurnError::IllegalMove(err)
    }
}

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The game reached a win or a draw.
    Finished(GameResult),
    /// Input ran out first.
    Abandoned {
        /// Moves accepted before input closed.
        moves: usize,
    },
}

/// Console I/O failure with location tracking.
#[derive(Debug, Clone, Display, derive_more::Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Parses one coordinate as typed by a player.
///
/// Surrounding whitespace is ignored. Range is not checked here; the game
/// rejects off-board coordinates as illegal moves.
pub fn parse_coordinate(input: &str) -> Result<usize, TurnError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| TurnError::InvalidInput(trimmed.to_string()))
}

enum Turn {
    Played(GameResult),
    Rejected(TurnError),
    InputClosed,
}

/// A game played over a line-oriented reader and writer.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    game: Game,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session with a fresh game.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            game: Game::new(),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs turns until the game ends or input closes.
    ///
    /// The board is printed before every turn and once more at the end,
    /// followed by `Player X wins!`, `Player O wins!` or
    /// `The game is a draw.`.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError` only when reading or writing fails.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<SessionOutcome, ConsoleError> {
        info!("Starting game");
        loop {
            let result = self.game.result();
            if result.is_terminal() {
                self.print_board()?;
                writeln!(self.output, "{}", result)?;
                self.output.flush()?;
                info!(%result, moves = self.game.history().len(), "Game finished");
                return Ok(SessionOutcome::Finished(result));
            }

            self.print_board()?;
            match self.take_turn()? {
                Turn::Played(result) => debug!(?result, "Turn complete"),
                Turn::Rejected(err) => {
                    warn!(error = %err, player = %self.game.to_move(), "Move rejected");
                    writeln!(self.output, "{}", err)?;
                }
                Turn::InputClosed => {
                    let moves = self.game.history().len();
                    info!(moves, "Input closed before the game finished");
                    return Ok(SessionOutcome::Abandoned { moves });
                }
            }
        }
    }

    fn take_turn(&mut self) -> Result<Turn, ConsoleError> {
        let Some(row) = self.read_coordinate(ROW_PROMPT)? else {
            return Ok(Turn::InputClosed);
        };
        let Some(col) = self.read_coordinate(COLUMN_PROMPT)? else {
            return Ok(Turn::InputClosed);
        };
        Ok(match self.game.play(row, col) {
            Ok(result) => Turn::Played(result),
            Err(err) => Turn::Rejected(err.into()),
        })
    }

    /// Prompts until a number is entered; `None` once input is exhausted.
    fn read_coordinate(&mut self, prompt: &str) -> Result<Option<usize>, ConsoleError> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match parse_coordinate(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(error = %err, "Re-prompting");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    fn print_board(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", self.game.board())?;
        Ok(())
    }
}
