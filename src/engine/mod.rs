//! Hangman game engine
//!
//! Owns all round state and enforces the `InProgress` → `Won`/`Lost` state
//! machine. Performs no I/O; prompting and rendering live in `commands` and
//! `output`.

mod error;
mod game;

pub use error::{GameError, InvalidInput};
pub use game::{GameEngine, GuessOutcome, RoundStatus, Status, WrongGuessLimit, select_word};
