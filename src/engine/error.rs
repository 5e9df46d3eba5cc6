//! Errors reported by the game engine

use crate::core::WordError;
use std::fmt;

/// Why a round could not be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    EmptyWordList,
    InvalidWord { index: usize, source: WordError },
    NegativeLimit(i64),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "word list is empty"),
            Self::InvalidWord { index, source } => {
                write!(f, "word #{} is not playable: {source}", index + 1)
            }
            Self::NegativeLimit(n) => {
                write!(f, "wrong-guess limit must not be negative, got {n}")
            }
        }
    }
}

/// Errors returned by `GameEngine` operations
///
/// All of these are caller contract violations. The engine state is never
/// modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The round could not be initialized
    InvalidInput(InvalidInput),
    /// Not a letter, or a letter that was already guessed
    InvalidGuess(char),
    /// The round is already won or lost
    RoundAlreadyOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
            Self::InvalidGuess(c) => {
                write!(f, "{c:?} is not one of the letters left to guess")
            }
            Self::RoundAlreadyOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(InvalidInput::InvalidWord { source, .. }) => Some(source),
            _ => None,
        }
    }
}

impl From<InvalidInput> for GameError {
    fn from(reason: InvalidInput) -> Self {
        Self::InvalidInput(reason)
    }
}
