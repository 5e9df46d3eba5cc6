//! Secret word representation
//!
//! A `SecretWord` stores the uppercase word along with letter position indices
//! so a correct guess can reveal every matching slot at once.

use super::Letter;
use rustc_hash::FxHashMap;
use std::fmt;

/// The word being guessed in a round
///
/// Immutable once built. Only ASCII letters are accepted, so every slot can
/// eventually be revealed by a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word may only contain letters A-Z, found {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word, normalized to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("bass").unwrap();
    /// assert_eq!(word.text(), "BASS");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("ice-cream").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        Self::validate(text)?;

        let text = text.to_ascii_uppercase();
        let mut positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, letter) in text.chars().filter_map(Letter::new).enumerate() {
            positions.entry(letter).or_default().push(i);
        }

        Ok(Self { text, positions })
    }

    /// Check that `text` would make a playable word without building one
    ///
    /// # Errors
    /// Same conditions as [`SecretWord::new`].
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{SecretWord, WordError};
    ///
    /// assert!(SecretWord::validate("Quartz").is_ok());
    /// assert_eq!(SecretWord::validate("x-ray"), Err(WordError::InvalidCharacter('-')));
    /// ```
    pub fn validate(text: &str) -> Result<(), WordError> {
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        match text.chars().find(|c| !c.is_ascii_alphabetic()) {
            Some(c) => Err(WordError::InvalidCharacter(c)),
            None => Ok(()),
        }
    }

    /// The uppercase word
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.positions.get(&letter).map_or(&[], Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
