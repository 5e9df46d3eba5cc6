//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod letter;
mod pattern;
mod word;

pub use letter::{ALPHABET_LEN, Letter, LetterSet};
pub use pattern::{RevealedPattern, Slot};
pub use word::{SecretWord, WordError};
