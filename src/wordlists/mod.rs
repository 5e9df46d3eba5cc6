//! Word lists for hangman
//!
//! The game reads its candidate words from a plain text file, one per line.

pub mod loader;

/// Word list read when no path is given
pub const DEFAULT_WORDLIST: &str = "words.txt";
