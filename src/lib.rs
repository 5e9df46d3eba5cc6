//! Hangman
//!
//! A terminal word-guessing game: guess the letters of a secret word before
//! running out of allowed wrong guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::engine::{GameEngine, RoundStatus, WrongGuessLimit};
//!
//! let mut game = GameEngine::with_word("cat", WrongGuessLimit::new(2)).unwrap();
//!
//! assert!(game.submit_guess('c').unwrap().hit);
//! assert!(!game.submit_guess('x').unwrap().hit);
//! game.submit_guess('a').unwrap();
//!
//! let outcome = game.submit_guess('t').unwrap();
//! assert_eq!(outcome.status, RoundStatus::Won);
//! assert_eq!(game.status().remaining, 1);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
