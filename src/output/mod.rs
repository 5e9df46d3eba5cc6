//! Terminal output formatting
//!
//! Rendering of round status and results.

pub mod display;
pub mod formatters;

pub use display::{
    print_outcome, print_session_summary, print_status, print_welcome, print_word_length,
};
