//! Formatting utilities for terminal output

use crate::core::{Letter, RevealedPattern, Slot};

/// Placeholder drawn for a hidden slot
pub const HIDDEN_SLOT: &str = "___";

/// Format a revealed pattern, e.g. `_C_ ___ _T_`
#[must_use]
pub fn format_pattern(pattern: &RevealedPattern) -> String {
    pattern
        .slots()
        .iter()
        .map(|slot| match slot {
            Slot::Hidden => HIDDEN_SLOT.to_string(),
            Slot::Revealed(letter) => format!("_{letter}_"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format guessed letters in guess order, space separated
#[must_use]
pub fn format_history(history: &[Letter]) -> String {
    history
        .iter()
        .map(Letter::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pick the singular or plural noun for `count`
#[must_use]
pub const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
