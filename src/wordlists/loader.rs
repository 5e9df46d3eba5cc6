//! Word list loading utilities
//!
//! Reads newline-separated word lists from files or in-memory text.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// Returns the trimmed, playable words in file order. Blank lines are
/// dropped; lines that are not pure ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);

    debug!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

/// Parse newline-separated words from text
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_str;
///
/// let words = words_from_str("apple\n  pear \n\nice-cream\n");
/// assert_eq!(words, ["apple", "pear"]);
/// ```
#[must_use]
pub fn words_from_str(text: &str) -> Vec<String> {
    text.lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match SecretWord::validate(trimmed) {
                Ok(()) => Some(trimmed.to_string()),
                Err(e) => {
                    debug!(line = line_no + 1, word = trimmed, error = %e, "Skipping entry");
                    None
                }
            }
        })
        .collect()
}
