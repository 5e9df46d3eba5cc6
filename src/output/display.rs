//! Display functions for the interactive game

use super::formatters::{format_history, format_pattern, plural};
use crate::commands::Statistics;
use crate::core::SecretWord;
use crate::engine::{RoundStatus, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner shown before the difficulty prompt
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", "           WELCOME TO OUR HANGMAN GAME".bright_yellow().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())
}

/// Announce the length of the freshly chosen word
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_word_length<W: Write>(out: &mut W, len: usize) -> io::Result<()> {
    writeln!(
        out,
        "The word you will be guessing is {len} {} long.",
        plural(len, "letter", "letters")
    )
}

/// Print the situation before a guess
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_status<W: Write>(out: &mut W, status: &Status<'_>) -> io::Result<()> {
    let article = if status.history.is_empty() {
        "your first"
    } else {
        "your next"
    };

    writeln!(out, "\n\nBefore you make {article} guess, here's the situation:")?;
    writeln!(out, "1) This is the word, as far as you have figured out so far:")?;
    writeln!(out, "    {}\n", format_pattern(status.pattern).bright_white().bold())?;
    writeln!(out, "2) These are the letters you have already guessed:")?;
    writeln!(out, "    {}\n", format_history(status.history))?;
    writeln!(
        out,
        "3) You have {} incorrect {} until you lose.",
        status.remaining,
        plural(status.remaining, "guess", "guesses")
    )
}

/// Print the terminal win/loss message
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(
    out: &mut W,
    round: RoundStatus,
    secret: &SecretWord,
) -> io::Result<()> {
    match round {
        RoundStatus::Won => writeln!(
            out,
            "\n{}",
            format!("You won!  The word was {secret}").green().bold()
        ),
        RoundStatus::Lost => writeln!(
            out,
            "\n{}",
            format!("You lost.  The word was {secret}").red().bold()
        ),
        RoundStatus::InProgress => Ok(()),
    }
}

/// Print the session tally on exit
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_session_summary<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    if stats.rounds_played > 0 {
        writeln!(
            out,
            "\nYou won {} of {} {}.",
            stats.rounds_won,
            stats.rounds_played,
            plural(stats.rounds_played, "round", "rounds")
        )?;
    }
    writeln!(out, "Thanks for playing!")
}
