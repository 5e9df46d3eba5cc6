//! Interactive game loop
//!
//! Prompts for the wrong-guess limit, runs rounds against a `GameEngine`
//! and re-prompts until each guess is accepted. All I/O goes through the
//! given reader and writer.

use crate::engine::{GameEngine, GameError, GuessOutcome, RoundStatus, WrongGuessLimit};
use crate::output::{
    print_outcome, print_session_summary, print_status, print_welcome, print_word_length,
};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// Results across the rounds of one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl Statistics {
    fn record(&mut self, round: RoundStatus) {
        if round.is_over() {
            self.rounds_played += 1;
        }
        if round == RoundStatus::Won {
            self.rounds_won += 1;
        }
    }
}

/// Play rounds until the player declines another one or input ends
///
/// Typing `quit` or `exit` at any prompt ends the session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a round
/// cannot be started from `words`.
pub fn run_play<R, W, G>(
    words: &[String],
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut stats = Statistics::default();

    loop {
        print_welcome(out)?;
        let Some(limit) = prompt_limit(input, out)? else {
            break;
        };

        let mut engine =
            GameEngine::new(words, limit, rng).context("Failed to start a new round")?;
        print_word_length(out, engine.word_len())?;

        let Some(round) = play_round(&mut engine, input, out)? else {
            break;
        };
        stats.record(round);
        if let Some(secret) = engine.secret() {
            print_outcome(out, round, secret)?;
        }

        match prompt(input, out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                debug!(?stats, "Starting another round");
            }
            _ => break,
        }
    }

    print_session_summary(out, &stats)?;
    Ok(stats)
}

/// Run one round to completion; `None` if the player left mid-round
fn play_round<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: &mut R,
    out: &mut W,
) -> Result<Option<RoundStatus>> {
    loop {
        print_status(out, &engine.status())?;

        let Some(outcome) = prompt_guess(engine, input, out)? else {
            return Ok(None);
        };

        if outcome.hit {
            writeln!(out, "{}", format!("Yes! {} is in the word.", outcome.letter).green())?;
        } else {
            writeln!(out, "{}", format!("Sorry, {} is not in the word.", outcome.letter).red())?;
        }

        if outcome.status.is_over() {
            return Ok(Some(outcome.status));
        }
    }
}

/// Ask for letters until the engine accepts one
fn prompt_guess<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: &mut R,
    out: &mut W,
) -> Result<Option<GuessOutcome>> {
    loop {
        let Some(raw) = prompt(input, out, "What letter would you like to guess?")? else {
            return Ok(None);
        };

        let mut chars = raw.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            match engine.submit_guess(c) {
                Ok(outcome) => return Ok(Some(outcome)),
                Err(GameError::InvalidGuess(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }

        writeln!(out, "Alas, {raw} is not one of the letters left to guess.")?;
    }
}

/// Ask how many wrong guesses to allow; re-prompts until a valid number
fn prompt_limit<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<WrongGuessLimit>> {
    writeln!(out, "How many incorrect answers would you like to be allowed")?;
    loop {
        let Some(raw) = prompt(input, out, "before you lose?")? else {
            return Ok(None);
        };

        match raw.parse::<i64>() {
            Ok(n) => match WrongGuessLimit::try_from(n) {
                Ok(limit) => return Ok(Some(limit)),
                Err(e) => writeln!(out, "{e}. Please enter 0 or more.")?,
            },
            Err(_) => writeln!(out, "Please enter a whole number.")?,
        }
    }
}

/// Print a prompt and read one trimmed line
///
/// Returns `None` at end of input or when the player types `quit`/`exit`.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text} ")?;
    out.flush().context("Failed to flush prompt")?;

    // Bytes that are not UTF-8 become U+FFFD and are rejected like any non-letter.
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf).context("Failed to read input")? == 0 {
        debug!("Input closed");
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    let line = line.trim();
    if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}
