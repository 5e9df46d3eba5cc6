//! Hangman - CLI
//!
//! Guess the secret word, one letter at a time.

use anyhow::{Context, Result, bail};
use clap::Parser;
use hangman::{
    commands::run_play,
    wordlists::{DEFAULT_WORDLIST, loader::load_from_file},
};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word before you run out of wrong guesses",
    version,
    author
)]
struct Cli {
    /// Word list file, one word per line
    #[arg(default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let words = load_from_file(&cli.wordlist)
        .with_context(|| format!("Failed to read word list {}", cli.wordlist.display()))?;
    if words.is_empty() {
        bail!("No playable words in {}", cli.wordlist.display());
    }
    info!(count = words.len(), "Word list ready");

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    run_play(&words, &mut input, &mut out, &mut rand::rng())?;
    Ok(())
}
