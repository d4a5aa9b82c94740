//! Terminal Wordle - CLI
//!
//! Guess a five-letter word within six guesses.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use wordle_game::{commands::run_play, wordlists::load_from_file};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess a five-letter word within six guesses",
    version,
    author
)]
struct Cli {
    /// Path to the word list file, one five-letter word per line
    #[arg(short, long, default_value = "words.txt")]
    wordlist: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_from_file(&cli.wordlist)
        .with_context(|| format!("Failed to read word list {}", cli.wordlist.display()))?;
    if words.is_empty() {
        bail!(
            "Word list {} contains no valid five-letter words",
            cli.wordlist.display()
        );
    }

    run_play(&words).map_err(|e| anyhow::anyhow!(e))
}
