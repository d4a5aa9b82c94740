//! Word list loading utilities
//!
//! Reads a plain-text word list (one candidate word per line) and draws the
//! secret word for a round.

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One candidate per line; lines are trimmed and uppercased. Blank lines and
/// entries that fail validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse word list text into valid Word instances, skipping invalid entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Draw one secret word uniformly at random
///
/// Returns `None` for an empty list; callers treat that as fatal before a
/// round starts.
pub fn draw_secret<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
