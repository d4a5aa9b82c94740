//! Formatting utilities for terminal output
//!
//! Maps letters to boxed display glyphs and colors them by feedback status.

use crate::core::LetterStatus;
use crate::game::ScoredGuess;
use colored::Colorize;

/// Boxed glyph shown for an empty board slot
pub const PLACEHOLDER: char = '☐';

/// Boxed display glyphs, indexed by letter ordinal (A = 0)
const GLYPHS: [char; 26] = [
    '🄰', '🄱', '🄲', '🄳', '🄴', '🄵', '🄶', '🄷', '🄸', '🄹', '🄺', '🄻', '🄼',
    '🄽', '🄾', '🄿', '🅀', '🅁', '🅂', '🅃', '🅄', '🅅', '🅆', '🅇', '🅈', '🅉',
];

/// Look up the boxed glyph for an uppercase letter
///
/// # Panics
/// Panics if `letter` is not an ASCII uppercase letter. Callers pass letters
/// from a validated `Word`, which guarantees the range.
#[must_use]
pub fn glyph_for(letter: u8) -> char {
    GLYPHS[usize::from(letter - b'A')]
}

/// Format one scored guess as a row of colored glyphs
///
/// Correct letters print green, present letters yellow, absent letters
/// bright red. Each glyph is followed by a space for grid alignment.
#[must_use]
pub fn format_guess_row(scored: &ScoredGuess) -> String {
    let mut row = String::new();

    for (i, &letter) in scored.guess().chars().iter().enumerate() {
        let glyph = glyph_for(letter).to_string();
        let colored_glyph = match scored.feedback().status_at(i) {
            LetterStatus::Correct => glyph.green(),
            LetterStatus::Present => glyph.yellow(),
            LetterStatus::Absent => glyph.bright_red(),
        };
        row.push_str(&format!("{colored_glyph} "));
    }

    row
}

/// Format an empty board slot: five uncolored placeholders
#[must_use]
pub fn format_empty_row() -> String {
    let mut row = String::new();
    for _ in 0..5 {
        row.push(PLACEHOLDER);
        row.push(' ');
    }
    row
}
