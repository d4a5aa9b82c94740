//! The board of scored guesses shown to the player
//!
//! A board holds up to six scored guesses in the order they were played.
//! Slots fill left-to-right with no gaps; unfilled slots render as blanks.

use crate::core::{Feedback, Word};
use std::fmt;

/// Maximum number of guesses in one round
pub const MAX_GUESSES: usize = 6;

/// A guess paired with its feedback
///
/// Derived data: recomputable at any time from the secret and the guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    guess: Word,
    feedback: Feedback,
}

impl ScoredGuess {
    /// Score a guess against the secret
    #[must_use]
    pub fn new(secret: &Word, guess: Word) -> Self {
        let feedback = Feedback::score(secret, &guess);
        Self { guess, feedback }
    }

    /// Get the guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Get the feedback for the guess
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Error returned when pushing onto a full board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFull;

impl fmt::Display for BoardFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board already holds {MAX_GUESSES} guesses")
    }
}

impl std::error::Error for BoardFull {}

/// Ordered history of scored guesses, at most [`MAX_GUESSES`] entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    entries: Vec<ScoredGuess>,
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a scored guess to the next open slot
    ///
    /// Returns the slot index the guess landed in.
    ///
    /// # Errors
    /// Returns [`BoardFull`] if all six slots are already taken.
    pub fn push(&mut self, scored: ScoredGuess) -> Result<usize, BoardFull> {
        if self.entries.len() >= MAX_GUESSES {
            return Err(BoardFull);
        }
        self.entries.push(scored);
        Ok(self.entries.len() - 1)
    }

    /// Get the scored guess at a slot, `None` if the slot is still open
    #[inline]
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&ScoredGuess> {
        self.entries.get(index)
    }

    /// Number of filled slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no guesses have been made yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether all six slots are taken
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_GUESSES
    }

    /// Iterate over the filled slots in play order
    pub fn iter(&self) -> impl Iterator<Item = &ScoredGuess> {
        self.entries.iter()
    }
}
