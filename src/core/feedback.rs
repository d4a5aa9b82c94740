//! Guess feedback calculation and representation
//!
//! Feedback annotates each letter of a guess with one of three statuses:
//! - `Absent` (letter occurs nowhere in the secret)
//! - `Present` (letter occurs in the secret, wrong position)
//! - `Correct` (letter in the correct position)

use super::Word;

/// Per-letter feedback status for a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Feedback for one guess: five statuses, index-aligned with the guess letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; 5]);

impl Feedback {
    /// All correct (winning guess)
    pub const WIN: Self = Self([LetterStatus::Correct; 5]);

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Each position is scored independently by membership:
    /// 1. If the guess letter occurs nowhere in the secret, it is `Absent`.
    /// 2. If it matches the secret letter at the same position, it is `Correct`.
    /// 3. Otherwise it is `Present`.
    ///
    /// Note that repeated guess letters are NOT capped at their count in the
    /// secret: a letter the secret holds once can earn `Present` at several
    /// guess positions. This differs from the official game's duplicate
    /// handling and is kept deliberately.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus, Word};
    ///
    /// let secret = Word::new("CRANE").unwrap();
    /// let guess = Word::new("TRACE").unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// // T(absent) R(correct) A(correct) C(present) E(correct)
    /// assert_eq!(feedback.status_at(0), LetterStatus::Absent);
    /// assert_eq!(feedback.status_at(1), LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; 5];

        // Allow: index needed to compare guess[i] against secret[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            let letter = guess.char_at(i);
            if !secret.has_letter(letter) {
                statuses[i] = LetterStatus::Absent;
            } else if letter == secret.char_at(i) {
                statuses[i] = LetterStatus::Correct;
            } else {
                statuses[i] = LetterStatus::Present;
            }
        }

        Self(statuses)
    }

    /// Get the status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Get all five statuses in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; 5] {
        &self.0
    }

    /// Check if this feedback is a win (all letters correct)
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }

    /// Count the number of `Correct` statuses
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Correct)
            .count()
    }
}
