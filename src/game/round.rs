//! Round state machine
//!
//! A round owns the secret word and the board, and advances one validated
//! guess at a time until the player wins or runs out of attempts. Invalid
//! input never reaches the round; it is rejected during `Word` construction
//! and does not consume an attempt.

use super::board::{Board, MAX_GUESSES, ScoredGuess};
use crate::core::Word;
use std::fmt;

/// Where the round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for guess number `n` (zero-based, 0..=5)
    AwaitingGuess(usize),
    /// An accepted guess matched the secret
    Won,
    /// Six accepted guesses, none matched
    Lost,
}

/// Terminal outcome of a round, revealing the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    Won { secret: Word, attempts: usize },
    Lost { secret: Word },
}

impl RoundResult {
    /// The secret word disclosed at round end
    #[must_use]
    pub const fn secret(&self) -> &Word {
        match self {
            Self::Won { secret, .. } | Self::Lost { secret } => secret,
        }
    }
}

/// Error returned when submitting to a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    Finished,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "Round is already over"),
        }
    }
}

impl std::error::Error for RoundError {}

/// One complete play-through: secret selection to won/lost
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{Round, RoundState};
///
/// let secret = Word::new("CRANE").unwrap();
/// let mut round = Round::new(secret);
/// assert_eq!(round.state(), RoundState::AwaitingGuess(0));
///
/// round.submit(Word::new("CRANE").unwrap()).unwrap();
/// assert_eq!(round.state(), RoundState::Won);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    board: Board,
    state: RoundState,
}

impl Round {
    /// Start a round with the given secret word
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            board: Board::new(),
            state: RoundState::AwaitingGuess(0),
        }
    }

    /// Current state of the round
    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// The board of guesses so far
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Check whether the round has reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Won | RoundState::Lost)
    }

    /// Submit a validated guess and advance the state machine
    ///
    /// Scores the guess, appends it to the board, and moves to `Won` on an
    /// exact match, `Lost` after the sixth miss, or the next `AwaitingGuess`
    /// state otherwise.
    ///
    /// # Errors
    /// Returns [`RoundError::Finished`] if the round is already over.
    ///
    /// # Panics
    /// Will not panic - the state machine guarantees the board has an open
    /// slot whenever the round is still awaiting a guess.
    pub fn submit(&mut self, guess: Word) -> Result<&ScoredGuess, RoundError> {
        let RoundState::AwaitingGuess(attempt) = self.state else {
            return Err(RoundError::Finished);
        };

        let matched = guess == self.secret;
        let scored = ScoredGuess::new(&self.secret, guess);
        let slot = self
            .board
            .push(scored)
            .expect("awaiting state implies an open slot");

        self.state = if matched {
            RoundState::Won
        } else if attempt + 1 >= MAX_GUESSES {
            RoundState::Lost
        } else {
            RoundState::AwaitingGuess(attempt + 1)
        };

        Ok(self.board.slot(slot).expect("slot was just filled"))
    }

    /// Terminal outcome, `Some` exactly when the round is over
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        match self.state {
            RoundState::Won => Some(RoundResult::Won {
                secret: self.secret.clone(),
                attempts: self.board.len(),
            }),
            RoundState::Lost => Some(RoundResult::Lost {
                secret: self.secret.clone(),
            }),
            RoundState::AwaitingGuess(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn round_starts_awaiting_first_guess() {
        let round = Round::new(word("CRANE"));
        assert_eq!(round.state(), RoundState::AwaitingGuess(0));
        assert!(!round.is_over());
        assert!(round.result().is_none());
        assert!(round.board().is_empty());
    }

    #[test]
    fn round_won_on_first_guess() {
        let mut round = Round::new(word("APPLE"));

        let scored = round.submit(word("APPLE")).unwrap();
        assert!(scored.feedback().is_win());

        assert_eq!(round.state(), RoundState::Won);
        assert_eq!(round.board().len(), 1);
        assert!(round.board().slot(0).is_some());
        for slot in 1..6 {
            assert!(round.board().slot(slot).is_none());
        }

        match round.result() {
            Some(RoundResult::Won { secret, attempts }) => {
                assert_eq!(secret.text(), "APPLE");
                assert_eq!(attempts, 1);
            }
            other => panic!("expected win, got {other:?}"),
        }
    }

    #[test]
    fn round_advances_on_miss() {
        let mut round = Round::new(word("CRANE"));

        round.submit(word("SLATE")).unwrap();
        assert_eq!(round.state(), RoundState::AwaitingGuess(1));

        round.submit(word("TRACE")).unwrap();
        assert_eq!(round.state(), RoundState::AwaitingGuess(2));
        assert!(!round.is_over());
    }

    #[test]
    fn round_lost_after_six_misses() {
        let mut round = Round::new(word("CRANE"));

        let misses = ["SLATE", "AUDIO", "POUND", "LIGHT", "MERRY", "FUZZY"];
        for (i, miss) in misses.iter().enumerate() {
            assert_eq!(round.state(), RoundState::AwaitingGuess(i));
            round.submit(word(miss)).unwrap();
        }

        assert_eq!(round.state(), RoundState::Lost);
        assert_eq!(round.board().len(), 6);
        match round.result() {
            Some(RoundResult::Lost { secret }) => assert_eq!(secret.text(), "CRANE"),
            other => panic!("expected loss, got {other:?}"),
        }
    }

    #[test]
    fn round_won_on_last_attempt() {
        let mut round = Round::new(word("CRANE"));

        for miss in ["SLATE", "AUDIO", "POUND", "LIGHT", "MERRY"] {
            round.submit(word(miss)).unwrap();
        }
        assert_eq!(round.state(), RoundState::AwaitingGuess(5));

        round.submit(word("CRANE")).unwrap();
        assert_eq!(round.state(), RoundState::Won);
        match round.result() {
            Some(RoundResult::Won { attempts, .. }) => assert_eq!(attempts, 6),
            other => panic!("expected win, got {other:?}"),
        }
    }

    #[test]
    fn round_rejects_guesses_after_win() {
        let mut round = Round::new(word("CRANE"));
        round.submit(word("CRANE")).unwrap();

        assert_eq!(round.submit(word("SLATE")), Err(RoundError::Finished));
        assert_eq!(round.board().len(), 1);
    }

    #[test]
    fn round_rejects_guesses_after_loss() {
        let mut round = Round::new(word("CRANE"));
        for miss in ["SLATE", "AUDIO", "POUND", "LIGHT", "MERRY", "FUZZY"] {
            round.submit(word(miss)).unwrap();
        }

        assert_eq!(round.submit(word("CRANE")), Err(RoundError::Finished));
        assert_eq!(round.board().len(), 6);
    }

    #[test]
    fn round_result_reveals_secret() {
        let mut round = Round::new(word("MERRY"));
        round.submit(word("MERRY")).unwrap();
        assert_eq!(round.result().unwrap().secret().text(), "MERRY");
    }
}
