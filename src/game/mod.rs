//! Round orchestration: the board and the guess state machine

mod board;
mod round;

pub use board::{Board, BoardFull, MAX_GUESSES, ScoredGuess};
pub use round::{Round, RoundError, RoundResult, RoundState};
