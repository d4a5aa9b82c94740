//! Terminal Wordle
//!
//! A word-guessing game: a hidden five-letter word is drawn at random and the
//! player has six guesses. After each guess every letter is marked Correct,
//! Present, or Absent and the board is redrawn as a colored glyph grid.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Round, RoundState};
//!
//! let secret = Word::new("crane").unwrap();
//! let mut round = Round::new(secret);
//!
//! round.submit(Word::new("slate").unwrap()).unwrap();
//! assert_eq!(round.state(), RoundState::AwaitingGuess(1));
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
