//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{Word, WordError};
