//! Word list loading and secret selection

pub mod loader;

pub use loader::{draw_secret, load_from_file, parse_words};
