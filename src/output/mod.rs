//! Terminal output formatting
//!
//! Glyph lookup, row coloring, and full-board redraw.

pub mod display;
pub mod formatters;

pub use display::{clear_screen, print_invalid_guess_warning, print_reveal, render_board};
