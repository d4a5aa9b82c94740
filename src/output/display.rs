//! Full-board terminal rendering
//!
//! Clears the screen and redraws the six-row grid, plus the fixed prompt,
//! warning, and termination messages.

use super::formatters::{format_empty_row, format_guess_row};
use crate::core::Word;
use crate::game::{Board, MAX_GUESSES};
use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Clear the terminal, including scrollback, and home the cursor
///
/// # Errors
/// Returns an I/O error if the terminal commands cannot be written.
pub fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        Clear(ClearType::All),
        Clear(ClearType::Purge),
        MoveTo(0, 0)
    )
}

/// Clear the screen and redraw the full board
///
/// Always prints six rows: filled slots as colored glyph rows, open slots as
/// neutral placeholders.
///
/// # Errors
/// Returns an I/O error if the terminal cannot be cleared or written to.
pub fn render_board(board: &Board) -> io::Result<()> {
    clear_screen()?;

    let mut stdout = io::stdout();
    for slot in 0..MAX_GUESSES {
        let row = board
            .slot(slot)
            .map_or_else(format_empty_row, format_guess_row);
        writeln!(stdout, "{row}")?;
    }
    stdout.flush()
}

/// Print the fixed warning shown for a rejected guess
pub fn print_invalid_guess_warning() {
    println!(
        "{}",
        "Your guess must only contain letters and be exactly five letters long".red()
    );
}

/// Print the termination message revealing the secret
pub fn print_reveal(secret: &Word) {
    println!("The word was: {secret}");
}
