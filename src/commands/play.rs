//! Interactive game loop
//!
//! Blocking, single-threaded round: redraw the board, prompt for a guess,
//! re-prompt on invalid input without spending an attempt, and reveal the
//! secret once the round ends.

use crate::core::Word;
use crate::game::Round;
use crate::output::{print_invalid_guess_warning, print_reveal, render_board};
use crate::wordlists::draw_secret;
use std::io::{self, Write};

/// Run one round against a randomly drawn secret
///
/// # Errors
///
/// Returns an error if the word list is empty or if reading input or
/// redrawing the board fails.
pub fn run_play(words: &[Word]) -> Result<(), String> {
    let mut rng = rand::rng();
    let secret = draw_secret(words, &mut rng)
        .ok_or("Word list is empty")?
        .clone();

    let mut round = Round::new(secret);

    while !round.is_over() {
        render_board(round.board()).map_err(|e| e.to_string())?;

        let guess = read_guess()?;
        round.submit(guess).map_err(|e| e.to_string())?;
    }

    // Final redraw, then disclose the secret
    render_board(round.board()).map_err(|e| e.to_string())?;
    let result = round
        .result()
        .ok_or("Round ended without a terminal state")?;
    print_reveal(result.secret());

    Ok(())
}

/// Prompt until the player supplies a valid five-letter guess
///
/// The retry loop is unbounded and does not count against the attempt budget.
fn read_guess() -> Result<Word, String> {
    loop {
        let raw = get_user_input("Enter your guess")?;
        match Word::new(raw) {
            Ok(guess) => return Ok(guess),
            Err(_) => print_invalid_guess_warning(),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
