//! Terminal output formatting
//!
//! Colored rendering of guesses under their feedback, and result
//! printing for the solve command.

use crate::commands::SolveResult;
use crate::core::{Feedback, Tile, Word};
use colored::Colorize;

/// Render a guess with each letter colored by its feedback tile
///
/// Green and yellow tiles use their colors; gray tiles are dimmed.
#[must_use]
pub fn colorize_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(feedback.tiles())
        .map(|(letter, tile)| match tile {
            Tile::Green => letter.to_string().bright_green().bold().to_string(),
            Tile::Yellow => letter.to_string().bright_yellow().bold().to_string(),
            Tile::Gray => letter.to_string().dimmed().to_string(),
        })
        .collect()
}

/// Print the guesses of a game with their feedback, one line per round
pub fn print_history(history: &[(Word, Feedback)]) {
    for (i, (guess, feedback)) in history.iter().enumerate() {
        println!(
            "  {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colorize_guess(guess, feedback),
            feedback.to_string().bright_black()
        );
    }
}

/// Print the outcome of a self-play solve
pub fn print_solve_result(result: &SolveResult) {
    println!(
        "\nTarget: {}",
        result.target.text().to_uppercase().bright_white().bold()
    );
    print_history(&result.rounds);

    if result.solved {
        let n = result.rounds.len();
        println!(
            "\n{} in {} {}",
            "Solved".bright_green().bold(),
            n.to_string().bright_cyan(),
            if n == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("\n{}", "Not solved within the round limit".bright_red());
    }
}
