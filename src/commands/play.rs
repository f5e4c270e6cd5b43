//! Interactive driver
//!
//! Line-based prompt loop around a solver session: print the suggested
//! guess, read the real game's feedback, repeat. Feedback is a
//! 5-character string over `x`/`y`/`g`; a lone `x` means the game
//! rejected the guess as not a word. Malformed or contradictory input
//! is reported and re-prompted, never fatal.

use crate::core::Feedback;
use crate::output::{colorize_guess, print_history};
use crate::solver::{Solver, SolverError};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive loop until the game is solved or the user quits
///
/// # Errors
///
/// Returns an error on I/O failure reading input, or if the solver is
/// left without any possible guess.
pub fn run_play(solver: &mut Solver) -> Result<()> {
    println!("\n{}", "Wordle solver - interactive mode".bold());
    println!("After each suggested guess, enter the feedback the game showed:");
    println!("  g = green (correct position)");
    println!("  y = yellow (in the word, wrong position)");
    println!("  x = gray (not in the word)");
    println!("Example: xygxg. Enter a single 'x' if the game rejected the word.");
    println!("Type 'quit' to exit.\n");

    loop {
        let guess = solver.next_guess()?.clone();

        println!(
            "{} possible words remaining.",
            solver.candidates().len().to_string().bright_cyan()
        );
        if solver.candidates().len() <= 10 {
            for candidate in solver.candidates() {
                println!("  {}", candidate.text().to_uppercase().bright_black());
            }
        }
        println!(
            "Guess: {}",
            guess.text().to_uppercase().bright_white().bold()
        );

        let input = read_line("Feedback (e.g. xygxg)")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("Bye.");
                return Ok(());
            }
            // The game rejected the guess as not a word
            "x" => {
                solver.discard_current_guess();
                println!(
                    "Dropped {} from the candidates.\n",
                    guess.text().to_uppercase()
                );
            }
            _ => match input.parse::<Feedback>() {
                Ok(feedback) if feedback.is_win() => {
                    solver.record_feedback(feedback).ok();
                    println!(
                        "\n{} {}",
                        "Solved:".bright_green().bold(),
                        colorize_guess(&guess, &feedback)
                    );
                    print_history(solver.history());
                    println!();
                    return Ok(());
                }
                Ok(feedback) => match solver.record_feedback(feedback) {
                    Ok(()) => println!("  {}\n", colorize_guess(&guess, &feedback)),
                    Err(SolverError::EmptyCandidates) => {
                        println!(
                            "{} That feedback eliminates every word; check for a typo.\n",
                            "!".bright_red().bold()
                        );
                    }
                    Err(other) => return Err(other.into()),
                },
                Err(parse_error) => {
                    println!("{} {parse_error}\n", "!".bright_red().bold());
                }
            },
        }
    }
}

/// Prompt for one line of input
fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
