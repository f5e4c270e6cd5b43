//! Wordle solver - CLI
//!
//! Interactive expected-remaining-count solver with a self-play mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_expectation::{
    commands::{run_play, solve_word},
    core::Word,
    output::print_solve_result,
    solver::Solver,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_expectation",
    about = "Wordle solver that minimizes the expected number of remaining candidates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or a path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): suggests guesses, you type the feedback
    Play,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,
    },
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(mode: &str) -> Result<Vec<Word>> {
    match mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_wordlist(&cli.wordlist)?;
    anyhow::ensure!(!dictionary.is_empty(), "wordlist contains no valid words");

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut solver = Solver::new(dictionary);
            run_play(&mut solver)
        }
        Commands::Solve { word } => {
            let result = solve_word(&word, &dictionary)?;
            print_solve_result(&result);
            Ok(())
        }
    }
}
