//! Wordle solver minimizing the expected remaining-candidate count
//!
//! Given a dictionary and per-letter color feedback, the solver narrows
//! the candidate set each round and proposes the guess whose expected
//! number of surviving candidates (uniform prior over the remaining
//! words) is smallest.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use wordle_expectation::core::{Feedback, Word};
//! use wordle_expectation::solver::Solver;
//!
//! let dictionary = vec![
//!     Word::new("raise").unwrap(),
//!     Word::new("slate").unwrap(),
//!     Word::new("mount").unwrap(),
//! ];
//!
//! let mut solver = Solver::new(dictionary);
//! let guess = solver.next_guess().unwrap().clone();
//! let feedback: Feedback = "xxxxx".parse().unwrap();
//! solver.record_feedback(feedback).unwrap();
//! ```

// Core domain types
pub mod core;

// Solving machinery
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
