//! Solving machinery
//!
//! Candidate filtering, expectation scoring, guess selection, and the
//! stateful session that ties them together.

mod engine;
pub mod expectation;
pub mod filter;
pub mod selector;

pub use engine::{OPENING_GUESS, Solver, SolverError};
