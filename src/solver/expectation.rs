//! Expected remaining-candidate count for a guess
//!
//! The quality measure: averaged over every currently possible solution
//! (uniform prior), how many candidates would survive this guess?
//! Smaller is better.

use super::filter::is_consistent;
use crate::core::{Feedback, Word};

/// Compute the expected number of candidates surviving `guess`
///
/// For every assumed solution `s` among the candidates, simulates the
/// feedback `guess` would receive, counts the candidates consistent
/// with it, and averages uniformly. Quadratic in the candidate count;
/// acceptable because the candidate set shrinks rapidly after the
/// first round.
///
/// Returns 0.0 for an empty candidate set.
///
/// # Examples
/// ```
/// use wordle_expectation::core::Word;
/// use wordle_expectation::solver::expectation::expected_remaining;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let expected = expected_remaining(&guess, &candidates);
/// // SLATE splits the pair perfectly: one candidate survives either way
/// assert!((expected - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_remaining(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let total = candidates.len() as f64;

    candidates
        .iter()
        .map(|assumed_solution| {
            let feedback = Feedback::simulate(guess, assumed_solution);
            let surviving = candidates
                .iter()
                .filter(|candidate| is_consistent(&feedback, guess, candidate))
                .count();
            surviving as f64 / total
        })
        .sum()
}
