//! Guess selection by expectation minimization
//!
//! Scores every word in the guess universe and picks the one with the
//! lowest expected remaining-candidate count. The scan over the pool is
//! parallelized with rayon; each guess's score is accumulated
//! sequentially over assumed solutions, so results are deterministic.

use super::expectation::expected_remaining;
use crate::core::Word;
use rayon::prelude::*;

/// Select the guess minimizing the expected remaining-candidate count
///
/// Returns `None` if the guess pool or candidate set is empty.
///
/// Tie-breaking: if several guesses share the minimum score, prefer the
/// ones that are themselves still candidates (a guess that could win
/// outright); if that preference leaves zero or several, the first in
/// guess-pool order wins. The whole procedure is deterministic for
/// fixed inputs.
///
/// # Examples
/// ```
/// use wordle_expectation::core::Word;
/// use wordle_expectation::solver::selector::select_best_guess;
///
/// let pool = vec![
///     Word::new("zzzzz").unwrap(),
///     Word::new("slate").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("mound").unwrap(),
/// ];
/// let best = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.text(), "slate");
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Word], candidates: &[Word]) -> Option<&'a Word> {
    if guess_pool.is_empty() || candidates.is_empty() {
        return None;
    }

    let scores: Vec<f64> = guess_pool
        .par_iter()
        .map(|guess| expected_remaining(guess, candidates))
        .collect();

    let best_score = scores.iter().copied().fold(f64::INFINITY, f64::min);

    // Exact equality is intentional: tied guesses produce the identical
    // sum of the identical terms
    let mut tied: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|&(_, &score)| score == best_score)
        .map(|(i, _)| i)
        .collect();

    if tied.len() > 1 {
        let possible_answers: Vec<usize> = tied
            .iter()
            .copied()
            .filter(|&i| candidates.contains(&guess_pool[i]))
            .collect();
        if !possible_answers.is_empty() {
            tied = possible_answers;
        }
    }

    tied.first().map(|&i| &guess_pool[i])
}
