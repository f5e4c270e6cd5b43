//! Self-play against a known target
//!
//! Plays the solver against its own feedback simulator, reporting the
//! rounds it takes. Mostly useful for eyeballing solver behavior on a
//! specific word.

use crate::core::{Feedback, Word};
use crate::solver::Solver;
use anyhow::{Context, Result, bail};

/// Maximum rounds before a game counts as unsolved
pub const MAX_ROUNDS: usize = 6;

/// Outcome of one self-play game
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The word that was being solved for
    pub target: Word,
    /// Guesses made, with the feedback each received
    pub rounds: Vec<(Word, Feedback)>,
    /// Whether the target was found within [`MAX_ROUNDS`]
    pub solved: bool,
}

/// Solve for `target` against the given dictionary
///
/// # Errors
/// Fails if the target is not a valid word or not in the dictionary,
/// or if the solver cannot produce a guess.
pub fn solve_word(target: &str, dictionary: &[Word]) -> Result<SolveResult> {
    let target = Word::new(target).context("invalid target word")?;

    if !dictionary.contains(&target) {
        bail!("'{target}' is not in the dictionary");
    }

    let mut solver = Solver::new(dictionary.to_vec());
    let mut rounds = Vec::new();
    let mut solved = false;

    for _ in 0..MAX_ROUNDS {
        let guess = solver.next_guess()?.clone();
        let feedback = Feedback::simulate(&guess, &target);
        rounds.push((guess, feedback));

        if feedback.is_win() {
            solved = true;
            break;
        }

        solver.record_feedback(feedback)?;
    }

    Ok(SolveResult {
        target,
        rounds,
        solved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn solves_target_in_small_dictionary() {
        let dictionary = words(&["raise", "slate", "grate", "plate", "irate", "mount"]);
        let result = solve_word("grate", &dictionary).unwrap();

        assert!(result.solved);
        assert!(!result.rounds.is_empty());
        assert!(result.rounds.len() <= MAX_ROUNDS);

        // The final round is the winning guess
        let (last_guess, last_feedback) = result.rounds.last().unwrap();
        assert_eq!(last_guess.text(), "grate");
        assert!(last_feedback.is_win());
    }

    #[test]
    fn first_round_uses_opening_when_present() {
        let dictionary = words(&["raise", "slate", "grate", "mount"]);
        let result = solve_word("mount", &dictionary).unwrap();
        assert_eq!(result.rounds[0].0.text(), "raise");
    }

    #[test]
    fn rejects_target_outside_dictionary() {
        let dictionary = words(&["raise", "slate"]);
        assert!(solve_word("mount", &dictionary).is_err());
    }

    #[test]
    fn rejects_malformed_target() {
        let dictionary = words(&["raise", "slate"]);
        assert!(solve_word("toolong", &dictionary).is_err());
        assert!(solve_word("abc", &dictionary).is_err());
    }

    #[test]
    fn solving_the_opening_takes_one_round() {
        let dictionary = words(&["raise", "slate", "mount"]);
        let result = solve_word("raise", &dictionary).unwrap();

        assert!(result.solved);
        assert_eq!(result.rounds.len(), 1);
    }
}
