//! Candidate filtering against observed feedback
//!
//! Given the feedback a guess received, keeps only the candidate words
//! that could have produced it. Constraints are checked in a fixed
//! order (greens, then yellows, then grays) against a mutable letter
//! multiset of the candidate, so duplicate letters are accounted
//! exactly: an occurrence consumed by a green cannot also satisfy a
//! yellow, and a consumed occurrence no longer triggers a gray
//! rejection.

use crate::core::{Feedback, Tile, WORD_LEN, Word};

/// Check whether `candidate` is consistent with `feedback` having been
/// produced for `guess`
///
/// # Examples
/// ```
/// use wordle_expectation::core::{Feedback, Word};
/// use wordle_expectation::solver::filter::is_consistent;
///
/// let guess = Word::new("zzzzz").unwrap();
/// let feedback: Feedback = "xxxxx".parse().unwrap();
/// assert!(is_consistent(&feedback, &guess, &Word::new("hello").unwrap()));
/// assert!(!is_consistent(&feedback, &guess, &Word::new("zebra").unwrap()));
/// ```
#[must_use]
pub fn is_consistent(feedback: &Feedback, guess: &Word, candidate: &Word) -> bool {
    let tiles = feedback.tiles();
    let mut available = candidate.letter_counts();

    // Greens first: the candidate must match the guess exactly at every
    // green position, and that occurrence is spent
    for i in 0..WORD_LEN {
        if tiles[i] == Tile::Green {
            if candidate.letter_at(i) != guess.letter_at(i) {
                return false;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Yellows next: the candidate must still hold an unspent occurrence
    // of the guessed letter somewhere
    for i in 0..WORD_LEN {
        if tiles[i] == Tile::Yellow {
            let letter = guess.letter_at(i);
            match available.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
    }

    // Grays last: no unspent occurrence of the guessed letter may remain
    for i in 0..WORD_LEN {
        if tiles[i] == Tile::Gray {
            let letter = guess.letter_at(i);
            if available.get(&letter).is_some_and(|&count| count > 0) {
                return false;
            }
        }
    }

    true
}

/// Return the subsequence of `candidates` consistent with `feedback`
/// for `guess`
///
/// The input is not mutated; words keep their relative order, so
/// downstream tie-breaking stays deterministic.
#[must_use]
pub fn filter_candidates(feedback: &Feedback, guess: &Word, candidates: &[Word]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| is_consistent(feedback, guess, candidate))
        .cloned()
        .collect()
}
