//! Stateful solver session
//!
//! Owns the round state of one game: the immutable guess universe, the
//! shrinking candidate set, the guess most recently proposed, and the
//! history of feedback received. All mutation goes through
//! `record_feedback` and `discard_current_guess`; failed operations
//! leave the session untouched so the driver can re-prompt.

use super::filter::filter_candidates;
use super::selector::select_best_guess;
use crate::core::{Feedback, Word};
use std::fmt;

/// Fixed opening guess, seeded when the dictionary contains it
///
/// A plain default: skipping the full first-round scan over the whole
/// dictionary. Any dictionary without it simply pays for the scan.
pub const OPENING_GUESS: &str = "raise";

/// Errors surfaced by session operations
///
/// All are recoverable at the driver boundary; none leave the session
/// in a partially updated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Filtering would eliminate every candidate: the feedback
    /// contradicts everything seen so far (likely a typo)
    EmptyCandidates,
    /// No guess has been proposed yet, so feedback cannot be attributed
    NoActiveGuess,
    /// The candidate set is empty and no guess can be selected
    NoCandidates,
    /// The dictionary itself is empty
    EmptyDictionary,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidates => write!(
                f,
                "Feedback eliminates every candidate; it contradicts earlier feedback"
            ),
            Self::NoActiveGuess => write!(f, "No guess is active; ask for a guess first"),
            Self::NoCandidates => write!(f, "No candidates remain to choose a guess from"),
            Self::EmptyDictionary => write!(f, "The dictionary is empty"),
        }
    }
}

impl std::error::Error for SolverError {}

/// One solving session
pub struct Solver {
    dictionary: Vec<Word>,
    candidates: Vec<Word>,
    current_guess: Option<Word>,
    history: Vec<(Word, Feedback)>,
}

impl Solver {
    /// Create a session over `dictionary`
    ///
    /// The candidate set starts equal to the dictionary. If the
    /// dictionary contains [`OPENING_GUESS`], it is pre-seeded as the
    /// current guess so the first round skips the full scan.
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        let current_guess = dictionary.iter().find(|w| w.text() == OPENING_GUESS).cloned();
        let candidates = dictionary.clone();

        Self {
            dictionary,
            candidates,
            current_guess,
            history: Vec::new(),
        }
    }

    /// The full guess universe
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    /// The words still consistent with all feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// The guess most recently proposed, if any
    #[must_use]
    pub fn current_guess(&self) -> Option<&Word> {
        self.current_guess.as_ref()
    }

    /// Guesses made so far with the feedback each received, in order
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Propose the next guess
    ///
    /// Uses the pre-seeded opening before any feedback has been
    /// recorded, shortcuts when a single candidate remains, and
    /// otherwise runs the expectation-minimizing scan over the whole
    /// dictionary. The choice becomes the current guess.
    ///
    /// # Errors
    /// `SolverError::EmptyDictionary` if the dictionary is empty,
    /// `SolverError::NoCandidates` if no candidate remains.
    pub fn next_guess(&mut self) -> Result<&Word, SolverError> {
        if self.dictionary.is_empty() {
            return Err(SolverError::EmptyDictionary);
        }
        if self.candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        // The seeded opening stands until feedback arrives, unless it
        // was discarded in the meantime
        let reuse_opening = self.history.is_empty()
            && self
                .current_guess
                .as_ref()
                .is_some_and(|opening| self.candidates.contains(opening));

        if !reuse_opening {
            let choice = if self.candidates.len() == 1 {
                self.candidates[0].clone()
            } else {
                select_best_guess(&self.dictionary, &self.candidates)
                    .ok_or(SolverError::NoCandidates)?
                    .clone()
            };
            self.current_guess = Some(choice);
        }

        self.current_guess.as_ref().ok_or(SolverError::NoCandidates)
    }

    /// Record the real game's feedback for the current guess
    ///
    /// Appends to history and shrinks the candidate set. The filtered
    /// set is computed before any state changes: on error the session
    /// is exactly as it was.
    ///
    /// # Errors
    /// `SolverError::NoActiveGuess` if no guess is active,
    /// `SolverError::EmptyCandidates` if the feedback would eliminate
    /// every candidate.
    pub fn record_feedback(&mut self, feedback: Feedback) -> Result<(), SolverError> {
        let guess = self
            .current_guess
            .clone()
            .ok_or(SolverError::NoActiveGuess)?;

        let filtered = filter_candidates(&feedback, &guess, &self.candidates);
        if filtered.is_empty() {
            return Err(SolverError::EmptyCandidates);
        }

        self.history.push((guess, feedback));
        self.candidates = filtered;
        Ok(())
    }

    /// Drop the current guess from the candidate set
    ///
    /// Used when the game rejects the guessed word as not in its
    /// dictionary, which is distinct from color feedback. Returns
    /// whether the word was present (and therefore removed).
    pub fn discard_current_guess(&mut self) -> bool {
        let Some(guess) = &self.current_guess else {
            return false;
        };

        let before = self.candidates.len();
        self.candidates.retain(|w| w != guess);
        self.candidates.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    fn feedback(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    #[test]
    fn new_session_candidates_equal_dictionary() {
        let solver = Solver::new(words(&["raise", "slate", "grate"]));
        assert_eq!(solver.candidates(), solver.dictionary());
        assert!(solver.history().is_empty());
    }

    #[test]
    fn opening_guess_seeded_when_present() {
        let solver = Solver::new(words(&["slate", "raise", "grate"]));
        assert_eq!(solver.current_guess().unwrap().text(), "raise");
    }

    #[test]
    fn opening_guess_absent_means_none() {
        let solver = Solver::new(words(&["slate", "grate"]));
        assert!(solver.current_guess().is_none());
    }

    #[test]
    fn first_next_guess_returns_opening() {
        let mut solver = Solver::new(words(&["slate", "raise", "grate"]));
        let guess = solver.next_guess().unwrap();
        assert_eq!(guess.text(), "raise");
    }

    #[test]
    fn next_guess_without_opening_runs_selection() {
        let mut solver = Solver::new(words(&["slate", "grate", "plate"]));
        let guess = solver.next_guess().unwrap().clone();
        assert!(solver.dictionary().contains(&guess));
        assert_eq!(solver.current_guess(), Some(&guess));
    }

    #[test]
    fn next_guess_on_empty_dictionary_errors() {
        let mut solver = Solver::new(Vec::new());
        assert_eq!(solver.next_guess(), Err(SolverError::EmptyDictionary));
    }

    #[test]
    fn record_feedback_requires_active_guess() {
        let mut solver = Solver::new(words(&["slate", "grate"]));
        assert_eq!(
            solver.record_feedback(feedback("xxxxx")),
            Err(SolverError::NoActiveGuess)
        );
    }

    #[test]
    fn record_feedback_shrinks_candidates_and_appends_history() {
        let mut solver = Solver::new(words(&["raise", "slate", "mount"]));
        solver.next_guess().unwrap();

        // All gray for RAISE: only MOUNT has none of r/a/i/s/e
        solver.record_feedback(feedback("xxxxx")).unwrap();

        assert_eq!(solver.candidates(), words(&["mount"]).as_slice());
        assert_eq!(solver.history().len(), 1);
        assert_eq!(solver.history()[0].0.text(), "raise");
    }

    #[test]
    fn contradictory_feedback_leaves_state_unchanged() {
        let mut solver = Solver::new(words(&["raise", "slate", "mount"]));
        solver.next_guess().unwrap();

        // Claim all greens for RAISE, then all grays: the second round
        // contradicts every word
        solver.record_feedback(feedback("ggggg")).unwrap();
        assert_eq!(solver.candidates(), words(&["raise"]).as_slice());

        let before_candidates = solver.candidates().to_vec();
        let before_history = solver.history().len();

        let result = solver.record_feedback(feedback("xxxxx"));
        assert_eq!(result, Err(SolverError::EmptyCandidates));
        assert_eq!(solver.candidates(), before_candidates.as_slice());
        assert_eq!(solver.history().len(), before_history);
        assert_eq!(solver.current_guess().unwrap().text(), "raise");
    }

    #[test]
    fn discard_removes_present_guess() {
        let mut solver = Solver::new(words(&["raise", "slate", "mount"]));
        solver.next_guess().unwrap();

        let before = solver.candidates().len();
        assert!(solver.discard_current_guess());
        assert_eq!(solver.candidates().len(), before - 1);
        assert!(!solver.candidates().iter().any(|w| w.text() == "raise"));
    }

    #[test]
    fn discard_absent_guess_is_noop() {
        let mut solver = Solver::new(words(&["raise", "slate", "mount"]));
        solver.next_guess().unwrap();

        assert!(solver.discard_current_guess());
        let before = solver.candidates().len();

        // Second discard of the same word removes nothing
        assert!(!solver.discard_current_guess());
        assert_eq!(solver.candidates().len(), before);
    }

    #[test]
    fn discard_without_guess_is_noop() {
        let mut solver = Solver::new(words(&["slate", "mount"]));
        assert!(!solver.discard_current_guess());
        assert_eq!(solver.candidates().len(), 2);
    }

    #[test]
    fn single_candidate_shortcut() {
        let mut solver = Solver::new(words(&["raise", "slate", "mount"]));
        solver.next_guess().unwrap();
        solver.record_feedback(feedback("xxxxx")).unwrap();

        let guess = solver.next_guess().unwrap();
        assert_eq!(guess.text(), "mount");
    }

    #[test]
    fn full_round_trip_finds_solution() {
        let dictionary = words(&["raise", "slate", "grate", "plate", "irate", "mount"]);
        let solution = Word::new("plate").unwrap();
        let mut solver = Solver::new(dictionary);

        for _round in 0..6 {
            let guess = solver.next_guess().unwrap().clone();
            let result = Feedback::simulate(&guess, &solution);
            if result.is_win() {
                return;
            }
            solver.record_feedback(result).unwrap();
        }

        panic!("solution not found within six rounds");
    }

    #[test]
    fn candidates_never_grow() {
        let dictionary = words(&["raise", "slate", "grate", "plate", "irate", "mount"]);
        let solution = Word::new("grate").unwrap();
        let mut solver = Solver::new(dictionary);

        let mut previous = solver.candidates().len();
        for _round in 0..6 {
            let guess = solver.next_guess().unwrap().clone();
            let result = Feedback::simulate(&guess, &solution);
            if result.is_win() {
                break;
            }
            solver.record_feedback(result).unwrap();
            assert!(solver.candidates().len() <= previous);
            previous = solver.candidates().len();
        }
    }
}
