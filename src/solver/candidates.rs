//! Codes still consistent with the feedback history
//!
//! A `CandidateSet` starts as the whole code space and only ever shrinks.

use super::CodeSpace;
use crate::core::{CodeWord, Feedback};
use crate::error::SolverError;

/// Sorted set of codes consistent with every (guess, feedback) seen so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<CodeWord>,
}

impl CandidateSet {
    /// Start a round: every code in the space is still possible
    #[must_use]
    pub fn new(space: &CodeSpace) -> Self {
        Self {
            codes: space.codes().to_vec(),
        }
    }

    /// Build a set from arbitrary codes (sorted and deduplicated)
    #[must_use]
    pub fn from_codes(mut codes: Vec<CodeWord>) -> Self {
        codes.sort_unstable();
        codes.dedup();
        Self { codes }
    }

    /// Remove every candidate that would not have produced `feedback` for `guess`
    ///
    /// All-or-nothing: if no candidate survives, the set is left untouched and
    /// `SolverError::InconsistentFeedback` is returned. Otherwise the set is
    /// narrowed in place and its new size returned.
    ///
    /// # Errors
    /// Returns `SolverError::InconsistentFeedback` if the feedback contradicts
    /// every remaining candidate.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{CodeWord, Feedback, GameConfig};
    /// use mastermind_solver::solver::{CandidateSet, CodeSpace};
    ///
    /// let space = CodeSpace::enumerate(GameConfig::CLASSIC).unwrap();
    /// let mut candidates = CandidateSet::new(&space);
    ///
    /// let guess = CodeWord::from([1, 1, 2, 2]);
    /// let remaining = candidates.filter(&guess, Feedback::new(4, 0)).unwrap();
    /// assert_eq!(remaining, 1);
    /// assert_eq!(candidates.only_member(), Some(&guess));
    /// ```
    pub fn filter(&mut self, guess: &CodeWord, feedback: Feedback) -> Result<usize, SolverError> {
        let consistent = |code: &CodeWord| Feedback::score(guess, code) == feedback;

        if !self.codes.iter().any(consistent) {
            return Err(SolverError::InconsistentFeedback {
                guess: guess.clone(),
                feedback,
            });
        }

        self.codes.retain(consistent);
        Ok(self.codes.len())
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether no candidate remains
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The remaining candidate, if exactly one is left
    #[must_use]
    pub fn only_member(&self) -> Option<&CodeWord> {
        match self.codes.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Check if `code` is still a candidate
    #[must_use]
    pub fn contains(&self, code: &CodeWord) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    /// Remaining candidates, sorted
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[CodeWord] {
        &self.codes
    }
}
