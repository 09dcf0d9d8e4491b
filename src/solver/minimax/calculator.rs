//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes how the candidates split by
//! the feedback the guess would receive, and the size of the largest part.

use crate::core::{CodeWord, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of candidates left after this guess: the
/// size of the largest group of candidates sharing the same feedback.
///
/// # Examples
/// ```
/// use mastermind_solver::core::CodeWord;
/// use mastermind_solver::solver::minimax::worst_case_remaining;
///
/// let guess = CodeWord::from([1, 1, 2, 2]);
/// let candidates = vec![
///     CodeWord::from([1, 1, 2, 2]),
///     CodeWord::from([3, 3, 4, 4]),
///     CodeWord::from([5, 5, 6, 6]),
/// ];
///
/// // 1122 scores 4,0; the other two both score 0,0
/// assert_eq!(worst_case_remaining(&guess, &candidates), 2);
/// ```
#[must_use]
pub fn worst_case_remaining(guess: &CodeWord, candidates: &[CodeWord]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    // Dense counts indexed by feedback; this is the solver's hot loop
    let length = guess.len();
    let mut counts = vec![0usize; Feedback::slots(length)];
    for candidate in candidates {
        counts[Feedback::score(guess, candidate).index(length)] += 1;
    }

    counts.into_iter().max().unwrap_or(0)
}

/// Number of candidates a guess is guaranteed to eliminate
///
/// `|S| - worst_case_remaining`: the minimax score that is maximised.
#[must_use]
pub fn guaranteed_eliminations(guess: &CodeWord, candidates: &[CodeWord]) -> usize {
    candidates.len() - worst_case_remaining(guess, candidates)
}

/// Group candidates by the feedback they produce with the guess
#[must_use]
pub fn group_by_feedback(guess: &CodeWord, candidates: &[CodeWord]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::score(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
