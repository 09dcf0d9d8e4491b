//! Minimax-based guess selection
//!
//! Scores every guess in the pool by the candidates it is guaranteed to
//! eliminate and picks the best under a fixed total order.

use super::calculator::worst_case_remaining;
use crate::core::CodeWord;
use crate::error::SolverError;
use crate::solver::CandidateSet;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// A guess with its minimax evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess<'a> {
    pub guess: &'a CodeWord,
    /// Candidates eliminated whatever the feedback
    pub eliminated: usize,
    /// Candidates left in the worst case
    pub worst_case: usize,
    /// Whether the guess could itself be the secret
    pub is_candidate: bool,
}

impl<'a> ScoredGuess<'a> {
    /// Evaluate one guess against the candidates
    #[must_use]
    pub fn evaluate(guess: &'a CodeWord, candidates: &CandidateSet) -> Self {
        let worst_case = worst_case_remaining(guess, candidates.members());
        Self {
            guess,
            eliminated: candidates.len() - worst_case,
            worst_case,
            is_candidate: candidates.contains(guess),
        }
    }

    /// Preference order: `Greater` means `self` is the better guess
    ///
    /// More guaranteed eliminations first, then candidates over
    /// non-candidates, then the lexicographically smaller code. Distinct
    /// codes never compare equal, so the best guess is unique.
    #[must_use]
    pub fn preference(&self, other: &Self) -> Ordering {
        self.eliminated
            .cmp(&other.eliminated)
            .then(self.is_candidate.cmp(&other.is_candidate))
            .then_with(|| other.guess.cmp(self.guess))
    }
}

fn better<'a>(a: ScoredGuess<'a>, b: ScoredGuess<'a>) -> ScoredGuess<'a> {
    if a.preference(&b).is_ge() { a } else { b }
}

/// Guesses evaluated so far and the best among them
type Scan<'a> = (usize, Option<ScoredGuess<'a>>);

fn merge<'a>((n, a): Scan<'a>, (m, b): Scan<'a>) -> Scan<'a> {
    let best = match (a, b) {
        (Some(a), Some(b)) => Some(better(a, b)),
        (a, b) => a.or(b),
    };
    (n + m, best)
}

/// Select the guess that minimises the worst-case remaining candidates
///
/// Every code in `guess_pool` is considered, including codes already ruled
/// out as the secret. Returns `None` if the guess pool is empty.
///
/// Cost is `O(|pool| * |candidates| * length)`; fine for the classic board,
/// not for large configurations.
///
/// # Examples
/// ```
/// use mastermind_solver::core::CodeWord;
/// use mastermind_solver::solver::CandidateSet;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let pool = vec![CodeWord::from([1, 1]), CodeWord::from([1, 2])];
/// let candidates = CandidateSet::from_codes(vec![
///     CodeWord::from([1, 2]),
///     CodeWord::from([2, 1]),
/// ]);
///
/// let best = select_best_guess(&pool, &candidates).unwrap();
/// // 12 tells the two candidates apart; 11 cannot
/// assert_eq!(best.guess, &CodeWord::from([1, 2]));
/// assert_eq!(best.worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [CodeWord],
    candidates: &CandidateSet,
) -> Option<ScoredGuess<'a>> {
    guess_pool
        .par_iter()
        .map(|guess| ScoredGuess::evaluate(guess, candidates))
        .reduce_with(better)
}

/// [`select_best_guess`] that stops early once `stop` is set
///
/// The flag is polled before each guess is evaluated. A scan that reached
/// every guess is returned even if the flag was raised after it finished.
///
/// # Errors
/// Returns `SolverError::Cancelled` if `stop` cut the scan short.
pub fn select_best_guess_cancellable<'a>(
    guess_pool: &'a [CodeWord],
    candidates: &CandidateSet,
    stop: &AtomicBool,
) -> Result<Option<ScoredGuess<'a>>, SolverError> {
    let (evaluated, best) = guess_pool
        .par_iter()
        .map(|guess| {
            if stop.load(AtomicOrdering::Relaxed) {
                None
            } else {
                Some(ScoredGuess::evaluate(guess, candidates))
            }
        })
        .while_some()
        .map(|scored| (1, Some(scored)))
        .reduce(|| (0, None), merge);

    if evaluated < guess_pool.len() {
        return Err(SolverError::Cancelled);
    }
    Ok(best)
}
