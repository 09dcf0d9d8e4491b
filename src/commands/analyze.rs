//! Guess analysis command
//!
//! Shows how a guess splits the remaining candidates by feedback, and how it
//! compares with the minimax choice.

use crate::core::{CodeWord, Feedback};
use crate::error::SolverError;
use crate::solver::minimax::{group_by_feedback, select_best_guess, worst_case_remaining};
use crate::solver::{CandidateSet, CodeSpace};
use std::cmp::Reverse;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: CodeWord,
    pub total_candidates: usize,
    /// Candidates per feedback, best feedback first
    pub partitions: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    /// Minimax score: candidates eliminated whatever the feedback
    pub eliminated: usize,
    pub is_candidate: bool,
    /// The minimax choice and its worst case
    pub best: Option<(CodeWord, usize)>,
}

/// Analyze a guess against the codes consistent with `history`
///
/// # Errors
///
/// Returns an error if:
/// - The guess or a code in the history does not fit the space's configuration
/// - The history contradicts itself
pub fn analyze_guess(
    guess: &str,
    space: &CodeSpace,
    history: &[(CodeWord, Feedback)],
) -> Result<AnalysisResult, SolverError> {
    let config = space.config();
    let guess = CodeWord::parse(guess, config)?;

    let mut candidates = CandidateSet::new(space);
    for (earlier, feedback) in history {
        earlier.check(config)?;
        candidates.filter(earlier, *feedback)?;
    }
    log::debug!("analyzing {guess} against {} candidates", candidates.len());

    let groups = group_by_feedback(&guess, candidates.members());
    let mut partitions: Vec<(Feedback, usize)> = groups.into_iter().collect();
    partitions.sort_unstable_by_key(|&(feedback, _)| Reverse(feedback));

    let worst_case = worst_case_remaining(&guess, candidates.members());
    let best = select_best_guess(space.codes(), &candidates)
        .map(|scored| (scored.guess.clone(), scored.worst_case));

    Ok(AnalysisResult {
        total_candidates: candidates.len(),
        partitions,
        worst_case,
        eliminated: candidates.len() - worst_case,
        is_candidate: candidates.contains(&guess),
        best,
        guess,
    })
}
