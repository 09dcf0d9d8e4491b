//! Knuth's minimax guesser

use super::selector::{select_best_guess, select_best_guess_cancellable};
use crate::core::{CodeWord, Feedback, GameConfig};
use crate::error::SolverError;
use crate::solver::strategy::{GuessStrategy, Round, RoundState, Turn, opening_guess};
use crate::solver::{CandidateSet, CodeSpace};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Minimax strategy
///
/// Opens with the fixed opening guess. After each feedback the candidate set
/// is narrowed; if one code is left it is returned, otherwise every code in
/// the space is scored and the one guaranteed to eliminate the most
/// candidates is chosen.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{CodeWord, Feedback, GameConfig};
/// use mastermind_solver::solver::{GuessStrategy, MinimaxStrategy, RoundState};
///
/// let secret = CodeWord::from([3, 6, 3, 2]);
/// let mut strategy = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();
///
/// let mut guess = strategy.next_guess(None).unwrap();
/// let mut guesses = 1;
/// while guess != secret {
///     guess = strategy.next_guess(Some(Feedback::score(&guess, &secret))).unwrap();
///     guesses += 1;
/// }
/// assert!(guesses <= 5);
/// ```
#[derive(Debug, Clone)]
pub struct MinimaxStrategy {
    space: CodeSpace,
    candidates: CandidateSet,
    round: Round,
    cancel: Option<Arc<AtomicBool>>,
}

impl MinimaxStrategy {
    /// Create a strategy for `config`, enumerating its code space
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the space is too large to enumerate.
    pub fn new(config: GameConfig) -> Result<Self, SolverError> {
        Ok(Self::with_space(CodeSpace::enumerate(config)?))
    }

    /// Create a strategy from an already enumerated space
    #[must_use]
    pub fn with_space(space: CodeSpace) -> Self {
        Self {
            candidates: CandidateSet::new(&space),
            round: Round::new(*space.config()),
            space,
            cancel: None,
        }
    }

    /// Let another thread abandon an in-progress selection
    ///
    /// While the flag is set, a selection stops early with
    /// `SolverError::Cancelled` and the strategy becomes `Interrupted`.
    /// Clear the flag and call `next_guess(None)` to resume.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Codes still consistent with the feedback
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Every legal code, which is also the guess pool
    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }

    fn select(&mut self) -> Result<CodeWord, SolverError> {
        let pool = self.space.codes();
        let best = match &self.cancel {
            Some(flag) => select_best_guess_cancellable(pool, &self.candidates, flag)
                .inspect_err(|_| self.round.interrupted())?,
            None => select_best_guess(pool, &self.candidates),
        };

        // The pool is a `CodeSpace`, which is never empty
        let Some(best) = best else {
            unreachable!("empty guess pool")
        };

        log::trace!(
            "selected {} (worst case {}, candidate: {})",
            best.guess,
            best.worst_case,
            best.is_candidate
        );
        let guess = best.guess.clone();
        self.round.guessed(&guess);
        Ok(guess)
    }
}

impl GuessStrategy for MinimaxStrategy {
    fn next_guess(&mut self, previous: Option<Feedback>) -> Result<CodeWord, SolverError> {
        match self.round.begin(previous)? {
            Turn::Opening => {
                let guess = opening_guess(self.space.config());
                self.round.guessed(&guess);
                Ok(guess)
            }
            Turn::Feedback { guess, feedback } => {
                let remaining = self.candidates.filter(&guess, feedback).inspect_err(|_| {
                    self.round.failed();
                })?;
                log::debug!("{guess} scored {feedback}: {remaining} candidates remain");

                if let Some(only) = self.candidates.only_member() {
                    let only = only.clone();
                    self.round.solved();
                    return Ok(only);
                }
                self.select()
            }
            Turn::Resume => self.select(),
        }
    }

    fn state(&self) -> RoundState {
        self.round.state()
    }

    fn config(&self) -> &GameConfig {
        self.space.config()
    }

    fn candidates_remaining(&self) -> Option<usize> {
        Some(self.candidates.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use rustc_hash::FxHashMap;
    use std::sync::atomic::Ordering;

    /// Walk the whole decision tree once, recording how many guesses each
    /// secret takes. Secrets that share a feedback history share a strategy.
    fn guess_counts(
        strategy: &MinimaxStrategy,
        guess: &CodeWord,
        secrets: Vec<CodeWord>,
        depth: usize,
        counts: &mut FxHashMap<CodeWord, usize>,
    ) {
        let length = strategy.config().length();
        let mut groups: FxHashMap<Feedback, Vec<CodeWord>> = FxHashMap::default();
        for secret in secrets {
            groups
                .entry(Feedback::score(guess, &secret))
                .or_default()
                .push(secret);
        }

        for (feedback, group) in groups {
            if feedback.is_perfect(length) {
                counts.insert(guess.clone(), depth);
                continue;
            }
            let mut branch = strategy.clone();
            let next = branch.next_guess(Some(feedback)).unwrap();
            assert!(depth < 20, "no progress");
            guess_counts(&branch, &next, group, depth + 1, counts);
        }
    }

    fn solve_all(config: GameConfig) -> FxHashMap<CodeWord, usize> {
        let mut strategy = MinimaxStrategy::new(config).unwrap();
        let opening = strategy.next_guess(None).unwrap();
        let secrets = strategy.space().codes().to_vec();

        let mut counts = FxHashMap::default();
        guess_counts(&strategy, &opening, secrets, 1, &mut counts);
        counts
    }

    #[test]
    fn classic_solves_every_secret_within_five() {
        let counts = solve_all(GameConfig::CLASSIC);

        assert_eq!(counts.len(), 1296);
        assert!(counts.values().all(|&n| n <= 5));
    }

    #[test]
    fn solves_every_secret_without_repeats() {
        let config = GameConfig::new(4, 6, false).unwrap();
        let counts = solve_all(config);
        assert_eq!(counts.len(), 360);
    }

    #[test]
    fn solves_small_spaces() {
        let configs = [(1, 1, true), (1, 5, true), (2, 3, true), (3, 3, false)];
        for (length, colours, repeats) in configs {
            let config = GameConfig::new(length, colours, repeats).unwrap();
            let space = CodeSpace::enumerate(config).unwrap();
            assert_eq!(solve_all(config).len(), space.len());
        }
    }

    #[test]
    fn opening_guess_is_fixed() {
        let mut strategy = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();
        assert_eq!(strategy.next_guess(None).unwrap().pegs(), &[1, 1, 2, 2]);
        assert_eq!(strategy.state(), RoundState::Awaiting);
    }

    #[test]
    fn guesses_are_deterministic() {
        let secret = CodeWord::from([5, 1, 4, 4]);
        let play = || {
            let mut strategy = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();
            let mut guesses = vec![strategy.next_guess(None).unwrap()];
            while strategy.state() == RoundState::Awaiting {
                let last = guesses.last().unwrap();
                let feedback = Feedback::score(last, &secret);
                if feedback.is_perfect(4) {
                    break;
                }
                guesses.push(strategy.next_guess(Some(feedback)).unwrap());
            }
            guesses
        };

        assert_eq!(play(), play());
    }

    #[test]
    fn last_candidate_is_returned_without_search() {
        let mut strategy = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();
        let opening = strategy.next_guess(None).unwrap();

        let answer = strategy.next_guess(Some(Feedback::perfect(4))).unwrap();
        assert_eq!(answer, opening);
        assert_eq!(strategy.state(), RoundState::Solved);
        assert_eq!(strategy.candidates_remaining(), Some(1));
    }

    #[test]
    fn contradiction_fails_the_round() {
        let config = GameConfig::new(3, 4, true).unwrap();
        let mut strategy = MinimaxStrategy::new(config).unwrap();
        strategy.next_guess(None).unwrap();
        let before = strategy.candidates().clone();

        // Two exact and one colour-only is impossible on three pegs
        let result = strategy.next_guess(Some(Feedback::new(2, 1)));

        assert!(matches!(
            result,
            Err(SolverError::InconsistentFeedback { .. })
        ));
        assert_eq!(strategy.state(), RoundState::Failed);
        assert_eq!(strategy.candidates(), &before);
        assert_eq!(
            strategy.next_guess(None),
            Err(SolverError::ProtocolViolation(ProtocolError::RoundOver(
                RoundState::Failed
            )))
        );
    }

    #[test]
    fn out_of_range_feedback_is_a_protocol_violation() {
        let mut strategy = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();
        strategy.next_guess(None).unwrap();

        assert!(matches!(
            strategy.next_guess(Some(Feedback::new(4, 1))),
            Err(SolverError::ProtocolViolation(
                ProtocolError::FeedbackOutOfRange { .. }
            ))
        ));
        // The call was rejected before any state changed
        assert_eq!(strategy.state(), RoundState::Awaiting);
        assert_eq!(strategy.candidates_remaining(), Some(1296));
    }

    #[test]
    fn guesses_never_repeat() {
        let secret = CodeWord::from([6, 6, 5, 1]);
        let mut strategy = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();
        let mut seen = vec![strategy.next_guess(None).unwrap()];

        loop {
            let feedback = Feedback::score(seen.last().unwrap(), &secret);
            if feedback.is_perfect(4) {
                break;
            }
            let next = strategy.next_guess(Some(feedback)).unwrap();
            assert!(!seen.contains(&next));
            seen.push(next);
        }
    }

    #[test]
    fn cancelled_selection_can_resume() {
        let flag = Arc::new(AtomicBool::new(false));
        let strategy = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();
        let mut strategy = strategy.with_cancel_flag(Arc::clone(&flag));
        let mut reference = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();

        let opening = strategy.next_guess(None).unwrap();
        reference.next_guess(None).unwrap();
        let feedback = Feedback::new(1, 1);

        flag.store(true, Ordering::Relaxed);
        let cancelled = strategy.next_guess(Some(feedback));
        assert_eq!(cancelled, Err(SolverError::Cancelled));
        assert_eq!(strategy.state(), RoundState::Interrupted);
        // The feedback was kept
        assert!(strategy.candidates_remaining().unwrap() < 1296);

        // Feedback is not accepted twice
        let again = strategy.next_guess(Some(feedback));
        let refused = ProtocolError::FeedbackWhileInterrupted;
        assert_eq!(again, Err(SolverError::ProtocolViolation(refused)));

        flag.store(false, Ordering::Relaxed);
        let resumed = strategy.next_guess(None).unwrap();
        assert_eq!(resumed, reference.next_guess(Some(feedback)).unwrap());
        assert_ne!(resumed, opening);
        assert_eq!(strategy.state(), RoundState::Awaiting);
    }

    #[test]
    fn unset_flag_changes_nothing() {
        let flag = Arc::new(AtomicBool::new(false));
        let with_flag = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();
        let mut with_flag = with_flag.with_cancel_flag(flag);
        let mut without = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();

        with_flag.next_guess(None).unwrap();
        without.next_guess(None).unwrap();
        let feedback = Feedback::new(0, 2);
        assert_eq!(
            with_flag.next_guess(Some(feedback)),
            without.next_guess(Some(feedback))
        );
    }
}
