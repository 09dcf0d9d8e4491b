//! Per-round solver driver

use super::strategy::{GuessStrategy, RoundState};
use crate::core::{CodeWord, Feedback};
use crate::error::{ProtocolError, SolverError};

/// One turn of a played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStep {
    pub guess: CodeWord,
    pub feedback: Feedback,
    /// Candidates left when the guess was made, if the strategy tracks them
    pub candidates: Option<usize>,
}

/// Outcome of [`SolverEngine::play_against`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub steps: Vec<RoundStep>,
    pub solved: bool,
}

impl RoundReport {
    /// Number of guesses made
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Main Mastermind solver
///
/// Owns one strategy for one round, and drives the propose → feedback loop
/// while keeping the explicit guess history.
pub struct SolverEngine<S: GuessStrategy> {
    strategy: S,
    history: Vec<(CodeWord, Feedback)>,
    outstanding: Option<CodeWord>,
    solved: bool,
}

impl<S: GuessStrategy> SolverEngine<S> {
    /// Create a solver for a fresh round
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            history: Vec::new(),
            outstanding: None,
            solved: false,
        }
    }

    /// Ask the strategy for the next guess
    ///
    /// Passes the feedback recorded for the previous guess, or nothing on the
    /// first call and when resuming an interrupted selection.
    ///
    /// # Errors
    /// - `ProtocolViolation` if the previous guess has no feedback yet or the
    ///   round is already won
    /// - whatever the strategy reports
    pub fn propose(&mut self) -> Result<CodeWord, SolverError> {
        if self.solved {
            return Err(ProtocolError::RoundOver(RoundState::Solved).into());
        }
        if self.outstanding.is_some() {
            return Err(ProtocolError::GuessOutstanding.into());
        }

        let previous = match self.strategy.state() {
            RoundState::Interrupted => None,
            _ => self.history.last().map(|(_, feedback)| *feedback),
        };

        let guess = self.strategy.next_guess(previous)?;
        self.outstanding = Some(guess.clone());
        Ok(guess)
    }

    /// Attach feedback to the outstanding guess
    ///
    /// Returns `true` once the round is won.
    ///
    /// # Errors
    /// - `ProtocolViolation` if there is no outstanding guess or the feedback
    ///   cannot occur for this code length
    /// - `InconsistentFeedback` if the strategy had narrowed the round to this
    ///   guess and the feedback says otherwise
    pub fn record(&mut self, feedback: Feedback) -> Result<bool, SolverError> {
        let length = self.strategy.config().length();
        let Some(guess) = self.outstanding.take() else {
            return Err(ProtocolError::NoOutstandingGuess.into());
        };
        if !feedback.fits(length) {
            self.outstanding = Some(guess);
            return Err(ProtocolError::FeedbackOutOfRange { feedback, length }.into());
        }

        let won = feedback.is_perfect(length);

        if !won && self.strategy.state() == RoundState::Solved {
            return Err(SolverError::InconsistentFeedback { guess, feedback });
        }

        self.history.push((guess, feedback));
        self.solved = won;
        Ok(won)
    }

    /// Play the rest of the round against a known secret
    ///
    /// Scores each guess exactly as the board would and stops when the secret
    /// is found or `max_guesses` guesses have been made.
    ///
    /// # Errors
    /// - `InvalidCode` if the secret is not legal for the strategy's config
    /// - anything [`propose`](Self::propose) or [`record`](Self::record) reports
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{CodeWord, GameConfig};
    /// use mastermind_solver::solver::{MinimaxStrategy, SolverEngine};
    ///
    /// let strategy = MinimaxStrategy::new(GameConfig::CLASSIC).unwrap();
    /// let mut engine = SolverEngine::new(strategy);
    ///
    /// let report = engine.play_against(&CodeWord::from([1, 2, 3, 4]), 10).unwrap();
    /// assert!(report.solved);
    /// assert_eq!(report.steps.last().unwrap().guess, CodeWord::from([1, 2, 3, 4]));
    /// ```
    pub fn play_against(
        &mut self,
        secret: &CodeWord,
        max_guesses: usize,
    ) -> Result<RoundReport, SolverError> {
        secret.check(self.strategy.config())?;

        let mut steps = Vec::new();
        while !self.solved && self.history.len() < max_guesses {
            let guess = self.propose()?;
            let candidates = self.strategy.candidates_remaining();
            let feedback = Feedback::score(&guess, secret);
            self.record(feedback)?;

            log::debug!("guess {}: {guess} -> {feedback}", self.history.len());
            steps.push(RoundStep {
                guess,
                feedback,
                candidates,
            });
        }

        Ok(RoundReport {
            steps,
            solved: self.solved,
        })
    }

    /// Guesses made so far with their feedback
    #[must_use]
    pub fn history(&self) -> &[(CodeWord, Feedback)] {
        &self.history
    }

    /// The strategy driving this round
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Whether a guess has scored all exact pegs
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }
}
