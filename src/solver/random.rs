//! Random baseline strategies
//!
//! `RandomStrategy` models an uninformed opponent; `ConsistentRandomStrategy`
//! never repeats a mistake but makes no attempt to maximise information.

use super::space::random_code;
use super::strategy::{GuessStrategy, Round, RoundState, Turn, opening_guess};
use super::{CandidateSet, CodeSpace};
use crate::core::{CodeWord, Feedback, GameConfig};
use crate::error::{ProtocolError, SolverError};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Uniformly random legal code every turn
///
/// Ignores all feedback, so it may propose codes that earlier feedback has
/// already ruled out. It still follows the call protocol.
pub struct RandomStrategy {
    config: GameConfig,
    round: Round,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a strategy seeded from the thread-local generator
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a reproducible strategy
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            round: Round::new(config),
            rng,
        }
    }
}

impl GuessStrategy for RandomStrategy {
    fn next_guess(&mut self, previous: Option<Feedback>) -> Result<CodeWord, SolverError> {
        // Only the call order is checked; the feedback itself is ignored
        self.round.begin(previous)?;

        let guess = random_code(&self.config, &mut self.rng);
        self.round.guessed(&guess);
        Ok(guess)
    }

    fn state(&self) -> RoundState {
        self.round.state()
    }

    fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Uniformly random member of the candidate set
///
/// Opens with the deterministic opening guess, then after each feedback
/// narrows the candidate set and picks one of the survivors at random.
pub struct ConsistentRandomStrategy {
    config: GameConfig,
    candidates: CandidateSet,
    round: Round,
    rng: StdRng,
}

impl ConsistentRandomStrategy {
    /// Create a strategy for `config`, enumerating its code space
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the space is too large to enumerate.
    pub fn new(config: GameConfig) -> Result<Self, SolverError> {
        Ok(Self::with_space(&CodeSpace::enumerate(config)?))
    }

    /// Create a strategy from an already enumerated space
    #[must_use]
    pub fn with_space(space: &CodeSpace) -> Self {
        Self::with_rng(space, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a reproducible strategy
    #[must_use]
    pub fn seeded(space: &CodeSpace, seed: u64) -> Self {
        Self::with_rng(space, StdRng::seed_from_u64(seed))
    }

    fn with_rng(space: &CodeSpace, rng: StdRng) -> Self {
        let config = *space.config();
        Self {
            config,
            candidates: CandidateSet::new(space),
            round: Round::new(config),
            rng,
        }
    }

    /// Codes still consistent with the feedback
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }
}

impl GuessStrategy for ConsistentRandomStrategy {
    fn next_guess(&mut self, previous: Option<Feedback>) -> Result<CodeWord, SolverError> {
        let (guess, feedback) = match self.round.begin(previous)? {
            Turn::Opening => {
                let guess = opening_guess(&self.config);
                self.round.guessed(&guess);
                return Ok(guess);
            }
            Turn::Feedback { guess, feedback } => (guess, feedback),
            // Never interrupted: a call without feedback is just missing it
            Turn::Resume => return Err(ProtocolError::MissingFeedback.into()),
        };

        let remaining = self.candidates.filter(&guess, feedback).inspect_err(|_| {
            self.round.failed();
        })?;
        log::debug!("{guess} scored {feedback}: {remaining} candidates remain");

        if let Some(only) = self.candidates.only_member() {
            let only = only.clone();
            self.round.solved();
            return Ok(only);
        }

        let next = self
            .candidates
            .members()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SolverError::InconsistentFeedback { guess, feedback })?;
        self.round.guessed(&next);
        Ok(next)
    }

    fn state(&self) -> RoundState {
        self.round.state()
    }

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn candidates_remaining(&self) -> Option<usize> {
        Some(self.candidates.len())
    }
}
