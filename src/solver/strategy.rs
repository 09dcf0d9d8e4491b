//! Guess selection strategies
//!
//! Defines the `GuessStrategy` trait, the per-round call protocol every
//! strategy follows, and the runtime-selectable `StrategyType`.

use super::CodeSpace;
use super::minimax::MinimaxStrategy;
use super::random::{ConsistentRandomStrategy, RandomStrategy};
use crate::core::{CodeWord, Feedback, GameConfig};
use crate::error::{ProtocolError, SolverError};
use std::fmt;

/// A guesser for one round of Mastermind
///
/// One instance plays exactly one round. The first call takes no feedback;
/// every later call takes the feedback for the instance's own previous guess.
pub trait GuessStrategy {
    /// Propose the next guess
    ///
    /// # Errors
    /// - `ProtocolViolation` if feedback is given on the first call, missing
    ///   on a later call, or the round is already over
    /// - `InconsistentFeedback` if no code fits the feedback history
    fn next_guess(&mut self, previous: Option<Feedback>) -> Result<CodeWord, SolverError>;

    /// Where the strategy is in its round
    fn state(&self) -> RoundState;

    /// Configuration being played
    fn config(&self) -> &GameConfig;

    /// Size of the candidate set, for strategies that keep one
    fn candidates_remaining(&self) -> Option<usize> {
        None
    }
}

/// Lifecycle of a strategy instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No guess made yet
    Fresh,
    /// A guess was made and its feedback is expected
    Awaiting,
    /// Feedback was applied but selection was cancelled; resume without feedback
    Interrupted,
    /// Only one candidate remained and it was returned
    Solved,
    /// The feedback history ruled out every code
    Failed,
}

impl RoundState {
    /// Check if no further guesses can be requested
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fresh => "fresh",
            Self::Awaiting => "awaiting feedback",
            Self::Interrupted => "interrupted",
            Self::Solved => "solved",
            Self::Failed => "failed",
        })
    }
}

/// What a `next_guess` call has to do, once the protocol has been checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Turn {
    Opening,
    Feedback { guess: CodeWord, feedback: Feedback },
    Resume,
}

#[derive(Debug, Clone)]
enum Phase {
    Fresh,
    Awaiting(CodeWord),
    Interrupted,
    Solved,
    Failed,
}

/// Call-protocol tracker shared by all strategies
///
/// Checks every `next_guess` call against the round state before the
/// strategy does any work, and remembers the last guess made.
#[derive(Debug, Clone)]
pub(crate) struct Round {
    length: u8,
    phase: Phase,
}

impl Round {
    pub(crate) const fn new(config: GameConfig) -> Self {
        Self {
            length: config.length(),
            phase: Phase::Fresh,
        }
    }

    /// Validate a call; does not change state
    pub(crate) fn begin(&self, previous: Option<Feedback>) -> Result<Turn, ProtocolError> {
        match (&self.phase, previous) {
            (Phase::Solved, _) => Err(ProtocolError::RoundOver(RoundState::Solved)),
            (Phase::Failed, _) => Err(ProtocolError::RoundOver(RoundState::Failed)),
            (Phase::Fresh, None) => Ok(Turn::Opening),
            (Phase::Fresh, Some(_)) => Err(ProtocolError::FeedbackBeforeGuess),
            (Phase::Awaiting(_), None) => Err(ProtocolError::MissingFeedback),
            (Phase::Awaiting(guess), Some(feedback)) => {
                if feedback.fits(self.length) {
                    Ok(Turn::Feedback {
                        guess: guess.clone(),
                        feedback,
                    })
                } else {
                    Err(ProtocolError::FeedbackOutOfRange {
                        feedback,
                        length: self.length,
                    })
                }
            }
            (Phase::Interrupted, None) => Ok(Turn::Resume),
            (Phase::Interrupted, Some(_)) => Err(ProtocolError::FeedbackWhileInterrupted),
        }
    }

    pub(crate) fn guessed(&mut self, guess: &CodeWord) {
        self.phase = Phase::Awaiting(guess.clone());
    }

    pub(crate) fn interrupted(&mut self) {
        self.phase = Phase::Interrupted;
    }

    pub(crate) fn solved(&mut self) {
        self.phase = Phase::Solved;
    }

    pub(crate) fn failed(&mut self) {
        self.phase = Phase::Failed;
    }

    pub(crate) const fn state(&self) -> RoundState {
        match self.phase {
            Phase::Fresh => RoundState::Fresh,
            Phase::Awaiting(_) => RoundState::Awaiting,
            Phase::Interrupted => RoundState::Interrupted,
            Phase::Solved => RoundState::Solved,
            Phase::Failed => RoundState::Failed,
        }
    }
}

/// Deterministic first guess for the consistency-aware strategies
///
/// Colours in adjacent pairs (`1122…`) when repeats are allowed, single
/// colours (`123…`) otherwise, cycled to the code length.
///
/// # Examples
/// ```
/// use mastermind_solver::core::GameConfig;
/// use mastermind_solver::solver::strategy::opening_guess;
///
/// assert_eq!(opening_guess(&GameConfig::CLASSIC).to_string(), "1122");
/// let unique = GameConfig::new(4, 6, false).unwrap();
/// assert_eq!(opening_guess(&unique).to_string(), "1234");
/// ```
#[must_use]
pub fn opening_guess(config: &GameConfig) -> CodeWord {
    let colours = 1..=config.colours();
    let pattern: Vec<u8> = if config.duplicates_allowed() {
        colours.flat_map(|c| [c, c]).collect()
    } else {
        colours.collect()
    };

    pattern
        .into_iter()
        .cycle()
        .take(usize::from(config.length()))
        .collect()
}

/// Names of the available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StrategyKind {
    /// Uniformly random legal code every turn, ignoring feedback
    Random,
    /// Uniformly random code among those consistent with the feedback
    Consistent,
    /// Knuth's minimax: minimise the worst-case remaining candidates
    #[default]
    Minimax,
}

impl StrategyKind {
    /// All strategies, weakest first
    pub const ALL: [Self; 3] = [Self::Random, Self::Consistent, Self::Minimax];

    /// Name used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Consistent => "consistent",
            Self::Minimax => "minimax",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Feedback-blind random guessing
    Random(RandomStrategy),
    /// Random guessing among consistent codes
    ConsistentRandom(ConsistentRandomStrategy),
    /// Knuth's minimax
    Minimax(MinimaxStrategy),
}

impl StrategyType {
    /// Create a fresh strategy of the given kind
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the code space is too large to
    /// enumerate for a consistency-aware strategy.
    pub fn new(kind: StrategyKind, config: GameConfig) -> Result<Self, SolverError> {
        Ok(match kind {
            StrategyKind::Random => Self::Random(RandomStrategy::new(config)),
            StrategyKind::Consistent => {
                Self::ConsistentRandom(ConsistentRandomStrategy::new(config)?)
            }
            StrategyKind::Minimax => Self::Minimax(MinimaxStrategy::new(config)?),
        })
    }

    /// Create a fresh strategy reusing an already enumerated space
    #[must_use]
    pub fn with_space(kind: StrategyKind, space: &CodeSpace) -> Self {
        match kind {
            StrategyKind::Random => Self::Random(RandomStrategy::new(*space.config())),
            StrategyKind::Consistent => {
                Self::ConsistentRandom(ConsistentRandomStrategy::with_space(space))
            }
            StrategyKind::Minimax => Self::Minimax(MinimaxStrategy::with_space(space.clone())),
        }
    }

    /// Which strategy this is
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Random(_) => StrategyKind::Random,
            Self::ConsistentRandom(_) => StrategyKind::Consistent,
            Self::Minimax(_) => StrategyKind::Minimax,
        }
    }
}

impl GuessStrategy for StrategyType {
    fn next_guess(&mut self, previous: Option<Feedback>) -> Result<CodeWord, SolverError> {
        match self {
            Self::Random(s) => s.next_guess(previous),
            Self::ConsistentRandom(s) => s.next_guess(previous),
            Self::Minimax(s) => s.next_guess(previous),
        }
    }

    fn state(&self) -> RoundState {
        match self {
            Self::Random(s) => s.state(),
            Self::ConsistentRandom(s) => s.state(),
            Self::Minimax(s) => s.state(),
        }
    }

    fn config(&self) -> &GameConfig {
        match self {
            Self::Random(s) => s.config(),
            Self::ConsistentRandom(s) => s.config(),
            Self::Minimax(s) => s.config(),
        }
    }

    fn candidates_remaining(&self) -> Option<usize> {
        match self {
            Self::Random(s) => s.candidates_remaining(),
            Self::ConsistentRandom(s) => s.candidates_remaining(),
            Self::Minimax(s) => s.candidates_remaining(),
        }
    }
}
