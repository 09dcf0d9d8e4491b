//! Errors produced by the solver
//!
//! Scoring, enumeration and partitioning are total; everything that can go
//! wrong is a bad configuration, a call made out of turn, or feedback that
//! contradicts what was reported earlier in the round.

use crate::core::{CodeError, CodeWord, ConfigError, Feedback};
use crate::solver::RoundState;
use thiserror::Error;

/// Top-level solver error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The configuration cannot be played; raised before any guess is made.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// A strategy or engine was driven out of sequence.
    #[error("protocol violation: {0}")]
    ProtocolViolation(#[from] ProtocolError),

    /// No code is consistent with the feedback history any more.
    #[error("feedback {feedback} for guess {guess} contradicts the earlier feedback")]
    InconsistentFeedback { guess: CodeWord, feedback: Feedback },

    /// A code supplied from outside does not fit the configuration.
    #[error("invalid code: {0}")]
    InvalidCode(#[from] CodeError),

    /// Guess selection was stopped by the cancellation flag.
    #[error("guess selection was cancelled")]
    Cancelled,
}

/// Ways of calling a strategy or engine out of turn
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("feedback supplied before any guess was made")]
    FeedbackBeforeGuess,

    #[error("feedback for the previous guess is missing")]
    MissingFeedback,

    #[error("feedback {feedback} is impossible for a code of {length} pegs")]
    FeedbackOutOfRange { feedback: Feedback, length: u8 },

    #[error("selection was interrupted; resume without feedback")]
    FeedbackWhileInterrupted,

    #[error("the round is over ({0})")]
    RoundOver(RoundState),

    #[error("a guess is already waiting for feedback")]
    GuessOutstanding,

    #[error("no guess is waiting for feedback")]
    NoOutstandingGuess,
}
