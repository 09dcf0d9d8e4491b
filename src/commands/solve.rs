//! Code solving command
//!
//! Solves a specific secret code and returns the solution path.

use crate::core::{CodeWord, Feedback};
use crate::error::SolverError;
use crate::solver::{GuessStrategy, SolverEngine};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: 10,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: CodeWord,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: CodeWord,
    pub feedback: Feedback,
    /// `None` for strategies that do not track candidates
    pub candidates_before: Option<usize>,
    pub candidates_after: Option<usize>,
}

/// Solve a specific code with the given engine
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not parse or does not fit the configuration
/// - The strategy rejects the feedback (it cannot for a real secret)
pub fn solve_code<S: GuessStrategy>(
    config: &SolveConfig,
    engine: &mut SolverEngine<S>,
) -> Result<SolveResult, SolverError> {
    let secret = CodeWord::parse(&config.secret, engine.strategy().config())?;
    let report = engine.play_against(&secret, config.max_guesses)?;

    let mut guesses: Vec<GuessStep> = Vec::with_capacity(report.steps.len());
    for (i, step) in report.steps.iter().enumerate() {
        let candidates_after = match report.steps.get(i + 1) {
            Some(next) => next.candidates,
            // A winning guess leaves only itself
            None if report.solved => step.candidates.map(|_| 1),
            None => engine.strategy().candidates_remaining(),
        };

        guesses.push(GuessStep {
            guess: step.guess.clone(),
            feedback: step.feedback,
            candidates_before: step.candidates,
            candidates_after,
        });
    }

    Ok(SolveResult {
        success: report.solved,
        guesses,
        secret,
    })
}
