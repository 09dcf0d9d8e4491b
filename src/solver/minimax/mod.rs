//! Knuth's minimax Mastermind solver
//!
//! Implements worst-case minimisation over the full code space.

mod calculator;
mod selector;
mod strategy;

pub use calculator::{group_by_feedback, guaranteed_eliminations, worst_case_remaining};
pub use selector::{ScoredGuess, select_best_guess, select_best_guess_cancellable};
pub use strategy::MinimaxStrategy;
