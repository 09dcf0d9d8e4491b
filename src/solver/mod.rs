//! Mastermind solving algorithms
//!
//! This module contains the code space, the candidate set and the guessing
//! strategies built on them.

mod candidates;
mod engine;
pub mod minimax;
mod random;
mod space;
pub mod strategy;

pub use candidates::CandidateSet;
pub use engine::{RoundReport, RoundStep, SolverEngine};
pub use minimax::MinimaxStrategy;
pub use random::{ConsistentRandomStrategy, RandomStrategy};
pub use space::{CodeSpace, random_code};
pub use strategy::{GuessStrategy, RoundState, StrategyKind, StrategyType};
