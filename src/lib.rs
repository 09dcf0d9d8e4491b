//! Mastermind Solver
//!
//! The code-breaker side of Mastermind: peg scoring, candidate tracking and
//! Knuth's minimax guess selection, with random baselines for comparison.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{CodeWord, Feedback, GameConfig};
//! use mastermind_solver::solver::{MinimaxStrategy, SolverEngine};
//!
//! // Score a guess the way the board does
//! let secret = CodeWord::from([1, 2, 3, 4]);
//! let guess = CodeWord::from([1, 1, 2, 2]);
//! assert_eq!(Feedback::score(&guess, &secret), Feedback::new(1, 1));
//!
//! // Let the minimax solver play a whole round
//! let mut engine = SolverEngine::new(MinimaxStrategy::new(GameConfig::CLASSIC).unwrap());
//! let report = engine.play_against(&secret, 10).unwrap();
//! assert!(report.solved);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{ProtocolError, SolverError};
