//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: code words, peg feedback
//! and the game configuration they are validated against.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod config;
mod feedback;

pub use code::{CodeError, CodeWord};
pub use config::{ConfigError, GameConfig};
pub use feedback::Feedback;
