//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, benchmark_secrets, run_benchmark};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
