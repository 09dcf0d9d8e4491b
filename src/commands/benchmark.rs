//! Benchmark command
//!
//! Plays every secret of a configuration (or a subset) and measures how many
//! guesses the strategy needs.

use crate::core::CodeWord;
use crate::error::SolverError;
use crate::solver::{CodeSpace, SolverEngine, StrategyKind, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// How many codes to list as the hardest
const WORST_CODES_SHOWN: usize = 10;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Only play this many secrets
    pub limit: Option<usize>,
    /// Pick the limited secrets at random instead of from the start of the space
    pub random_sample: bool,
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            limit: None,
            random_sample: false,
            max_guesses: 10,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: StrategyKind,
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of secrets solved in that many guesses
    pub distribution: FxHashMap<usize, usize>,
    /// Secrets that needed the most guesses, or were never solved
    pub worst_codes: Vec<(CodeWord, usize)>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Secrets a benchmark will play
#[must_use]
pub fn benchmark_secrets(space: &CodeSpace, config: &BenchmarkConfig) -> Vec<CodeWord> {
    let limit = config.limit.unwrap_or(space.len()).min(space.len());

    if config.random_sample && limit < space.len() {
        let mut sample: Vec<CodeWord> = space
            .codes()
            .choose_multiple(&mut rand::rng(), limit)
            .cloned()
            .collect();
        sample.sort_unstable();
        sample
    } else {
        space.codes()[..limit].to_vec()
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run the benchmark with one fresh strategy per secret
///
/// # Errors
/// Returns the first error a round reports. With scoring done by the
/// benchmark itself this only happens for a broken strategy.
pub fn run_benchmark(
    kind: StrategyKind,
    space: &CodeSpace,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, SolverError> {
    let secrets = benchmark_secrets(space, config);
    log::info!(
        "benchmarking {kind} on {} of {} codes ({})",
        secrets.len(),
        space.len(),
        space.config()
    );

    let pb = config.show_progress.then(|| progress_bar(secrets.len()));

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut solved = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut results: Vec<(CodeWord, usize, bool)> = Vec::with_capacity(secrets.len());

    for (idx, secret) in secrets.iter().enumerate() {
        let mut engine = SolverEngine::new(StrategyType::with_space(kind, space));
        let report = engine.play_against(secret, config.max_guesses)?;
        let guesses = report.guess_count();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        if report.solved {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            log::debug!("{secret} not solved in {guesses} guesses");
        }
        results.push((secret.clone(), guesses, report.solved));

        if let Some(pb) = &pb {
            if idx % 10 == 0 {
                let avg = total_guesses as f64 / (idx + 1) as f64;
                pb.set_message(format!("Avg: {avg:.2}"));
            }
            pb.inc(1);
        }
        if (idx + 1) % 100 == 0 {
            log::info!("{} codes played, {solved} solved", idx + 1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Complete!");
    }

    let duration = start.elapsed();
    let total_codes = secrets.len();

    // Unsolved first, then by guess count
    results.sort_by(|a, b| a.2.cmp(&b.2).then(b.1.cmp(&a.1)).then(a.0.cmp(&b.0)));
    let worst_codes = results
        .into_iter()
        .take(WORST_CODES_SHOWN)
        .map(|(code, guesses, _)| (code, guesses))
        .collect();

    if total_codes == 0 {
        min_guesses = 0;
    }

    let result = BenchmarkResult {
        strategy: kind,
        total_codes,
        solved,
        failed: total_codes - solved,
        total_guesses,
        average_guesses: if total_codes == 0 {
            0.0
        } else {
            total_guesses as f64 / total_codes as f64
        },
        min_guesses,
        max_guesses,
        distribution,
        worst_codes,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };
    log::info!(
        "{kind}: average {:.3}, worst {} over {} codes",
        result.average_guesses,
        result.max_guesses,
        result.total_codes
    );
    Ok(result)
}
