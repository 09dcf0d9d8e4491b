//! Mastermind Solver - CLI
//!
//! Plays the code-breaker side of Mastermind with Knuth's minimax strategy
//! or one of the random baselines.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{BenchmarkConfig, SolveConfig, analyze_guess, run_benchmark, solve_code},
    core::{CodeWord, Feedback, GameConfig},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{CodeSpace, SolverEngine, StrategyKind, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code-breaker using Knuth's minimax strategy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pegs per code
    #[arg(short, long, global = true, default_value_t = 4)]
    length: u8,

    /// Number of colours
    #[arg(short, long, global = true, default_value_t = 6)]
    colours: u8,

    /// Forbid repeated colours within a code
    #[arg(short, long, global = true)]
    unique: bool,

    /// Guessing strategy
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyKind::Minimax)]
    strategy: StrategyKind,

    /// Log each turn (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret code
    Solve {
        /// The secret, e.g. 1234 or 1,2,3,4
        code: String,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = 10)]
        max_guesses: usize,
    },

    /// Play many secrets and report the guess distribution
    Benchmark {
        /// Only play this many secrets (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Pick the limited secrets at random
        #[arg(short, long)]
        random: bool,

        /// Give up on a secret after this many guesses
        #[arg(short, long, default_value_t = 10)]
        max_guesses: usize,
    },

    /// Show how a guess splits the remaining codes
    Analyze {
        /// Guess to analyze
        guess: String,

        /// Earlier guess and its feedback, e.g. 1122=1,1 (repeatable)
        #[arg(short = 'a', long = "after", value_name = "GUESS=EXACT,COLOUR")]
        history: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig::new(cli.length, cli.colours, !cli.unique)?;
    log::debug!("playing {config} with {}", cli.strategy);

    match cli.command {
        Commands::Solve { code, max_guesses } => {
            run_solve_command(cli.strategy, config, code, max_guesses, cli.verbose)
        }
        Commands::Benchmark {
            limit,
            random,
            max_guesses,
        } => run_benchmark_command(
            cli.strategy,
            config,
            &BenchmarkConfig {
                limit,
                random_sample: random,
                max_guesses,
                show_progress: true,
            },
        ),
        Commands::Analyze { guess, history } => run_analyze_command(config, &guess, &history),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run_solve_command(
    kind: StrategyKind,
    config: GameConfig,
    code: String,
    max_guesses: usize,
    verbose: bool,
) -> Result<()> {
    let mut engine = SolverEngine::new(StrategyType::new(kind, config)?);
    let mut solve_config = SolveConfig::new(code);
    solve_config.max_guesses = max_guesses;

    let result = solve_code(&solve_config, &mut engine)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    kind: StrategyKind,
    config: GameConfig,
    benchmark: &BenchmarkConfig,
) -> Result<()> {
    let space = CodeSpace::enumerate(config)?;
    println!(
        "Running {kind} benchmark on {} ({} codes)...",
        config,
        space.len()
    );

    let result = run_benchmark(kind, &space, benchmark)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_analyze_command(config: GameConfig, guess: &str, history: &[String]) -> Result<()> {
    let history = history
        .iter()
        .map(|entry| parse_history_entry(entry, config))
        .collect::<Result<Vec<_>>>()?;

    let space = CodeSpace::enumerate(config)?;
    let result = analyze_guess(guess, &space, &history)?;
    print_analysis_result(&result);
    Ok(())
}

/// Parse `GUESS=EXACT,COLOUR`
fn parse_history_entry(entry: &str, config: GameConfig) -> Result<(CodeWord, Feedback)> {
    let (guess, feedback) = entry
        .split_once('=')
        .with_context(|| format!("expected GUESS=EXACT,COLOUR, got '{entry}'"))?;

    let guess = CodeWord::parse(guess, &config)?;
    let feedback: Feedback = feedback
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .with_context(|| format!("bad feedback in '{entry}'"))?;
    Ok((guess, feedback))
}
