//! Display functions for command results

use super::formatters::{code_swatch, colour_name, create_progress_bar, feedback_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len() as u8;

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", code_swatch(&result.secret));
    if verbose {
        let names: Vec<String> = result
            .secret
            .pegs()
            .iter()
            .map(|&c| colour_name(c).map_or_else(|| c.to_string(), str::to_string))
            .collect();
        println!("         {}", names.join(", ").bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {}   {} ({})",
            turn,
            code_swatch(&step.guess),
            feedback_pegs(step.feedback, length),
            step.feedback
        );

        if verbose
            && let (Some(before), Some(after)) = (step.candidates_before, step.candidates_after)
        {
            println!("  Candidates: {before} → {after}");
            if after > 0 {
                println!("  Reduction:  {:.1}x", before as f64 / after as f64);
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let length = result.guess.len() as u8;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MINIMAX ANALYSIS:".bright_cyan().bold(),
        code_swatch(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!(
        "   Worst case:  {}",
        format!("{} remain", result.worst_case).bright_yellow()
    );
    println!(
        "   Eliminates:  {} guaranteed",
        result.eliminated.to_string().green()
    );
    println!(
        "   Candidate:   {}",
        if result.is_candidate { "yes" } else { "no" }
    );

    if let Some((best, worst_case)) = &result.best {
        println!(
            "   Minimax:     {} (worst case {worst_case})",
            code_swatch(best)
        );
    }

    println!("\n📈 {}", "Partition:".bright_cyan().bold());
    for (feedback, count) in &result.partitions {
        let bar = create_progress_bar(*count as f64, result.worst_case as f64, 30);
        println!(
            "   {} {}: {} {count:5}",
            feedback_pegs(*feedback, length),
            feedback,
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result.distribution.clone().into_iter().collect();
    counts.sort_unstable();
    for (guess_count, count) in counts {
        let pct = (count as f64 / result.total_codes as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !result.worst_codes.is_empty() {
        println!("\n🐢 {}", "Hardest codes:".bright_cyan().bold());
        for (code, guesses) in &result.worst_codes {
            println!("   {}  {guesses} guesses", code_swatch(code));
        }
    }
}
