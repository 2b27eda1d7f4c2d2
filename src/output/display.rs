//! Display functions for command results

use super::formatters::{create_progress_bar, format_ladder};
use crate::commands::{BatchStatistics, NeighbourResult, SolveResult, VerifyResult};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, show_stats: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.from.to_uppercase().bright_yellow().bold(),
        result.to.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !result.start_in_lexicon {
        println!(
            "{}",
            format!("Note: '{}' is not in the lexicon", result.from).bright_black()
        );
    }

    let width = result.ladders.len().to_string().len();
    for (i, ladder) in result.ladders.iter().enumerate() {
        println!("{:>width$}. {}", i + 1, format_ladder(ladder));
    }

    println!();
    match result.steps() {
        Some(steps) => println!(
            "{}",
            format!(
                "✅ {} shortest ladder{} of {} step{}",
                result.ladders.len(),
                if result.ladders.len() == 1 { "" } else { "s" },
                steps,
                if steps == 1 { "" } else { "s" }
            )
            .green()
            .bold()
        ),
        None => println!("{}", "❌ No ladder exists".red().bold()),
    }

    if show_stats {
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Expanded:      {}", result.stats.expanded);
        println!("   Pruned:        {}", result.stats.pruned);
        println!("   Words visited: {}", result.stats.words_visited);
        println!("   Peak queue:    {}", result.stats.max_queue_len);
        println!("   Depth reached: {}", result.stats.depth);
        println!(
            "   Time taken:    {:.3}ms",
            result.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the neighbourhood of a word
pub fn print_neighbour_result(result: &NeighbourResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBOURS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_lexicon {
        println!("\n   {}", "(word itself is not in the lexicon)".bright_black());
    }

    if result.neighbours.is_empty() {
        println!("\n   No words one letter away");
        return;
    }

    println!("\n🔗 {} adjacent words:", result.neighbours.len());
    for chunk in result.neighbours.chunks(8) {
        println!("   {}", chunk.join("  "));
    }
}

/// Print the verdict on a user-supplied ladder
pub fn print_verify_result(result: &VerifyResult) {
    println!("\n{}", format_ladder(&result.ladder));
    println!();

    if let Some(error) = &result.error {
        println!("{}", format!("❌ Invalid: {error}").red().bold());
        return;
    }

    if result.is_shortest() {
        println!(
            "{}",
            format!(
                "✅ Valid and shortest ({} step{}, one of {})",
                result.ladder.steps(),
                if result.ladder.steps() == 1 { "" } else { "s" },
                result.shortest_count
            )
            .green()
            .bold()
        );
    } else if let Some(shortest) = result.shortest_steps {
        println!(
            "{}",
            format!(
                "⚠️  Valid but {} steps; the shortest take {}",
                result.ladder.steps(),
                shortest
            )
            .yellow()
            .bold()
        );
    }
}

/// Print statistics from a batch run
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Pairs tested:   {}", stats.total_pairs);
    if stats.total_pairs > 0 {
        println!(
            "  Solved:         {} {}",
            stats.solved,
            format!(
                "({:.1}%)",
                stats.solved as f64 / stats.total_pairs as f64 * 100.0
            )
            .green()
        );
    }
    if stats.unsolved > 0 {
        println!("  No ladder:      {}", stats.unsolved.to_string().red());
    }
    println!("  Ladders found:  {}", stats.total_ladders);
    println!(
        "  Total time:     {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if !stats.step_distribution.is_empty() {
        println!("\n📈 {}", "Step Distribution".bright_cyan().bold());
        let max_count = stats
            .step_distribution
            .values()
            .copied()
            .max()
            .unwrap_or(1);
        for (steps, count) in &stats.step_distribution {
            let bar = create_progress_bar(*count as f64, max_count as f64, 40);
            println!("  {steps:>3} steps: {} {count:4}", bar.green());
        }
    }

    if let Some(longest) = &stats.longest {
        println!("\n🪜 {}", "Longest Ladder".bright_cyan().bold());
        println!("  {}", format_ladder(longest));
    }

    let unsolved: Vec<_> = stats
        .results
        .iter()
        .filter(|r| r.ladders.is_empty())
        .take(5)
        .collect();
    if !unsolved.is_empty() {
        println!("\n😰 {}", "Unreachable Pairs".yellow().bold());
        for r in unsolved {
            println!("  {} → {}", r.from.yellow(), r.to.yellow());
        }
    }
}
