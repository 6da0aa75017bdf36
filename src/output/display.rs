//! Display functions for command results

use super::formatters::{format_path, grid_lines};
use crate::commands::{BenchmarkResult, BoardReport};
use colored::Colorize;

/// Print a solved board: the grid, words grouped by length, and the total
pub fn print_board_report(report: &BoardReport, show_paths: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    for line in grid_lines(&report.letters) {
        println!("  {}", line.bright_yellow().bold());
    }
    println!("{}", "─".repeat(60).cyan());

    if report.words.is_empty() {
        println!("\n{}", "No words found.".red());
        return;
    }

    for (length, group) in report.words_by_length() {
        let points = group.first().map_or(0, |w| w.score);
        println!(
            "\n{}",
            format!("{length} Letter Words ({points} points per word):")
                .bright_cyan()
                .bold()
        );

        for word in group {
            if show_paths {
                println!(
                    "  {}  {}",
                    word.text.green(),
                    format_path(&word.path).bright_black()
                );
            } else {
                println!("  {}", word.text.green());
            }
        }
    }

    println!(
        "\n{} {}",
        "Total Score:".bright_cyan().bold(),
        format!("{} points ({} words)", report.total_score, report.words.len())
            .bright_yellow()
            .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Throughput:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    println!("\n📈 {}", "Words found:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest:           {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most:             {}",
        format!("{}", result.max_words).green()
    );

    if let Some((letters, count)) = &result.best_board {
        println!("\n🏆 {}", "Best board:".bright_cyan().bold());
        for line in grid_lines(letters) {
            println!("   {}", line.bright_yellow());
        }
        println!("   {count} words");
    }
}
