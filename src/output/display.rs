//! Display functions for command results

use super::formatters::{colored_word, positions_text, swap_summary};
use crate::commands::{BenchmarkResult, SolveReport};
use crate::core::{Board, Cell};
use colored::Colorize;

/// Print the board, bonuses highlighted
pub fn print_board(board: &Board) {
    for y in 0..board.size() {
        let Ok(row) = board.row(y as i32) else {
            continue;
        };
        let line: Vec<String> = row
            .iter()
            .filter_map(|&p| board.get(p))
            .map(board_cell)
            .collect();
        println!("   {}", line.join(" "));
    }
}

fn board_cell(cell: &Cell) -> String {
    let letter = cell.letter().as_char().to_ascii_uppercase();
    let text = if cell.is_double_word() {
        format!("{letter}+ ")
    } else if cell.multiplier() > 1.0 {
        format!("{letter}x{}", cell.multiplier())
    } else {
        format!("{letter}  ")
    };

    if cell.is_double_word() {
        text.magenta().bold().to_string()
    } else if cell.multiplier() > 1.0 {
        text.yellow().bold().to_string()
    } else {
        text.bright_white().to_string()
    }
}

/// Print the ranked paths of a solve, best `limit` first
pub fn print_solve_report(board: &Board, report: &SolveReport, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    print_board(board);

    println!(
        "\n🔎 Searched {} words in {:.3}s, found {} paths ({} with swaps)",
        report.words_searched,
        report.duration.as_secs_f64(),
        report.paths.len().to_string().bright_yellow().bold(),
        report.swapped_count()
    );

    if report.paths.is_empty() {
        println!("{}", "No words fit this board.".red().bold());
        return;
    }

    println!("\n{}", "─".repeat(60).cyan());
    for (i, path) in report.top(limit).iter().enumerate() {
        let mut line = format!(
            "{:>3}. {}: {} {}",
            (i + 1).to_string().bright_black(),
            colored_word(path),
            path.total_score().to_string().magenta().bold(),
            positions_text(path)
        );
        if let Some(swaps) = swap_summary(path) {
            line.push_str(&format!("  [{}]", swaps.red()));
        }
        println!("{line}");
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards:           {}", result.boards);
    println!("   Words searched:   {}", result.words_searched);
    println!("   Paths found:      {}", result.paths_found);
    println!(
        "   Sequential:       {:.3}s",
        result.sequential.as_secs_f64()
    );
    println!(
        "   Parallel:         {}",
        format!("{:.3}s", result.parallel.as_secs_f64())
            .bright_yellow()
            .bold()
    );
    println!(
        "   Speedup:          {}",
        format!("{:.2}x", result.speedup()).green()
    );
    println!("   Boards/second:    {:.1}", result.boards_per_second());

    if let Some((word, score)) = &result.best {
        println!(
            "\n🏆 Best word: {} ({})",
            word.to_uppercase().bright_white().bold(),
            score.to_string().magenta().bold()
        );
    }

    if result.mismatches == 0 {
        println!("\n{}", "✅ Sequential and parallel results agree".green().bold());
    } else {
        println!(
            "\n{}",
            format!(
                "❌ Drivers disagreed on {} of {} boards",
                result.mismatches, result.boards
            )
            .red()
            .bold()
        );
    }
}
