//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::instrument::ExecutionResult;
use crate::registry::{AlgorithmRegistry, Outcome};
use crate::utils::report::ReportRow;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        // Clamp width to avoid layout issues on very small or very large terminals
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// One-line preview of an outcome, at most `width` characters.
fn outcome_preview(outcome: &Outcome, width: usize) -> String {
    let text = match outcome {
        Outcome::Sorted(values) => {
            let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            format!("[{}]", items.join(", "))
        }
        Outcome::Search(search) if search.found => {
            let value = search.value.as_ref().map(|v| v.to_string()).unwrap_or_default();
            format!("found {} at index {}", value, search.index)
        }
        Outcome::Search(_) => "not found".to_string(),
    };
    truncate(&text, width)
}

/// Speedup of each row relative to the first row that has a time.
fn speedups(rows: &[ReportRow]) -> Vec<Option<f64>> {
    let baseline = rows.iter().find_map(|r| r.execution_time_ms);
    rows.iter()
        .map(|r| match (baseline, r.execution_time_ms) {
            (Some(base), Some(t)) if t > 0.0 => Some(base / t),
            (Some(base), Some(_)) if base == 0.0 => Some(1.0),
            _ => None,
        })
        .collect()
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Algoscope ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: algoscope <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  serve                 Start the HTTP API");
    println!("  run ALGORITHM         Run one algorithm on generated data");
    println!("  compare A,B,...       Run several algorithms on the same generated data");
    println!();
    println!("Options:");
    println!("  --list, -l            List all available algorithms");
    println!("  --help, -h            Show this help message");
    println!("  --config PATH         TOML configuration file (serve)");
    println!("  --addr ADDR           Listen address, overrides the config (serve)");
    println!("  --shape SHAPE         random, sorted, reverse, nearly_sorted, strings (default: random)");
    println!("  --size N              Number of generated elements (default: 1000)");
    println!("  --target VALUE        Value to look for (search algorithms)");
    println!("  --seed N              Random seed for reproducible data");
    println!("  --csv PATH            Export the results to CSV");
    println!();
    println!("Examples:");
    println!("  algoscope serve --addr 0.0.0.0:5000");
    println!("  algoscope run quick_sort --size 10000 --shape nearly_sorted");
    println!("  algoscope run binary_search --shape sorted --size 100 --target 500");
    println!("  algoscope compare bubble_sort,merge_sort,heap_sort --size 2000 --csv out.csv");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<16} {:<14} [{}] - {}",
            algo.id(),
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}

/// Print a box with the outcome and metrics of one execution
pub fn print_run_result(algorithm: &str, result: &ExecutionResult) {
    let term_width = get_term_width();
    let content_width = term_width.saturating_sub(4).clamp(40, 76);
    let m = &result.metadata;

    let lines = [
        format!("Algorithm:   {}", algorithm),
        format!("Input size:  {}", m.input_size),
        format!("Time:        {:.4} ms", m.execution_time_ms),
        format!(
            "Memory:      {:.2} KB used, {:.2} KB peak ({:?})",
            m.memory_used_kb, m.memory_peak_kb, m.memory_source
        ),
        format!("Comparisons: {}", m.comparisons),
        format!("Swaps:       {}", m.swaps),
        format!(
            "Steps:       {}{}",
            m.steps_count,
            if m.trace_truncated { " (log truncated)" } else { "" }
        ),
    ];
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in &lines {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        outcome_preview(&result.result, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print a comparison table, speedup relative to the first successful row
pub fn print_comparison_table(rows: &[ReportRow]) {
    if rows.is_empty() {
        return;
    }

    let term_width = get_term_width();
    // 12+12+12+10+9 = 55 chars + 5 spaces + 2 indent
    let fixed_width = 62;
    let algo_col_width = term_width.saturating_sub(fixed_width).clamp(15, 30);
    let table_width = algo_col_width + 55 + 5;
    let speedups = speedups(rows);

    println!("  Size: {}", rows[0].input_size);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<a_width$} {:>12} {:>12} {:>12} {:>10} {:>9}",
        "Algorithm",
        "Time (ms)",
        "Peak (KB)",
        "Compares",
        "Swaps",
        "Speedup",
        a_width = algo_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for (row, speedup) in rows.iter().zip(speedups) {
        let name = truncate(&row.algorithm, algo_col_width);
        match &row.error {
            Some(error) => println!(
                "  {:<a_width$} {}",
                name,
                truncate(&format!("error: {}", error), 55),
                a_width = algo_col_width
            ),
            None => println!(
                "  {:<a_width$} {:>12.4} {:>12.2} {:>12} {:>10} {:>9}",
                name,
                row.execution_time_ms.unwrap_or_default(),
                row.memory_peak_kb.unwrap_or_default(),
                row.comparisons.unwrap_or_default(),
                row.swaps.unwrap_or_default(),
                speedup
                    .map(|s| format!("{:.2}x", s))
                    .unwrap_or_else(|| "-".to_string()),
                a_width = algo_col_width
            ),
        }
    }

    println!("  {}", "─".repeat(table_width));
    println!();
}
