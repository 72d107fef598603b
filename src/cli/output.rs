//! Output formatting and progress spinners for CLI

use std::fmt::Write;

use indicatif::{ProgressBar, ProgressStyle};

use crate::pagerank::RankDistribution;

/// Create a spinner for long-running searches
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a rank table: the title, then one `page: value` line per page,
/// sorted by page name with four decimals.
pub fn format_ranks(title: &str, ranks: &RankDistribution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    for (page, rank) in ranks {
        let _ = writeln!(out, "  {page}: {rank:.4}");
    }
    out
}

/// Print a rank table
pub fn print_ranks(title: &str, ranks: &RankDistribution) {
    print!("{}", format_ranks(title, ranks));
}
