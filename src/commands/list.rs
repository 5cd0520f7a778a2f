//! Category listing

use crate::wordlists::Wordlists;
use colored::Colorize;

/// Category names with entry counts, in listing order
#[must_use]
pub fn category_summary(wordlists: &Wordlists) -> Vec<(&str, usize)> {
    wordlists
        .iter()
        .map(|(name, entries)| (name, entries.len()))
        .collect()
}

/// Print every category and how many entries it holds
pub fn print_categories(wordlists: &Wordlists) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "AVAILABLE WORDLISTS".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    let summary = category_summary(wordlists);
    let name_width = summary.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);

    for (name, count) in summary {
        println!(
            "  {}  {}",
            format!("{name:<name_width$}").yellow(),
            format!("{count} entries").bright_black()
        );
    }
    println!();
}
