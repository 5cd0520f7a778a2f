//! Formatting utilities for terminal output

/// Pad every row of an art block to the width of the widest row
#[must_use]
pub fn pad_block(block: &[&str]) -> Vec<String> {
    let width = block.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    block.iter().map(|row| format!("{row:<width$}")).collect()
}

/// Left padding that centers `content_width` characters in `terminal_width`
///
/// Content wider than the terminal gets no padding.
#[must_use]
pub const fn center_offset(content_width: usize, terminal_width: usize) -> usize {
    terminal_width.saturating_sub(content_width) / 2
}
