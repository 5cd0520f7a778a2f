//! Coloured line output for the plain terminal mode

use super::formatters::center_offset;
use super::screen::{Screen, ScreenLine, Tone};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

fn paint_segment(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Banner => text.bright_cyan().bold(),
        Tone::Frame => text.magenta(),
        Tone::Heading => text.green(),
        Tone::Keyword => text.red(),
        Tone::Argument => text.yellow(),
        Tone::Accent => text.bright_yellow(),
        Tone::Success => text.green().bold(),
        Tone::Failure => text.red().bold(),
        Tone::Muted => text.bright_black(),
    }
}

/// Render one line centered in `width` columns
///
/// The offset comes from the unstyled width, so escape codes never skew it.
#[must_use]
pub fn paint_line(line: &ScreenLine, width: usize) -> String {
    if line.segments.is_empty() {
        return String::new();
    }
    let mut out = " ".repeat(center_offset(line.width(), width));
    for segment in &line.segments {
        out.push_str(&paint_segment(&segment.text, segment.tone).to_string());
    }
    out
}

/// Write a whole screen
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_screen<W: Write>(out: &mut W, screen: &Screen, width: usize) -> io::Result<()> {
    writeln!(out)?;
    for line in &screen.lines {
        writeln!(out, "{}", paint_line(line, width))?;
    }
    writeln!(out)?;
    write!(out, "{}: ", screen.prompt.bright_black())?;
    out.flush()
}
