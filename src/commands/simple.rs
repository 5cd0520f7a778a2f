//! Simple line mode
//!
//! Clears the terminal, prints the centered screen and reads one line per
//! turn. Works without raw mode, so it also runs over pipes.

use crate::game::{EXIT_COMMAND, GameSession, Step};
use crate::output::{compose, print_screen};
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{self, Clear, ClearType},
};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Terminal width used when the size cannot be read
const FALLBACK_WIDTH: usize = 80;

/// Run the session until an exit command or end of input
///
/// # Errors
///
/// Returns an error if there's an I/O error clearing the terminal, writing
/// output or reading input.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        clear_screen(&mut stdout)?;
        let width = terminal::size().map_or(FALLBACK_WIDTH, |(w, _)| usize::from(w));
        print_screen(&mut stdout, &compose(session), width).context("failed to draw screen")?;

        // End of input quits like an explicit exit
        let line = get_user_input(&mut input)?.unwrap_or_else(|| EXIT_COMMAND.to_string());

        if session.dispatch(&line) == Step::Exit {
            break;
        }
    }

    clear_screen(&mut stdout)?;
    info!("session closed");
    Ok(())
}

/// Read one line without its terminator; `None` at end of input
fn get_user_input<B: BufRead>(input: &mut B) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn clear_screen<W: Write>(out: &mut W) -> Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0)).context("failed to clear terminal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn get_user_input_strips_line_endings() {
        let mut input = Cursor::new("dog\r\nc at\n");
        assert_eq!(get_user_input(&mut input).unwrap().as_deref(), Some("dog"));
        assert_eq!(get_user_input(&mut input).unwrap().as_deref(), Some("c at"));
        assert_eq!(get_user_input(&mut input).unwrap(), None);
    }

    #[test]
    fn get_user_input_keeps_empty_lines() {
        let mut input = Cursor::new("\n");
        assert_eq!(get_user_input(&mut input).unwrap().as_deref(), Some(""));
    }
}
