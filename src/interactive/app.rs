//! TUI application state and logic

use crate::game::{GameSession, Step};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Longest line the input field accepts
const MAX_INPUT: usize = 256;

/// Application state
pub struct App<'a, R: Rng> {
    pub session: &'a mut GameSession<R>,
    pub input_buffer: String,
    pub should_quit: bool,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(session: &'a mut GameSession<R>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            should_quit: false,
        }
    }

    /// Send the input buffer to the session as one line
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        self.forward(&line);
    }

    fn forward(&mut self, line: &str) {
        if self.session.dispatch(line) == Step::Exit {
            self.should_quit = true;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl-C quits from every screen
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            debug!("ctrl-c");
            self.should_quit = true;
            return;
        }

        if self.session.awaits_keypress() {
            self.input_buffer.clear();
            self.forward("");
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < MAX_INPUT {
                    self.input_buffer.push(c);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(session: &mut GameSession<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, App::new(session));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("session closed");
    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
