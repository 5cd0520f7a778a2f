//! Screen composition
//!
//! Turns a session into a list of styled lines. Both frontends paint the same
//! lines; only the mapping from `Tone` to colours differs.

use super::art;
use super::formatters::pad_block;
use crate::core::{Outcome, Round};
use crate::game::{GameSession, MenuView, SessionState};
use crate::wordlists::Wordlists;
use rand::Rng;

/// Semantic style of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Banner,
    Frame,
    Heading,
    /// A command the player can type
    Keyword,
    /// A placeholder or category name inside a command
    Argument,
    Accent,
    Success,
    Failure,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

/// One centered line made of styled segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLine {
    pub segments: Vec<Segment>,
}

impl ScreenLine {
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::toned(text, Tone::Plain)
    }

    #[must_use]
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self::blank().with(text, tone)
    }

    #[must_use]
    pub fn with(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            tone,
        });
        self
    }

    /// Text without styling
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width in characters
    #[must_use]
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| s.text.chars().count()).sum()
    }
}

/// What kind of input the screen is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A command or guess terminated by enter
    Line,
    /// Anything; the value is discarded
    AnyKey,
}

/// A full screen ready to paint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<ScreenLine>,
    pub input: InputKind,
    /// Short label for the input field
    pub prompt: &'static str,
}

impl Screen {
    /// Plain text of every line, for tests and logs
    #[must_use]
    pub fn text(&self) -> Vec<String> {
        self.lines.iter().map(ScreenLine::text).collect()
    }
}

/// Build the screen for the session's current state
#[must_use]
pub fn compose<R: Rng>(session: &GameSession<R>) -> Screen {
    let mut lines = Vec::new();
    push_block(&mut lines, art::BANNER, Tone::Banner);
    lines.push(ScreenLine::blank());

    let (input, prompt) = match session.state() {
        SessionState::Menu {
            resume,
            view,
            notice,
        } => {
            if let Some(notice) = notice {
                lines.push(ScreenLine::toned(notice.clone(), Tone::Failure));
                lines.push(ScreenLine::blank());
            }
            compose_menu(&mut lines, session.wordlists(), resume.as_ref(), view)
        }
        SessionState::Playing(round) => {
            compose_round(&mut lines, round);
            (InputKind::Line, "guess a letter")
        }
        SessionState::Ended(round) => {
            compose_ending(&mut lines, round);
            (InputKind::Line, "enter to play again")
        }
    };

    Screen {
        lines,
        input,
        prompt,
    }
}

fn compose_menu(
    lines: &mut Vec<ScreenLine>,
    wordlists: &Wordlists,
    resume: Option<&Round>,
    view: &MenuView,
) -> (InputKind, &'static str) {
    match view {
        MenuView::Commands => {
            lines.extend(command_lines());
            if resume.is_some() {
                lines.push(ScreenLine::blank());
                lines.push(
                    ScreenLine::toned("'", Tone::Plain)
                        .with("back", Tone::Keyword)
                        .with("' to return to the game", Tone::Plain),
                );
            }
            lines.push(ScreenLine::blank());
            lines.push(heading("AVAILABLE WORDLISTS"));
            lines.push(ScreenLine::blank());
            lines.extend(
                wordlists
                    .names()
                    .map(|name| ScreenLine::toned(name, Tone::Argument)),
            );
            (InputKind::Line, "command")
        }
        MenuView::Adding => {
            lines.extend(command_lines());
            lines.push(ScreenLine::blank());
            lines.push(heading("ADD WORDLIST"));
            lines.push(ScreenLine::blank());
            lines.push(ScreenLine::plain("use the following format to add to/create a wordlist:"));
            lines.push(
                ScreenLine::toned("category", Tone::Argument)
                    .with(",", Tone::Plain)
                    .with("entry", Tone::Accent)
                    .with(",", Tone::Plain)
                    .with("entry", Tone::Accent)
                    .with(",", Tone::Plain)
                    .with("entry", Tone::Accent),
            );
            lines.push(ScreenLine::blank());
            lines.push(ScreenLine::toned(
                "(input must contain a category and at least 1 entry)",
                Tone::Muted,
            ));
            lines.push(ScreenLine::toned(
                "new categories show up in the wordlist listing; use 'show' to see entries",
                Tone::Muted,
            ));
            (InputKind::Line, "category,entry,...")
        }
        MenuView::Showing(name) => {
            lines.push(
                ScreenLine::toned("### ", Tone::Frame)
                    .with("ITEMS IN ", Tone::Heading)
                    .with(name.to_uppercase(), Tone::Argument)
                    .with(" ###", Tone::Frame),
            );
            lines.push(ScreenLine::blank());
            lines.extend(
                wordlists
                    .get(name)
                    .unwrap_or_default()
                    .iter()
                    .map(|entry| ScreenLine::plain(entry.clone())),
            );
            lines.push(ScreenLine::blank());
            lines.push(ScreenLine::toned("press any key to continue", Tone::Muted));
            (InputKind::AnyKey, "press any key")
        }
    }
}

fn command_lines() -> Vec<ScreenLine> {
    vec![
        heading("COMMANDS"),
        ScreenLine::blank(),
        ScreenLine::toned("'", Tone::Plain)
            .with("name-of-list", Tone::Argument)
            .with("' to start a new game", Tone::Plain),
        ScreenLine::toned("'", Tone::Plain)
            .with("random", Tone::Keyword)
            .with("' to start a game using a random list", Tone::Plain),
        ScreenLine::toned("'", Tone::Plain)
            .with("show", Tone::Keyword)
            .with(" ", Tone::Plain)
            .with("name-of-list", Tone::Argument)
            .with("' to show items in that list", Tone::Plain),
        ScreenLine::toned("'", Tone::Plain)
            .with("add", Tone::Keyword)
            .with("' to add to / create a list", Tone::Plain),
        ScreenLine::toned("'", Tone::Plain)
            .with("exit", Tone::Keyword)
            .with("' to quit the game", Tone::Plain),
    ]
}

fn compose_round(lines: &mut Vec<ScreenLine>, round: &Round) {
    push_block(
        lines,
        art::stage(i32::from(round.attempts_remaining())),
        Tone::Frame,
    );
    lines.push(ScreenLine::blank());
    lines.push(ScreenLine::toned(round.revealed_text(), Tone::Accent));
    lines.push(ScreenLine::blank());
    lines.push(ScreenLine::plain(attempts_text(round.attempts_remaining())));

    let guessed = round.guessed_letters();
    if !guessed.is_empty() {
        let letters: Vec<String> = guessed.iter().map(char::to_string).collect();
        lines.push(ScreenLine::toned(
            format!("guessed: {}", letters.join(" ")),
            Tone::Muted,
        ));
    }

    lines.push(ScreenLine::blank());
    lines.push(
        ScreenLine::toned("Enter '", Tone::Plain)
            .with("#", Tone::Keyword)
            .with("' at any time to go to the options menu", Tone::Plain),
    );
    lines.push(
        ScreenLine::toned("(current wordlist: ", Tone::Muted)
            .with(round.category(), Tone::Argument)
            .with(")", Tone::Muted),
    );
}

fn compose_ending(lines: &mut Vec<ScreenLine>, round: &Round) {
    push_block(
        lines,
        art::stage(i32::from(round.attempts_remaining())),
        Tone::Frame,
    );
    lines.push(ScreenLine::blank());

    match round.outcome() {
        Some(Outcome::Win) => lines.push(ScreenLine::toned("YOU SURVIVED! 😀", Tone::Success)),
        _ => lines.push(ScreenLine::toned("YOU DIED! 😞", Tone::Failure)),
    }
    lines.push(
        ScreenLine::toned("The answer was '", Tone::Plain)
            .with(round.answer(), Tone::Accent)
            .with("'", Tone::Plain),
    );
    lines.push(ScreenLine::blank());
    lines.push(
        ScreenLine::toned("press '", Tone::Plain)
            .with("enter", Tone::Success)
            .with("' to play again", Tone::Plain),
    );
    lines.push(
        ScreenLine::toned("enter '", Tone::Plain)
            .with("exit", Tone::Keyword)
            .with("' to quit the game", Tone::Plain),
    );
    lines.push(
        ScreenLine::toned("enter '", Tone::Plain)
            .with("#", Tone::Keyword)
            .with("' to go to the options menu", Tone::Plain),
    );
}

fn heading(title: &str) -> ScreenLine {
    ScreenLine::toned("### ", Tone::Frame)
        .with(title, Tone::Heading)
        .with(" ###", Tone::Frame)
}

/// Art rows padded to one width so they stay aligned when centered
fn push_block(lines: &mut Vec<ScreenLine>, block: &[&str], tone: Tone) {
    lines.extend(
        pad_block(block)
            .into_iter()
            .map(|row| ScreenLine::toned(row, tone)),
    );
}

fn attempts_text(attempts: u8) -> String {
    match attempts {
        1 => "You have 1 attempt left".to_string(),
        n => format!("You have {n} attempts left"),
    }
}
