//! TUI rendering with ratatui
//!
//! Paints the composed screen centered in the terminal with an input field
//! below it.

use super::app::App;
use crate::output::{InputKind, Screen, ScreenLine, Tone, compose};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let screen = compose(&*app.session);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Game screen
            Constraint::Length(3), // Input area
        ])
        .split(f.area());

    render_screen(f, &screen, chunks[0]);
    render_input(f, app, &screen, chunks[1]);
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::default(),
        Tone::Banner => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Tone::Frame => Style::default().fg(Color::Magenta),
        Tone::Heading => Style::default().fg(Color::Green),
        Tone::Keyword => Style::default().fg(Color::Red),
        Tone::Argument => Style::default().fg(Color::Yellow),
        Tone::Accent => Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
        Tone::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Tone::Failure => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Tone::Muted => Style::default().fg(Color::DarkGray),
    }
}

fn to_line(line: &ScreenLine) -> Line<'_> {
    Line::from(
        line.segments
            .iter()
            .map(|s| Span::styled(s.text.as_str(), tone_style(s.tone)))
            .collect::<Vec<_>>(),
    )
}

fn render_screen(f: &mut Frame, screen: &Screen, area: Rect) {
    let content: Vec<Line> = screen.lines.iter().map(to_line).collect();

    // Vertically center when the screen is shorter than the area
    let inner_height = area.height.saturating_sub(2) as usize;
    let top = inner_height.saturating_sub(content.len()) / 2;
    let mut lines = vec![Line::default(); top];
    lines.extend(content);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, screen: &Screen, area: Rect) {
    let (title, color) = match screen.input {
        InputKind::Line => (
            format!(" {} | Enter: submit | Ctrl-C: quit ", screen.prompt),
            Color::Yellow,
        ),
        InputKind::AnyKey => (format!(" {} ", screen.prompt), Color::Cyan),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, SessionConfig};
    use crate::wordlists::{WordlistStore, Wordlists};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_round_and_input() {
        let mut session = GameSession::with_rng(
            Wordlists::from_table(&[("animals", &["cat"])]),
            WordlistStore::new("unused.json"),
            SessionConfig::default(),
            StdRng::seed_from_u64(2),
        );
        session.start(Some("animals"));
        session.dispatch("a");

        let mut app = App::new(&mut session);
        app.input_buffer.push('t');

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("_ a _"));
        assert!(text.contains("You have 7 attempts left"));
        assert!(text.contains("guess a letter"));
    }

    #[test]
    fn tone_styles_differ_for_outcomes() {
        assert_ne!(tone_style(Tone::Success), tone_style(Tone::Failure));
        assert_eq!(tone_style(Tone::Plain), Style::default());
    }
}
