//! TUI rendering with ratatui
//!
//! Draws the guess grid, the hint keyboard, the message log and a status bar.

use super::app::{App, MessageStyle, Screen};
use crate::core::{LetterFeedback, LetterStatus, WORD_LENGTH};
use crate::game::{GameSession, GameState, Outcome};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::providers::{SecretProvider, WordOracle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<P: SecretProvider, O: WordOracle>(f: &mut Frame, app: &App<P, O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    match app.driver.session() {
        Some(session) => render_board(f, app, session, main_chunks[0]),
        None => render_loading(f, main_chunks[0]),
    }
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE CLONE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_loading(f: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading...")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(loading, area);
}

fn render_board<P, O>(f: &mut Frame, app: &App<P, O>, session: &GameSession, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Grid
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    render_grid(f, app, session, chunks[0]);
    render_keyboard(f, session, chunks[1]);
}

const fn feedback_color(feedback: LetterFeedback) -> Color {
    match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Misplaced => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn empty_tile() -> Span<'static> {
    Span::styled(" _ ", Style::default().fg(Color::DarkGray))
}

fn render_grid<P, O>(f: &mut Frame, app: &App<P, O>, session: &GameSession, area: Rect) {
    let mut lines: Vec<Line> = session
        .guesses()
        .iter()
        .map(|guess| {
            let spans: Vec<Span> = guess
                .word
                .as_str()
                .chars()
                .zip(guess.result.iter())
                .flat_map(|(letter, feedback)| [tile(letter, feedback_color(feedback)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    // Row being typed
    if !session.is_terminal() {
        let typed: Vec<char> = app.input.as_str().chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let cell = typed.get(i).map_or_else(empty_tile, |&c| {
                    Span::styled(
                        format!(" {} ", c.to_ascii_uppercase()),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    )
                });
                [cell, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    // Unused rows
    while lines.len() < session.max_tries() {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [empty_tile(), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    if let GameState::Terminal(outcome) = session.state() {
        let color = if outcome == Outcome::Won {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                session.secret().to_uppercase(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guess {}/{} ", session.attempt(), session.max_tries()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, session: &GameSession, area: Rect) {
    let keyboard = session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = match keyboard.get(letter) {
                        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
                        LetterStatus::Misplaced => {
                            Style::default().fg(Color::Black).bg(Color::Yellow)
                        }
                        LetterStatus::Absent => Style::default().fg(Color::DarkGray),
                        LetterStatus::Unknown => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages<P, O>(f: &mut Frame, app: &App<P, O>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<P: SecretProvider, O: WordOracle>(f: &mut Frame, app: &App<P, O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats = app.driver.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = match app.screen() {
        Screen::Loading => "Enter: Retry | q: Quit",
        Screen::Playing => "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit",
        Screen::RoundOver => "Enter/n: New Word | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
