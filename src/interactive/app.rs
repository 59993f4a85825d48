//! TUI application state and logic

use crate::game::{GameDriver, GameError, GameState, GuessInput, Outcome};
use crate::output::formatters::share_grid;
use crate::providers::{SecretProvider, WordOracle};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Which screen the app is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Waiting for a secret word
    Loading,
    Playing,
    /// Won or lost; the secret is revealed
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

/// Application state
pub struct App<P, O> {
    pub driver: GameDriver<P, O>,
    pub input: GuessInput,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<P: SecretProvider, O: WordOracle> App<P, O> {
    #[must_use]
    pub fn new(driver: GameDriver<P, O>) -> Self {
        let welcome = match driver.max_tries() {
            1 => "Welcome! Guess the five-letter word in one try.".to_string(),
            n => format!("Welcome! Guess the five-letter word in {n} tries."),
        };
        Self {
            driver,
            input: GuessInput::new(),
            messages: vec![Message {
                text: welcome,
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self.driver.session() {
            None => Screen::Loading,
            Some(session) if session.is_terminal() => Screen::RoundOver,
            Some(_) => Screen::Playing,
        }
    }

    /// Fetch a new secret and reset the board
    pub fn start_round(&mut self) {
        match self.driver.start_round() {
            Ok(_) => {
                self.input.clear();
                self.add_message("New round started. Good luck!", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.add_message("Press Enter to try again.", MessageStyle::Info);
            }
        }
    }

    /// Submit the typed guess
    pub fn submit(&mut self) {
        if !self.input.is_complete() {
            self.add_message("Not enough letters", MessageStyle::Warning);
            return;
        }

        match self.driver.submit(self.input.as_str()) {
            Ok(result) => {
                debug!(feedback = %result, "Guess accepted");
                self.input.clear();
                self.announce_round_end();
            }
            Err(err) => {
                let style = if err.is_transient() {
                    MessageStyle::Warning
                } else {
                    MessageStyle::Error
                };
                // Keep the letters so an unreachable dictionary can be retried
                if matches!(err, GameError::AlreadyGuessed(_) | GameError::NotARealWord(_)) {
                    self.input.clear();
                }
                self.add_message(&err.to_string(), style);
            }
        }
    }

    fn announce_round_end(&mut self) {
        let Some(session) = self.driver.session() else {
            return;
        };

        let (text, style) = match session.state() {
            GameState::Active => return,
            GameState::Terminal(Outcome::Won) => {
                let celebration = match session.attempt() {
                    1 => "🎯 HOLE IN ONE! Extraordinary!",
                    2 => "🔥 MAGNIFICENT! Two guesses!",
                    3 => "✨ SPLENDID! Three guesses!",
                    4 => "👏 GREAT JOB! Four guesses!",
                    5 => "🎉 NICE WORK! Five guesses!",
                    _ => "😅 PHEW! Got it!",
                };
                (celebration.to_string(), MessageStyle::Success)
            }
            GameState::Terminal(Outcome::Lost) => (
                format!("Game over. The word was {}.", session.secret().to_uppercase()),
                MessageStyle::Error,
            ),
        };

        info!(grid = %share_grid(session), "Round over");
        self.add_message(&text, style);
        self.add_message("Press Enter or 'n' for a new word, 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.screen() {
            Screen::Loading => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.start_round(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::RoundOver => match key.code {
                KeyCode::Enter | KeyCode::Char('n') => self.start_round(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Char(c) => {
                    self.input.push(c);
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: SecretProvider, O: WordOracle>(app: App<P, O>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, P, O>(terminal: &mut Terminal<B>, mut app: App<P, O>) -> Result<()>
where
    B: ratatui::backend::Backend,
    P: SecretProvider,
    O: WordOracle,
{
    // Show the loading screen while the first word is fetched
    terminal.draw(|f| super::rendering::ui(f, &app))?;
    app.start_round();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
