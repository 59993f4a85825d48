//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::WORD_LENGTH;
use crate::game::{GameDriver, GameError, GameSession};
use crate::output::{print_guess_row, print_keyboard, print_round_over, print_statistics};
use crate::providers::{SecretProvider, WordOracle};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewRound,
    Stats,
    Guess(String),
}

impl Command {
    /// Interpret a line of input; anything that is not a command is a guess
    ///
    /// A five-letter word is always a guess, so words like "stats" stay
    /// playable. Use the `:s` form for statistics.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.len() == WORD_LENGTH && line.chars().all(|c| c.is_ascii_alphabetic()) {
            return Self::Guess(line.to_string());
        }

        match line.to_lowercase().as_str() {
            "quit" | "exit" | ":q" => Self::Quit,
            "new" | ":n" => Self::NewRound,
            ":s" => Self::Stats,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<P: SecretProvider, O: WordOracle>(driver: &mut GameDriver<P, O>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle Clone - Line Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the secret five-letter word. After each guess:");
    println!("  - {} letter is in the right spot", " G ".black().on_green());
    println!("  - {} letter is in the word, elsewhere", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " X ".white().on_bright_black());
    println!("Commands: 'new' for a new word, ':s' for statistics, 'quit' to exit\n");

    if !start_round(driver)? {
        return Ok(());
    }

    loop {
        let Some(session) = driver.session() else {
            return Ok(());
        };

        if session.is_terminal() {
            print_round_over(session);
            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    if !start_round(driver)? {
                        return Ok(());
                    }
                    continue;
                }
                _ => break,
            }
        }

        let prompt = format!("Guess {}/{}", session.attempt() + 1, session.max_tries());
        match Command::parse(&get_user_input(&prompt)?) {
            Command::Quit => break,
            Command::Stats => print_statistics(driver.stats()),
            Command::NewRound => {
                if !start_round(driver)? {
                    return Ok(());
                }
            }
            Command::Guess(text) => match driver.submit(&text) {
                Ok(_) => {
                    if let Some(session) = driver.session() {
                        print_board(session);
                    }
                }
                Err(err) => print_error(&err),
            },
        }
    }

    print_statistics(driver.stats());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Start a round, offering retries while the word source is unavailable
///
/// Returns `false` if the player gave up.
fn start_round<P: SecretProvider, O: WordOracle>(driver: &mut GameDriver<P, O>) -> Result<bool> {
    loop {
        println!("Loading a new word...");
        match driver.start_round() {
            Ok(_) => {
                println!("{}\n", "🔄 New round started!".bright_cyan());
                return Ok(true);
            }
            Err(err) => {
                print_error(&err);
                let answer = get_user_input("Try again? (yes/no)")?.to_lowercase();
                if !matches!(answer.as_str(), "yes" | "y") {
                    return Ok(false);
                }
            }
        }
    }
}

fn print_board(session: &GameSession) {
    println!();
    for guess in session.guesses() {
        print_guess_row(&guess.word, &guess.result);
    }
    println!();
    print_keyboard(session.keyboard());
    println!();
}

fn print_error(err: &GameError) {
    let text = format!("❌ {err}");
    if err.is_transient() {
        println!("{}\n", text.yellow());
    } else {
        println!("{}\n", text.red());
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
