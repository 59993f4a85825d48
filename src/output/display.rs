//! Coloured terminal printing for the line-oriented front end

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, share_grid};
use crate::core::{GuessResult, KeyboardStatus, LetterFeedback, LetterStatus, Word};
use crate::game::{GameSession, GameState, Outcome, Statistics};
use colored::{ColoredString, Colorize};

fn tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        LetterFeedback::Correct => text.black().on_green().bold(),
        LetterFeedback::Misplaced => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black(),
    }
}

fn key(letter: char, status: LetterStatus) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match status {
        LetterStatus::Correct => text.green().bold(),
        LetterStatus::Misplaced => text.yellow().bold(),
        LetterStatus::Absent => text.bright_black(),
        LetterStatus::Unknown => text.white(),
    }
}

/// Print one guess as coloured tiles
pub fn print_guess_row(word: &Word, result: &GuessResult) {
    let tiles: Vec<String> = word
        .as_str()
        .chars()
        .zip(result.iter())
        .map(|(letter, feedback)| tile(letter, feedback).to_string())
        .collect();
    println!("  {}", tiles.join(" "));
}

/// Print the keyboard with each letter coloured by its best status
pub fn print_keyboard(keyboard: &KeyboardStatus) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| key(letter, keyboard.get(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print the evaluation of a single guess against a secret
pub fn print_score(secret: &Word, guess: &Word, result: &GuessResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.to_uppercase().bright_yellow().bold(),
        guess.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    print_guess_row(guess, result);
    println!("\n  {result}");
    println!(
        "  {} correct, {} misplaced",
        result.count_correct().to_string().green(),
        result.count_misplaced().to_string().yellow()
    );
}

/// Print the end-of-round banner, revealing the secret
pub fn print_round_over(session: &GameSession) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match session.state() {
        GameState::Terminal(Outcome::Won) => {
            let verdict = match session.attempt() {
                1 => "🏆 Hole in one!",
                2 => "⭐ Magnificent!",
                3 => "💫 Splendid!",
                4 => "✨ Great job!",
                5 => "👍 Nice work!",
                _ => "😅 Phew!",
            };
            println!("  {}", verdict.bright_green().bold());
        }
        GameState::Terminal(Outcome::Lost) => {
            println!("  {}", "Game over.".red().bold());
        }
        GameState::Active => {}
    }
    println!(
        "  The word was: {}",
        session.secret().to_uppercase().bright_yellow().bold()
    );
    println!("\n{}", share_grid(session));
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print play statistics for this process
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!("   Win rate:        {:.0}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, most, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
}
