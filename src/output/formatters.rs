//! Formatting utilities for terminal output

use crate::game::{GameSession, GameState, Outcome};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Shareable summary of a round: a score line followed by one emoji row per guess
///
/// A lost round is scored `X/6`.
///
/// # Examples
/// ```
/// use wordle_clone::core::Word;
/// use wordle_clone::game::GameSession;
/// use wordle_clone::output::formatters::share_grid;
///
/// let mut session = GameSession::new(Word::new("slate").unwrap());
/// session.submit_guess("crane").unwrap();
/// session.submit_guess("slate").unwrap();
///
/// assert_eq!(share_grid(&session), "2/6\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(session: &GameSession) -> String {
    let score = match session.state() {
        GameState::Terminal(Outcome::Lost) => "X".to_string(),
        _ => session.attempt().to_string(),
    };

    let mut lines = vec![format!("{score}/{}", session.max_tries())];
    lines.extend(session.guesses().iter().map(|g| g.result.to_emoji()));
    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn share_grid_for_lost_round() {
        let mut session = GameSession::with_max_tries(Word::new("slate").unwrap(), 2);
        session.submit_guess("moist").unwrap();
        session.submit_guess("pudgy").unwrap();

        let grid = share_grid(&session);
        assert!(grid.starts_with("X/2\n"));
        assert_eq!(grid.lines().count(), 3);
    }

    #[test]
    fn share_grid_for_fresh_round() {
        let session = GameSession::new(Word::new("slate").unwrap());
        assert_eq!(share_grid(&session), "0/6");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(1, 2, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.concat().chars().collect();
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }
}
