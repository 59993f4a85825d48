//! Round state machine
//!
//! A `GameSession` owns one round: the secret, the guesses made so far and the
//! keyboard hints. It only changes through [`GameSession::submit_guess`] and
//! [`GameSession::start_new_round`], and an error from either leaves it as it was.

use super::error::GameError;
use crate::core::{GuessResult, KeyboardStatus, Word, score};
use tracing::{debug, info};

/// Attempts allowed per round
pub const MAX_TRIES: usize = 6;

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Where the round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting guesses
    Active,
    /// Won or out of attempts
    Terminal(Outcome),
}

/// A submitted guess with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: Word,
    pub result: GuessResult,
}

/// One round of the game
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    guesses: Vec<ScoredGuess>,
    keyboard: KeyboardStatus,
    state: GameState,
    max_tries: usize,
}

impl GameSession {
    /// Start a round with the standard six attempts
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::with_max_tries(secret, MAX_TRIES)
    }

    /// Start a round with a custom attempt limit (at least one)
    #[must_use]
    pub fn with_max_tries(secret: Word, max_tries: usize) -> Self {
        let max_tries = max_tries.max(1);
        Self {
            secret,
            guesses: Vec::with_capacity(max_tries),
            keyboard: KeyboardStatus::default(),
            state: GameState::Active,
            max_tries,
        }
    }

    /// Score a guess and advance the round
    ///
    /// The guess is compared case-insensitively. Dictionary checks are the
    /// caller's job; any five letters are accepted here.
    ///
    /// # Errors
    /// - `SessionTerminal` if the round is already over
    /// - `InvalidLength` / `InvalidCharacters` if `text` is not five letters
    /// - `AlreadyGuessed` if the word was already played this round
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    /// use wordle_clone::game::{GameSession, GameState, Outcome};
    ///
    /// let mut session = GameSession::new(Word::new("slate").unwrap());
    /// let result = session.submit_guess("crane").unwrap();
    /// assert_eq!(result.to_emoji(), "⬜⬜🟩⬜🟩");
    /// assert_eq!(session.attempt(), 1);
    ///
    /// session.submit_guess("SLATE").unwrap();
    /// assert_eq!(session.state(), GameState::Terminal(Outcome::Won));
    /// ```
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessResult, GameError> {
        if self.is_terminal() {
            return Err(GameError::SessionTerminal);
        }

        let word = Word::new(text)?;
        self.check_not_guessed(&word)?;

        let result = score(&self.secret, &word);
        self.guesses.push(ScoredGuess { word, result });
        self.keyboard.merge(&word, &result);

        if word == self.secret {
            self.state = GameState::Terminal(Outcome::Won);
        } else if self.guesses.len() == self.max_tries {
            self.state = GameState::Terminal(Outcome::Lost);
        }

        debug!(
            guess = %word,
            feedback = %result,
            attempt = self.attempt(),
            state = ?self.state,
            "Guess scored"
        );

        Ok(result)
    }

    /// Fail with `AlreadyGuessed` if `word` was played this round
    ///
    /// # Errors
    /// Returns `GameError::AlreadyGuessed` on a repeat.
    pub fn check_not_guessed(&self, word: &Word) -> Result<(), GameError> {
        if self.guesses.iter().any(|g| g.word == *word) {
            return Err(GameError::AlreadyGuessed(word.to_string()));
        }
        Ok(())
    }

    /// Discard the round and start over with a new secret
    ///
    /// Valid from any state, including a finished round.
    pub fn start_new_round(&mut self, secret: Word) {
        self.secret = secret;
        self.guesses.clear();
        self.keyboard.reset();
        self.state = GameState::Active;
        info!(max_tries = self.max_tries, "New round started");
    }

    /// Check if any guess matched the secret
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.guesses.iter().any(|g| g.word == self.secret)
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.state, GameState::Terminal(_))
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The secret word
    ///
    /// Front ends should only reveal it once the round is terminal.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of guesses made this round
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Attempts left before the round is lost
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_tries - self.guesses.len()
    }

    /// Guesses in the order they were made
    #[must_use]
    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&ScoredGuess> {
        self.guesses.last()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    const LOSING_GUESSES: [&str; 6] = ["crane", "moist", "pudgy", "lobby", "fjord", "witch"];

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::new(secret).unwrap())
    }

    #[test]
    fn new_session_is_active_and_empty() {
        let s = session("slate");
        assert_eq!(s.state(), GameState::Active);
        assert_eq!(s.attempt(), 0);
        assert_eq!(s.remaining(), MAX_TRIES);
        assert!(s.guesses().is_empty());
        assert!(s.keyboard().is_blank());
        assert!(!s.is_won());
    }

    #[test]
    fn winning_guess_ends_round() {
        let mut s = session("slate");
        s.submit_guess("crane").unwrap();
        let result = s.submit_guess("slate").unwrap();

        assert!(result.is_solved());
        assert!(s.is_won());
        assert_eq!(s.attempt(), 2);
        assert_eq!(s.state(), GameState::Terminal(Outcome::Won));
    }

    #[test]
    fn win_on_last_attempt_counts_as_win() {
        let mut s = session("slate");
        for guess in &LOSING_GUESSES[..5] {
            s.submit_guess(guess).unwrap();
        }
        s.submit_guess("slate").unwrap();
        assert_eq!(s.state(), GameState::Terminal(Outcome::Won));
    }

    #[test]
    fn six_misses_lose_and_further_guesses_fail() {
        let mut s = session("slate");
        for guess in LOSING_GUESSES {
            s.submit_guess(guess).unwrap();
        }

        assert_eq!(s.attempt(), MAX_TRIES);
        assert_eq!(s.state(), GameState::Terminal(Outcome::Lost));
        assert!(!s.is_won());

        assert!(matches!(
            s.submit_guess("slate"),
            Err(GameError::SessionTerminal)
        ));
        assert_eq!(s.attempt(), MAX_TRIES);
    }

    #[test]
    fn repeat_guess_rejected_without_state_change() {
        let mut s = session("slate");
        s.submit_guess("crane").unwrap();
        let keyboard = s.keyboard().clone();

        let err = s.submit_guess("CRANE").unwrap_err();
        assert!(matches!(err, GameError::AlreadyGuessed(ref w) if w == "crane"));
        assert_eq!(s.attempt(), 1);
        assert_eq!(s.keyboard(), &keyboard);
        assert_eq!(s.state(), GameState::Active);
    }

    #[test]
    fn invalid_guesses_leave_session_untouched() {
        let mut s = session("slate");

        assert!(matches!(
            s.submit_guess("cran"),
            Err(GameError::InvalidLength(4))
        ));
        assert!(matches!(
            s.submit_guess("cranes"),
            Err(GameError::InvalidLength(6))
        ));
        assert!(matches!(
            s.submit_guess("cr4ne"),
            Err(GameError::InvalidCharacters)
        ));
        assert_eq!(s.attempt(), 0);
        assert!(s.keyboard().is_blank());
    }

    #[test]
    fn new_round_from_terminal_resets_everything() {
        let mut s = session("slate");
        for guess in LOSING_GUESSES {
            s.submit_guess(guess).unwrap();
        }
        assert!(s.is_terminal());

        s.start_new_round(Word::new("crane").unwrap());

        assert_eq!(s.state(), GameState::Active);
        assert_eq!(s.attempt(), 0);
        assert!(s.guesses().is_empty());
        assert!(s.keyboard().iter().all(|(_, st)| st == LetterStatus::Unknown));
        assert_eq!(s.secret().as_str(), "crane");

        // Words from the previous round may be played again
        assert!(s.submit_guess("moist").is_ok());
    }

    #[test]
    fn keyboard_tracks_best_status() {
        let mut s = session("crane");
        s.submit_guess("train").unwrap();
        assert_eq!(s.keyboard().get('a'), LetterStatus::Correct);

        s.submit_guess("about").unwrap();
        assert_eq!(s.keyboard().get('a'), LetterStatus::Correct);
        assert_eq!(s.keyboard().get('b'), LetterStatus::Absent);
    }

    #[test]
    fn custom_max_tries() {
        let mut s = GameSession::with_max_tries(Word::new("slate").unwrap(), 2);
        s.submit_guess("crane").unwrap();
        s.submit_guess("moist").unwrap();
        assert_eq!(s.state(), GameState::Terminal(Outcome::Lost));

        let s = GameSession::with_max_tries(Word::new("slate").unwrap(), 0);
        assert_eq!(s.max_tries(), 1);
    }

    #[test]
    fn last_guess_tracks_latest() {
        let mut s = session("slate");
        assert!(s.last_guess().is_none());
        s.submit_guess("crane").unwrap();
        s.submit_guess("moist").unwrap();
        assert_eq!(s.last_guess().unwrap().word.as_str(), "moist");
    }
}
