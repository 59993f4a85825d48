//! Per-letter keyboard hints
//!
//! Aggregates the best feedback seen for each letter across a round so the
//! on-screen keyboard can be coloured.

use super::feedback::{GuessResult, LetterFeedback};
use super::word::{Word, letter_index};

/// Best known status of a letter
///
/// Ordered by precedence: `Unknown < Absent < Misplaced < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Misplaced,
    Correct,
}

impl From<LetterFeedback> for LetterStatus {
    fn from(feedback: LetterFeedback) -> Self {
        match feedback {
            LetterFeedback::Absent => Self::Absent,
            LetterFeedback::Misplaced => Self::Misplaced,
            LetterFeedback::Correct => Self::Correct,
        }
    }
}

/// Status of all 26 letters for the current round
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardStatus([LetterStatus; 26]);

impl KeyboardStatus {
    /// Status of a letter; anything outside `a..=z` (either case) is `Unknown`
    #[must_use]
    pub fn get(&self, letter: char) -> LetterStatus {
        if letter.is_ascii_alphabetic() {
            self.0[letter_index(letter.to_ascii_lowercase() as u8)]
        } else {
            LetterStatus::Unknown
        }
    }

    /// Fold a scored guess in, upgrading letters and never downgrading them
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{KeyboardStatus, LetterStatus, Word, score};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let mut keyboard = KeyboardStatus::default();
    ///
    /// let first = Word::new("crisp").unwrap();
    /// keyboard.merge(&first, &score(&secret, &first));
    /// assert_eq!(keyboard.get('c'), LetterStatus::Correct);
    ///
    /// let second = Word::new("occur").unwrap();
    /// keyboard.merge(&second, &score(&secret, &second));
    /// assert_eq!(keyboard.get('c'), LetterStatus::Correct);
    /// ```
    pub fn merge(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, feedback) in guess.chars().iter().zip(result.iter()) {
            let slot = &mut self.0[letter_index(letter)];
            *slot = (*slot).max(LetterStatus::from(feedback));
        }
    }

    /// Forget everything
    pub fn reset(&mut self) {
        self.0 = [LetterStatus::Unknown; 26];
    }

    /// Iterate `(letter, status)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.0.iter().copied())
    }

    /// Check if no letter has been revealed yet
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Unknown)
    }
}
