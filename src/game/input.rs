//! Guess input buffer
//!
//! Front ends feed keystrokes through here so a candidate handed to
//! validation is already at most five lowercase letters.

use crate::core::WORD_LENGTH;

/// The guess currently being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessInput {
    letters: String,
}

impl GuessInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a letter, returning whether it was accepted
    ///
    /// Non-letters and anything typed past the fifth letter are ignored.
    pub fn push(&mut self, ch: char) -> bool {
        if !ch.is_ascii_alphabetic() || self.is_complete() {
            return false;
        }
        self.letters.push(ch.to_ascii_lowercase());
        true
    }

    /// Type a whole string, keeping only the letters that fit
    pub fn push_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.push(ch);
        }
    }

    /// Remove the last letter
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Take the contents, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.letters)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }
}
