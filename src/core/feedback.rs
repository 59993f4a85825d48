//! Guess scoring
//!
//! Computes per-letter feedback for a guess against the secret word:
//! - Correct: right letter, right position
//! - Misplaced: letter is in the secret, but elsewhere
//! - Absent: letter is not in the secret (or every copy is already claimed)

use super::word::{WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Feedback for a single letter of a guess
///
/// Ordered by how much it tells the player: `Absent < Misplaced < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFeedback {
    Absent,
    Misplaced,
    Correct,
}

impl LetterFeedback {
    /// Emoji tile for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, index-aligned with the guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterFeedback; WORD_LENGTH]);

impl GuessResult {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Build a result from explicit feedback values
    #[must_use]
    pub const fn new(feedback: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Feedback at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    /// Feedback values in guess order
    #[must_use]
    pub const fn feedback(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Iterate over feedback in guess order
    pub fn iter(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.0.iter().copied()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter().filter(|&f| f == LetterFeedback::Correct).count()
    }

    /// Number of misplaced letters
    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.iter().filter(|&f| f == LetterFeedback::Misplaced).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Word, score};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// assert_eq!(score(&secret, &guess).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterFeedback::emoji).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score `guess` against `secret`
///
/// Handles duplicate letters the way the game expects:
/// 1. First pass: mark exact matches Correct and consume them from the
///    secret's letter pool
/// 2. Second pass, left to right: mark a letter Misplaced while the pool still
///    holds an unclaimed copy of it, otherwise Absent
///
/// So a letter never earns more Correct + Misplaced marks than it has copies in
/// the secret, and earlier positions win ties between duplicates.
///
/// # Examples
/// ```
/// use wordle_clone::core::{LetterFeedback::*, Word, score};
///
/// let secret = Word::new("those").unwrap();
/// let guess = Word::new("geese").unwrap();
///
/// // Only one E in THOSE and the last E already claimed it
/// assert_eq!(
///     score(&secret, &guess).feedback(),
///     &[Absent, Absent, Absent, Correct, Correct]
/// );
/// ```
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> GuessResult {
    let mut result = [LetterFeedback::Absent; WORD_LENGTH];
    let mut unclaimed = secret.letter_counts();

    // First pass: Mark exact position matches
    for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
        if g == s {
            result[i] = LetterFeedback::Correct;
            unclaimed[letter_index(g)] -= 1;
        }
    }

    // Second pass: Claim remaining copies for misplaced letters
    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == LetterFeedback::Correct {
            continue;
        }

        let available = &mut unclaimed[letter_index(g)];
        if *available > 0 {
            result[i] = LetterFeedback::Misplaced;
            *available -= 1;
        }
    }

    GuessResult(result)
}
