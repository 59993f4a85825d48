//! Core domain types for the game
//!
//! Pure value types and the scoring function: no I/O, no state beyond what
//! the caller owns.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{GuessResult, LetterFeedback, score};
pub use keyboard::{KeyboardStatus, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
