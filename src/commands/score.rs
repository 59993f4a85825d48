//! Guess scoring command
//!
//! Evaluates one guess against a given secret without playing a round.

use crate::core::{GuessResult, Word, score};
use crate::game::GameError;

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub result: GuessResult,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not exactly five letters.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, GameError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        result: score(&secret, &guess),
    })
}
