//! Word sources at the game's boundary
//!
//! A round needs a secret word from somewhere, and guesses have to be checked
//! against a dictionary before they reach the session. Both can fail (an empty
//! list, a network error), and both failures leave the game state alone.

mod local;
mod online;

pub use local::{Dictionary, RandomList};
pub use online::{DatamuseOracle, RandomWordApi};

use crate::core::Word;
use thiserror::Error;

/// Failure to produce a secret word
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no words available")]
    Empty,
    #[error("service returned an unusable word: {0:?}")]
    InvalidWord(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Unavailable(String),
}

impl ProviderError {
    /// Whether asking again could produce a word
    ///
    /// An empty list stays empty, and a service that hands out an unusable
    /// word is misconfigured rather than briefly down.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Unavailable(_))
    }
}

/// Failure to decide whether a guess is a real word
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Unavailable(String),
}

/// Supplies one secret word per round
pub trait SecretProvider {
    /// Produce the next secret word
    ///
    /// # Errors
    /// Returns `ProviderError` if no word could be produced.
    fn next_secret(&mut self) -> Result<Word, ProviderError>;
}

/// Decides whether a candidate guess is a dictionary word
pub trait WordOracle {
    /// Check `word` against the dictionary
    ///
    /// # Errors
    /// Returns `OracleError` if the dictionary could not be consulted.
    fn is_word(&self, word: &Word) -> Result<bool, OracleError>;
}

impl<T: SecretProvider + ?Sized> SecretProvider for Box<T> {
    fn next_secret(&mut self) -> Result<Word, ProviderError> {
        (**self).next_secret()
    }
}

impl<T: WordOracle + ?Sized> WordOracle for Box<T> {
    fn is_word(&self, word: &Word) -> Result<bool, OracleError> {
        (**self).is_word(word)
    }
}
