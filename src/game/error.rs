//! Errors reported to the player

use crate::core::WordError;
use crate::providers::{OracleError, ProviderError};
use thiserror::Error;

/// Every way a game action can be refused
///
/// All of these are recoverable. None of them change the session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Guesses must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("Guesses may only contain letters")]
    InvalidCharacters,

    #[error("You already guessed {}", .0.to_uppercase())]
    AlreadyGuessed(String),

    #[error("The round is over; start a new one")]
    SessionTerminal,

    #[error("{} is not a valid word", .0.to_uppercase())]
    NotARealWord(String),

    #[error("Could not fetch a secret word: {0}")]
    ProviderUnavailable(#[source] ProviderError),

    #[error("Could not check the word, please try again: {0}")]
    OracleUnavailable(#[source] OracleError),

    #[error("No round in progress yet")]
    NoActiveRound,
}

impl GameError {
    /// Boundary failures that may succeed on an immediate retry
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::ProviderUnavailable(err) => err.is_transient(),
            Self::OracleUnavailable(_) => true,
            _ => false,
        }
    }
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength(len),
            WordError::NonAscii | WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_errors_map_to_game_errors() {
        assert!(matches!(
            GameError::from(WordError::InvalidLength(3)),
            GameError::InvalidLength(3)
        ));
        assert!(matches!(
            GameError::from(WordError::NonAscii),
            GameError::InvalidCharacters
        ));
    }

    #[test]
    fn messages_show_words_in_uppercase() {
        let err = GameError::AlreadyGuessed("crane".to_string());
        assert_eq!(err.to_string(), "You already guessed CRANE");

        let err = GameError::NotARealWord("xyzzy".to_string());
        assert_eq!(err.to_string(), "XYZZY is not a valid word");
    }

    #[test]
    fn only_boundary_failures_are_transient() {
        assert!(GameError::OracleUnavailable(OracleError::Unavailable("down".into())).is_transient());
        assert!(
            GameError::ProviderUnavailable(ProviderError::Unavailable("timeout".into()))
                .is_transient()
        );
        assert!(!GameError::SessionTerminal.is_transient());
        assert!(!GameError::InvalidLength(4).is_transient());
    }

    #[test]
    fn exhausted_or_broken_providers_are_not_retryable() {
        assert!(!GameError::ProviderUnavailable(ProviderError::Empty).is_transient());
        assert!(
            !GameError::ProviderUnavailable(ProviderError::InvalidWord("banana".into()))
                .is_transient()
        );
    }
}
