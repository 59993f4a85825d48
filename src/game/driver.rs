//! Round driver
//!
//! Sits between a front end and the session: fetches secrets, asks the
//! dictionary about guesses, and only then touches the session. Until the
//! first secret arrives there is no session and the driver is "loading".

use super::error::GameError;
use super::session::{GameSession, GameState, MAX_TRIES};
use super::stats::Statistics;
use crate::core::{GuessResult, Word};
use crate::providers::{SecretProvider, WordOracle};
use tracing::{info, instrument, warn};

/// Owns the current round and its word sources
pub struct GameDriver<P, O> {
    provider: P,
    oracle: O,
    session: Option<GameSession>,
    max_tries: usize,
    stats: Statistics,
}

impl<P: SecretProvider, O: WordOracle> GameDriver<P, O> {
    /// Create a driver in the loading state
    pub fn new(provider: P, oracle: O) -> Self {
        Self {
            provider,
            oracle,
            session: None,
            max_tries: MAX_TRIES,
            stats: Statistics::default(),
        }
    }

    /// Use a different attempt limit for rounds started from now on
    ///
    /// A round already in progress keeps its limit; the next `start_round`
    /// picks up the new one. The limit is clamped to at least 1.
    #[must_use]
    pub fn with_max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = max_tries.max(1);
        self
    }

    /// Fetch a secret and start a fresh round
    ///
    /// If the provider fails nothing changes: a driver that was loading stays
    /// loading, and a finished round stays on screen until a retry succeeds.
    ///
    /// # Errors
    /// Returns `GameError::ProviderUnavailable` if no secret could be fetched.
    #[instrument(skip(self))]
    pub fn start_round(&mut self) -> Result<&GameSession, GameError> {
        let secret = self.provider.next_secret().map_err(|err| {
            warn!(error = %err, "Secret word unavailable");
            GameError::ProviderUnavailable(err)
        })?;

        let session = match self.session.take() {
            Some(mut session) if session.max_tries() == self.max_tries => {
                session.start_new_round(secret);
                session
            }
            previous => {
                info!(
                    max_tries = self.max_tries,
                    first = previous.is_none(),
                    "Round started with a fresh session"
                );
                GameSession::with_max_tries(secret, self.max_tries)
            }
        };

        Ok(&*self.session.insert(session))
    }

    /// Validate a guess and apply it to the round
    ///
    /// Local checks run first so the dictionary is never asked about a guess
    /// the session would refuse anyway.
    ///
    /// # Errors
    /// - `NoActiveRound` while loading
    /// - `SessionTerminal`, `InvalidLength`, `InvalidCharacters`, `AlreadyGuessed`
    ///   from the session rules
    /// - `NotARealWord` if the dictionary rejects it
    /// - `OracleUnavailable` if the dictionary could not be reached
    #[instrument(skip(self))]
    pub fn submit(&mut self, text: &str) -> Result<GuessResult, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveRound)?;
        if session.is_terminal() {
            return Err(GameError::SessionTerminal);
        }

        let word = Word::new(text)?;
        session.check_not_guessed(&word)?;

        match self.oracle.is_word(&word) {
            Ok(true) => {}
            Ok(false) => {
                info!(%word, "Guess rejected by dictionary");
                return Err(GameError::NotARealWord(word.to_string()));
            }
            Err(err) => {
                warn!(error = %err, %word, "Dictionary unavailable");
                return Err(GameError::OracleUnavailable(err));
            }
        }

        let result = session.submit_guess(word.as_str())?;

        if let GameState::Terminal(outcome) = session.state() {
            self.stats.record(outcome, session.attempt());
            info!(?outcome, attempts = session.attempt(), "Round finished");
        }

        Ok(result)
    }

    /// The current round, or `None` while loading
    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Attempt limit for new rounds
    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.session.is_none()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::game::Outcome;
    use crate::providers::{Dictionary, OracleError, ProviderError};
    use crate::wordlists::loader::words_from_slice;
    use std::cell::Cell;
    use std::collections::VecDeque;

    /// Hands out a fixed queue of secrets, failing when `None` comes up
    struct Scripted(VecDeque<Option<&'static str>>);

    impl SecretProvider for Scripted {
        fn next_secret(&mut self) -> Result<Word, ProviderError> {
            match self.0.pop_front().flatten() {
                Some(word) => Ok(Word::new(word).unwrap()),
                None => Err(ProviderError::Unavailable("service down".into())),
            }
        }
    }

    /// Dictionary that can be switched off and counts lookups
    struct Flaky {
        dictionary: Dictionary,
        online: Cell<bool>,
        lookups: Cell<usize>,
    }

    impl WordOracle for Flaky {
        fn is_word(&self, word: &Word) -> Result<bool, OracleError> {
            self.lookups.set(self.lookups.get() + 1);
            if self.online.get() {
                Ok(self.dictionary.contains(word))
            } else {
                Err(OracleError::Unavailable("network error".into()))
            }
        }
    }

    fn driver(secrets: &[Option<&'static str>]) -> GameDriver<Scripted, Flaky> {
        let oracle = Flaky {
            dictionary: Dictionary::new(words_from_slice(&[
                "crane", "slate", "moist", "pudgy", "lobby", "fjord", "witch", "geese",
            ])),
            online: Cell::new(true),
            lookups: Cell::new(0),
        };
        GameDriver::new(Scripted(secrets.iter().copied().collect()), oracle)
    }

    #[test]
    fn starts_loading() {
        let mut d = driver(&[Some("slate")]);
        assert!(d.is_loading());
        assert!(matches!(d.submit("crane"), Err(GameError::NoActiveRound)));

        d.start_round().unwrap();
        assert!(!d.is_loading());
    }

    #[test]
    fn provider_failure_keeps_loading() {
        let mut d = driver(&[None, Some("slate")]);

        let err = d.start_round().unwrap_err();
        assert!(matches!(err, GameError::ProviderUnavailable(_)));
        assert!(err.is_transient());
        assert!(d.is_loading());

        // Retry succeeds
        assert_eq!(d.start_round().unwrap().secret().as_str(), "slate");
    }

    #[test]
    fn provider_failure_keeps_finished_round() {
        let mut d = driver(&[Some("slate"), None]);
        d.start_round().unwrap();
        d.submit("slate").unwrap();

        assert!(d.start_round().is_err());
        let session = d.session().unwrap();
        assert_eq!(session.state(), GameState::Terminal(Outcome::Won));
        assert_eq!(session.attempt(), 1);
    }

    #[test]
    fn unknown_word_rejected_without_state_change() {
        let mut d = driver(&[Some("slate")]);
        d.start_round().unwrap();

        let err = d.submit("xyzzy").unwrap_err();
        assert!(matches!(err, GameError::NotARealWord(ref w) if w == "xyzzy"));
        assert_eq!(d.session().unwrap().attempt(), 0);
    }

    #[test]
    fn oracle_failure_is_transient_and_retryable() {
        let mut d = driver(&[Some("slate")]);
        d.start_round().unwrap();

        d.oracle.online.set(false);
        let err = d.submit("crane").unwrap_err();
        assert!(matches!(err, GameError::OracleUnavailable(_)));
        assert!(err.is_transient());
        assert_eq!(d.session().unwrap().attempt(), 0);
        assert!(d.session().unwrap().keyboard().is_blank());

        d.oracle.online.set(true);
        d.submit("crane").unwrap();
        assert_eq!(d.session().unwrap().attempt(), 1);
    }

    #[test]
    fn local_rejections_skip_the_dictionary() {
        let mut d = driver(&[Some("slate")]);
        d.start_round().unwrap();
        d.submit("crane").unwrap();
        assert_eq!(d.oracle.lookups.get(), 1);

        assert!(matches!(d.submit("crane"), Err(GameError::AlreadyGuessed(_))));
        assert!(matches!(d.submit("cran"), Err(GameError::InvalidLength(4))));
        assert!(matches!(d.submit("cr4ne"), Err(GameError::InvalidCharacters)));
        assert_eq!(d.oracle.lookups.get(), 1);
    }

    #[test]
    fn terminal_round_rejects_guesses_before_lookup() {
        let mut d = driver(&[Some("slate")]);
        d.start_round().unwrap();
        d.submit("slate").unwrap();

        let lookups = d.oracle.lookups.get();
        assert!(matches!(d.submit("crane"), Err(GameError::SessionTerminal)));
        assert_eq!(d.oracle.lookups.get(), lookups);
    }

    #[test]
    fn finished_rounds_feed_statistics() {
        let mut d = driver(&[Some("slate"), Some("geese")]);
        d.start_round().unwrap();
        d.submit("crane").unwrap();
        d.submit("slate").unwrap();

        d.start_round().unwrap();
        for guess in ["crane", "slate", "moist", "pudgy", "lobby", "fjord"] {
            d.submit(guess).unwrap();
        }

        let stats = d.stats();
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn new_round_resets_keyboard() {
        let mut d = driver(&[Some("slate"), Some("crane")]);
        d.start_round().unwrap();
        d.submit("crane").unwrap();
        assert_eq!(d.session().unwrap().keyboard().get('a'), LetterStatus::Correct);

        let session = d.start_round().unwrap();
        assert_eq!(session.attempt(), 0);
        assert!(session.keyboard().is_blank());
        assert_eq!(session.secret().as_str(), "crane");
    }

    #[test]
    fn custom_attempt_limit_applies_to_rounds() {
        let mut d = driver(&[Some("slate")]).with_max_tries(2);
        d.start_round().unwrap();
        d.submit("crane").unwrap();
        d.submit("moist").unwrap();
        assert_eq!(
            d.session().unwrap().state(),
            GameState::Terminal(Outcome::Lost)
        );
    }

    #[test]
    fn new_limit_applies_from_the_next_round() {
        let mut d = driver(&[Some("slate"), Some("crane")]);
        d.start_round().unwrap();
        d.submit("crane").unwrap();

        let mut d = d.with_max_tries(2);
        assert_eq!(d.max_tries(), 2);
        // The round in progress keeps its limit
        assert_eq!(d.session().unwrap().max_tries(), MAX_TRIES);
        assert_eq!(d.session().unwrap().attempt(), 1);

        let session = d.start_round().unwrap();
        assert_eq!(session.max_tries(), 2);
        assert_eq!(session.attempt(), 0);

        d.submit("moist").unwrap();
        d.submit("pudgy").unwrap();
        assert_eq!(d.session().unwrap().state(), GameState::Terminal(Outcome::Lost));
    }

    #[test]
    fn zero_limit_is_clamped() {
        let d = driver(&[]).with_max_tries(0);
        assert_eq!(d.max_tries(), 1);
    }
}
