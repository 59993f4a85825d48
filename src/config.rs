//! Game configuration
//!
//! Collects the settings the front ends need and turns them into word sources.

use crate::game::{GameDriver, MAX_TRIES};
use crate::providers::{
    DatamuseOracle, Dictionary, RandomList, RandomWordApi, SecretProvider, WordOracle,
};
use crate::wordlists::SECRETS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use std::path::PathBuf;
use tracing::info;

/// Where secret words and dictionary checks come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WordSource {
    /// Embedded (or file-supplied) word lists, no network
    #[default]
    Embedded,
    /// Random-word service for secrets, Datamuse for dictionary checks
    Online,
}

/// A driver with boxed word sources chosen at runtime
pub type BoxedDriver = GameDriver<Box<dyn SecretProvider>, Box<dyn WordOracle>>;

/// Settings for a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub max_tries: usize,
    pub source: WordSource,
    /// Replaces the embedded secret list
    pub secrets_path: Option<PathBuf>,
    /// Replaces the embedded dictionary
    pub dictionary_path: Option<PathBuf>,
    /// Seed for a reproducible sequence of secrets
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: MAX_TRIES,
            source: WordSource::Embedded,
            secrets_path: None,
            dictionary_path: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Build the secret provider for this configuration
    ///
    /// # Errors
    /// Fails if a word list file cannot be read or holds no valid words, or
    /// if the HTTP client cannot be created.
    pub fn secret_provider(&self) -> Result<Box<dyn SecretProvider>> {
        if self.source == WordSource::Online {
            let api = RandomWordApi::new(RandomWordApi::DEFAULT_URL)?;
            return Ok(Box::new(api));
        }

        let list = match &self.secrets_path {
            Some(path) => {
                let words = load_from_file(path)
                    .with_context(|| format!("reading secrets from {}", path.display()))?;
                if words.is_empty() {
                    bail!("{} holds no 5-letter words", path.display());
                }
                info!(count = words.len(), path = %path.display(), "Loaded secret list");
                RandomList::new(words)
            }
            None => RandomList::embedded(),
        };

        Ok(Box::new(match self.seed {
            Some(seed) => list.with_seed(seed),
            None => list,
        }))
    }

    /// Build the dictionary oracle for this configuration
    ///
    /// The dictionary always accepts every word the secret provider can pick,
    /// whether those come from a secrets file or the embedded list.
    ///
    /// # Errors
    /// Fails if a word list file cannot be read or if the HTTP client cannot
    /// be created.
    pub fn word_oracle(&self) -> Result<Box<dyn WordOracle>> {
        if self.source == WordSource::Online {
            let oracle = DatamuseOracle::new(DatamuseOracle::DEFAULT_URL)?;
            return Ok(Box::new(oracle));
        }

        let mut dictionary = match &self.dictionary_path {
            Some(path) => {
                let words = load_from_file(path)
                    .with_context(|| format!("reading dictionary from {}", path.display()))?;
                info!(count = words.len(), path = %path.display(), "Loaded dictionary");
                Dictionary::new(words)
            }
            None => Dictionary::embedded(),
        };

        match &self.secrets_path {
            Some(path) => dictionary.extend(
                load_from_file(path)
                    .with_context(|| format!("reading secrets from {}", path.display()))?,
            ),
            None => dictionary.extend(words_from_slice(SECRETS)),
        }

        Ok(Box::new(dictionary))
    }

    /// Build a driver in the loading state
    ///
    /// # Errors
    /// See [`GameConfig::secret_provider`] and [`GameConfig::word_oracle`].
    pub fn driver(&self) -> Result<BoxedDriver> {
        Ok(GameDriver::new(self.secret_provider()?, self.word_oracle()?)
            .with_max_tries(self.max_tries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameError;
    use std::fs;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wordle_clone_{}_{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn default_config_plays_offline() {
        let config = GameConfig::default();
        assert_eq!(config.max_tries, MAX_TRIES);

        let mut driver = config.driver().unwrap();
        let secret = *driver.start_round().unwrap().secret();
        assert!(driver.submit(secret.as_str()).unwrap().is_solved());
    }

    #[test]
    fn seeded_configs_pick_the_same_secrets() {
        let config = GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        };
        let mut a = config.driver().unwrap();
        let mut b = config.driver().unwrap();

        for _ in 0..5 {
            let left = *a.start_round().unwrap().secret();
            let right = *b.start_round().unwrap().secret();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn custom_lists_are_used_and_secrets_are_always_accepted() {
        let secrets = temp_file("secrets.txt", "vivid\n");
        let dictionary = temp_file("dictionary.txt", "crane\n");
        let config = GameConfig {
            secrets_path: Some(secrets.clone()),
            dictionary_path: Some(dictionary.clone()),
            max_tries: 3,
            ..GameConfig::default()
        };

        let mut driver = config.driver().unwrap();
        assert_eq!(driver.start_round().unwrap().secret().as_str(), "vivid");
        assert_eq!(driver.session().unwrap().max_tries(), 3);

        assert!(driver.submit("crane").is_ok());
        assert!(matches!(
            driver.submit("slate"),
            Err(GameError::NotARealWord(_))
        ));
        assert!(driver.submit("vivid").unwrap().is_solved());

        fs::remove_file(secrets).unwrap();
        fs::remove_file(dictionary).unwrap();
    }

    #[test]
    fn custom_dictionary_still_accepts_embedded_secrets() {
        let dictionary = temp_file("small_dictionary.txt", "crane\nslate\n");
        let config = GameConfig {
            dictionary_path: Some(dictionary.clone()),
            seed: Some(1),
            ..GameConfig::default()
        };

        let mut driver = config.driver().unwrap();
        for _ in 0..10 {
            let secret = *driver.start_round().unwrap().secret();
            assert!(driver.submit(secret.as_str()).unwrap().is_solved());
        }
        assert_eq!(driver.stats().games_won, 10);

        fs::remove_file(dictionary).unwrap();
    }

    #[test]
    fn empty_secret_list_is_rejected() {
        let secrets = temp_file("empty.txt", "toolong\n\n");
        let config = GameConfig {
            secrets_path: Some(secrets.clone()),
            ..GameConfig::default()
        };

        assert!(config.secret_provider().is_err());
        fs::remove_file(secrets).unwrap();
    }
}
