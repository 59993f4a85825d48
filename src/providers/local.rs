//! Offline word sources backed by word lists

use super::{OracleError, ProviderError, SecretProvider, WordOracle};
use crate::core::Word;
use crate::wordlists::loader::words_from_slice;
use crate::wordlists::{DICTIONARY, SECRETS};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Picks secret words at random from a list
pub struct RandomList {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomList {
    /// Random secrets from `words`, seeded from the OS
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Random secrets from the embedded curated list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(SECRETS))
    }

    /// Make the sequence of secrets reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl SecretProvider for RandomList {
    fn next_secret(&mut self) -> Result<Word, ProviderError> {
        let word = *self.words.choose(&mut self.rng).ok_or(ProviderError::Empty)?;
        debug!(candidates = self.words.len(), "Picked secret from word list");
        Ok(word)
    }
}

/// Accepts guesses found in a word list
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// The embedded dictionary, which includes every embedded secret
    #[must_use]
    pub fn embedded() -> Self {
        let mut dictionary = Self::new(words_from_slice(DICTIONARY));
        dictionary.extend(words_from_slice(SECRETS));
        dictionary
    }

    /// Add more accepted words
    pub fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        self.words.extend(words);
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for Dictionary {
    fn is_word(&self, word: &Word) -> Result<bool, OracleError> {
        Ok(self.contains(word))
    }
}
