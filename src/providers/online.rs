//! Online word sources
//!
//! Blocking HTTP clients for a random-word service (secrets) and the Datamuse
//! API (dictionary checks). Calls are made between keystrokes, never while a
//! session is being updated.

use super::{OracleError, ProviderError, SecretProvider, WordOracle};
use crate::core::Word;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Request timeout for both services
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

fn client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(DEFAULT_TIMEOUT).build()
}

/// Secret words from a random-word HTTP service
///
/// Expects `GET {base}/word?length=5` to answer with a JSON array of words.
pub struct RandomWordApi {
    client: Client,
    base_url: String,
}

impl RandomWordApi {
    pub const DEFAULT_URL: &'static str = "https://random-word-api.herokuapp.com";

    /// # Errors
    /// Returns `ProviderError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            client: client()?,
            base_url: base_url.into(),
        })
    }
}

/// First word of a random-word response, if it is playable
fn first_playable(words: Vec<String>) -> Result<Word, ProviderError> {
    let first = words.into_iter().next().ok_or(ProviderError::Empty)?;
    Word::new(&first).map_err(|_| ProviderError::InvalidWord(first))
}

impl SecretProvider for RandomWordApi {
    fn next_secret(&mut self) -> Result<Word, ProviderError> {
        let words: Vec<String> = self
            .client
            .get(format!("{}/word", self.base_url))
            .query(&[("length", "5")])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::json::<Vec<String>>)
            .inspect_err(|e| warn!(error = %e, "Random word request failed"))?;

        let word = first_playable(words)?;
        debug!("Fetched secret from random word service");
        Ok(word)
    }
}

/// One entry of a Datamuse `/words` response
#[derive(Debug, Deserialize)]
struct DatamuseEntry {
    word: String,
    #[serde(default)]
    defs: Option<Vec<String>>,
}

/// A word is real when the best match spells it exactly and has definitions
fn is_defined_match(entries: &[DatamuseEntry], word: &Word) -> bool {
    entries
        .first()
        .is_some_and(|entry| entry.word == word.as_str() && entry.defs.is_some())
}

/// Dictionary checks against the Datamuse API
pub struct DatamuseOracle {
    client: Client,
    base_url: String,
}

impl DatamuseOracle {
    pub const DEFAULT_URL: &'static str = "https://api.datamuse.com";

    /// # Errors
    /// Returns `OracleError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, OracleError> {
        Ok(Self {
            client: client()?,
            base_url: base_url.into(),
        })
    }
}

impl WordOracle for DatamuseOracle {
    fn is_word(&self, word: &Word) -> Result<bool, OracleError> {
        let entries: Vec<DatamuseEntry> = self
            .client
            .get(format!("{}/words", self.base_url))
            .query(&[("sp", word.as_str()), ("md", "d"), ("max", "1")])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::json::<Vec<DatamuseEntry>>)
            .inspect_err(|e| warn!(error = %e, %word, "Dictionary request failed"))?;

        let known = is_defined_match(&entries, word);
        debug!(%word, known, "Dictionary lookup");
        Ok(known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(json: &str) -> Vec<DatamuseEntry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn exact_match_with_definitions_is_real() {
        let word = Word::new("crane").unwrap();
        let found = entries(r#"[{"word":"crane","score":100,"defs":["n\ta large bird"]}]"#);
        assert!(is_defined_match(&found, &word));
    }

    #[test]
    fn match_without_definitions_is_rejected() {
        let word = Word::new("crane").unwrap();
        let found = entries(r#"[{"word":"crane","score":100}]"#);
        assert!(!is_defined_match(&found, &word));
    }

    #[test]
    fn different_spelling_or_no_results_is_rejected() {
        let word = Word::new("xyzzy").unwrap();
        assert!(!is_defined_match(&entries(r#"[{"word":"fuzzy","defs":["adj\tx"]}]"#), &word));
        assert!(!is_defined_match(&entries("[]"), &word));
    }

    #[test]
    fn random_word_response_is_validated() {
        assert_eq!(
            first_playable(vec!["Slate".to_string()]).unwrap().as_str(),
            "slate"
        );
        assert!(matches!(first_playable(Vec::new()), Err(ProviderError::Empty)));
        assert!(matches!(
            first_playable(vec!["banana".to_string()]),
            Err(ProviderError::InvalidWord(w)) if w == "banana"
        ));
    }
}
