//! Game session state.
//!
//! A [`Session`] holds the root word, the words accepted so far (most recent
//! first) and the score. It changes only when a submission passes every rule
//! in [`crate::rules`]; a rejected submission leaves it untouched.

use crate::dictionary::DictionaryOracle;
use crate::error::ConfigurationError;
use crate::rules::{self, Rejection, ValidationContext};
use rand::prelude::*;

/// A word that was added to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    pub score_delta: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
    language: String,
}

impl Session {
    /// Start a session with a root word chosen uniformly at random from
    /// `word_list`. `language` is passed to every dictionary lookup for the
    /// life of the session.
    pub fn start<R: Rng + ?Sized>(
        word_list: &[String],
        language: &str,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        let root_word = word_list.choose(rng).ok_or(ConfigurationError::EmptyWordList)?;
        Self::with_root_word(root_word, language)
    }

    /// Start a session with a caller-chosen root word.
    pub fn with_root_word(root_word: &str, language: &str) -> Result<Self, ConfigurationError> {
        let root_word = rules::normalize(root_word);
        if root_word.is_empty() {
            return Err(ConfigurationError::EmptyRootWord);
        }
        log::info!("Starting session with root word '{root_word}' ({language})");
        Ok(Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
            language: language.to_string(),
        })
    }

    /// Replace this session with a fresh one drawn from `word_list`, keeping
    /// the language.
    pub fn restart<R: Rng + ?Sized>(
        &self,
        word_list: &[String],
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        log::info!(
            "Restarting session (root word '{}', score {})",
            self.root_word,
            self.score
        );
        Self::start(word_list, &self.language, rng)
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Submit raw player input.
    ///
    /// Returns `Ok(None)` when the input is blank after trimming; that is not
    /// a rejection and nothing changes. On rejection the session is unchanged.
    pub fn submit_word<D: DictionaryOracle + ?Sized>(
        &mut self,
        raw: &str,
        oracle: &D,
    ) -> Result<Option<Accepted>, Rejection> {
        let word = rules::normalize(raw);
        if word.is_empty() {
            return Ok(None);
        }

        let context = ValidationContext {
            root_word: &self.root_word,
            used_words: &self.used_words,
            language: &self.language,
        };
        if let Err(rejection) = rules::validate(&word, context, oracle) {
            log::debug!("Rejected '{word}': {rejection:?}");
            return Err(rejection);
        }

        let score_delta = word.chars().count();
        self.used_words.insert(0, word.clone());
        self.score += score_delta;
        log::debug!("Accepted '{word}' (+{score_delta}, score {})", self.score);
        Ok(Some(Accepted { word, score_delta }))
    }
}
