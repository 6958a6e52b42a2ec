//! Dictionary lookups.
//!
//! The game only needs a yes/no answer to "is this a real word in language L?".
//! [`DictionaryOracle`] is that capability; [`WordListDictionary`] is the
//! bundled implementation backed by a newline-delimited word list.

use crate::error::ConfigurationError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Language of the bundled dictionary and the default session language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Common location of the system word list on Unix-like systems.
pub const SYSTEM_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Answers whether a word is recognized in a language.
pub trait DictionaryOracle {
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

/// A dictionary for a single language, held as a set of lower-cased words.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build from newline-delimited text. Lines are trimmed and lower-cased;
    /// blank lines are skipped.
    pub fn from_text(data: &str, language: impl Into<String>) -> Self {
        Self::from_words(data.lines(), language)
    }

    pub fn from_words<I, S>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            language: language.into(),
            words,
        }
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        language: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let read_error = |source| ConfigurationError::DictionaryRead {
            path: path.to_path_buf(),
            source,
        };
        let reader = BufReader::new(File::open(path).map_err(read_error)?);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line.map_err(read_error)?);
        }
        let dictionary = Self::from_words(lines, language);
        if dictionary.is_empty() {
            return Err(ConfigurationError::EmptyDictionary {
                path: path.to_path_buf(),
            });
        }
        Ok(dictionary)
    }

    /// The bundled English word list.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_text(EMBEDDED_DICTIONARY, DEFAULT_LANGUAGE)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
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

impl DictionaryOracle for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.words.contains(&word.to_lowercase())
    }
}

/// Per-user dictionary override, e.g. `~/.local/share/word-scramble/dictionary.txt`.
#[must_use]
pub fn user_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("word-scramble").join("dictionary.txt"))
}

fn warn_on_language_mismatch(dictionary: &WordListDictionary, source: &str, language: &str) {
    if !dictionary.language().eq_ignore_ascii_case(language) {
        log::warn!(
            "{source} dictionary is '{}' but session language is '{language}'; no word will be recognized",
            dictionary.language()
        );
    }
}

/// Load a word list known to be English, such as the system list.
fn load_english_list<P: AsRef<Path>>(
    path: P,
    language: &str,
) -> Result<WordListDictionary, ConfigurationError> {
    let dictionary = WordListDictionary::from_file(path, DEFAULT_LANGUAGE)?;
    warn_on_language_mismatch(&dictionary, "System", language);
    Ok(dictionary)
}

/// Resolve the dictionary: an explicit path, then the per-user override, then
/// the system word list, then the bundled list.
///
/// An explicit or per-user file is taken to be in `language`. The system and
/// bundled lists are English; for any other language they are still loaded but
/// answer `false` for every query.
pub fn load_dictionary(
    path: Option<&Path>,
    language: &str,
) -> Result<WordListDictionary, ConfigurationError> {
    if let Some(path) = path {
        log::info!("Loading dictionary from {}", path.display());
        return WordListDictionary::from_file(path, language);
    }
    if let Some(user_path) = user_dictionary_path()
        && user_path.is_file()
    {
        log::info!("Loading dictionary from {}", user_path.display());
        return WordListDictionary::from_file(user_path, language);
    }
    let system_path = Path::new(SYSTEM_DICTIONARY_PATH);
    if system_path.is_file() {
        log::info!("Loading dictionary from {}", system_path.display());
        return load_english_list(system_path, language);
    }
    log::debug!("Using embedded dictionary");
    let dictionary = WordListDictionary::embedded();
    warn_on_language_mismatch(&dictionary, "Embedded", language);
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dictionary = WordListDictionary::from_text("Banana\nsand\n", "en");
        assert!(dictionary.is_real_word("banana", "en"));
        assert!(dictionary.is_real_word("BANANA", "en"));
        assert!(dictionary.is_real_word("Sand", "EN"));
        assert!(!dictionary.is_real_word("bnana", "en"));
    }

    #[test]
    fn test_other_language_is_never_real() {
        let dictionary = WordListDictionary::from_text("banana\n", "en");
        assert!(!dictionary.is_real_word("banana", "fr"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dictionary = WordListDictionary::from_text("\n  \nnab\n\n", "en");
        assert_eq!(dictionary.len(), 1);
        assert!(!dictionary.is_real_word("", "en"));
    }

    #[test]
    fn test_embedded_dictionary_contains_roots() {
        let dictionary = WordListDictionary::embedded();
        assert_eq!(dictionary.language(), DEFAULT_LANGUAGE);
        for root in crate::wordbank::load_word_list_from_str(crate::wordbank::EMBEDDED_ROOT_WORDS) {
            assert!(dictionary.is_real_word(&root, "en"), "missing root word {root}");
        }
    }

    #[test]
    fn test_from_file_rejects_empty_dictionary() {
        let path = std::env::temp_dir().join("word_scramble_empty_dictionary.txt");
        std::fs::write(&path, "\n\n").unwrap();
        match WordListDictionary::from_file(&path, "en") {
            Err(ConfigurationError::EmptyDictionary { path: p }) => assert_eq!(p, path),
            other => panic!("Expected EmptyDictionary, got {other:?}"),
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing() {
        let path = std::env::temp_dir().join("word_scramble_no_such_dictionary.txt");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            WordListDictionary::from_file(&path, "en"),
            Err(ConfigurationError::DictionaryRead { .. })
        ));
    }

    #[test]
    fn test_english_list_is_not_relabelled() {
        let path = std::env::temp_dir().join("word_scramble_english_list.txt");
        std::fs::write(&path, "spoon\ntea\n").unwrap();
        let dictionary = load_english_list(&path, "de").unwrap();
        assert_eq!(dictionary.language(), "en");
        assert!(!dictionary.is_real_word("spoon", "de"));
        assert!(dictionary.is_real_word("spoon", "en"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_dictionary_explicit_path_takes_requested_language() {
        let path = std::env::temp_dir().join("word_scramble_explicit_german.txt");
        std::fs::write(&path, "haus\n").unwrap();
        let dictionary = load_dictionary(Some(&path), "de").unwrap();
        assert_eq!(dictionary.language(), "de");
        assert!(dictionary.is_real_word("haus", "de"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_dictionary_explicit_path() {
        let path = std::env::temp_dir().join("word_scramble_explicit_dictionary.txt");
        std::fs::write(&path, "spoon\nteas\n").unwrap();
        let dictionary = load_dictionary(Some(&path), "en").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_real_word("spoon", "en"));
        std::fs::remove_file(&path).unwrap();
    }
}
