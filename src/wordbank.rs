use crate::error::ConfigurationError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_ROOT_WORDS: &str = include_str!("resources/start.txt");

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    (!word.is_empty()).then_some(word)
}

/// Parse a newline-delimited list of root words, dropping blank lines.
pub fn load_word_list_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConfigurationError> {
    let path = path.as_ref();
    let read_error = |source| ConfigurationError::WordListRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line.map_err(read_error)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Per-user override for the root word list, e.g. `~/.local/share/word-scramble/start.txt`.
#[must_use]
pub fn user_word_list_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("word-scramble").join("start.txt"))
}

/// Resolve the root word list: an explicit path, then the per-user override,
/// then the bundled list.
///
/// An empty result is not rejected here; starting a session is what fails on it.
pub fn load_root_words(path: Option<&Path>) -> Result<Vec<String>, ConfigurationError> {
    if let Some(path) = path {
        log::info!("Loading root words from {}", path.display());
        return load_word_list_from_file(path);
    }
    if let Some(path) = user_word_list_path()
        && path.is_file()
    {
        log::info!("Loading root words from user list {}", path.display());
        return load_word_list_from_file(path);
    }
    log::debug!("Using embedded root word list");
    Ok(load_word_list_from_str(EMBEDDED_ROOT_WORDS))
}
