//! Fatal startup errors.
//!
//! Per-submission failures are not errors in this sense; they are
//! [`Rejection`](crate::rules::Rejection) values and leave the session usable.

use std::path::PathBuf;
use thiserror::Error;

/// A condition under which no valid session can exist.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The root word list has no entries.
    #[error("word list is empty: no root word can be chosen")]
    EmptyWordList,

    /// The chosen or supplied root word is blank after normalization.
    #[error("root word is empty after trimming")]
    EmptyRootWord,

    /// Failed to read the root word list.
    #[error("failed to read word list {path}: {source}")]
    WordListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the dictionary.
    #[error("failed to read dictionary {path}: {source}")]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary file has no words in it.
    #[error("dictionary {path} contains no words")]
    EmptyDictionary { path: PathBuf },
}
