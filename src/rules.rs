//! Word validation rules.
//!
//! A submission is checked against five rules in a fixed order and the first
//! failing rule decides the [`Rejection`] the player sees:
//!
//! 1. originality (`AlreadyUsed`)
//! 2. spellability from the root word (`NotSpellableFromRoot`)
//! 3. dictionary membership (`NotARealWord`)
//! 4. minimum length (`TooShort`)
//! 5. not the root word itself (`EqualsRootWord`)

use crate::dictionary::DictionaryOracle;
use thiserror::Error;

pub const MIN_WORD_LENGTH: usize = 3;

/// Why a submission was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("Word used already")]
    AlreadyUsed,
    #[error("Word not possible")]
    NotSpellableFromRoot,
    #[error("Word not recognized")]
    NotARealWord,
    #[error("Too short")]
    TooShort,
    #[error("Starting word not counted")]
    EqualsRootWord,
}

impl Rejection {
    /// Short title, suitable for an alert heading.
    #[must_use]
    pub fn title(self) -> String {
        self.to_string()
    }

    /// Longer explanation for the player.
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotSpellableFromRoot => format!("You can't spell that word from '{root_word}'!"),
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
            Self::TooShort => format!("Words need at least {MIN_WORD_LENGTH} letters."),
            Self::EqualsRootWord => "That's the word you started with!".to_string(),
        }
    }
}

/// Trim surrounding whitespace and lower-case.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Whether `word` can be spelled from the letters of `root_word`, using each
/// letter of the root at most as often as it occurs there.
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut available: Vec<char> = root_word.chars().collect();
    for letter in word.chars() {
        match available.iter().position(|&c| c == letter) {
            Some(pos) => {
                available.remove(pos);
            }
            None => return false,
        }
    }
    true
}

pub fn is_real<D: DictionaryOracle + ?Sized>(word: &str, oracle: &D, language: &str) -> bool {
    oracle.is_real_word(word, language)
}

#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
}

#[must_use]
pub fn is_not_root_word(word: &str, root_word: &str) -> bool {
    word != root_word
}

/// The state a submission is checked against.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub root_word: &'a str,
    pub used_words: &'a [String],
    pub language: &'a str,
}

/// Run every rule in order against an already normalized word.
pub fn validate<D: DictionaryOracle + ?Sized>(
    word: &str,
    context: ValidationContext<'_>,
    oracle: &D,
) -> Result<(), Rejection> {
    if !is_original(word, context.used_words) {
        return Err(Rejection::AlreadyUsed);
    }
    if !is_possible(word, context.root_word) {
        return Err(Rejection::NotSpellableFromRoot);
    }
    if !is_real(word, oracle, context.language) {
        return Err(Rejection::NotARealWord);
    }
    if !is_long_enough(word) {
        return Err(Rejection::TooShort);
    }
    if !is_not_root_word(word, context.root_word) {
        return Err(Rejection::EqualsRootWord);
    }
    Ok(())
}
