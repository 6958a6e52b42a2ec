// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod rules;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{DictionaryOracle, WordListDictionary, load_dictionary};
pub use error::ConfigurationError;
pub use game_state::{Game, GameInterface, UserAction, game_loop};
pub use rules::Rejection;
pub use session::{Accepted, Session};
pub use wordbank::{load_root_words, load_word_list_from_file, load_word_list_from_str};
