use crate::dictionary::DEFAULT_LANGUAGE;
use crate::game_state::{GameInterface, UserAction};
use crate::rules::Rejection;
use crate::session::{Accepted, Session};
use crate::debug_log;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Command that starts a new game with a fresh root word
pub const RESTART_COMMAND: &str = ":next";
/// Command that quits
pub const EXIT_COMMAND: &str = ":exit";

/// Word Scramble CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub word_list_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary of accepted words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Language passed to the dictionary
    #[arg(short = 'l', long = "language", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Seed for root word selection, for reproducible games
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Use the full-screen terminal interface
    #[arg(long = "tui")]
    pub tui: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Interpret one line of player input.
fn parse_action(line: &str) -> UserAction {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(EXIT_COMMAND) {
        UserAction::Exit
    } else if trimmed.eq_ignore_ascii_case(RESTART_COMMAND) {
        UserAction::Restart
    } else {
        UserAction::Submit(line.to_string())
    }
}

pub fn display_session(session: &Session) {
    println!("\nRoot word: {}", session.root_word().to_uppercase());
    println!("Score: {}", session.score());
    if !session.used_words().is_empty() {
        println!("Your words:");
        display_used_words(session.used_words());
    }
}

pub fn display_used_words(words: &[String]) {
    for word in words {
        println!("  ({}) {word}", word.chars().count());
    }
}

pub fn display_prompt() {
    println!(
        "\nEnter a word ('{RESTART_COMMAND}' for a new root word, '{EXIT_COMMAND}' to quit):"
    );
}

pub fn display_accepted(accepted: &Accepted, session: &Session) {
    println!("+{} for '{}'. Score: {}", accepted.score_delta, accepted.word, session.score());
}

pub fn display_rejection(rejection: Rejection, session: &Session) {
    println!("{}: {}", rejection.title(), rejection.message(session.root_word()));
}

pub fn display_new_game_message(session: &Session) {
    println!("New game started.");
    display_session(session);
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader; each line is one submission
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_session(&mut self, session: &Session) {
        display_session(session);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        display_prompt();
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => {
                debug_log!("read_action() - Line read: {:?}", input);
                Some(parse_action(&input))
            }
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_accepted(&mut self, accepted: &Accepted, session: &Session) {
        display_accepted(accepted, session);
    }

    fn display_rejection(&mut self, rejection: Rejection, session: &Session) {
        display_rejection(rejection, session);
    }

    fn display_new_game_message(&mut self, session: &Session) {
        display_new_game_message(session);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["word-scramble"]).unwrap();
        assert_eq!(cli.word_list_path, None);
        assert_eq!(cli.dictionary_path, None);
        assert_eq!(cli.language, "en");
        assert_eq!(cli.seed, None);
        assert!(!cli.tui);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::try_parse_from([
            "word-scramble",
            "-i",
            "start.txt",
            "--dictionary",
            "/usr/share/dict/words",
            "-l",
            "de",
            "--seed",
            "42",
            "--tui",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.word_list_path, Some(PathBuf::from("start.txt")));
        assert_eq!(cli.dictionary_path, Some(PathBuf::from("/usr/share/dict/words")));
        assert_eq!(cli.language, "de");
        assert_eq!(cli.seed, Some(42));
        assert!(cli.tui);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["word-scramble", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_parse_action_commands() {
        assert_eq!(parse_action(":exit\n"), UserAction::Exit);
        assert_eq!(parse_action("  :EXIT  "), UserAction::Exit);
        assert_eq!(parse_action(":next\n"), UserAction::Restart);
        assert_eq!(parse_action(":Next"), UserAction::Restart);
    }

    #[test]
    fn test_parse_action_keeps_raw_text() {
        // Normalization belongs to the session
        assert_eq!(
            parse_action("  Banana \n"),
            UserAction::Submit("  Banana \n".to_string())
        );
        assert_eq!(parse_action("\n"), UserAction::Submit("\n".to_string()));
        // Plain words are never commands
        assert_eq!(parse_action("exit"), UserAction::Submit("exit".to_string()));
    }

    #[test]
    fn test_read_action_sequence() {
        let mut interface = CliInterface::new(Cursor::new("sand\n:next\n:exit\n"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Submit("sand\n".to_string()))
        );
        assert_eq!(interface.read_action(), Some(UserAction::Restart));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_end_of_input_exits() {
        let mut interface = CliInterface::new(Cursor::new(""));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_last_line_without_newline() {
        let mut interface = CliInterface::new(Cursor::new("nab"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Submit("nab".to_string()))
        );
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }
}
