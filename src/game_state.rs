use crate::dictionary::DictionaryOracle;
use crate::error::ConfigurationError;
use crate::rules::Rejection;
use crate::session::{Accepted, Session};
use rand::Rng;

/// Action requested by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    Restart,
    Exit,
}

/// Trait abstracting the game interface (CLI or TUI)
pub trait GameInterface {
    /// Show the current root word, score and used words
    fn display_session(&mut self, session: &Session);

    /// Read the next action. `None` means nothing actionable was entered.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_accepted(&mut self, accepted: &Accepted, session: &Session);

    fn display_rejection(&mut self, rejection: Rejection, session: &Session);

    fn display_new_game_message(&mut self, session: &Session);

    fn display_exit_message(&mut self);
}

/// A session bound to the collaborators it needs: the root word pool, the
/// dictionary and the random source used on restart.
pub struct Game<D, R> {
    word_list: Vec<String>,
    dictionary: D,
    rng: R,
    session: Session,
}

impl<D: DictionaryOracle, R: Rng> Game<D, R> {
    pub fn new(
        word_list: Vec<String>,
        dictionary: D,
        mut rng: R,
        language: &str,
    ) -> Result<Self, ConfigurationError> {
        let session = Session::start(&word_list, language, &mut rng)?;
        Ok(Self {
            word_list,
            dictionary,
            rng,
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn submit(&mut self, raw: &str) -> Result<Option<Accepted>, Rejection> {
        self.session.submit_word(raw, &self.dictionary)
    }

    pub fn restart(&mut self) -> Result<&Session, ConfigurationError> {
        self.session = self.session.restart(&self.word_list, &mut self.rng)?;
        Ok(&self.session)
    }
}

/// Run the interactive loop until the player exits.
///
/// Each action is handled to completion before the next one is read.
pub fn game_loop<D, R, I>(game: &mut Game<D, R>, interface: &mut I) -> Result<(), ConfigurationError>
where
    D: DictionaryOracle,
    R: Rng,
    I: GameInterface + ?Sized,
{
    interface.display_session(game.session());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::Restart => {
                let session = game.restart()?;
                interface.display_new_game_message(session);
            }
            UserAction::Submit(raw) => match game.submit(&raw) {
                Ok(Some(accepted)) => interface.display_accepted(&accepted, game.session()),
                Ok(None) => {}
                Err(rejection) => interface.display_rejection(rejection, game.session()),
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Session(String),
        Accepted(String, usize),
        Rejected(Rejection),
        NewGame(String),
        Exit,
    }

    /// Replays scripted actions and records what was displayed.
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        events: Vec<Event>,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                events: Vec::new(),
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_session(&mut self, session: &Session) {
            self.events.push(Event::Session(session.root_word().to_string()));
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_accepted(&mut self, accepted: &Accepted, session: &Session) {
            assert_eq!(session.used_words()[0], accepted.word);
            self.events
                .push(Event::Accepted(accepted.word.clone(), session.score()));
        }

        fn display_rejection(&mut self, rejection: Rejection, _session: &Session) {
            self.events.push(Event::Rejected(rejection));
        }

        fn display_new_game_message(&mut self, session: &Session) {
            self.events.push(Event::NewGame(session.root_word().to_string()));
        }

        fn display_exit_message(&mut self) {
            self.events.push(Event::Exit);
        }
    }

    fn submit(word: &str) -> Option<UserAction> {
        Some(UserAction::Submit(word.to_string()))
    }

    fn bananas_game() -> Game<WordListDictionary, StdRng> {
        let dictionary = WordListDictionary::from_text("an\nbanana\nbananas\nbans\nsand\nnab", "en");
        Game::new(
            vec!["bananas".to_string()],
            dictionary,
            StdRng::seed_from_u64(9),
            "en",
        )
        .unwrap()
    }

    #[test]
    fn test_game_new_with_empty_word_list() {
        let dictionary = WordListDictionary::from_text("nab", "en");
        let result = Game::new(Vec::new(), dictionary, StdRng::seed_from_u64(1), "en");
        assert!(matches!(result, Err(ConfigurationError::EmptyWordList)));
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut game = bananas_game();
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        game_loop(&mut game, &mut interface).unwrap();
        assert_eq!(
            interface.events,
            vec![Event::Session("bananas".to_string()), Event::Exit]
        );
    }

    #[test]
    fn test_game_loop_scenario() {
        let mut game = bananas_game();
        let mut interface = ScriptedInterface::new(vec![
            submit("apple"),
            submit("banana"),
            submit("banana"),
            None,
            submit("an"),
            submit("   "),
            submit("bananas"),
            submit("sand"),
            submit("Bans"),
        ]);
        game_loop(&mut game, &mut interface).unwrap();
        assert_eq!(
            interface.events,
            vec![
                Event::Session("bananas".to_string()),
                Event::Rejected(Rejection::NotSpellableFromRoot),
                Event::Accepted("banana".to_string(), 6),
                Event::Rejected(Rejection::AlreadyUsed),
                Event::Rejected(Rejection::TooShort),
                Event::Rejected(Rejection::EqualsRootWord),
                Event::Rejected(Rejection::NotSpellableFromRoot),
                Event::Accepted("bans".to_string(), 10),
                Event::Exit,
            ]
        );
        assert_eq!(game.session().score(), 10);
    }

    #[test]
    fn test_game_loop_restart_clears_state() {
        let mut game = bananas_game();
        let mut interface = ScriptedInterface::new(vec![
            submit("banana"),
            Some(UserAction::Restart),
            submit("banana"),
        ]);
        game_loop(&mut game, &mut interface).unwrap();
        // Single-entry word list, so the root word comes back
        assert_eq!(
            interface.events,
            vec![
                Event::Session("bananas".to_string()),
                Event::Accepted("banana".to_string(), 6),
                Event::NewGame("bananas".to_string()),
                Event::Accepted("banana".to_string(), 6),
                Event::Exit,
            ]
        );
    }

    #[test]
    fn test_game_restart_keeps_language() {
        let dictionary = WordListDictionary::from_text("nab", "en");
        let mut game = Game::new(
            vec!["bananas".to_string()],
            dictionary,
            StdRng::seed_from_u64(1),
            "fr",
        )
        .unwrap();
        assert_eq!(game.restart().unwrap().language(), "fr");
        assert_eq!(game.submit("nab"), Err(Rejection::NotARealWord));
    }
}
