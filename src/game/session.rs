//! Interactive session driver
//!
//! A `GameSession` owns the wordlists and the current `SessionState`. Each
//! call to `dispatch` consumes one line of input and moves to the next state;
//! frontends only render and forward input.

use super::state::{MenuView, SessionState, Step};
use crate::core::{GuessResult, Round};
use crate::wordlists::{
    RANDOM_KEY, StoreError, WordlistStore, Wordlists, choose_word, parse_addition,
};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::mem;
use tracing::{debug, error, info};

/// Input that quits from every screen
pub const EXIT_COMMAND: &str = "exit";

/// Input that opens the options menu from a round
pub const MENU_COMMAND: &str = "#";

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_attempts: u8,
    /// Write `add` results back to the wordlist file
    pub save_permanently: bool,
}

impl SessionConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u8 = 7;

    #[must_use]
    pub const fn new(max_attempts: u8) -> Self {
        Self {
            max_attempts,
            save_permanently: true,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

/// One interactive hangman session
pub struct GameSession<R: Rng = ThreadRng> {
    wordlists: Wordlists,
    store: WordlistStore,
    config: SessionConfig,
    rng: R,
    state: SessionState,
}

impl GameSession<ThreadRng> {
    #[must_use]
    pub fn new(wordlists: Wordlists, store: WordlistStore, config: SessionConfig) -> Self {
        Self::with_rng(wordlists, store, config, rand::rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a session on the menu screen, drawing randomness from `rng`
    pub fn with_rng(
        wordlists: Wordlists,
        store: WordlistStore,
        config: SessionConfig,
        rng: R,
    ) -> Self {
        Self {
            wordlists,
            store,
            config,
            rng,
            state: SessionState::menu(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn wordlists(&self) -> &Wordlists {
        &self.wordlists
    }

    /// True while the next input only acknowledges a listing
    #[must_use]
    pub fn awaits_keypress(&self) -> bool {
        matches!(
            self.state,
            SessionState::Menu {
                view: MenuView::Showing(_),
                ..
            }
        )
    }

    /// Enter the first screen
    ///
    /// With a category (or `"random"`) the session goes straight into a
    /// round. An unknown category lands on the menu with an error notice.
    pub fn start(&mut self, category: Option<&str>) {
        self.state = match category {
            None => SessionState::menu(),
            Some(key) => self.begin_round(key, None),
        };
    }

    /// Handle one line of input
    ///
    /// Menu and end-screen input is trimmed. A guess must be exactly one
    /// character, so `" a"` is ignored.
    pub fn dispatch(&mut self, input: &str) -> Step {
        let state = mem::replace(&mut self.state, SessionState::menu());

        let (next, step) = match state {
            SessionState::Menu { resume, view, .. } => self.on_menu(resume, view, input.trim()),
            SessionState::Playing(round) => Self::on_playing(round, input),
            SessionState::Ended(round) => self.on_ended(round, input.trim()),
        };

        self.state = next;
        step
    }

    fn on_menu(
        &mut self,
        resume: Option<Round>,
        view: MenuView,
        input: &str,
    ) -> (SessionState, Step) {
        match view {
            MenuView::Adding => {
                self.add_wordlist(input);
                (commands(resume), Step::Continue)
            }
            MenuView::Showing(_) => (commands(resume), Step::Continue),
            MenuView::Commands => self.on_command(resume, input),
        }
    }

    fn on_command(&mut self, resume: Option<Round>, input: &str) -> (SessionState, Step) {
        let command = input.to_lowercase();

        match command.as_str() {
            EXIT_COMMAND => (commands(resume), Step::Exit),
            "back" => match resume {
                Some(round) => (SessionState::Playing(round), Step::Continue),
                None => (commands(None), Step::Continue),
            },
            "add" => (
                SessionState::Menu {
                    resume,
                    view: MenuView::Adding,
                    notice: None,
                },
                Step::Continue,
            ),
            _ => {
                if let Some(lowered) = command.strip_prefix("show ") {
                    let raw = input.get("show ".len()..).unwrap_or(lowered);
                    let name = if self.wordlists.contains(lowered) {
                        Some(lowered)
                    } else if self.wordlists.contains(raw) {
                        Some(raw)
                    } else {
                        None
                    };
                    if let Some(name) = name {
                        let view = MenuView::Showing(name.to_string());
                        return (
                            SessionState::Menu {
                                resume,
                                view,
                                notice: None,
                            },
                            Step::Continue,
                        );
                    }
                    return (commands(resume), Step::Continue);
                }

                let key = if command == RANDOM_KEY || self.wordlists.contains(&command) {
                    Some(command.as_str())
                } else if self.wordlists.contains(input) {
                    Some(input)
                } else {
                    None
                };

                match key {
                    Some(key) => (self.begin_round(key, resume), Step::Continue),
                    None => (commands(resume), Step::Continue),
                }
            }
        }
    }

    fn on_playing(mut round: Round, input: &str) -> (SessionState, Step) {
        if input.eq_ignore_ascii_case(EXIT_COMMAND) {
            return (SessionState::Playing(round), Step::Exit);
        }
        if input == MENU_COMMAND {
            return (commands(Some(round)), Step::Continue);
        }

        let mut chars = input.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return (SessionState::Playing(round), Step::Continue);
        };

        let result = round.guess(letter);
        debug!(?letter, ?result, attempts = round.attempts_remaining(), "guess");

        if result != GuessResult::Ignored
            && let Some(outcome) = round.outcome()
        {
            info!(category = %round.category(), ?outcome, "round finished");
            return (SessionState::Ended(round), Step::Continue);
        }

        (SessionState::Playing(round), Step::Continue)
    }

    fn on_ended(&mut self, round: Round, input: &str) -> (SessionState, Step) {
        if input.eq_ignore_ascii_case(EXIT_COMMAND) {
            return (SessionState::Ended(round), Step::Exit);
        }
        if input == MENU_COMMAND {
            return (commands(None), Step::Continue);
        }

        (self.reset_round(&round), Step::Continue)
    }

    /// Resolve `key` and build a fresh round, or fall back to the menu
    fn begin_round(&mut self, key: &str, resume: Option<Round>) -> SessionState {
        let drawn = self
            .wordlists
            .resolve(key, &mut self.rng)
            .and_then(|(name, words)| {
                choose_word(words, &mut self.rng)
                    .map(|word| Round::new(name, word, self.config.max_attempts))
                    .ok_or_else(|| StoreError::NotFound(name.to_string()))
            });

        match drawn {
            Ok(round) => enter(round),
            Err(err) => {
                debug!(%err, "cannot start round");
                SessionState::Menu {
                    resume,
                    view: MenuView::Commands,
                    notice: Some(err.to_string()),
                }
            }
        }
    }

    /// Replay in the category of `round`
    fn reset_round(&mut self, round: &Round) -> SessionState {
        let drawn = self
            .wordlists
            .get(round.category())
            .and_then(|words| choose_word(words, &mut self.rng));

        match drawn {
            Some(word) => enter(round.replay(word)),
            None => self.begin_round(round.category(), None),
        }
    }

    /// Apply one `category,entry,...` line
    ///
    /// Invalid input changes nothing. When saving is enabled the update is
    /// kept only if the file was written.
    fn add_wordlist(&mut self, line: &str) {
        let (name, entries) = match parse_addition(line) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(%err, "rejected wordlist addition");
                return;
            }
        };

        let mut updated = self.wordlists.clone();
        match updated.append(&name, &entries) {
            Ok(true) => {}
            Ok(false) => {
                debug!(category = %name, "wordlist addition had no new entries");
                return;
            }
            Err(err) => {
                debug!(%err, "rejected wordlist addition");
                return;
            }
        }

        if self.config.save_permanently
            && let Err(err) = self.store.persist(&updated)
        {
            error!(%err, "failed to save wordlists");
            return;
        }

        info!(category = %name, entries = entries.len(), "wordlist updated");
        self.wordlists = updated;
    }
}

/// Show a freshly built round
fn enter(round: Round) -> SessionState {
    info!(category = %round.category(), "new round");
    // A secret without letters is solved before the first guess
    if round.outcome().is_some() {
        SessionState::Ended(round)
    } else {
        SessionState::Playing(round)
    }
}

fn commands(resume: Option<Round>) -> SessionState {
    SessionState::Menu {
        resume,
        view: MenuView::Commands,
        notice: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, PLACEHOLDER};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn session(table: &[(&str, &[&str])], max_attempts: u8) -> GameSession<StdRng> {
        let mut config = SessionConfig::new(max_attempts);
        config.save_permanently = false;
        GameSession::with_rng(
            Wordlists::from_table(table),
            WordlistStore::new("unused.json"),
            config,
            StdRng::seed_from_u64(3),
        )
    }

    fn cat_session() -> GameSession<StdRng> {
        let mut session = session(&[("animals", &["cat"])], 7);
        session.start(Some("animals"));
        session
    }

    fn playing(session: &GameSession<StdRng>) -> &Round {
        match session.state() {
            SessionState::Playing(round) => round,
            other => panic!("expected Playing, got {other:?}"),
        }
    }

    #[test]
    fn starts_on_menu_without_category() {
        let mut session = session(&[("animals", &["cat"])], 7);
        session.start(None);
        assert_eq!(session.state(), &SessionState::menu());
    }

    #[test]
    fn starts_round_with_category() {
        let session = cat_session();
        let round = playing(&session);
        assert_eq!(round.category(), "animals");
        assert_eq!(round.answer(), "cat");
        assert_eq!(round.attempts_remaining(), 7);
    }

    #[test]
    fn unknown_start_category_shows_notice() {
        let mut session = session(&[("animals", &["cat"])], 7);
        session.start(Some("planets"));

        match session.state() {
            SessionState::Menu {
                resume: None,
                view: MenuView::Commands,
                notice: Some(notice),
            } => assert!(notice.contains("planets")),
            other => panic!("expected menu with notice, got {other:?}"),
        }

        // The notice goes away with the next input
        session.dispatch("nothing");
        assert_eq!(session.state(), &SessionState::menu());
    }

    #[test]
    fn random_start_picks_a_known_category() {
        let mut session = session(&[("animals", &["cat"]), ("fruits", &["fig"])], 7);
        session.start(Some(RANDOM_KEY));
        let round = playing(&session);
        assert!(["animals", "fruits"].contains(&round.category()));
    }

    #[test]
    fn win_transitions_to_ended() {
        let mut session = cat_session();
        for letter in ["a", "t", "c"] {
            assert_eq!(session.dispatch(letter), Step::Continue);
        }

        match session.state() {
            SessionState::Ended(round) => {
                assert_eq!(round.revealed(), &['c', 'a', 't']);
                assert_eq!(round.attempts_remaining(), 7);
            }
            other => panic!("expected Ended, got {other:?}"),
        }
        assert_eq!(session.state().outcome(), Some(Outcome::Win));
    }

    #[test]
    fn loss_transitions_to_ended_with_answer() {
        let mut session = session(&[("animals", &["dog"])], 1);
        session.start(Some("animals"));

        session.dispatch("x");
        assert_eq!(session.state().outcome(), Some(Outcome::Loss));
        let round = session.state().round().unwrap();
        assert_eq!(round.attempts_remaining(), 0);
        assert_eq!(round.answer(), "dog");

        // The next line is handled by the end screen and starts a new round
        session.dispatch("z");
        assert_eq!(playing(&session).attempts_remaining(), 1);
    }

    #[test]
    fn uppercase_guess_reveals_lowercase_letters() {
        let mut session = session(&[("animals", &["alpaca"])], 7);
        session.start(Some("animals"));
        session.dispatch("A");
        assert_eq!(playing(&session).revealed(), &['a', '_', '_', 'a', '_', 'a']);
    }

    #[test]
    fn invalid_guesses_are_ignored() {
        let mut session = cat_session();
        let before = session.state().clone();

        for input in ["", "ab", "1", "?", "  "] {
            assert_eq!(session.dispatch(input), Step::Continue);
            assert_eq!(session.state(), &before);
        }
    }

    #[test]
    fn padded_guess_is_ignored() {
        let mut session = cat_session();
        let before = session.state().clone();

        for input in [" a", "a ", " exit"] {
            assert_eq!(session.dispatch(input), Step::Continue);
            assert_eq!(session.state(), &before);
        }
    }

    #[test]
    fn secret_without_letters_ends_immediately() {
        let mut session = session(&[("animals", &["cat"])], 7);
        session.start(None);
        session.dispatch("add");
        session.dispatch("codes,123");
        session.dispatch("codes");

        assert_eq!(session.state().outcome(), Some(Outcome::Win));
        let round = session.state().round().unwrap();
        assert_eq!(round.attempts_remaining(), 7);
        assert!(matches!(session.state(), SessionState::Ended(_)));

        // The end screen still offers a replay
        session.dispatch("");
        assert!(matches!(session.state(), SessionState::Ended(_)));
        assert_eq!(session.dispatch("exit"), Step::Exit);
    }

    #[test]
    fn zero_attempts_ends_immediately() {
        let mut session = session(&[("animals", &["cat"])], 0);
        session.start(Some("animals"));
        assert_eq!(session.state().outcome(), Some(Outcome::Loss));
    }

    #[test]
    fn revealed_letter_does_not_cost_attempt() {
        let mut session = cat_session();
        session.dispatch("a");
        session.dispatch("a");
        assert_eq!(playing(&session).attempts_remaining(), 7);
    }

    #[test]
    fn exit_from_every_screen() {
        let mut session = cat_session();
        assert_eq!(session.dispatch("exit"), Step::Exit);

        let mut session = cat_session();
        session.dispatch("#");
        assert_eq!(session.dispatch("EXIT"), Step::Exit);

        let mut session = cat_session();
        for letter in ["c", "a", "t"] {
            session.dispatch(letter);
        }
        assert_eq!(session.dispatch("Exit"), Step::Exit);
    }

    #[test]
    fn hash_opens_menu_and_back_resumes() {
        let mut session = cat_session();
        session.dispatch("c");
        session.dispatch("x");
        let in_progress = playing(&session).clone();

        session.dispatch("#");
        assert!(session.state().is_menu());
        assert_eq!(session.state().round(), Some(&in_progress));

        session.dispatch("BACK");
        assert_eq!(session.state(), &SessionState::Playing(in_progress));
    }

    #[test]
    fn back_without_round_stays_on_menu() {
        let mut session = session(&[("animals", &["cat"])], 7);
        session.start(None);
        session.dispatch("back");
        assert_eq!(session.state(), &SessionState::menu());
    }

    #[test]
    fn back_after_round_ended_stays_on_menu() {
        let mut session = cat_session();
        for letter in ["c", "a", "t"] {
            session.dispatch(letter);
        }
        session.dispatch("#");
        session.dispatch("back");
        assert_eq!(session.state(), &SessionState::menu());
    }

    #[test]
    fn replay_resets_round() {
        let mut session = session(&[("countries", &["new zealand"])], 3);
        session.start(Some("countries"));
        session.dispatch("q");
        session.dispatch("x");
        session.dispatch("j");
        assert_eq!(session.state().outcome(), Some(Outcome::Loss));

        session.dispatch("");
        let round = playing(&session);
        assert_eq!(round.category(), "countries");
        assert_eq!(round.attempts_remaining(), 3);
        assert!(
            round
                .revealed()
                .iter()
                .all(|&c| c == PLACEHOLDER || c == ' ')
        );
    }

    #[test]
    fn replay_keeps_resolved_random_category() {
        let mut session = session(&[("animals", &["cat"]), ("fruits", &["fig"])], 7);
        session.start(Some(RANDOM_KEY));
        let category = playing(&session).category().to_string();
        let answer = playing(&session).answer();

        for letter in answer.chars() {
            session.dispatch(&letter.to_string());
        }
        assert_eq!(session.state().outcome(), Some(Outcome::Win));

        session.dispatch("again");
        assert_eq!(playing(&session).category(), category);
    }

    #[test]
    fn menu_selects_category_and_replaces_round() {
        let mut session = session(&[("animals", &["cat"]), ("fruits", &["fig"])], 7);
        session.start(Some("animals"));
        session.dispatch("#");
        session.dispatch("Fruits");
        assert_eq!(playing(&session).category(), "fruits");
    }

    #[test]
    fn menu_accepts_mixed_case_category_names() {
        let mut session = session(&[("Capitals", &["oslo"])], 7);
        session.start(None);
        session.dispatch("Capitals");
        assert_eq!(playing(&session).category(), "Capitals");
    }

    #[test]
    fn unknown_menu_command_changes_nothing() {
        let mut session = cat_session();
        session.dispatch("#");
        let menu = session.state().clone();
        session.dispatch("planets");
        assert_eq!(session.state(), &menu);
    }

    #[test]
    fn show_lists_known_category_until_next_input() {
        let mut session = cat_session();
        session.dispatch("#");
        session.dispatch("show animals");
        assert!(session.awaits_keypress());
        assert!(matches!(
            session.state(),
            SessionState::Menu { view: MenuView::Showing(name), resume: Some(_), .. } if name == "animals"
        ));

        session.dispatch("");
        assert!(!session.awaits_keypress());
        assert!(matches!(
            session.state(),
            SessionState::Menu {
                view: MenuView::Commands,
                resume: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn show_accepts_mixed_case_category_names() {
        let mut session = session(&[("Capitals", &["oslo"])], 7);
        session.start(None);
        session.dispatch("show Capitals");
        assert!(matches!(
            session.state(),
            SessionState::Menu { view: MenuView::Showing(name), .. } if name == "Capitals"
        ));
    }

    #[test]
    fn show_unknown_category_stays_on_commands() {
        let mut session = session(&[("animals", &["cat"])], 7);
        session.start(None);
        session.dispatch("show planets");
        assert_eq!(session.state(), &SessionState::menu());
    }

    #[test]
    fn add_appends_in_memory() {
        let mut session = session(&[("animals", &["cat"])], 7);
        session.start(None);
        session.dispatch("add");
        assert!(matches!(
            session.state(),
            SessionState::Menu {
                view: MenuView::Adding,
                ..
            }
        ));

        session.dispatch("animals,emu,cat");
        assert_eq!(session.state(), &SessionState::menu());
        let animals: Vec<&str> = session
            .wordlists()
            .get("animals")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(animals, ["cat", "emu"]);
    }

    #[test]
    fn add_invalid_input_is_silent_noop() {
        let mut session = session(&[("animals", &["cat"])], 7);
        session.start(None);
        let before = session.wordlists().clone();

        for line in ["animals", "animals,,emu", ",emu", ""] {
            session.dispatch("add");
            session.dispatch(line);
            assert_eq!(session.state(), &SessionState::menu());
            assert_eq!(session.wordlists(), &before);
        }
    }

    #[test]
    fn add_keeps_round_resumable() {
        let mut session = cat_session();
        session.dispatch("#");
        session.dispatch("add");
        session.dispatch("birds,owl");
        session.dispatch("back");
        assert_eq!(playing(&session).category(), "animals");
        assert!(session.wordlists().contains("birds"));
    }

    #[test]
    fn add_persists_when_saving() {
        let dir = TempDir::new().unwrap();
        let store = WordlistStore::new(dir.path().join("wordlist.json"));
        let mut session = GameSession::with_rng(
            Wordlists::from_table(&[("animals", &["cat"])]),
            store.clone(),
            SessionConfig::default(),
            StdRng::seed_from_u64(3),
        );
        session.start(None);

        session.dispatch("add");
        session.dispatch("birds,owl,wren");

        let saved = store.load().unwrap();
        assert_eq!(&saved, session.wordlists());
        assert!(saved.contains("animals"));
        assert_eq!(saved.get("birds").unwrap().len(), 2);
    }

    #[test]
    fn add_is_discarded_when_save_fails() {
        let dir = TempDir::new().unwrap();
        let store = WordlistStore::new(dir.path().join("missing").join("wordlist.json"));
        let mut session = GameSession::with_rng(
            Wordlists::from_table(&[("animals", &["cat"])]),
            store,
            SessionConfig::default(),
            StdRng::seed_from_u64(3),
        );
        session.start(None);

        session.dispatch("add");
        session.dispatch("birds,owl");
        assert!(!session.wordlists().contains("birds"));
        assert_eq!(session.state(), &SessionState::menu());
    }

    #[test]
    fn added_category_is_playable() {
        let mut session = session(&[("animals", &["cat"])], 7);
        session.start(None);
        session.dispatch("add");
        session.dispatch("birds,owl");
        session.dispatch("birds");
        assert_eq!(playing(&session).answer(), "owl");
    }
}
