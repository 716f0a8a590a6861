//! Truth-or-dare session logic
//!
//! This module implements the simpler of the two party games: players take
//! turns in roster order, the active player picks a category, and a random
//! prompt from that category is drawn from the catalog. Nothing persists
//! across prompts beyond the active-player cursor; there is no history of
//! shown prompts, so repeats are possible.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{catalog::TruthOrDareCatalog, constants::truth_or_dare::MIN_PLAYERS};

/// The two prompt categories a player can pick from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Category {
    /// A dare the player has to perform
    #[display("action")]
    Action,
    /// A question the player has to answer truthfully
    #[display("truth")]
    Truth,
}

/// Errors that can occur when running a session
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The session was started without any players
    #[error("truth-or-dare needs at least one player")]
    NoPlayers,
}

/// A drawn prompt together with the category it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// The category the active player picked
    pub category: Category,
    /// The prompt text to display
    pub text: String,
}

/// A running truth-or-dare session
///
/// The session owns a snapshot of the roster taken at start time; later
/// roster edits do not affect a session in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    players: Vec<String>,
    current: usize,
    prompt: Option<Prompt>,
}

impl Session {
    /// Starts a session for the given players, beginning with the first
    ///
    /// # Errors
    ///
    /// * [`Error::NoPlayers`] - the player list is empty
    pub fn new(players: Vec<String>) -> Result<Self, Error> {
        if players.len() < MIN_PLAYERS {
            return Err(Error::NoPlayers);
        }
        Ok(Self {
            players,
            current: 0,
            prompt: None,
        })
    }

    /// Returns the players in turn order
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the name of the active player
    pub fn current_player(&self) -> &str {
        &self.players[self.current]
    }

    /// Draws a random prompt from the chosen category for the active player
    ///
    /// Drawing again before advancing replaces the displayed prompt, which
    /// is how the operator redraws within the same category.
    pub fn draw(
        &mut self,
        catalog: &TruthOrDareCatalog,
        category: Category,
        rng: &mut fastrand::Rng,
    ) -> &Prompt {
        let text = catalog.random_prompt(category, rng).to_owned();
        self.prompt.insert(Prompt { category, text })
    }

    /// Returns the currently displayed prompt, if one has been drawn
    pub fn current_prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Advances to the next player, wrapping around the roster
    ///
    /// The displayed prompt is cleared; the next player picks afresh.
    pub fn next_player(&mut self) -> &str {
        self.current = (self.current + 1) % self.players.len();
        self.prompt = None;
        self.current_player()
    }

    /// Returns the session to its starting state
    ///
    /// The cursor goes back to the first player and any displayed prompt
    /// is discarded.
    pub fn reset(&mut self) {
        self.current = 0;
        self.prompt = None;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;

    fn catalog() -> TruthOrDareCatalog {
        let catalogs = Catalogs::new();
        catalogs
            .load_truth_or_dare(r#"{ "actions": ["A1", "A2"], "truths": ["T1"] }"#)
            .unwrap();
        catalogs.truth_or_dare().unwrap().clone()
    }

    fn players(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_session_needs_players() {
        assert_eq!(Session::new(Vec::new()), Err(Error::NoPlayers));
        assert!(Session::new(players(&["Alice"])).is_ok());
    }

    #[test]
    fn test_rotation_wraps_around() {
        let mut session = Session::new(players(&["Alice", "Bob", "Charlie"])).unwrap();

        assert_eq!(session.current_player(), "Alice");
        assert_eq!(session.next_player(), "Bob");
        assert_eq!(session.next_player(), "Charlie");
        assert_eq!(session.next_player(), "Alice");
    }

    #[test]
    fn test_next_player_clears_prompt() {
        let catalog = catalog();
        let mut rng = fastrand::Rng::with_seed(3);
        let mut session = Session::new(players(&["Alice", "Bob"])).unwrap();

        session.draw(&catalog, Category::Truth, &mut rng);
        assert!(session.current_prompt().is_some());

        session.next_player();
        assert!(session.current_prompt().is_none());
    }

    #[test]
    fn test_redraw_replaces_prompt_in_same_category() {
        let catalog = catalog();
        let mut rng = fastrand::Rng::with_seed(3);
        let mut session = Session::new(players(&["Alice"])).unwrap();

        session.draw(&catalog, Category::Truth, &mut rng);
        let prompt = session.draw(&catalog, Category::Truth, &mut rng).clone();

        assert_eq!(prompt.category, Category::Truth);
        assert_eq!(prompt.text, "T1");
    }

    /// Many draws from a two-prompt category must only ever yield those
    /// prompts and should reach both of them.
    #[test]
    fn test_draws_cover_the_category_uniformly() {
        let catalog = catalog();
        let mut rng = fastrand::Rng::with_seed(42);
        let mut session = Session::new(players(&["Alice"])).unwrap();

        let mut seen_a1 = false;
        let mut seen_a2 = false;
        for _ in 0..200 {
            let prompt = session.draw(&catalog, Category::Action, &mut rng);
            assert_eq!(prompt.category, Category::Action);
            match prompt.text.as_str() {
                "A1" => seen_a1 = true,
                "A2" => seen_a2 = true,
                other => panic!("prompt {other:?} is not in the catalog"),
            }
        }
        assert!(seen_a1 && seen_a2);
    }

    #[test]
    fn test_reset_returns_to_first_player() {
        let catalog = catalog();
        let mut rng = fastrand::Rng::with_seed(3);
        let mut session = Session::new(players(&["Alice", "Bob", "Charlie"])).unwrap();

        session.next_player();
        session.draw(&catalog, Category::Action, &mut rng);
        session.reset();

        assert_eq!(session.current_player(), "Alice");
        assert!(session.current_prompt().is_none());
    }
}
