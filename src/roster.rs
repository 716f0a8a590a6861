//! Player roster management
//!
//! This module maintains the ordered list of player display names that the
//! game sessions draw from. The roster is persisted as a JSON string-array
//! blob in an injectable key-value [`Store`], mirroring the browser-local
//! storage the front end uses, so the game logic never touches ambient
//! state directly and tests can run against an in-memory fake.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::constants::roster::{DEFAULT_PLAYERS, MAX_NAME_LENGTH, STORAGE_KEY};

/// A string key-value store the roster persists itself into
///
/// Implementations might wrap browser local storage, a file, or a plain
/// map. The roster only ever reads and writes whole values; there is no
/// partial update.
pub trait Store {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str);
}

/// An in-memory [`Store`] backed by a hash map
///
/// Used in tests and in embedders that have no durable storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Errors that can occur when editing the roster
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The name is empty or contains only whitespace
    #[error("name cannot be empty")]
    Empty,
    /// The name exceeds the maximum allowed length
    #[error("name is too long")]
    TooLong,
    /// The index does not refer to a roster entry
    #[error("no player at that position")]
    OutOfRange,
}

/// The ordered list of player display names, persisted in a [`Store`]
///
/// Names are display labels and are not required to be unique. When the
/// store holds nothing usable, a deterministic default roster is seeded
/// so that the game engines' player-count preconditions are satisfiable
/// on first run.
#[derive(Debug)]
pub struct Roster<S> {
    store: S,
}

impl<S: Store> Roster<S> {
    /// Wraps a store as the backing storage for the roster
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consumes the roster and returns the backing store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the current roster, seeding the default one if needed
    ///
    /// A missing or unparseable blob is replaced by [`DEFAULT_PLAYERS`]
    /// and persisted. An empty stored roster is returned as-is; callers
    /// decide whether their game can start with it.
    pub fn players(&mut self) -> Vec<String> {
        if let Some(blob) = self.store.get(STORAGE_KEY) {
            match serde_json::from_str::<Vec<String>>(&blob) {
                Ok(players) => return players,
                Err(error) => {
                    tracing::warn!(%error, "stored roster is unreadable, reseeding default");
                }
            }
        }

        let players: Vec<String> = DEFAULT_PLAYERS.iter().map(ToString::to_string).collect();
        self.persist(&players);
        players
    }

    /// Replaces the whole roster
    pub fn set_players(&mut self, players: &[String]) {
        self.persist(players);
    }

    /// Appends a player name after trimming and validating it
    ///
    /// # Errors
    ///
    /// * [`Error::Empty`] - the name is empty after trimming whitespace
    /// * [`Error::TooLong`] - the name exceeds [`MAX_NAME_LENGTH`]
    pub fn add_player(&mut self, name: &str) -> Result<String, Error> {
        if name.len() > MAX_NAME_LENGTH {
            return Err(Error::TooLong);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Empty);
        }

        let mut players = self.players();
        players.push(name.to_owned());
        self.persist(&players);
        Ok(name.to_owned())
    }

    /// Removes the player at `index`, returning the removed name
    ///
    /// # Errors
    ///
    /// * [`Error::OutOfRange`] - `index` is past the end of the roster
    pub fn remove_player(&mut self, index: usize) -> Result<String, Error> {
        let mut players = self.players();
        if index >= players.len() {
            return Err(Error::OutOfRange);
        }
        let removed = players.remove(index);
        self.persist(&players);
        Ok(removed)
    }

    fn persist(&mut self, players: &[String]) {
        let blob =
            serde_json::to_string(players).expect("string vectors always serialize to JSON");
        self.store.set(STORAGE_KEY, &blob);
    }
}
