//! Configuration constants for the parlor game system
//!
//! This module contains the limits and fixed values used throughout the
//! crate, grouped by the component they belong to.

/// Roster configuration constants
pub mod roster {
    /// Key under which the roster blob is stored in the key-value store
    pub const STORAGE_KEY: &str = "freegames_users";
    /// Default roster seeded when the store holds no usable roster
    pub const DEFAULT_PLAYERS: [&str; 3] = ["Alice", "Bob", "Charlie"];
    /// Maximum length of a player name in bytes
    pub const MAX_NAME_LENGTH: usize = 30;
}

/// Undercover match configuration constants
pub mod undercover {
    /// Minimum number of players required to start a match
    pub const MIN_PLAYERS: usize = 3;
    /// Placeholder word shown to Mr. White, who knows no word at all
    pub const MYSTERY_WORD: &str = "???";
}

/// Truth-or-dare session configuration constants
pub mod truth_or_dare {
    /// Minimum number of players required to start a session
    pub const MIN_PLAYERS: usize = 1;
}
