//! Undercover match engine
//!
//! This module implements the social-deduction game: secret roles and
//! words are dealt to players, everyone views their card in turn during a
//! reveal pass, and the group then runs repeated vote-elimination rounds
//! until one side has no players left alive. The match is a single
//! explicit state machine; every transition happens synchronously in
//! response to one operator action, and reset is always available.

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{catalog::Topic, constants::undercover::MIN_PLAYERS};

pub mod roles;

/// The secret role dealt to a player at match start
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    enum_map::Enum,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// Majority role; knows the real word
    #[display("citizen")]
    Citizen,
    /// Minority role; knows a decoy word similar to the real one
    #[display("undercover")]
    Undercover,
    /// At most one per match; knows no word at all
    #[display("mr. white")]
    MrWhite,
}

impl Role {
    /// Whether this role counts against the citizens
    ///
    /// Undercovers and Mr. White win and lose together.
    pub fn is_bad_guy(self) -> bool {
        !matches!(self, Role::Citizen)
    }
}

/// A seated player with their dealt role and secret word
///
/// Players are created in bulk when a match is initialized and are never
/// removed; elimination only clears the `alive` flag. The match owns its
/// players exclusively, so role and word cannot be mutated from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    role: Role,
    word: String,
    alive: bool,
}

impl Player {
    /// Returns the player's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's secret role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the player's secret word (`"???"` for Mr. White)
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Whether the player is still in the game
    pub fn alive(&self) -> bool {
        self.alive
    }
}

/// The side that won a finished match
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum Winner {
    /// Every undercover and Mr. White was eliminated
    #[display("citizens")]
    Citizens,
    /// Every citizen was eliminated
    #[display("undercovers")]
    Undercovers,
}

/// The current stage of the match state machine
///
/// Replaces the tangle of independent boolean flags an operator UI might
/// keep with one enumerated phase, so that contradictory combinations
/// (voting while the game is over, say) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting the desired undercover count; no players dealt yet
    Setup,
    /// Roles are dealt but nobody has viewed their card
    Ready,
    /// Players view their cards one by one in seat order
    Reveal {
        /// Seat index of the player currently at the device
        current: usize,
        /// Whether that player's role and word are on display
        shown: bool,
    },
    /// The group votes somebody out; repeats until a side is empty
    Vote,
    /// Terminal; all roles may be revealed and only reset applies
    GameOver {
        /// The side that won
        winner: Winner,
    },
}

/// Errors that can occur while driving a match
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fewer players than the game minimum were supplied
    #[error("undercover needs at least {required} players, got {actual}")]
    NotEnoughPlayers {
        /// The minimum player count
        required: usize,
        /// The number of players supplied
        actual: usize,
    },
    /// A match is already dealt; reset before initializing again
    #[error("a match is already in progress")]
    AlreadyInitialized,
    /// The reveal pass can only start from the ready phase
    #[error("the match is not ready to start")]
    NotReady,
    /// The operation applies only during the reveal phase
    #[error("no reveal pass is in progress")]
    NotRevealing,
    /// The current player's card is already on display
    #[error("the current player's role is already shown")]
    AlreadyShown,
    /// The current player has not viewed their card yet
    #[error("the current player's role has not been shown")]
    NotShown,
    /// Eliminations apply only during the vote phase
    #[error("no vote is in progress")]
    NotVoting,
    /// The match has ended; no further eliminations are accepted
    #[error("the match is over")]
    MatchOver,
    /// The seat index does not refer to a player
    #[error("no player at seat {seat}")]
    NoSuchSeat {
        /// The offending seat index
        seat: usize,
    },
    /// The player at that seat was already eliminated
    #[error("the player at seat {seat} is already eliminated")]
    AlreadyEliminated {
        /// The offending seat index
        seat: usize,
    },
}

/// An undercover match from setup through game over
///
/// All mutations are whole-state replacements driven by single operator
/// actions, so reset is safe from any phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    players: Vec<Player>,
    topic: Option<Topic>,
    round: u32,
    phase: Phase,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a fresh match in the setup phase
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            topic: None,
            round: 1,
            phase: Phase::Setup,
        }
    }

    /// Suggested undercover count for a roster of `player_count`
    ///
    /// One undercover per three players, and never fewer than one.
    pub fn suggested_undercover_count(player_count: usize) -> usize {
        (player_count / 3).max(1)
    }

    /// Clamps an operator-chosen undercover count into the legal range
    ///
    /// The legal range is `[1, player_count / 2]`; out-of-range input is
    /// corrected at this boundary and never reaches role assignment.
    pub fn clamped_undercover_count(player_count: usize, desired: usize) -> usize {
        desired.clamp(1, (player_count / 2).max(1))
    }

    /// Deals roles and words to the players, moving the match to ready
    ///
    /// Draws nothing beyond what [`roles::assign`] needs: the names are
    /// shuffled into seat order and the topic is fixed for the whole
    /// match. The round counter starts at 1.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyInitialized`] - the match is past setup
    /// * [`Error::NotEnoughPlayers`] - fewer than three names supplied
    pub fn initialize(
        &mut self,
        names: &[String],
        desired_undercover: usize,
        topic: Topic,
        rng: &mut fastrand::Rng,
    ) -> Result<(), Error> {
        if self.phase != Phase::Setup {
            return Err(Error::AlreadyInitialized);
        }
        if names.len() < MIN_PLAYERS {
            return Err(Error::NotEnoughPlayers {
                required: MIN_PLAYERS,
                actual: names.len(),
            });
        }

        let undercover_count = Self::clamped_undercover_count(names.len(), desired_undercover);
        self.players = roles::assign(names, undercover_count, &topic, rng);
        self.topic = Some(topic);
        self.round = 1;
        self.phase = Phase::Ready;

        tracing::debug!(
            players = self.players.len(),
            undercovers = undercover_count,
            "match initialized"
        );

        Ok(())
    }

    /// Begins the reveal pass with the first seated player
    ///
    /// # Errors
    ///
    /// * [`Error::NotReady`] - the match is not in the ready phase
    pub fn start_round(&mut self) -> Result<(), Error> {
        if self.phase != Phase::Ready {
            return Err(Error::NotReady);
        }
        self.phase = Phase::Reveal {
            current: 0,
            shown: false,
        };
        Ok(())
    }

    /// Shows the current player their role and secret word
    ///
    /// This is a display side effect only; the phase does not advance
    /// until the player confirms with [`Game::confirm_viewed`].
    ///
    /// # Errors
    ///
    /// * [`Error::NotRevealing`] - no reveal pass is in progress
    /// * [`Error::AlreadyShown`] - the card is already on display
    pub fn show_role(&mut self) -> Result<&Player, Error> {
        match self.phase {
            Phase::Reveal { shown: true, .. } => Err(Error::AlreadyShown),
            Phase::Reveal { current, .. } => {
                self.phase = Phase::Reveal {
                    current,
                    shown: true,
                };
                Ok(&self.players[current])
            }
            _ => Err(Error::NotRevealing),
        }
    }

    /// Hides the shown card and passes the device to the next player
    ///
    /// After the last player confirms, the match moves to the vote phase.
    ///
    /// # Errors
    ///
    /// * [`Error::NotRevealing`] - no reveal pass is in progress
    /// * [`Error::NotShown`] - the current player has not viewed yet
    pub fn confirm_viewed(&mut self) -> Result<(), Error> {
        match self.phase {
            Phase::Reveal { shown: false, .. } => Err(Error::NotShown),
            Phase::Reveal { current, .. } => {
                self.phase = if current + 1 < self.players.len() {
                    Phase::Reveal {
                        current: current + 1,
                        shown: false,
                    }
                } else {
                    Phase::Vote
                };
                Ok(())
            }
            _ => Err(Error::NotRevealing),
        }
    }

    /// Eliminates the player at `seat` and evaluates the win condition
    ///
    /// The eliminated player is flagged dead but keeps their seat. When
    /// one side has nobody left alive the match ends and the winner is
    /// returned; otherwise the round counter increments and the match
    /// stays in the vote phase for another elimination. There is no
    /// second reveal pass between vote rounds.
    ///
    /// # Errors
    ///
    /// * [`Error::MatchOver`] - the match already ended
    /// * [`Error::NotVoting`] - no vote is in progress
    /// * [`Error::NoSuchSeat`] - `seat` is out of range
    /// * [`Error::AlreadyEliminated`] - that player is already out
    pub fn eliminate(&mut self, seat: usize) -> Result<Option<Winner>, Error> {
        match self.phase {
            Phase::Vote => {}
            Phase::GameOver { .. } => return Err(Error::MatchOver),
            _ => return Err(Error::NotVoting),
        }
        let player = self
            .players
            .get_mut(seat)
            .ok_or(Error::NoSuchSeat { seat })?;
        if !player.alive {
            return Err(Error::AlreadyEliminated { seat });
        }
        player.alive = false;

        if let Some(winner) = self.decide_winner() {
            self.phase = Phase::GameOver { winner };
            tracing::info!(%winner, round = self.round, "match over");
            Ok(Some(winner))
        } else {
            self.round += 1;
            Ok(None)
        }
    }

    /// Discards the match and returns to a fresh setup phase
    ///
    /// Safe from any phase; the resulting state is identical regardless
    /// of how far the discarded match had progressed.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns all seated players in their shuffled seat order
    ///
    /// Empty during setup. After game over this doubles as the final
    /// role reveal: every player, dead or alive, with role and word.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the topic for the current match, if one is dealt
    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    /// Returns the current vote round, starting at 1
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the winner once the match has ended
    pub fn winner(&self) -> Option<Winner> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Returns the player whose turn it is during the reveal pass
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::Reveal { current, .. } => self.players.get(current),
            _ => None,
        }
    }

    /// Counts players still alive, per role
    pub fn alive_count_by_role(&self) -> EnumMap<Role, usize> {
        let mut counts = EnumMap::default();
        for player in self.players.iter().filter(|player| player.alive) {
            counts[player.role] += 1;
        }
        counts
    }

    /// Win condition, checked after every elimination
    ///
    /// Bad guys at zero is checked before citizens at zero; a tie is
    /// impossible since each elimination removes exactly one player.
    fn decide_winner(&self) -> Option<Winner> {
        let alive = self.alive_count_by_role();
        if alive[Role::Undercover] + alive[Role::MrWhite] == 0 {
            Some(Winner::Citizens)
        } else if alive[Role::Citizen] == 0 {
            Some(Winner::Undercovers)
        } else {
            None
        }
    }
}
