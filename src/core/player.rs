//! Player identification, per-player storage and combat state.
//!
//! ## PlayerId
//!
//! Type-safe participant identifier supporting 1-255 participants.
//!
//! ## PlayerMap
//!
//! Per-participant storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`.
//!
//! ## PlayerState
//!
//! The mutable combat part of a participant (charge, alive, protected).
//! It is `Copy`, so rollouts work on plain snapshots and never touch the
//! live game.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Participant identifier supporting 1-255 participants.
///
/// Indices are 0-based: the first participant is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` participants.
    ///
    /// ```
    /// use charge_combat::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Combat state of one participant.
///
/// Created with charge 0, alive and unprotected. Death is irreversible
/// within a game; only [`PlayerState::reset`] (used when a game instance
/// is reused for another trial) brings a participant back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Accumulated charge, spent by Shoot and Rocket.
    pub charge: u32,
    /// False once the participant has been eliminated.
    pub is_alive: bool,
    /// Shielded from Shoot for the current round.
    pub is_protected: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::fresh()
    }
}

impl PlayerState {
    /// State at the start of a game.
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            charge: 0,
            is_alive: true,
            is_protected: false,
        }
    }

    /// A live, unprotected participant holding `charge`.
    #[must_use]
    pub const fn with_charge(charge: u32) -> Self {
        Self {
            charge,
            is_alive: true,
            is_protected: false,
        }
    }

    /// Whether the participant can pay `cost` charge.
    #[must_use]
    pub const fn can_afford(&self, cost: u32) -> bool {
        self.charge >= cost
    }

    /// Restore the initial values for a new trial.
    pub fn reset(&mut self) {
        *self = Self::fresh();
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per participant.
///
/// ## Example
///
/// ```
/// use charge_combat::core::{PlayerId, PlayerMap, PlayerState};
///
/// let mut players: PlayerMap<PlayerState> = PlayerMap::with_default(3);
/// players[PlayerId::new(1)].charge = 2;
///
/// assert_eq!(players[PlayerId::new(1)].charge, 2);
/// assert!(players.get(PlayerId::new(5)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each participant.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of participants.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Whether `player` is part of this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a participant's data, or `None` for an unknown id.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a participant's data mutably, or `None` for an unknown id.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl PlayerMap<PlayerState> {
    /// Participants still alive, in player order.
    pub fn alive(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_alive)
            .map(|(id, _)| id)
    }

    /// Number of participants still alive.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.values().filter(|state| state.is_alive).count()
    }

    /// Alive participants other than `player` (valid attack targets).
    #[must_use]
    pub fn opponents_of(&self, player: PlayerId) -> Vec<PlayerId> {
        self.alive().filter(|&p| p != player).collect()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
