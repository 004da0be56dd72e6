//! Player identification, per-player storage, and the player record.
//!
//! ## PlayerId
//!
//! Seat index in turn order. The first player to act is `PlayerId(0)`.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access by `PlayerId`.
//! Supports circular scans in turn order, which both `end_turn` and
//! disproof resolution rely on.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::Rgb;
use crate::board::Pos;
use crate::cards::Hand;

/// Seat index of a player in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use clue_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Seats in turn order starting immediately after `self`, wrapping
    /// around, and ending with `self`.
    ///
    /// ```
    /// use clue_engine::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::new(1).following(3).collect();
    /// assert_eq!(order, vec![PlayerId::new(2), PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn following(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        let start = self.index();
        (1..=player_count).map(move |offset| PlayerId(((start + offset) % player_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use clue_engine::core::{PlayerId, PlayerMap};
///
/// let mut notes: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// notes[PlayerId::new(1)] = 4;
/// assert_eq!(notes[PlayerId::new(1)], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Wrap one value per seat, in turn order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the seat exists.
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

    /// Iterate over the values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
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

/// A seated player.
///
/// `position` is either a walkable tile or the center of the room the player
/// is in. Once `active` becomes false it is never set back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: Rgb,
    pub position: Pos,
    pub active: bool,
    hand: Hand,
}

impl Player {
    /// Create an active player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, color: Rgb, position: Pos) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            position,
            active: true,
            hand: Hand::default(),
        }
    }

    /// The cards dealt to this player.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Hands are assigned once, by the deal.
    pub(crate) fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    /// Mark this player as eliminated.
    pub(crate) fn eliminate(&mut self) {
        self.active = false;
    }
}
