//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat identifier for one of the two players. The first seat moves first.
//!
//! ## Player
//!
//! Name, color and the reserve/capture counters the engine updates during
//! overflow resolution.
//!
//! ## PlayerPair
//!
//! Fixed two-entry storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::piece::PieceColor;

/// Player seat: `PlayerId(0)` or `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    ///
    /// ```
    /// use focus_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both seats in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A registered player and their piece counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: PieceColor,
    reserves: u32,
    captures: u32,
}

impl Player {
    /// Create a player with empty counters.
    pub fn new(name: impl Into<String>, color: PieceColor) -> Self {
        Self {
            name: name.into(),
            color,
            reserves: 0,
            captures: 0,
        }
    }

    /// Set the starting reserve count.
    #[must_use]
    pub fn with_reserves(mut self, reserves: u32) -> Self {
        self.reserves = reserves;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Pieces available for `reserved_move`.
    #[must_use]
    pub fn reserves(&self) -> u32 {
        self.reserves
    }

    /// Opponent pieces permanently removed by this player.
    #[must_use]
    pub fn captures(&self) -> u32 {
        self.captures
    }

    pub(crate) fn add_reserve(&mut self) {
        self.reserves += 1;
    }

    /// Spend one reserve. The caller has checked `reserves()` is positive.
    pub(crate) fn spend_reserve(&mut self) {
        debug_assert!(self.reserves > 0, "{} spent a reserve it does not have", self.name);
        self.reserves = self.reserves.saturating_sub(1);
    }

    pub(crate) fn add_capture(&mut self) {
        self.captures += 1;
    }
}

/// Per-player data for exactly two players.
///
/// ## Example
///
/// ```
/// use focus_engine::core::{PlayerId, PlayerPair};
///
/// let mut scores: PlayerPair<u32> = PlayerPair::with_value(0);
/// scores[PlayerId::SECOND] += 3;
///
/// assert_eq!(scores[PlayerId::FIRST], 0);
/// assert_eq!(scores[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create from the first and second player's values.
    pub fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Find the first seat whose value matches `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<PlayerId> {
        PlayerId::both().find(|&p| predicate(self.get(p)))
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
