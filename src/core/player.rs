//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. The game always has exactly two seats, so the
//! only valid ids are `PlayerId::FIRST` and `PlayerId::SECOND`.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a fixed `[T; 2]` for O(1) access.
//! Supports iteration, indexing by `PlayerId`, and split borrows of a seat
//! and its partner.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 2;

/// Seat identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first seat ("Player 1").
    pub const FIRST: PlayerId = PlayerId(0);

    /// The second seat ("Player 2").
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use rain_or_shine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.partner(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.partner(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn partner(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both seats in table order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rain_or_shine::core::{PlayerId, PlayerMap};
///
/// let mut capacity: PlayerMap<i32> = PlayerMap::new(|_| 7);
/// capacity[PlayerId::SECOND] += 3;
///
/// assert_eq!(capacity[PlayerId::FIRST], 7);
/// assert_eq!(capacity[PlayerId::SECOND], 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a map from the two seat values in table order.
    pub fn from_pair(first: T, second: T) -> Self {
        Self { data: [first, second] }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow a seat and its partner mutably at the same time.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let (first, second) = self.data.split_at_mut(1);
        if player == PlayerId::FIRST {
            (&mut first[0], &mut second[0])
        } else {
            (&mut second[0], &mut first[0])
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
