//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats at the table. Ids are 1-based to
//! match what players see on screen ("Player 1", "Player 2").
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier: `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who starts every game.
    pub const ONE: PlayerId = PlayerId(1);
    /// The second player.
    pub const TWO: PlayerId = PlayerId(2);

    /// Create a player ID from its displayed number.
    ///
    /// Returns `None` for anything other than 1 or 2.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        match id {
            1 | 2 => Some(Self(id)),
            _ => None,
        }
    }

    /// The displayed player number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Storage index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The opponent of this player.
    ///
    /// ```
    /// use hilo_cards::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ONE.other(), PlayerId::TWO);
    /// assert_eq!(PlayerId::TWO.other(), PlayerId::ONE);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self.0 {
            1 => Self::TWO,
            _ => Self::ONE,
        }
    }

    /// Iterate over both player IDs in seat order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id).ok_or_else(|| format!("no such player: {id}"))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use hilo_cards::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::with_value(0);
/// score[PlayerId::TWO] += 3;
///
/// assert_eq!(score[PlayerId::ONE], 0);
/// assert_eq!(score[PlayerId::TWO], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

/// Deserializes only with exactly one entry per seat, so indexing by any
/// `PlayerId` stays in bounds.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for PlayerMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw<T> {
            data: Vec<T>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        let seats = PlayerId::all().count();
        if raw.data.len() != seats {
            return Err(de::Error::invalid_length(
                raw.data.len(),
                &"one entry per player",
            ));
        }
        Ok(Self { data: raw.data })
    }
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
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
