//! # hilo-cards
//!
//! A two-player higher/lower card game over a remotely shuffled deck.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: The round engine takes a `GameState` and returns
//!    a new one. No clocks, no I/O.
//!
//! 2. **Explicit Time**: Debouncing and the pause after a lost round are
//!    timers polled with a caller-supplied `Instant`.
//!
//! 3. **Deck Sources Behind a Trait**: The remote deck service and the
//!    seeded test deck both implement `DeckSource`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so every
//!   transition keeps the previous state intact.
//!
//! - **Round Identity**: Deferred work is keyed by `RoundId`; a reset moves
//!   the epoch forward and orphans it.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration
//! - `cards`: Ranks, suits and the rank lookup table
//! - `rules`: RulesEngine trait and action errors
//! - `games`: The higher/lower game, gating and view
//! - `timing`: Debouncer and deferred timers
//! - `deck`: Deck sources (HTTP client, seeded)
//! - `session`: A running game wiring all of the above

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod timing;
pub mod deck;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    GameConfig, ConfigError,
    Action, ActionKind, ActionRecord, Direction,
    GameState, RoundId,
};

pub use crate::cards::{Card, Rank, Suit};

pub use crate::rules::{ActionError, GameResult, RulesEngine, Transition};

pub use crate::games::hilo::{
    compute_winner, ActionOutcome, GuessOutcome, HiLoGame, Phase,
    Gating, View,
};

pub use crate::timing::{Debouncer, Deferred};

pub use crate::deck::{DeckApiClient, DeckError, DeckSource, SeededDeckSource};

pub use crate::session::{GameSession, GuessSubmission, SessionEvent};
