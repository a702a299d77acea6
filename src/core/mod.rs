//! Core engine types: players, state, actions, RNG, configuration.
//!
//! This module contains the building blocks every other module shares.
//! Game rules live in `games::hilo` and operate on these types.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{ConfigError, GameConfig, DEFAULT_DECK_API_URL, STANDARD_DECK_SIZE};
pub use action::{Action, ActionKind, ActionRecord, Direction};
pub use state::{GameState, RoundId};
