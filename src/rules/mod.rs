//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions produce the next state
//! - Win/loss conditions
//!
//! Sessions and front ends drive games only through `RulesEngine` and the
//! game's own transition methods.

pub mod engine;
pub mod error;

pub use engine::{GameResult, RulesEngine, Transition};
pub use error::ActionError;
