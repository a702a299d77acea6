//! Deck sources: the seam between the game and whoever shuffles the cards.
//!
//! - `DeckApiClient`: the remote deck service used in play
//! - `SeededDeckSource`: deterministic decks for tests

mod error;
mod http;
mod seeded;
mod source;

pub use error::DeckError;
pub use http::DeckApiClient;
pub use seeded::{standard_deck, SeededDeckSource};
pub use source::{ensure_complete, DeckSource};
