//! Deterministic in-memory deck source for tests.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::error::DeckError;
use super::source::DeckSource;
use crate::cards::{Card, Rank, Suit};
use crate::core::GameRng;

/// The 52 cards of a standard deck, unshuffled.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::STANDARD.iter().map(move |&rank| Card::new(rank, suit)))
        .collect()
}

/// Shuffles standard decks with a seeded `GameRng`.
///
/// The n-th deck from a given seed is the same on every run.
#[derive(Debug)]
pub struct SeededDeckSource {
    rng: Mutex<GameRng>,
}

impl SeededDeckSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(GameRng::new(seed)),
        }
    }
}

#[async_trait]
impl DeckSource for SeededDeckSource {
    async fn fresh_deck(&self) -> Result<Vec<Card>, DeckError> {
        let mut shuffler = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fork();

        let mut cards = standard_deck();
        shuffler.shuffle(&mut cards);
        Ok(cards)
    }
}
