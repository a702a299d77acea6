use std::collections::HashSet;

use async_trait::async_trait;

use super::error::DeckError;
use crate::cards::Card;

/// Where fresh decks come from.
///
/// Contract: every call shuffles a new deck and returns all of its cards,
/// each exactly once. The last card is the top of the deck.
#[async_trait]
pub trait DeckSource: Send + Sync {
    async fn fresh_deck(&self) -> Result<Vec<Card>, DeckError>;
}

/// Check a deck against the source contract.
pub fn ensure_complete(cards: Vec<Card>, expected: usize) -> Result<Vec<Card>, DeckError> {
    if cards.len() != expected {
        return Err(DeckError::Incomplete {
            expected,
            received: cards.len(),
        });
    }

    let duplicate = {
        let mut seen = HashSet::with_capacity(cards.len());
        cards
            .iter()
            .find(|&card| !seen.insert(card.code.as_str()))
            .map(|card| card.code.clone())
    };
    if let Some(code) = duplicate {
        return Err(DeckError::Duplicate(code));
    }

    Ok(cards)
}
