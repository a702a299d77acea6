//! Client for the deckofcardsapi.com deck service.
//!
//! Two calls per deck: shuffle a new deck, then draw every card from it.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use super::error::DeckError;
use super::source::{ensure_complete, DeckSource};
use crate::cards::Card;
use crate::core::GameConfig;

#[derive(Debug, Deserialize)]
struct ShuffleResponse {
    success: bool,
    #[serde(default)]
    deck_id: String,
}

#[derive(Debug, Deserialize)]
struct DrawResponse {
    success: bool,
    #[serde(default)]
    cards: Vec<Card>,
}

/// Decode a shuffle response into its deck id.
fn parse_shuffle(body: &str) -> Result<String, DeckError> {
    let response: ShuffleResponse = serde_json::from_str(body)?;
    if !response.success || response.deck_id.is_empty() {
        return Err(DeckError::Rejected { stage: "shuffle" });
    }
    Ok(response.deck_id)
}

/// Decode a draw response and check it holds a complete deck.
fn parse_draw(body: &str, expected: usize) -> Result<Vec<Card>, DeckError> {
    let response: DrawResponse = serde_json::from_str(body)?;
    if !response.success {
        return Err(DeckError::Rejected { stage: "draw" });
    }
    ensure_complete(response.cards, expected)
}

/// HTTP deck source.
#[derive(Clone, Debug)]
pub struct DeckApiClient {
    http: reqwest::Client,
    base_url: String,
    deck_size: usize,
}

impl DeckApiClient {
    /// Create a client for the service at `base_url`
    /// (e.g. `https://deckofcardsapi.com/api/deck`).
    #[must_use]
    pub fn new(base_url: impl Into<String>, deck_size: usize) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            deck_size,
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.deck_api_url.clone(), config.deck_size)
    }

    #[must_use]
    pub fn shuffle_url(&self) -> String {
        format!("{}/new/shuffle/?deck_count=1", self.base_url)
    }

    #[must_use]
    pub fn draw_url(&self, deck_id: &str) -> String {
        format!("{}/{}/draw/?count={}", self.base_url, deck_id, self.deck_size)
    }

    async fn get_text(&self, url: &str) -> Result<String, DeckError> {
        debug!(url, "deck service request");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl DeckSource for DeckApiClient {
    async fn fresh_deck(&self) -> Result<Vec<Card>, DeckError> {
        let deck_id = parse_shuffle(&self.get_text(&self.shuffle_url()).await?)?;
        info!(%deck_id, "shuffled new deck");

        let cards = parse_draw(&self.get_text(&self.draw_url(&deck_id)).await?, self.deck_size)?;
        info!(%deck_id, cards = cards.len(), "drew full deck");
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_urls() {
        let client = DeckApiClient::new("https://deckofcardsapi.com/api/deck/", 52);

        assert_eq!(
            client.shuffle_url(),
            "https://deckofcardsapi.com/api/deck/new/shuffle/?deck_count=1"
        );
        assert_eq!(
            client.draw_url("3p40paa87x90"),
            "https://deckofcardsapi.com/api/deck/3p40paa87x90/draw/?count=52"
        );
    }

    #[test]
    fn test_parse_shuffle() {
        let body = r#"{"success": true, "deck_id": "3p40paa87x90", "shuffled": true, "remaining": 52}"#;
        assert_eq!(parse_shuffle(body).unwrap(), "3p40paa87x90");

        let refused = r#"{"success": false, "error": "Deck count too large"}"#;
        assert!(matches!(
            parse_shuffle(refused),
            Err(DeckError::Rejected { stage: "shuffle" })
        ));

        assert!(matches!(parse_shuffle("<html>"), Err(DeckError::Decode(_))));
    }

    #[test]
    fn test_parse_draw() {
        let body = r#"{
            "success": true,
            "deck_id": "kxozasf3edqu",
            "cards": [
                {"code": "6H", "image": "https://deckofcardsapi.com/static/img/6H.png",
                 "images": {"svg": "https://deckofcardsapi.com/static/img/6H.svg",
                            "png": "https://deckofcardsapi.com/static/img/6H.png"},
                 "value": "6", "suit": "HEARTS"},
                {"code": "5S", "image": "https://deckofcardsapi.com/static/img/5S.png",
                 "images": {"svg": "https://deckofcardsapi.com/static/img/5S.svg",
                            "png": "https://deckofcardsapi.com/static/img/5S.png"},
                 "value": "5", "suit": "SPADES"}
            ],
            "remaining": 50
        }"#;

        let cards = parse_draw(body, 2).unwrap();
        let ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Six, Rank::Five]);

        assert!(matches!(
            parse_draw(body, 52),
            Err(DeckError::Incomplete { expected: 52, received: 2 })
        ));
    }

    #[test]
    fn test_parse_draw_rejected() {
        let body = r#"{"success": false, "deck_id": "x", "cards": [], "remaining": 0}"#;
        assert!(matches!(
            parse_draw(body, 52),
            Err(DeckError::Rejected { stage: "draw" })
        ));
    }
}
