use thiserror::Error;

/// Failures while obtaining a fresh deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected deck service response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("deck service refused the {stage} request")]
    Rejected { stage: &'static str },

    #[error("expected {expected} cards, received {received}")]
    Incomplete { expected: usize, received: usize },

    #[error("card {0} appears more than once")]
    Duplicate(String),
}
