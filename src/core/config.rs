//! Game configuration.
//!
//! All tunables of a game live in `GameConfig`: deck size, the pass
//! threshold, timer windows and the deck service address. Defaults reproduce
//! the standard game; a TOML file or the builder methods override them.
//!
//! ```toml
//! pass_threshold = 3
//! guess_debounce_ms = 500
//! round_end_delay_ms = 2000
//! deck_api_url = "https://deckofcardsapi.com/api/deck"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default deck service base URL.
pub const DEFAULT_DECK_API_URL: &str = "https://deckofcardsapi.com/api/deck";

/// Cards in one standard deck; the upper bound for `deck_size`.
pub const STANDARD_DECK_SIZE: usize = 52;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards in a fresh deck. Hi/lo stays disabled while the deck is untouched.
    pub deck_size: usize,

    /// Consecutive correct guesses required before a player may pass.
    pub pass_threshold: u32,

    /// Quiet period before a burst of guesses resolves (trailing edge).
    pub guess_debounce_ms: u64,

    /// How long the losing card stays on the table before the round clears.
    pub round_end_delay_ms: u64,

    /// Base URL of the deck service.
    pub deck_api_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck_size: 52,
            pass_threshold: 3,
            guess_debounce_ms: 500,
            round_end_delay_ms: 2000,
            deck_api_url: DEFAULT_DECK_API_URL.to_string(),
        }
    }
}

impl GameConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// Missing keys keep their default values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=STANDARD_DECK_SIZE).contains(&self.deck_size) {
            return Err(ConfigError::Invalid(format!(
                "deck_size must be between 2 and {STANDARD_DECK_SIZE}, got {}",
                self.deck_size
            )));
        }
        if self.pass_threshold == 0 {
            return Err(ConfigError::Invalid("pass_threshold must be positive".into()));
        }
        if self.deck_api_url.trim().is_empty() {
            return Err(ConfigError::Invalid("deck_api_url must not be empty".into()));
        }
        Ok(())
    }

    /// Debounce window as a `Duration`.
    #[must_use]
    pub fn guess_debounce(&self) -> Duration {
        Duration::from_millis(self.guess_debounce_ms)
    }

    /// Round-end delay as a `Duration`.
    #[must_use]
    pub fn round_end_delay(&self) -> Duration {
        Duration::from_millis(self.round_end_delay_ms)
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the pass threshold.
    #[must_use]
    pub fn with_pass_threshold(mut self, threshold: u32) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Set the debounce window in milliseconds.
    #[must_use]
    pub fn with_guess_debounce_ms(mut self, ms: u64) -> Self {
        self.guess_debounce_ms = ms;
        self
    }

    /// Set the round-end delay in milliseconds.
    #[must_use]
    pub fn with_round_end_delay_ms(mut self, ms: u64) -> Self {
        self.round_end_delay_ms = ms;
        self
    }

    /// Set the deck service base URL.
    #[must_use]
    pub fn with_deck_api_url(mut self, url: impl Into<String>) -> Self {
        self.deck_api_url = url.into();
        self
    }
}
