//! Which actions a front end should offer.
//!
//! Recomputed from state on every render; the explicit locks in `GameState`
//! are one input among several.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState};

/// Derived enable/disable flags for the action buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gating {
    pub hilo_disabled: bool,
    pub draw_disabled: bool,
    pub pass_disabled: bool,
}

impl Gating {
    #[must_use]
    pub fn of(state: &GameState, config: &GameConfig) -> Self {
        let deck_empty = state.deck_is_empty();
        let deck_untouched = state.deck_len() == config.deck_size;

        let hilo_disabled = deck_empty || deck_untouched || state.hilo_locked();
        let draw_disabled =
            deck_empty || state.previous_card().is_some() || !hilo_disabled || state.draw_locked();
        let pass_disabled = deck_empty || state.correct_streak() < config.pass_threshold;

        Self {
            hilo_disabled,
            draw_disabled,
            pass_disabled,
        }
    }

    /// Everything disabled; only a reset is possible.
    #[must_use]
    pub fn all_disabled(&self) -> bool {
        self.hilo_disabled && self.draw_disabled && self.pass_disabled
    }
}
