//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions produce the next state
//! - Win/loss conditions

use smallvec::SmallVec;

use crate::core::action::{Action, ActionKind};
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

use super::error::ActionError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tied scores, no winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// Text announcing the winner, or None for a tie.
    #[must_use]
    pub fn announcement(&self) -> Option<String> {
        match self {
            GameResult::Winner(p) => Some(format!("{p} Wins!")),
            GameResult::Draw => None,
        }
    }
}

/// The state produced by an action together with what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<T> {
    pub state: GameState,
    pub outcome: T,
}

impl<T> Transition<T> {
    #[must_use]
    pub fn new(state: GameState, outcome: T) -> Self {
        Self { state, outcome }
    }
}

/// Rules engine trait.
///
/// Transitions are pure: they read the current state and return the next
/// one, leaving the input untouched. An `Err` means nothing changed.
pub trait RulesEngine {
    /// Outcome reported by `apply_action`.
    type Outcome;

    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Action kinds the player to act may take.
    ///
    /// Returns empty if nothing but a reset is possible.
    fn legal_actions(&self, state: &GameState) -> SmallVec<[ActionKind; 3]>;

    /// Apply an action for the player to act.
    ///
    /// Must be deterministic: the same state and action always give the same
    /// transition.
    fn apply_action(
        &self,
        state: &GameState,
        action: Action,
    ) -> Result<Transition<Self::Outcome>, ActionError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether an action kind is currently legal.
    fn is_legal(&self, state: &GameState, kind: ActionKind) -> bool {
        self.legal_actions(state).contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::TWO);
        assert!(!result.is_winner(PlayerId::ONE));
        assert!(result.is_winner(PlayerId::TWO));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::ONE));
        assert!(!draw.is_winner(PlayerId::TWO));
    }

    #[test]
    fn test_game_result_announcement() {
        assert_eq!(
            GameResult::Winner(PlayerId::ONE).announcement().as_deref(),
            Some("Player 1 Wins!")
        );
        assert_eq!(GameResult::Draw.announcement(), None);
    }
}
