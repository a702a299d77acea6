//! Player actions and the action history.
//!
//! A turn consists of three kinds of action:
//! - "Draw" opens a round by turning over the first card
//! - "Guess" calls the next card higher or lower
//! - "Pass" banks a streak and hands the pile to the opponent
//!
//! Resetting the game is not an action; it replaces the state entirely.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::RoundId;
use crate::cards::Rank;

/// Direction of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    /// Parse raw guess input. Unknown input is `None`, which the engine
    /// treats as "no guess".
    ///
    /// ```
    /// use hilo_cards::core::Direction;
    ///
    /// assert_eq!(Direction::parse("higher"), Some(Direction::Higher));
    /// assert_eq!(Direction::parse(" L "), Some(Direction::Lower));
    /// assert_eq!(Direction::parse(""), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        input.parse().ok()
    }

    /// Whether `next` satisfies this guess against `previous`.
    ///
    /// Ties are correct in both directions.
    #[must_use]
    pub fn is_correct(self, previous: Rank, next: Rank) -> bool {
        match self {
            Direction::Higher => next.value() >= previous.value(),
            Direction::Lower => next.value() <= previous.value(),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "higher" | "hi" | "h" => Ok(Direction::Higher),
            "lower" | "lo" | "l" => Ok(Direction::Lower),
            other => Err(format!("not a guess: {other:?}")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Higher => f.write_str("higher"),
            Direction::Lower => f.write_str("lower"),
        }
    }
}

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Draw,
    Guess(Direction),
    Pass,
}

impl Action {
    /// The kind of this action, without its payload.
    #[must_use]
    pub fn kind(self) -> ActionKind {
        match self {
            Action::Draw => ActionKind::Draw,
            Action::Guess(_) => ActionKind::Guess,
            Action::Pass => ActionKind::Pass,
        }
    }
}

/// Action kinds, used for gating and error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Draw,
    Guess,
    Pass,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Draw => f.write_str("draw"),
            ActionKind::Guess => f.write_str("guess"),
            ActionKind::Pass => f.write_str("pass"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round in which the action was taken.
    pub round: RoundId,

    /// Sequence number within the game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: RoundId, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("HIGHER"), Some(Direction::Higher));
        assert_eq!(Direction::parse("h"), Some(Direction::Higher));
        assert_eq!(Direction::parse("lo"), Some(Direction::Lower));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn test_ties_are_correct_both_ways() {
        assert!(Direction::Higher.is_correct(Rank::Seven, Rank::Seven));
        assert!(Direction::Lower.is_correct(Rank::Seven, Rank::Seven));
    }

    #[test]
    fn test_direction_comparisons() {
        assert!(Direction::Higher.is_correct(Rank::Ten, Rank::Jack));
        assert!(!Direction::Higher.is_correct(Rank::Ace, Rank::King));
        assert!(Direction::Lower.is_correct(Rank::Ace, Rank::Two));
        assert!(!Direction::Lower.is_correct(Rank::Two, Rank::Three));
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(Action::Draw.kind(), ActionKind::Draw);
        assert_eq!(Action::Guess(Direction::Lower).kind(), ActionKind::Guess);
        assert_eq!(Action::Pass.kind(), ActionKind::Pass);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::TWO,
            Action::Guess(Direction::Higher),
            RoundId::default(),
            3,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
