//! Game state: a single value holding everything the round engine tracks.
//!
//! ## GameState
//!
//! - Deck (top = end of vector) and the current round's drawn cards
//! - Reference card for the next guess, current guess, streak
//! - Turn, scores
//! - Explicit hi/lo and draw locks
//! - Round identity and action history
//!
//! Uses `im` persistent vectors so transitions can take a cheap clone of the
//! previous state and return a new one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord, Direction};
use super::player::{PlayerId, PlayerMap};
use crate::cards::Card;

/// Identity of a round.
///
/// `epoch` advances on every reset, `round` on every cleared round. Timers
/// scheduled for one round can never fire into another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId {
    pub epoch: u32,
    pub round: u32,
}

impl RoundId {
    /// The next round in the same game.
    #[must_use]
    pub const fn next_round(self) -> Self {
        Self {
            epoch: self.epoch,
            round: self.round + 1,
        }
    }

    /// The first round of the next game.
    #[must_use]
    pub const fn next_epoch(self) -> Self {
        Self {
            epoch: self.epoch + 1,
            round: 0,
        }
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.epoch, self.round)
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Remaining deck; the top card is the last element.
    pub(crate) deck: Vector<Card>,

    /// A deck has been installed since the last reset.
    pub(crate) loaded: bool,

    /// Cards turned over this round, in draw order.
    pub(crate) drawn: Vector<Card>,

    /// Second-to-last drawn card; cleared on a wrong guess.
    pub(crate) previous_card: Option<Card>,

    /// Most recent guess; cleared by pass and reset.
    pub(crate) current_guess: Option<Direction>,

    /// Consecutive correct guesses in the current run.
    pub(crate) correct_streak: u32,

    /// Whose turn it is.
    pub(crate) turn: PlayerId,

    /// Penalty points per player.
    pub(crate) scores: PlayerMap<u32>,

    /// Hi/lo explicitly disabled.
    pub(crate) hilo_locked: bool,

    /// Draw explicitly disabled.
    pub(crate) draw_locked: bool,

    /// Current round identity.
    pub(crate) round: RoundId,

    /// A wrong guess ended this round; drawn cards clear after the delay.
    pub(crate) awaiting_clear: bool,

    /// Every applied action.
    pub(crate) history: Vector<ActionRecord>,

    pub(crate) next_sequence: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty state: no deck loaded, player 1 to act.
    #[must_use]
    pub fn new() -> Self {
        Self::for_round(RoundId::default())
    }

    /// Create an empty state for the given round identity.
    #[must_use]
    pub(crate) fn for_round(round: RoundId) -> Self {
        Self {
            deck: Vector::new(),
            loaded: false,
            drawn: Vector::new(),
            previous_card: None,
            current_guess: None,
            correct_streak: 0,
            turn: PlayerId::ONE,
            scores: PlayerMap::with_value(0),
            hilo_locked: true,
            draw_locked: false,
            round,
            awaiting_clear: false,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    // === Accessors ===

    /// Cards remaining in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Whether the deck is exhausted (or was never loaded).
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Cards turned over this round.
    #[must_use]
    pub fn drawn(&self) -> &Vector<Card> {
        &self.drawn
    }

    /// The most recently drawn card, if any.
    #[must_use]
    pub fn last_drawn(&self) -> Option<&Card> {
        self.drawn.last()
    }

    /// The second-to-last drawn card of this round.
    #[must_use]
    pub fn previous_card(&self) -> Option<&Card> {
        self.previous_card.as_ref()
    }

    /// Most recent guess direction.
    #[must_use]
    pub fn current_guess(&self) -> Option<Direction> {
        self.current_guess
    }

    /// Consecutive correct guesses.
    #[must_use]
    pub fn correct_streak(&self) -> u32 {
        self.correct_streak
    }

    /// Player to act.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// All scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// One player's score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Explicit hi/lo lock.
    #[must_use]
    pub fn hilo_locked(&self) -> bool {
        self.hilo_locked
    }

    /// Explicit draw lock.
    #[must_use]
    pub fn draw_locked(&self) -> bool {
        self.draw_locked
    }

    /// Current round identity.
    #[must_use]
    pub fn round_id(&self) -> RoundId {
        self.round
    }

    /// Whether a wrong guess is waiting for its deferred clear.
    #[must_use]
    pub fn awaiting_clear(&self) -> bool {
        self.awaiting_clear
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Points a wrong guess would cost right now.
    ///
    /// Every card beyond the one that opened the round is on the line.
    #[must_use]
    pub fn points_on_the_line(&self) -> u32 {
        self.drawn.len().saturating_sub(1) as u32
    }

    // === Mutation (engine only) ===

    /// Move the top card of the deck onto the table.
    ///
    /// Returns the drawn card, or None if the deck is empty.
    pub(crate) fn draw_top(&mut self) -> Option<Card> {
        let card = self.deck.pop_back()?;
        self.drawn.push_back(card.clone());
        self.previous_card = self
            .drawn
            .len()
            .checked_sub(2)
            .and_then(|i| self.drawn.get(i))
            .cloned();
        Some(card)
    }

    /// Record an action in history.
    pub(crate) fn record_action(&mut self, player: PlayerId, action: Action) {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.round, seq));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn state_with_deck(ranks: &[Rank]) -> GameState {
        let mut state = GameState::new();
        state.deck = ranks.iter().map(|&r| Card::new(r, Suit::Spades)).collect();
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert!(state.deck_is_empty());
        assert!(state.drawn().is_empty());
        assert_eq!(state.turn(), PlayerId::ONE);
        assert_eq!(state.score(PlayerId::ONE), 0);
        assert_eq!(state.score(PlayerId::TWO), 0);
        assert!(state.hilo_locked());
        assert!(!state.draw_locked());
    }

    #[test]
    fn test_draw_from_top() {
        let mut state = state_with_deck(&[Rank::Two, Rank::Three, Rank::Four]);

        let first = state.draw_top().unwrap();
        assert_eq!(first.rank, Rank::Four); // Draw from top (end)
        assert_eq!(state.deck_len(), 2);
        assert!(state.previous_card().is_none());

        let second = state.draw_top().unwrap();
        assert_eq!(second.rank, Rank::Three);
        assert_eq!(state.previous_card().map(|c| c.rank), Some(Rank::Four));
        assert_eq!(state.last_drawn().map(|c| c.rank), Some(Rank::Three));
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut state = GameState::new();
        assert!(state.draw_top().is_none());
        assert!(state.drawn().is_empty());
    }

    #[test]
    fn test_points_on_the_line() {
        let mut state = state_with_deck(&[Rank::Two, Rank::Three, Rank::Four]);
        assert_eq!(state.points_on_the_line(), 0);

        state.draw_top();
        assert_eq!(state.points_on_the_line(), 0);

        state.draw_top();
        state.draw_top();
        assert_eq!(state.points_on_the_line(), 2);
    }

    #[test]
    fn test_record_action_sequences() {
        let mut state = GameState::new();
        state.record_action(PlayerId::ONE, Action::Draw);
        state.record_action(PlayerId::ONE, Action::Guess(Direction::Higher));

        let seqs: Vec<u32> = state.history().iter().map(|r| r.sequence).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn test_round_id_ordering() {
        let start = RoundId::default();
        assert!(start.next_round() > start);
        assert!(start.next_round().next_epoch() > start.next_round());
        assert_eq!(start.next_round().next_epoch().round, 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = state_with_deck(&[Rank::Two, Rank::Three]);
        let snapshot = state.clone();

        state.draw_top();

        assert_eq!(snapshot.deck_len(), 2);
        assert_eq!(state.deck_len(), 1);
    }
}
