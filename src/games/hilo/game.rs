//! The higher/lower round engine.
//!
//! Every transition takes the current `GameState` by reference and returns a
//! new one. Timers (guess debouncing, the pause after a lost round) are not
//! the engine's concern; the session decides *when* to call
//! [`HiLoGame::submit_guess`] and [`HiLoGame::finish_round`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{Action, ActionKind, Direction, GameConfig, GameState, PlayerId, PlayerMap, RoundId};
use crate::rules::{ActionError, GameResult, RulesEngine, Transition};

use super::gating::Gating;

/// Coarse classification of a state, for display and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No deck yet (startup, or the last fetch failed).
    Loading,
    /// Table is clear; the player to act must draw.
    AwaitingFirstDraw,
    /// A card is showing; the player to act may guess.
    AwaitingGuess,
    /// A guess is queued and has not resolved yet. Only sessions report this.
    Resolving,
    /// A wrong guess ended the round; the table clears after the delay.
    RoundEnd,
    /// The deck is exhausted.
    GameEnd,
}

/// What a guess did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The drawn card satisfied the guess.
    Correct { card: Card, streak: u32 },
    /// The drawn card did not; `loser` was charged `points` and the round
    /// `round` now waits for its deferred clear.
    Wrong {
        card: Card,
        loser: PlayerId,
        points: u32,
        round: RoundId,
    },
    /// No guess was given. Nothing happened.
    NoGuess,
}

/// What an action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Drew(Card),
    Guessed(GuessOutcome),
    Passed { to: PlayerId },
}

/// The higher/lower game rules.
#[derive(Clone, Debug, Default)]
pub struct HiLoGame {
    config: GameConfig,
}

impl HiLoGame {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Current UI gating for a state.
    #[must_use]
    pub fn gating(&self, state: &GameState) -> Gating {
        Gating::of(state, &self.config)
    }

    /// Classify a state.
    #[must_use]
    pub fn phase(&self, state: &GameState) -> Phase {
        if !state.loaded {
            Phase::Loading
        } else if state.deck_is_empty() {
            Phase::GameEnd
        } else if state.awaiting_clear {
            Phase::RoundEnd
        } else if state.drawn.is_empty() {
            Phase::AwaitingFirstDraw
        } else {
            Phase::AwaitingGuess
        }
    }

    // === Game lifecycle ===

    /// Wipe the game: scores, round, turn. The deck is empty until
    /// [`HiLoGame::load_deck`] installs a fresh one.
    ///
    /// The epoch advances, so a deferred clear scheduled before the reset can
    /// no longer apply.
    #[must_use]
    pub fn reset_game(&self, state: &GameState) -> GameState {
        GameState::for_round(state.round.next_epoch())
    }

    /// Install a freshly shuffled deck. The last card is the top of the deck.
    #[must_use]
    pub fn load_deck(&self, state: &GameState, cards: Vec<Card>) -> GameState {
        let mut next = state.clone();
        next.deck = cards.into_iter().collect();
        next.loaded = true;
        next
    }

    // === Transitions ===

    /// Turn over the top card to open a round.
    pub fn draw_card(&self, state: &GameState) -> Result<Transition<Card>, ActionError> {
        if state.deck_is_empty() {
            return Err(ActionError::DeckEmpty);
        }
        if self.gating(state).draw_disabled {
            return Err(ActionError::NotAllowed(ActionKind::Draw));
        }

        let mut next = state.clone();
        next.record_action(state.turn, Action::Draw);
        let card = next.draw_top().ok_or(ActionError::DeckEmpty)?;
        if next.drawn.len() == 1 {
            next.hilo_locked = false;
        }

        Ok(Transition::new(next, card))
    }

    /// Resolve a guess: draw the next card and compare it with the card it
    /// was called against.
    ///
    /// `None` is the "no guess" case and returns [`GuessOutcome::NoGuess`]
    /// with the state unchanged.
    pub fn submit_guess(
        &self,
        state: &GameState,
        guess: Option<Direction>,
    ) -> Result<Transition<GuessOutcome>, ActionError> {
        let Some(direction) = guess else {
            return Ok(Transition::new(state.clone(), GuessOutcome::NoGuess));
        };
        if state.deck_is_empty() {
            return Err(ActionError::DeckEmpty);
        }
        let reference = state.last_drawn().ok_or(ActionError::NoReferenceCard)?.rank;
        if self.gating(state).hilo_disabled {
            return Err(ActionError::NotAllowed(ActionKind::Guess));
        }

        let guesser = state.turn;
        let mut next = state.clone();
        next.hilo_locked = true;
        next.current_guess = Some(direction);
        next.record_action(guesser, Action::Guess(direction));
        let card = next.draw_top().ok_or(ActionError::DeckEmpty)?;

        if direction.is_correct(reference, card.rank) {
            next.correct_streak += 1;
            next.hilo_locked = false;
            let streak = next.correct_streak;
            return Ok(Transition::new(next, GuessOutcome::Correct { card, streak }));
        }

        let points = next.points_on_the_line();
        next.scores[guesser] += points;
        next.turn = guesser.other();
        next.previous_card = None;
        next.correct_streak = 0;
        next.draw_locked = true;
        next.awaiting_clear = true;
        let round = next.round;

        Ok(Transition::new(
            next,
            GuessOutcome::Wrong {
                card,
                loser: guesser,
                points,
                round,
            },
        ))
    }

    /// Bank a streak: the turn passes to the opponent, who continues from the
    /// card on the table. Scores never change on a pass.
    pub fn submit_pass(&self, state: &GameState) -> Result<Transition<PlayerId>, ActionError> {
        if state.deck_is_empty() {
            return Err(ActionError::DeckEmpty);
        }
        if self.gating(state).pass_disabled {
            return Err(ActionError::NotAllowed(ActionKind::Pass));
        }

        let mut next = state.clone();
        next.record_action(state.turn, Action::Pass);
        next.turn = state.turn.other();
        next.current_guess = None;
        next.correct_streak = 0;
        let to = next.turn;

        Ok(Transition::new(next, to))
    }

    /// Deferred clear after a lost round.
    ///
    /// Applies only if `state` is still waiting on exactly `round`; returns
    /// `None` for a stale or unknown round.
    #[must_use]
    pub fn finish_round(&self, state: &GameState, round: RoundId) -> Option<GameState> {
        if !state.awaiting_clear || state.round != round {
            return None;
        }

        let mut next = state.clone();
        next.drawn.clear();
        next.previous_card = None;
        next.awaiting_clear = false;
        next.draw_locked = false;
        next.hilo_locked = true;
        next.round = round.next_round();
        Some(next)
    }
}

/// Decide the game from final scores.
///
/// Points are penalties, so the lower score wins. Equal scores have no winner.
///
/// ```
/// use hilo_cards::core::{PlayerId, PlayerMap};
/// use hilo_cards::games::hilo::compute_winner;
/// use hilo_cards::rules::GameResult;
///
/// let scores = PlayerMap::new(|p| if p == PlayerId::ONE { 10 } else { 15 });
/// assert_eq!(compute_winner(&scores), GameResult::Winner(PlayerId::ONE));
/// ```
#[must_use]
pub fn compute_winner(scores: &PlayerMap<u32>) -> GameResult {
    let (one, two) = (scores[PlayerId::ONE], scores[PlayerId::TWO]);
    match one.cmp(&two) {
        std::cmp::Ordering::Less => GameResult::Winner(PlayerId::ONE),
        std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::TWO),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

impl RulesEngine for HiLoGame {
    type Outcome = ActionOutcome;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> SmallVec<[ActionKind; 3]> {
        let gating = self.gating(state);
        let mut actions = SmallVec::new();

        if !gating.draw_disabled {
            actions.push(ActionKind::Draw);
        }
        if !gating.hilo_disabled {
            actions.push(ActionKind::Guess);
        }
        if !gating.pass_disabled {
            actions.push(ActionKind::Pass);
        }

        actions
    }

    fn apply_action(
        &self,
        state: &GameState,
        action: Action,
    ) -> Result<Transition<ActionOutcome>, ActionError> {
        match action {
            Action::Draw => self
                .draw_card(state)
                .map(|t| Transition::new(t.state, ActionOutcome::Drew(t.outcome))),
            Action::Guess(direction) => self
                .submit_guess(state, Some(direction))
                .map(|t| Transition::new(t.state, ActionOutcome::Guessed(t.outcome))),
            Action::Pass => self
                .submit_pass(state)
                .map(|t| Transition::new(t.state, ActionOutcome::Passed { to: t.outcome })),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        (state.loaded && state.deck_is_empty()).then(|| compute_winner(&state.scores))
    }
}
