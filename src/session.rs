//! A running game: engine, deck source and the two timers.
//!
//! ## Timers
//!
//! - Guesses are debounced. Submissions queue the direction and only the
//!   last one in a burst is resolved, once the input has been quiet for the
//!   debounce window.
//! - A wrong guess leaves the cards on the table for the round-end delay,
//!   then the table is cleared. The clear is keyed by `RoundId`, so a reset
//!   while it is pending makes it a no-op.
//!
//! The session never reads the clock itself. Callers pass `now` in and call
//! [`GameSession::tick`] at or after [`GameSession::next_deadline`].

use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::cards::Card;
use crate::core::{ActionKind, Direction, GameConfig, GameState, PlayerId, RoundId};
use crate::deck::{ensure_complete, DeckError, DeckSource};
use crate::games::hilo::{GuessOutcome, HiLoGame, View};
use crate::rules::{ActionError, RulesEngine};
use crate::timing::{Debouncer, Deferred};

/// Result of submitting a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessSubmission {
    /// Queued; resolves at `fires_at` unless replaced.
    Queued { direction: Direction, fires_at: Instant },
    /// No direction given.
    Ignored,
}

/// Something `tick` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A debounced guess was resolved.
    GuessResolved(GuessOutcome),
    /// A debounced guess could no longer be applied.
    GuessRejected(ActionError),
    /// The table was cleared after a lost round.
    RoundCleared(RoundId),
}

/// One game in progress.
pub struct GameSession<S> {
    game: HiLoGame,
    state: GameState,
    source: S,
    guesses: Debouncer<Direction>,
    round_clear: Deferred<RoundId>,
}

impl<S: DeckSource> GameSession<S> {
    /// Create a session with no deck loaded. Call [`GameSession::reset`] to
    /// fetch one.
    pub fn new(config: GameConfig, source: S) -> Self {
        let guesses = Debouncer::new(config.guess_debounce());
        let round_clear = Deferred::new(config.round_end_delay());
        Self {
            game: HiLoGame::new(config),
            state: GameState::new(),
            source,
            guesses,
            round_clear,
        }
    }

    /// Start a new game with a freshly shuffled deck.
    ///
    /// Pending timers are dropped first. If the fetch fails, or the source
    /// hands back anything but a complete deck of `deck_size` distinct cards,
    /// the game stays without a deck and the error is returned; calling
    /// `reset` again retries.
    pub async fn reset(&mut self) -> Result<(), DeckError> {
        if let Some(direction) = self.guesses.cancel() {
            debug!(%direction, "dropped pending guess on reset");
        }
        if let Some(round) = self.round_clear.cancel() {
            debug!(%round, "dropped pending clear on reset");
        }

        self.state = self.game.reset_game(&self.state);
        info!(round = %self.state.round_id(), "new game");

        let deck_size = self.game.config().deck_size;
        let fetched = self
            .source
            .fresh_deck()
            .await
            .and_then(|cards| ensure_complete(cards, deck_size));

        match fetched {
            Ok(cards) => {
                self.install(cards);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to fetch a deck");
                Err(err)
            }
        }
    }

    fn install(&mut self, cards: Vec<Card>) {
        info!(cards = cards.len(), "deck loaded");
        self.state = self.game.load_deck(&self.state, cards);
    }

    /// Turn over the first card of a round.
    pub fn draw(&mut self) -> Result<Card, ActionError> {
        let t = self.game.draw_card(&self.state)?;
        debug!(player = %self.state.turn(), card = %t.outcome, "drew");
        self.state = t.state;
        Ok(t.outcome)
    }

    /// Queue a guess. Nothing is drawn until the debounce window passes.
    pub fn submit_guess(
        &mut self,
        guess: Option<Direction>,
        now: Instant,
    ) -> Result<GuessSubmission, ActionError> {
        let Some(direction) = guess else {
            return Ok(GuessSubmission::Ignored);
        };
        if self.state.deck_is_empty() {
            return Err(ActionError::DeckEmpty);
        }
        if self.state.last_drawn().is_none() {
            return Err(ActionError::NoReferenceCard);
        }
        if self.game.gating(&self.state).hilo_disabled {
            return Err(ActionError::NotAllowed(ActionKind::Guess));
        }

        let fires_at = self.guesses.submit(direction, now);
        debug!(%direction, "guess queued");
        Ok(GuessSubmission::Queued { direction, fires_at })
    }

    /// Bank the streak and hand the turn over. Drops any queued guess.
    pub fn submit_pass(&mut self) -> Result<PlayerId, ActionError> {
        let t = self.game.submit_pass(&self.state)?;
        if let Some(direction) = self.guesses.cancel() {
            debug!(%direction, "dropped pending guess on pass");
        }
        info!(from = %self.state.turn(), to = %t.outcome, "passed");
        self.state = t.state;
        Ok(t.outcome)
    }

    /// Fire whatever timers are due at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        if let Some(direction) = self.guesses.poll(now) {
            match self.game.submit_guess(&self.state, Some(direction)) {
                Ok(t) => {
                    if let GuessOutcome::Wrong {
                        loser,
                        points,
                        round,
                        ..
                    } = &t.outcome
                    {
                        info!(%loser, points, %round, "wrong guess");
                        self.round_clear.schedule(*round, now);
                    } else {
                        debug!(outcome = ?t.outcome, "guess resolved");
                    }
                    self.state = t.state;
                    events.push(SessionEvent::GuessResolved(t.outcome));
                }
                Err(err) => {
                    warn!(error = %err, %direction, "queued guess rejected");
                    events.push(SessionEvent::GuessRejected(err));
                }
            }
        }

        if let Some(round) = self.round_clear.poll(now) {
            match self.game.finish_round(&self.state, round) {
                Some(next) => {
                    debug!(%round, "round cleared");
                    self.state = next;
                    events.push(SessionEvent::RoundCleared(round));
                }
                None => debug!(%round, "stale round clear ignored"),
            }
        }

        if self.state.deck_is_empty() && !events.is_empty() {
            if let Some(result) = self.game.is_terminal(&self.state) {
                info!(?result, "game over");
            }
        }

        events
    }

    /// Earliest instant at which `tick` has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.guesses.deadline(), self.round_clear.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Whether a guess is waiting out the debounce window.
    #[must_use]
    pub fn guess_pending(&self) -> bool {
        self.guesses.is_pending()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> View {
        let view = View::of(&self.game, &self.state);
        if self.guesses.is_pending() {
            view.resolving()
        } else {
            view
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::deck::SeededDeckSource;
    use crate::games::hilo::Phase;

    fn session() -> GameSession<SeededDeckSource> {
        GameSession::new(GameConfig::default(), SeededDeckSource::new(11))
    }

    #[tokio::test]
    async fn test_new_session_is_loading() {
        let mut session = session();
        assert_eq!(session.view().phase, Phase::Loading);
        assert_eq!(session.draw(), Err(ActionError::DeckEmpty));

        session.reset().await.unwrap();

        assert_eq!(session.view().phase, Phase::AwaitingFirstDraw);
        assert_eq!(session.state().deck_len(), 52);
    }

    #[tokio::test]
    async fn test_guess_waits_for_window() {
        let mut session = session();
        session.reset().await.unwrap();
        session.draw().unwrap();

        let start = Instant::now();
        let queued = session.submit_guess(Some(Direction::Higher), start).unwrap();
        assert_eq!(
            queued,
            GuessSubmission::Queued {
                direction: Direction::Higher,
                fires_at: start + Duration::from_millis(500),
            }
        );
        assert_eq!(session.view().phase, Phase::Resolving);
        assert_eq!(session.next_deadline(), Some(start + Duration::from_millis(500)));

        assert!(session.tick(start + Duration::from_millis(499)).is_empty());
        assert_eq!(session.state().deck_len(), 51);

        let events = session.tick(start + Duration::from_millis(500));
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SessionEvent::GuessResolved(_)));
        assert_eq!(session.state().deck_len(), 50);
    }

    #[tokio::test]
    async fn test_missing_guess_is_ignored() {
        let mut session = session();
        session.reset().await.unwrap();

        assert_eq!(
            session.submit_guess(None, Instant::now()),
            Ok(GuessSubmission::Ignored)
        );
        assert!(!session.guess_pending());
    }

    #[tokio::test]
    async fn test_guess_before_draw_rejected() {
        let mut session = session();
        session.reset().await.unwrap();

        assert_eq!(
            session.submit_guess(Some(Direction::Lower), Instant::now()),
            Err(ActionError::NoReferenceCard)
        );
    }
}
