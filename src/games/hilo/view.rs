//! Display snapshot for renderers.
//!
//! `View` carries everything a front end shows: headline text, counters,
//! the cards on the table (in draw order) and the gating flags. The
//! `Display` impl renders it as plain text for the terminal front end.

use std::fmt;

use serde::Serialize;

use crate::cards::Card;
use crate::core::{GameState, PlayerId};
use crate::rules::RulesEngine;

use super::game::{HiLoGame, Phase};
use super::gating::Gating;

pub const TITLE: &str = "High / Low Card Game";

/// A card as a renderer needs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub code: String,
    pub image: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            code: card.code.clone(),
            image: card.image.clone(),
        }
    }
}

/// What occupies the table area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Table {
    /// Cards of the current round, oldest first.
    Cards { cards: Vec<CardView> },
    /// Between rounds after a wrong guess.
    Lost { player: PlayerId },
    /// Fresh game, nothing drawn yet.
    GoesFirst { player: PlayerId },
    /// Deck exhausted. `winner` is None on a tie or before any deck loaded.
    Finished { winner: Option<String> },
}

/// Snapshot of everything a renderer shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct View {
    pub phase: Phase,
    /// Player to act; None once the deck is empty.
    pub to_act: Option<PlayerId>,
    pub cards_left: usize,
    /// None once the deck is empty.
    pub points_on_the_line: Option<u32>,
    pub scores: Vec<(PlayerId, u32)>,
    pub table: Table,
    pub gating: Gating,
}

impl View {
    #[must_use]
    pub fn of(game: &HiLoGame, state: &GameState) -> Self {
        let cards_remain = !state.deck_is_empty();

        let table = if !state.drawn().is_empty() && cards_remain {
            Table::Cards {
                cards: state.drawn().iter().map(CardView::from).collect(),
            }
        } else if state.current_guess().is_some() && cards_remain {
            Table::Lost {
                player: state.turn().other(),
            }
        } else if cards_remain {
            Table::GoesFirst {
                player: state.turn(),
            }
        } else {
            Table::Finished {
                winner: game
                    .is_terminal(state)
                    .and_then(|result| result.announcement()),
            }
        };

        Self {
            phase: game.phase(state),
            to_act: cards_remain.then(|| state.turn()),
            cards_left: state.deck_len(),
            points_on_the_line: cards_remain.then(|| state.points_on_the_line()),
            scores: state.scores().iter().map(|(p, s)| (p, *s)).collect(),
            table,
            gating: game.gating(state),
        }
    }

    /// Mark a view as waiting on a queued guess.
    #[must_use]
    pub fn resolving(mut self) -> Self {
        self.phase = Phase::Resolving;
        self
    }

    /// Labels of the actions currently offered.
    #[must_use]
    pub fn offered_actions(&self) -> Vec<&'static str> {
        let mut offered = Vec::new();
        if !self.gating.hilo_disabled {
            offered.push("higher");
        }
        if !self.gating.pass_disabled {
            offered.push("pass");
        }
        if !self.gating.draw_disabled && self.cards_left > 0 {
            offered.push("draw");
        }
        if !self.gating.hilo_disabled {
            offered.push("lower");
        }
        offered.push("reset");
        offered
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        if let Some(player) = self.to_act {
            writeln!(f, "{player} Goes!")?;
        }
        writeln!(f, "Cards Left: {}", self.cards_left)?;
        if let Some(points) = self.points_on_the_line {
            writeln!(f, "Point on the line: {points}")?;
        }
        for (player, score) in &self.scores {
            writeln!(f, "{player} Score: {score}")?;
        }

        match &self.table {
            Table::Cards { cards } => {
                let codes: Vec<&str> = cards.iter().map(|c| c.code.as_str()).collect();
                writeln!(f, "[ {} ]", codes.join(" "))?;
            }
            Table::Lost { player } => writeln!(f, "{player} lost this round")?,
            Table::GoesFirst { player } => writeln!(f, "{player} goes first")?,
            Table::Finished { winner: Some(text) } => writeln!(f, "{text}")?,
            Table::Finished { winner: None } => {}
        }

        write!(f, "Actions: {}", self.offered_actions().join(" / "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::{Direction, GameConfig};

    fn game_and_state(top_first: &[Rank]) -> (HiLoGame, GameState) {
        let game = HiLoGame::new(GameConfig::default().with_deck_size(top_first.len()));
        let cards = top_first
            .iter()
            .rev()
            .map(|&r| Card::new(r, Suit::Hearts))
            .collect();
        let state = game.load_deck(&GameState::new(), cards);
        (game, state)
    }

    #[test]
    fn test_fresh_game_view() {
        let (game, state) = game_and_state(&[Rank::Four, Rank::Jack, Rank::Two]);
        let view = View::of(&game, &state);

        assert_eq!(view.table, Table::GoesFirst { player: PlayerId::ONE });
        assert_eq!(view.to_act, Some(PlayerId::ONE));
        assert_eq!(view.points_on_the_line, Some(0));
        assert_eq!(view.offered_actions(), vec!["draw", "reset"]);

        let text = view.to_string();
        assert!(text.contains("Player 1 Goes!"));
        assert!(text.contains("Cards Left: 3"));
        assert!(text.contains("Player 1 goes first"));
    }

    #[test]
    fn test_cards_in_draw_order() {
        let (game, state) = game_and_state(&[Rank::Four, Rank::Jack, Rank::Two]);
        let state = game.draw_card(&state).unwrap().state;
        let state = game.submit_guess(&state, Some(Direction::Higher)).unwrap().state;

        let view = View::of(&game, &state);

        match &view.table {
            Table::Cards { cards } => {
                let codes: Vec<&str> = cards.iter().map(|c| c.code.as_str()).collect();
                assert_eq!(codes, vec!["4H", "JH"]);
            }
            other => panic!("expected cards, got {other:?}"),
        }
        assert_eq!(view.points_on_the_line, Some(1));
    }

    #[test]
    fn test_lost_round_view() {
        let (game, state) = game_and_state(&[Rank::Four, Rank::Two, Rank::Jack, Rank::Ace]);
        let state = game.draw_card(&state).unwrap().state;
        let state = game.submit_guess(&state, Some(Direction::Higher)).unwrap().state;
        let state = game.finish_round(&state, state.round_id()).unwrap();

        let view = View::of(&game, &state);

        assert_eq!(view.table, Table::Lost { player: PlayerId::ONE });
        assert_eq!(view.to_act, Some(PlayerId::TWO));
        assert!(view.to_string().contains("Player 1 lost this round"));
    }

    #[test]
    fn test_finished_view() {
        let (game, state) = game_and_state(&[Rank::Four, Rank::Two]);
        let state = game.draw_card(&state).unwrap().state;
        let state = game.submit_guess(&state, Some(Direction::Higher)).unwrap().state;

        let view = View::of(&game, &state);

        assert_eq!(
            view.table,
            Table::Finished {
                winner: Some("Player 2 Wins!".to_string())
            }
        );
        assert_eq!(view.to_act, None);
        assert_eq!(view.points_on_the_line, None);
        assert_eq!(view.offered_actions(), vec!["reset"]);
    }

    #[test]
    fn test_view_serializes() {
        let (game, state) = game_and_state(&[Rank::Four, Rank::Two]);
        let json = serde_json::to_value(View::of(&game, &state)).unwrap();

        assert_eq!(json["cards_left"], 2);
        assert_eq!(json["table"]["kind"], "goes_first");
    }
}
