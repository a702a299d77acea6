//! Higher/lower: the two-player card guessing game.
//!
//! - A round opens with a draw; each guess turns over the next card
//! - A right guess extends the streak, a wrong one charges the guesser one
//!   point per card beyond the first and hands the turn over
//! - After three right guesses in a row a player may pass instead
//! - When the deck runs out the lower score wins

mod game;
mod gating;
mod view;

pub use game::{compute_winner, ActionOutcome, GuessOutcome, HiLoGame, Phase};
pub use gating::Gating;
pub use view::{CardView, Table, View, TITLE};
