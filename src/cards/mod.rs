//! Card data: ranks, suits and the rank lookup table.
//!
//! Cards arrive from a deck source already shuffled. The engine only ever
//! looks at a card's rank value; code, suit and image are carried through
//! for renderers.

mod card;

pub use card::{Card, Rank, Suit};
