//! Card model: suits, ranks, piles, and point values.

pub mod card;
pub mod deck;
pub mod points;

pub use card::{Card, Rank, Suit};
pub use deck::{standard_deck, Pile, DECK_SIZE};
pub use points::{PointTable, WILD_BONUS};
