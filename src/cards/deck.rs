//! Ordered card piles and the standard 52-card deck.
//!
//! A `Pile` is an ordered sequence of cards mutated only at its ends:
//! cards are drawn from the front and placed on the back. The one
//! exception is `insert_at`, used by round setup to push a wild seed
//! card back into the draw pile at a random position.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 52;

/// Build the standard 52-card deck, each (suit, rank) pair exactly once.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// An ordered pile of cards.
///
/// Used for both the draw pile (draw from the front) and the discard
/// pile (most recently played card is the top, i.e. the back).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: VecDeque<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from an ordered sequence of cards.
    /// The first card in the sequence is the first to be drawn.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Draw the front card, or `None` if the pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Place a card on the back of the pile.
    pub fn place(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Insert a card at the given index (0 = front).
    ///
    /// Panics if `index > len`.
    pub fn insert_at(&mut self, index: usize, card: Card) {
        self.cards.insert(index, card);
    }

    /// The most recently placed card (the back), if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Shuffle the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }
}
