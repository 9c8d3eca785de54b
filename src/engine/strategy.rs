//! Automated turn-decision strategy.
//!
//! The decision rule, evaluated against the hand in hand order:
//!
//! 1. Play the first card whose suit matches the current suit, or whose
//!    rank matches the current rank and is not wild.
//! 2. Otherwise play the first wild card, if one is held.
//! 3. Otherwise draw. Drawing always ends the turn: the drawn card is
//!    never evaluated for play in the same turn.
//!
//! There is no optimization over which match to prefer; ties are broken
//! by hand position.

use crate::cards::{Card, Rank, Suit};

/// What the strategy decided to do with the current hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// No legal play; take the top card of the draw pile.
    Draw,
    /// Play the natural match at this hand index.
    Play(usize),
    /// Play the wild card at this hand index and declare a suit.
    PlayWild(usize),
}

/// Decide a turn for the given hand against the current suit/rank.
#[must_use]
pub fn decide(hand: &[Card], current_suit: Suit, current_rank: Rank) -> Decision {
    if let Some(index) = hand
        .iter()
        .position(|c| c.suit == current_suit || (c.rank == current_rank && !c.is_wild()))
    {
        return Decision::Play(index);
    }

    if let Some(index) = hand.iter().position(|c| c.is_wild()) {
        return Decision::PlayWild(index);
    }

    Decision::Draw
}
