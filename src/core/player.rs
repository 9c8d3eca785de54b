//! Player identity, hand, and cumulative score.
//!
//! ## PlayerId
//!
//! Type-safe 1-based player identifier: the first player is
//! `PlayerId(1)`, matching the round-robin turn order which always
//! starts from player 1.
//!
//! ## Player
//!
//! A player owns its hand exclusively for the current round; the hand
//! is replaced wholesale at each round's deal. Identity, opponent list,
//! and cumulative score persist for the life of the game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// 1-based player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID. IDs start at 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Index into the player array (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Hand storage. Hands start at 5 cards and rarely grow far past that.
pub type Hand = SmallVec<[Card; 8]>;

/// One participant: identity, opponents, current hand, cumulative score.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    opponents: Vec<PlayerId>,
    hand: Hand,
    score: u32,
}

impl Player {
    /// Create a player with an empty hand and zero score.
    #[must_use]
    pub fn new(id: PlayerId, opponents: Vec<PlayerId>) -> Self {
        Self {
            id,
            opponents,
            hand: Hand::new(),
            score: 0,
        }
    }

    /// This player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// IDs of all other players in the game.
    #[must_use]
    pub fn opponents(&self) -> &[PlayerId] {
        &self.opponents
    }

    /// The current hand, in hand order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cumulative score across rounds.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Check whether the hand is empty (round win condition).
    #[must_use]
    pub fn hand_is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Replace the hand wholesale at a round's deal.
    pub(crate) fn receive_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand = cards.into_iter().collect();
    }

    /// Add a drawn card to the back of the hand.
    pub(crate) fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove and return the card at `index` (hand order preserved).
    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    /// Credit points. Scores only ever increase.
    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}
