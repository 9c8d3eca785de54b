//! Immutable record of one player's turn.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, Suit};

/// Log entry for a single turn. Exactly one of `drew_card` /
/// `played_card` is active: a player draws if and only if no legal
/// play exists, and never plays in the same turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who took this turn.
    pub player: PlayerId,

    /// Whether the player drew from the draw pile.
    pub drew_card: bool,

    /// The card played, if any.
    pub played_card: Option<Card>,

    /// The suit declared, if the played card was wild.
    pub declared_suit: Option<Suit>,
}

impl TurnRecord {
    /// Record a forced draw.
    #[must_use]
    pub fn drew(player: PlayerId) -> Self {
        Self {
            player,
            drew_card: true,
            played_card: None,
            declared_suit: None,
        }
    }

    /// Record a natural (non-wild) play.
    #[must_use]
    pub fn played(player: PlayerId, card: Card) -> Self {
        Self {
            player,
            drew_card: false,
            played_card: Some(card),
            declared_suit: None,
        }
    }

    /// Record a wild play with the declared suit.
    #[must_use]
    pub fn played_wild(player: PlayerId, card: Card, declared: Suit) -> Self {
        Self {
            player,
            drew_card: false,
            played_card: Some(card),
            declared_suit: Some(declared),
        }
    }
}
