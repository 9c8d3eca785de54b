//! Point values for scoring.
//!
//! The rank-to-value table is configuration, not rules: the engine only
//! ever sums values from whatever table the game was built with. The
//! default follows the conventional Crazy Eights scoring: number cards
//! at face value, face cards at 10, aces at 1, and eights at a
//! distinguished 50-point bonus.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank};

/// Default value of the wild rank.
pub const WILD_BONUS: u32 = 50;

/// Configurable rank-to-point-value lookup table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTable {
    values: FxHashMap<Rank, u32>,
}

impl Default for PointTable {
    fn default() -> Self {
        let mut values = FxHashMap::default();
        values.insert(Rank::Two, 2);
        values.insert(Rank::Three, 3);
        values.insert(Rank::Four, 4);
        values.insert(Rank::Five, 5);
        values.insert(Rank::Six, 6);
        values.insert(Rank::Seven, 7);
        values.insert(Rank::Eight, WILD_BONUS);
        values.insert(Rank::Nine, 9);
        values.insert(Rank::Ten, 10);
        values.insert(Rank::Jack, 10);
        values.insert(Rank::Queen, 10);
        values.insert(Rank::King, 10);
        values.insert(Rank::Ace, 1);
        Self { values }
    }
}

impl PointTable {
    /// The conventional table (see module docs).
    #[must_use]
    pub fn conventional() -> Self {
        Self::default()
    }

    /// Override the value of a single rank (builder pattern).
    #[must_use]
    pub fn with_value(mut self, rank: Rank, value: u32) -> Self {
        self.values.insert(rank, value);
        self
    }

    /// Point value of a card. Ranks absent from the table score 0.
    #[must_use]
    pub fn value(&self, card: Card) -> u32 {
        self.values.get(&card.rank).copied().unwrap_or(0)
    }

    /// Sum of point values over a hand.
    #[must_use]
    pub fn hand_value(&self, hand: &[Card]) -> u32 {
        hand.iter().map(|&c| self.value(c)).sum()
    }
}
