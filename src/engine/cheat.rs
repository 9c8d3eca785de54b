//! Cheat detection over the turn history.
//!
//! A sliding two-record check: after every turn, only the two most
//! recent records in the shared history (across all players) are
//! compared. The transition is illegal when both records played a card,
//! the two cards share neither suit nor rank, and neither is wild.
//!
//! The check validates only the immediate transition. Cheating more
//! than one step removed is invisible to it; that narrow window is part
//! of the engine's contract, not an oversight to widen.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlayerId, TurnRecord};

/// Evidence for a detected illegal transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatDetails {
    /// The player whose play broke the transition.
    pub offender: PlayerId,

    /// The card on the pile before the offending play.
    pub previous: Card,

    /// The offending card.
    pub played: Card,
}

impl std::fmt::Display for CheatDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} played {} on {}",
            self.offender, self.played, self.previous
        )
    }
}

/// Check the two most recent records for an illegal transition.
///
/// Exempt when fewer than two records exist or when either of the two
/// most recent turns was a draw.
#[must_use]
pub fn check_cheating(history: &[TurnRecord]) -> Option<CheatDetails> {
    if history.len() < 2 {
        return None;
    }

    let before = &history[history.len() - 2];
    let after = &history[history.len() - 1];
    let (previous, played) = match (before.played_card, after.played_card) {
        (Some(previous), Some(played)) => (previous, played),
        _ => return None,
    };

    if previous.suit != played.suit
        && previous.rank != played.rank
        && !previous.is_wild()
        && !played.is_wild()
    {
        return Some(CheatDetails {
            offender: after.player,
            previous,
            played,
        });
    }

    None
}
