//! Configuration errors.
//!
//! The only failable operation under valid preconditions is game
//! construction. A detected cheat is a terminal outcome of the game
//! loop (`GameOutcome::Aborted`), not an error that propagates.

use thiserror::Error;

use crate::engine::game::{MAX_PLAYERS, MIN_PLAYERS};

/// Rejected game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside the supported range.
    #[error(
        "player count {0} is outside the supported range {min}..={max}",
        min = MIN_PLAYERS,
        max = MAX_PLAYERS
    )]
    InvalidPlayerCount(usize),
}
