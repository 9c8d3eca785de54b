//! Rules engine: turn strategy, cheat detection, round and game loops.

pub mod cheat;
pub mod game;
pub mod strategy;

pub use cheat::{check_cheating, CheatDetails};
pub use game::{Game, GameOutcome, RoundOutcome, MAX_PLAYERS, MIN_PLAYERS, WINNING_SCORE};
pub use strategy::{decide, Decision};
