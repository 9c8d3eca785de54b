//! # crazy8-sim
//!
//! A deterministic Crazy Eights simulation engine for rule verification
//! and testing. Games play themselves: every decision is made by the
//! built-in automated strategy, and all randomness (deck shuffle, wild
//! suit declaration) flows from a single seedable RNG, so the same seed
//! reproduces the entire game.
//!
//! ## Architecture
//!
//! - `cards`: suits, ranks, ordered piles, point-value table
//! - `core`: players, turn records, per-round state, RNG, errors
//! - `engine`: turn strategy, cheat detection, round and game loops
//! - `events`: structured events for external observers
//!
//! ## Example
//!
//! ```
//! use crazy8_sim::{Game, GameOutcome, WINNING_SCORE};
//!
//! let mut game = Game::new(4, 42).expect("4 players is valid");
//! match game.play_game() {
//!     GameOutcome::Winner(id) => {
//!         assert!(game.player(id).score() >= WINNING_SCORE);
//!     }
//!     GameOutcome::Aborted(details) => panic!("cheat detected: {details}"),
//! }
//! ```

pub mod cards;
pub mod core;
pub mod engine;
pub mod events;

// Re-export commonly used types
pub use crate::cards::{standard_deck, Card, Pile, PointTable, Rank, Suit, DECK_SIZE, WILD_BONUS};
pub use crate::core::{ConfigError, GameRng, Hand, Player, PlayerId, RoundState, TurnRecord, HAND_SIZE};
pub use crate::engine::{
    check_cheating, decide, CheatDetails, Decision, Game, GameOutcome, RoundOutcome,
    MAX_PLAYERS, MIN_PLAYERS, WINNING_SCORE,
};
pub use crate::events::{EventSink, GameEvent, LogSink, NullSink};
