//! Core types: players, turn records, round state, RNG, errors.

pub mod error;
pub mod player;
pub mod rng;
pub mod round;
pub mod turn;

pub use error::ConfigError;
pub use player::{Hand, Player, PlayerId};
pub use rng::GameRng;
pub use round::{RoundState, HAND_SIZE};
pub use turn::TurnRecord;
