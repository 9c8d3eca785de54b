//! Structured engine events.
//!
//! Narration is an observer concern: the core never prints. It emits
//! structured events (player, action kind, card, declared suit) to an
//! `EventSink`, and sinks decide what to do with them. `LogSink`
//! forwards to the `log` facade; `NullSink` discards everything.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::PlayerId;
use crate::engine::cheat::CheatDetails;

/// A structured event emitted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round was dealt; `starter` seeds the discard pile.
    RoundStarted { starter: Card },

    /// A player had no legal play and drew a card.
    CardDrawn { player: PlayerId },

    /// A player played a card onto the discard pile.
    CardPlayed { player: PlayerId, card: Card },

    /// A wild play declared a new current suit.
    SuitDeclared { player: PlayerId, suit: Suit },

    /// The round ended, with the winner if any hand emptied.
    RoundEnded { winner: Option<PlayerId> },

    /// Points were credited to a player after a round.
    ScoreAwarded {
        player: PlayerId,
        points: u32,
        total: u32,
    },

    /// A player crossed the winning threshold.
    GameWon { player: PlayerId, score: u32 },

    /// An illegal transition was detected; the run aborts.
    CheatDetected { details: CheatDetails },
}

/// Consumer of engine events.
pub trait EventSink {
    /// Handle one event.
    fn emit(&mut self, event: &GameEvent);
}

/// Sink that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

/// Sink that narrates events through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { starter } => {
                log::info!("the first card is {starter}");
            }
            GameEvent::CardDrawn { player } => {
                log::info!("{player} drew a card");
            }
            GameEvent::CardPlayed { player, card } => {
                log::info!("{player} placed a {card}");
            }
            GameEvent::SuitDeclared { player, suit } => {
                log::info!("{player} declared a new suit: {suit}");
            }
            GameEvent::RoundEnded { winner: Some(winner) } => {
                log::info!("the round has ended; {winner} won the round");
            }
            GameEvent::RoundEnded { winner: None } => {
                log::info!("the round has ended in a tie");
            }
            GameEvent::ScoreAwarded { player, points, total } => {
                log::info!("{player} scored {points} points ({total} total)");
            }
            GameEvent::GameWon { player, score } => {
                log::info!("{player} has won the game with {score} points");
            }
            GameEvent::CheatDetected { details } => {
                log::warn!("cheating detected: {details}");
            }
        }
    }
}
