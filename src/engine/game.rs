//! Game and round controllers.
//!
//! `Game` owns the fixed player array, the active `RoundState`, the
//! point table, and the single RNG. It drives rounds to completion
//! (`play_round`) and rounds into a game (`play_game`), re-dealing
//! between rounds until a player's cumulative score crosses the winning
//! threshold.
//!
//! ## Outcomes
//!
//! A detected cheat is unrecoverable: both loops stop immediately and
//! surface `Aborted(CheatDetails)` as the run's result. Callers decide
//! how to react; the engine never exits the process.

use serde::{Deserialize, Serialize};

use super::cheat::{check_cheating, CheatDetails};
use super::strategy::{decide, Decision};
use crate::cards::{Pile, PointTable, Suit};
use crate::core::{ConfigError, GameRng, Player, PlayerId, RoundState, TurnRecord};
use crate::events::{EventSink, GameEvent, NullSink};

/// Minimum supported player count.
pub const MIN_PLAYERS: usize = 2;

/// Maximum supported player count.
pub const MAX_PLAYERS: usize = 8;

/// Cumulative score at which a player wins the game.
pub const WINNING_SCORE: u32 = 200;

/// Result of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A player emptied their hand.
    Winner(PlayerId),
    /// The draw pile emptied with no empty hand.
    Tie,
    /// An illegal transition was detected; the run is over.
    Aborted(CheatDetails),
}

/// Result of a full game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The player whose score crossed the winning threshold.
    Winner(PlayerId),
    /// An illegal transition was detected; the run is over.
    Aborted(CheatDetails),
}

/// A Crazy Eights game: players, active round, scoring, RNG.
pub struct Game {
    players: Vec<Player>,
    round: RoundState,
    points: PointTable,
    rng: GameRng,
    sink: Box<dyn EventSink>,
}

// Manual impl: the event sink is opaque and not Debug.
impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("round", &self.round)
            .field("points", &self.points)
            .field("rng", &self.rng)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Create a game and deal its first round.
    ///
    /// Fails with `ConfigError` for player counts outside
    /// `MIN_PLAYERS..=MAX_PLAYERS`, before any state is built.
    pub fn new(num_players: usize, seed: u64) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(ConfigError::InvalidPlayerCount(num_players));
        }

        let mut players: Vec<Player> = PlayerId::all(num_players)
            .map(|id| {
                let opponents = PlayerId::all(num_players).filter(|&o| o != id).collect();
                Player::new(id, opponents)
            })
            .collect();

        let mut rng = GameRng::new(seed);
        let round = RoundState::deal(&mut players, &mut rng);

        Ok(Self {
            players,
            round,
            points: PointTable::default(),
            rng,
            sink: Box::new(NullSink),
        })
    }

    /// Replace the event sink (builder pattern).
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the point-value table (builder pattern).
    #[must_use]
    pub fn with_point_table(mut self, points: PointTable) -> Self {
        self.points = points;
        self
    }

    // === Accessors ===

    /// All players, in player-id order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The live draw pile.
    #[must_use]
    pub fn draw_pile(&self) -> &Pile {
        &self.round.draw_pile
    }

    /// The round's turn history so far.
    #[must_use]
    pub fn turn_history(&self) -> &[TurnRecord] {
        &self.round.history
    }

    /// The active round state.
    #[must_use]
    pub fn round_state(&self) -> &RoundState {
        &self.round
    }

    // === Test seams ===
    //
    // Direct state injection for deterministic test setup; not general
    // mutation API.

    /// Replace the draw pile.
    pub fn set_draw_pile(&mut self, pile: Pile) {
        self.round.draw_pile = pile;
    }

    /// Replace the turn history.
    pub fn set_turn_history(&mut self, history: Vec<TurnRecord>) {
        self.round.history = history;
    }

    /// Replace a player's hand.
    pub fn set_hand(&mut self, id: PlayerId, cards: impl IntoIterator<Item = crate::cards::Card>) {
        self.players[id.index()].receive_hand(cards);
    }

    // === Round lifecycle ===

    /// Discard the active round and deal a fresh one.
    ///
    /// Player hands are replaced; identities and scores persist.
    pub fn prepare_new_round(&mut self) {
        self.round = RoundState::deal(&mut self.players, &mut self.rng);
    }

    /// Play one round to completion on the freshly dealt round state.
    ///
    /// Turns run strictly round-robin from player 1. After every turn
    /// the round-end condition is checked first, then the cheat
    /// detector. Scores are adjusted before returning, except on abort.
    pub fn play_round(&mut self) -> RoundOutcome {
        if let Some(starter) = self.round.top_discard().copied() {
            self.emit(GameEvent::RoundStarted { starter });
        }

        loop {
            for index in 0..self.players.len() {
                self.take_turn(index);

                if self.check_round_ended() {
                    let winner = self.find_round_winner();
                    self.emit(GameEvent::RoundEnded { winner });
                    self.adjust_scores(winner);
                    return match winner {
                        Some(id) => RoundOutcome::Winner(id),
                        None => RoundOutcome::Tie,
                    };
                }

                if let Some(details) = check_cheating(&self.round.history) {
                    self.emit(GameEvent::CheatDetected { details });
                    return RoundOutcome::Aborted(details);
                }
            }
        }
    }

    /// Play rounds until a player's cumulative score reaches
    /// `WINNING_SCORE`, re-dealing between rounds.
    ///
    /// Terminates immediately with `Aborted` if a round aborts.
    pub fn play_game(&mut self) -> GameOutcome {
        loop {
            if let RoundOutcome::Aborted(details) = self.play_round() {
                return GameOutcome::Aborted(details);
            }

            if let Some(winner) = self.find_winner() {
                let score = self.player(winner).score();
                self.emit(GameEvent::GameWon { player: winner, score });
                return GameOutcome::Winner(winner);
            }

            self.prepare_new_round();
        }
    }

    // === Turn resolution ===

    /// Resolve one player's turn against the shared round state and
    /// append exactly one record to the history.
    fn take_turn(&mut self, index: usize) {
        let player_id = self.players[index].id();
        let decision = decide(
            self.players[index].hand(),
            self.round.current_suit,
            self.round.current_rank,
        );

        let record = match decision {
            Decision::Draw => {
                // Drawing always ends the turn; the drawn card is not
                // evaluated for play until the player's next turn.
                if let Some(card) = self.round.draw_pile.draw() {
                    self.players[index].receive_card(card);
                }
                self.emit(GameEvent::CardDrawn { player: player_id });
                TurnRecord::drew(player_id)
            }
            Decision::Play(hand_index) => {
                let card = self.players[index].remove_card(hand_index);
                self.round.place_on_discard(card);
                self.emit(GameEvent::CardPlayed { player: player_id, card });
                TurnRecord::played(player_id, card)
            }
            Decision::PlayWild(hand_index) => {
                let card = self.players[index].remove_card(hand_index);
                let declared = *self.rng.choose(&Suit::ALL).expect("four suits");
                self.round.place_wild_on_discard(card, declared);
                self.emit(GameEvent::CardPlayed { player: player_id, card });
                self.emit(GameEvent::SuitDeclared {
                    player: player_id,
                    suit: declared,
                });
                TurnRecord::played_wild(player_id, card, declared)
            }
        };

        self.round.record(record);
    }

    // === Round end and scoring ===

    /// A round ends when the draw pile is empty or any hand is empty.
    #[must_use]
    pub fn check_round_ended(&self) -> bool {
        self.round.draw_pile.is_empty() || self.players.iter().any(Player::hand_is_empty)
    }

    /// The (at most one) player with an empty hand.
    #[must_use]
    pub fn find_round_winner(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.hand_is_empty()).map(Player::id)
    }

    /// Sum of point values over all of a player's opponents' hands.
    #[must_use]
    pub fn sum_of_opponent_cards(&self, id: PlayerId) -> u32 {
        self.player(id)
            .opponents()
            .iter()
            .map(|&opponent| self.points.hand_value(self.player(opponent).hand()))
            .sum()
    }

    /// Credit round points: the winner takes all opponents' hand
    /// values; in a tie every player is credited independently with
    /// their own opponents' hand values.
    fn adjust_scores(&mut self, round_winner: Option<PlayerId>) {
        let awards: Vec<(PlayerId, u32)> = match round_winner {
            Some(winner) => vec![(winner, self.sum_of_opponent_cards(winner))],
            None => PlayerId::all(self.players.len())
                .map(|id| (id, self.sum_of_opponent_cards(id)))
                .collect(),
        };

        for (id, points) in awards {
            self.players[id.index()].add_score(points);
            let total = self.players[id.index()].score();
            self.emit(GameEvent::ScoreAwarded {
                player: id,
                points,
                total,
            });
        }
    }

    /// The game winner, if any player has reached `WINNING_SCORE`.
    ///
    /// Among several players at or over the threshold the strictly
    /// highest score wins; an exact tie of the maximum goes to the
    /// lowest player ID.
    #[must_use]
    pub fn find_winner(&self) -> Option<PlayerId> {
        let mut best = &self.players[0];
        for player in &self.players[1..] {
            if player.score() > best.score() {
                best = player;
            }
        }

        (best.score() >= WINNING_SCORE).then(|| best.id())
    }

    /// Run the two-record cheat check against the current history.
    #[must_use]
    pub fn detect_cheat(&self) -> Option<CheatDetails> {
        check_cheating(&self.round.history)
    }

    fn emit(&mut self, event: GameEvent) {
        self.sink.emit(&event);
    }
}
