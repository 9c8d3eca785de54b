//! Shared per-round state.
//!
//! `RoundState` is created fresh at each round's deal and discarded at
//! round end. It is an explicit context struct: players hold no
//! reference to it, and every turn receives it by parameter. The
//! current suit/rank always mirror the top discard card, except after a
//! wild play, where the suit is the declared suit and the rank is
//! pinned to the wild marker until a later non-wild play overwrites
//! both.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rng::GameRng;
use super::turn::TurnRecord;
use crate::cards::{standard_deck, Card, Pile, Rank, Suit};

/// Cards dealt to each hand at a round's start.
pub const HAND_SIZE: usize = 5;

/// The shared state of one round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState {
    /// Remaining undealt cards. Forced draws take the front card.
    pub draw_pile: Pile,

    /// Played cards. The top (back) is the most recently played.
    pub discard_pile: Pile,

    /// Suit that constrains the next play.
    pub current_suit: Suit,

    /// Rank that constrains the next play. `Rank::Eight` after a wild play.
    pub current_rank: Rank,

    /// Ordered turn history across all players, used for cheat detection.
    pub history: Vec<TurnRecord>,
}

impl RoundState {
    /// Deal a fresh round: shuffle a full deck, give each player 5
    /// cards in player-id order, then seed the discard pile with a
    /// non-wild card.
    ///
    /// A wild seed card is reinserted into the draw pile at a random
    /// position and another card drawn; the full deck guarantees a
    /// non-wild card is reached.
    pub(crate) fn deal(players: &mut [Player], rng: &mut GameRng) -> Self {
        let mut draw_pile = Pile::from_cards(standard_deck());
        draw_pile.shuffle(rng);

        for player in players.iter_mut() {
            let hand: Vec<Card> = (0..HAND_SIZE).filter_map(|_| draw_pile.draw()).collect();
            player.receive_hand(hand);
        }

        let mut seed_card = draw_pile.draw().expect("52-card deck always covers the deal");
        while seed_card.is_wild() {
            let position = rng.gen_index(0..draw_pile.len());
            draw_pile.insert_at(position, seed_card);
            seed_card = draw_pile.draw().expect("reinsertion keeps the pile non-empty");
        }

        let mut discard_pile = Pile::new();
        discard_pile.place(seed_card);

        Self {
            draw_pile,
            discard_pile,
            current_suit: seed_card.suit,
            current_rank: seed_card.rank,
            history: Vec::new(),
        }
    }

    /// The top of the discard pile.
    ///
    /// The discard pile is never empty after dealing.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.top()
    }

    /// Place a naturally played card on the discard pile and match
    /// suit/rank to it. A suit-matching eight is a natural play and
    /// lands here too, pinning the current rank to the wild marker
    /// without a declaration.
    pub(crate) fn place_on_discard(&mut self, card: Card) {
        self.current_suit = card.suit;
        self.current_rank = card.rank;
        self.discard_pile.place(card);
    }

    /// Place a wild card on the discard pile: the declared suit becomes
    /// current and the rank is pinned to the wild marker.
    pub(crate) fn place_wild_on_discard(&mut self, card: Card, declared: Suit) {
        self.current_suit = declared;
        self.current_rank = Rank::WILD;
        self.discard_pile.place(card);
    }

    /// Append a turn to the round's history.
    pub(crate) fn record(&mut self, turn: TurnRecord) {
        self.history.push(turn);
    }
}
