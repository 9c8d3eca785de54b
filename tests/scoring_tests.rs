//! Scoring tests: tie and winner credit rules, game-loop invariants.

use crazy8_sim::{
    Card, Game, GameOutcome, Pile, PlayerId, PointTable, Rank, RoundOutcome, Suit, WINNING_SCORE,
};

/// Suits different from the round's current suit.
fn off_suits(game: &Game) -> Vec<Suit> {
    let current = game.round_state().current_suit;
    Suit::ALL.into_iter().filter(|&s| s != current).collect()
}

/// A suit different from the round's current suit.
fn off_suit(game: &Game) -> Suit {
    off_suits(game)[0]
}

/// `count` cards of `suit` that can never be played: off suit, off
/// rank, not wild.
fn unplayable_hand(game: &Game, suit: Suit, count: usize) -> Vec<Card> {
    let current_rank = game.round_state().current_rank;
    [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]
        .into_iter()
        .filter(|&r| r != current_rank)
        .take(count)
        .map(|r| Card::new(suit, r))
        .collect()
}

#[test]
fn test_tie_round_credits_every_player() {
    let mut game = Game::new(2, 42).unwrap();
    let table = PointTable::conventional();

    // Nobody can play; a two-card draw pile forces one draw each and
    // then an empty pile, ending the round with no empty hand.
    let suits = off_suits(&game);
    game.set_hand(PlayerId::new(1), unplayable_hand(&game, suits[0], 3));
    game.set_hand(PlayerId::new(2), unplayable_hand(&game, suits[1], 2));
    game.set_draw_pile(Pile::from_cards([
        Card::new(suits[2], Rank::Nine),
        Card::new(suits[2], Rank::Ten),
    ]));

    let outcome = game.play_round();
    assert_eq!(outcome, RoundOutcome::Tie);
    assert!(game.draw_pile().is_empty());

    // Each player is credited independently with the value of the
    // opposing hands as they stood at round end (drawn cards included).
    let p1_hand = table.hand_value(game.player(PlayerId::new(1)).hand());
    let p2_hand = table.hand_value(game.player(PlayerId::new(2)).hand());
    assert!(p1_hand > 0 && p2_hand > 0);
    assert_eq!(game.player(PlayerId::new(1)).score(), p2_hand);
    assert_eq!(game.player(PlayerId::new(2)).score(), p1_hand);
}

#[test]
fn test_winner_round_credits_only_the_winner() {
    let mut game = Game::new(3, 42).unwrap();
    let table = PointTable::conventional();

    // Player 1 holds a single card matching the current suit: the first
    // turn plays it and empties the hand.
    let current_suit = game.round_state().current_suit;
    let current_rank = game.round_state().current_rank;
    let winning_rank = [Rank::Two, Rank::Three, Rank::Four]
        .into_iter()
        .find(|&r| r != current_rank)
        .unwrap();
    game.set_hand(PlayerId::new(1), [Card::new(current_suit, winning_rank)]);

    let losers_suit = off_suit(&game);
    game.set_hand(
        PlayerId::new(2),
        [
            Card::new(losers_suit, Rank::King),
            Card::new(losers_suit, Rank::Nine),
        ],
    );
    game.set_hand(PlayerId::new(3), [Card::new(losers_suit, Rank::Ace)]);

    let expected = table.hand_value(game.player(PlayerId::new(2)).hand())
        + table.hand_value(game.player(PlayerId::new(3)).hand());

    let outcome = game.play_round();
    assert_eq!(outcome, RoundOutcome::Winner(PlayerId::new(1)));

    assert_eq!(game.player(PlayerId::new(1)).score(), expected);
    assert_eq!(game.player(PlayerId::new(2)).score(), 0);
    assert_eq!(game.player(PlayerId::new(3)).score(), 0);
}

#[test]
fn test_scores_never_decrease_and_winner_is_maximal() {
    for seed in [3u64, 17, 88, 500] {
        let mut game = Game::new(4, seed).unwrap();

        let winner = loop {
            let before: Vec<u32> = game.players().iter().map(|p| p.score()).collect();

            let outcome = game.play_round();
            assert!(
                !matches!(outcome, RoundOutcome::Aborted(_)),
                "seed {seed}: engine cheated"
            );

            for (player, &old) in game.players().iter().zip(&before) {
                assert!(player.score() >= old, "seed {seed}: score decreased");
            }

            if let Some(winner) = game.find_winner() {
                break winner;
            }
            game.prepare_new_round();
        };

        let winning_score = game.player(winner).score();
        assert!(winning_score >= WINNING_SCORE, "seed {seed}");
        for player in game.players() {
            assert!(player.score() <= winning_score, "seed {seed}");
        }
    }
}

#[test]
fn test_play_game_matches_manual_round_loop() {
    let mut manual = Game::new(3, 777).unwrap();
    let mut automatic = Game::new(3, 777).unwrap();

    let manual_winner = loop {
        manual.play_round();
        if let Some(winner) = manual.find_winner() {
            break winner;
        }
        manual.prepare_new_round();
    };

    match automatic.play_game() {
        GameOutcome::Winner(winner) => {
            assert_eq!(winner, manual_winner);
            assert_eq!(
                automatic.player(winner).score(),
                manual.player(manual_winner).score()
            );
        }
        GameOutcome::Aborted(details) => panic!("engine cheated: {details}"),
    }
}
