//! Event emission tests: the structured stream an external narrator
//! consumes.

use std::cell::RefCell;
use std::rc::Rc;

use crazy8_sim::{EventSink, Game, GameEvent, GameOutcome, RoundOutcome};

/// Sink that records every event for later inspection.
#[derive(Clone, Default)]
struct CollectSink {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventSink for CollectSink {
    fn emit(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(*event);
    }
}

#[test]
fn test_round_emits_one_action_event_per_turn() {
    let sink = CollectSink::default();
    let events = sink.events.clone();

    let mut game = Game::new(3, 42).unwrap().with_sink(Box::new(sink));
    let outcome = game.play_round();
    assert!(!matches!(outcome, RoundOutcome::Aborted(_)));

    let events = events.borrow();
    assert!(matches!(events[0], GameEvent::RoundStarted { .. }));

    let actions = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CardDrawn { .. } | GameEvent::CardPlayed { .. }))
        .count();
    assert_eq!(actions, game.turn_history().len());

    // Every wild play is followed by its declaration.
    for pair in events.windows(2) {
        if let GameEvent::SuitDeclared { player, .. } = pair[1] {
            match pair[0] {
                GameEvent::CardPlayed { player: p, card } => {
                    assert_eq!(p, player);
                    assert!(card.is_wild());
                }
                _ => panic!("declaration without a preceding wild play"),
            }
        }
    }

    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::RoundEnded { .. })));
}

#[test]
fn test_round_end_event_matches_outcome() {
    let sink = CollectSink::default();
    let events = sink.events.clone();

    let mut game = Game::new(2, 7).unwrap().with_sink(Box::new(sink));
    let outcome = game.play_round();

    let recorded_winner = events
        .borrow()
        .iter()
        .find_map(|e| match e {
            GameEvent::RoundEnded { winner } => Some(*winner),
            _ => None,
        })
        .expect("round must end");

    match outcome {
        RoundOutcome::Winner(id) => assert_eq!(recorded_winner, Some(id)),
        RoundOutcome::Tie => assert_eq!(recorded_winner, None),
        RoundOutcome::Aborted(details) => panic!("engine cheated: {details}"),
    }
}

#[test]
fn test_game_emits_won_event_with_final_score() {
    let sink = CollectSink::default();
    let events = sink.events.clone();

    let mut game = Game::new(2, 11).unwrap().with_sink(Box::new(sink));
    let outcome = game.play_game();

    let GameOutcome::Winner(winner) = outcome else {
        panic!("engine cheated");
    };

    let won = events
        .borrow()
        .iter()
        .find_map(|e| match e {
            GameEvent::GameWon { player, score } => Some((*player, *score)),
            _ => None,
        })
        .expect("game must emit GameWon");

    assert_eq!(won.0, winner);
    assert_eq!(won.1, game.player(winner).score());
}
