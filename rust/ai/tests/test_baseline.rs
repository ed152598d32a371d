use std::sync::Arc;

use cardroom_ai::baseline::BaselineCollaborator;
use cardroom_ai::decision::{parse_decision, DecisionConfig, DecisionRequester};
use cardroom_ai::{Collaborator, CollaboratorError};
use cardroom_engine::cards::{Card, Rank, Suit};
use cardroom_engine::game::{GameConfig, PokerGame};
use cardroom_engine::logger::Street;
use cardroom_engine::player::PlayerAction;
use cardroom_engine::prompt::{render_prompt, PromptState, SeatView};
use cardroom_engine::table::{MatchOutcome, Table};

fn state(hand: [Card; 2], board: Vec<Card>, to_call: u32) -> PromptState {
    PromptState {
        player: "Electric Elle".into(),
        street: if board.is_empty() { Street::Preflop } else { Street::Flop },
        hand: hand.to_vec(),
        board,
        pot: 60,
        to_call,
        stack: 900,
        current_bet: to_call,
        min_raise: 5,
        seats: vec![SeatView {
            name: "Electric Elle".into(),
            stack: 900,
            current_bet: 0,
            folded: false,
        }],
    }
}

#[tokio::test]
async fn premium_pair_raises_and_junk_folds() {
    let baseline = BaselineCollaborator::new();

    let aces = state(
        [Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Ace, Suit::Clubs)],
        vec![],
        20,
    );
    let reply = baseline.complete(&render_prompt(&aces, "")).await.unwrap();
    assert!(matches!(parse_decision(&reply), Ok(PlayerAction::Raise(_))));

    let junk = state(
        [Card::new(Rank::Seven, Suit::Hearts), Card::new(Rank::Two, Suit::Clubs)],
        vec![],
        200,
    );
    let reply = baseline.complete(&render_prompt(&junk, "")).await.unwrap();
    assert_eq!(parse_decision(&reply), Ok(PlayerAction::Fold));
}

#[tokio::test]
async fn made_hand_on_the_flop_bets() {
    let trips = state(
        [Card::new(Rank::Nine, Suit::Hearts), Card::new(Rank::Nine, Suit::Clubs)],
        vec![
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Hearts),
        ],
        0,
    );
    let reply = BaselineCollaborator::new()
        .complete(&render_prompt(&trips, ""))
        .await
        .unwrap();
    assert_eq!(parse_decision(&reply), Ok(PlayerAction::Check));

    let set_of_kings = state(
        [Card::new(Rank::King, Suit::Hearts), Card::new(Rank::King, Suit::Clubs)],
        trips.board.clone(),
        0,
    );
    let reply = BaselineCollaborator::new()
        .complete(&render_prompt(&set_of_kings, ""))
        .await
        .unwrap();
    assert!(matches!(parse_decision(&reply), Ok(PlayerAction::Raise(_))));
}

#[tokio::test]
async fn prompt_without_state_is_a_parse_error() {
    let err = BaselineCollaborator::new()
        .complete("What should I do?")
        .await
        .unwrap_err();
    assert!(matches!(err, CollaboratorError::Parse(_)));
}

#[tokio::test]
async fn baseline_bots_play_a_full_match_segment() {
    let config = GameConfig {
        seed: Some(31),
        max_hands: Some(20),
        ..GameConfig::default()
    };
    let game = PokerGame::new(&["Robo-Rob", "Electric Elle", "Cyber Steve"], None, &config).unwrap();
    let requester = DecisionRequester::new(
        Arc::new(BaselineCollaborator::new()),
        DecisionConfig::default(),
    );
    let table = Table::new(game, requester);

    let outcome = table.run_match().await.unwrap();
    assert!(matches!(
        outcome,
        MatchOutcome::HandLimitReached | MatchOutcome::Won(_)
    ));
    let chips = table.with_game(|g| g.total_chips()).unwrap();
    assert_eq!(chips, 3_000);
}
