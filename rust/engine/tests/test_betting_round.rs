use cardroom_engine::betting::{BettingRound, RoundStatus};
use cardroom_engine::errors::GameError;
use cardroom_engine::logger::{ActionLog, Street};
use cardroom_engine::player::{Player, PlayerAction as A};
use cardroom_engine::rules::ValidatedAction;

fn seats(stacks: &[u32]) -> Vec<Player> {
    stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::new(format!("P{i}"), s))
        .collect()
}

fn act(
    round: &mut BettingRound,
    players: &mut [Player],
    log: &mut ActionLog,
    seat: usize,
    action: A,
) -> RoundStatus {
    let name = players[seat].name().to_string();
    round
        .process_action(&name, action, players, log, |_| String::new())
        .expect("action for the current seat")
}

#[test]
fn n_checks_complete_the_round_and_never_earlier() {
    for n in 2..=6 {
        let mut players = seats(&vec![100; n]);
        let mut log = ActionLog::new();
        let (mut round, mut rx) =
            BettingRound::new(Street::Flop, (0..n).collect(), None, &mut players, &mut log);

        for seat in 0..n - 1 {
            assert_eq!(round.current_actor(), Some(seat));
            let status = act(&mut round, &mut players, &mut log, seat, A::Check);
            assert_eq!(status, RoundStatus::AwaitingAction(seat + 1));
            assert!(rx.try_recv().is_err(), "signal fired after {} checks", seat + 1);
        }
        let status = act(&mut round, &mut players, &mut log, n - 1, A::Check);
        assert_eq!(status, RoundStatus::Complete);
        assert_eq!(rx.try_recv(), Ok(0));
        assert_eq!(round.current_actor(), None);
    }
}

#[test]
fn raise_reopens_action_for_everyone() {
    let mut players = seats(&[100, 100, 100]);
    let mut log = ActionLog::new();
    let (mut round, mut rx) =
        BettingRound::new(Street::Flop, vec![0, 1, 2], None, &mut players, &mut log);

    act(&mut round, &mut players, &mut log, 0, A::Check);
    act(&mut round, &mut players, &mut log, 1, A::Raise(20));
    act(&mut round, &mut players, &mut log, 2, A::Call);
    assert!(!round.is_complete());
    // seat 0 checked earlier but now owes 20
    assert_eq!(round.owed(&players[0]), 20);
    let status = act(&mut round, &mut players, &mut log, 0, A::Check);
    assert_eq!(status, RoundStatus::Complete);
    assert_eq!(rx.try_recv(), Ok(60));
    assert_eq!(log.pot(), 60);
}

#[test]
fn wrong_seat_is_rejected_without_side_effects() {
    let mut players = seats(&[100, 100]);
    let mut log = ActionLog::new();
    let (mut round, _rx) =
        BettingRound::new(Street::Turn, vec![0, 1], None, &mut players, &mut log);

    let err = round
        .process_action("P1", A::Raise(50), &mut players, &mut log, |_| String::new())
        .unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidActor {
            expected: "P0".into(),
            actual: "P1".into()
        }
    );
    assert_eq!(players[1].stack(), 100);
    assert_eq!(round.actions_taken(), 0);
    assert!(log.actions().is_empty());
}

#[test]
fn actions_after_completion_are_rejected() {
    let mut players = seats(&[100, 100]);
    let mut log = ActionLog::new();
    let (mut round, _rx) =
        BettingRound::new(Street::River, vec![0, 1], None, &mut players, &mut log);
    act(&mut round, &mut players, &mut log, 0, A::Raise(10));
    act(&mut round, &mut players, &mut log, 1, A::Fold);
    assert!(round.is_complete());
    let err = round
        .process_action("P0", A::Check, &mut players, &mut log, |_| String::new())
        .unwrap_err();
    assert_eq!(err, GameError::RoundAlreadyComplete);
}

#[test]
fn raise_exceeding_stack_goes_all_in() {
    let mut players = seats(&[100, 40, 100]);
    let mut log = ActionLog::new();
    let (mut round, _rx) =
        BettingRound::new(Street::Flop, vec![0, 1, 2], None, &mut players, &mut log);

    act(&mut round, &mut players, &mut log, 0, A::Raise(30));
    let before = round.current_bet();
    act(&mut round, &mut players, &mut log, 1, A::Raise(500));
    assert_eq!(players[1].stack(), 0);
    // 40 on top of a 0 bet lifts the table to 40
    assert_eq!(round.current_bet(), before.max(40));
    assert_eq!(log.actions()[1].action, ValidatedAction::AllIn(40));
    // the all-in seat is skipped from now on
    act(&mut round, &mut players, &mut log, 2, A::Call);
    let status = act(&mut round, &mut players, &mut log, 0, A::Call);
    assert_eq!(status, RoundStatus::Complete);
    assert_eq!(round.pot(), 120);
}

#[test]
fn short_all_in_never_lowers_the_table_bet() {
    let mut players = seats(&[100, 20, 100]);
    let mut log = ActionLog::new();
    let (mut round, _rx) =
        BettingRound::new(Street::Flop, vec![0, 1, 2], None, &mut players, &mut log);
    act(&mut round, &mut players, &mut log, 0, A::Raise(50));
    act(&mut round, &mut players, &mut log, 1, A::Call);
    assert_eq!(players[1].current_bet(), 20);
    assert_eq!(round.current_bet(), 50);
    let status = act(&mut round, &mut players, &mut log, 2, A::Call);
    assert_eq!(status, RoundStatus::Complete);
}

#[test]
fn blinds_are_posted_and_logged() {
    let mut players = seats(&[100, 100, 100]);
    let mut log = ActionLog::new();
    let (round, _rx) =
        BettingRound::new(Street::Preflop, vec![1, 2, 0], Some(5), &mut players, &mut log);
    assert_eq!(players[1].current_bet(), 5);
    assert_eq!(players[2].current_bet(), 5);
    assert_eq!(round.current_bet(), 5);
    assert_eq!(round.actions_taken(), 2);
    assert_eq!(round.pot(), 10);
    assert_eq!(round.current_actor(), Some(0));
    assert_eq!(log.summary_lines(), vec!["P1 raise 5", "P2 raise 5"]);
}

#[test]
fn short_blind_is_capped_at_stack() {
    let mut players = seats(&[100, 3, 100]);
    let mut log = ActionLog::new();
    let (round, _rx) =
        BettingRound::new(Street::Preflop, vec![1, 2, 0], Some(5), &mut players, &mut log);
    assert_eq!(players[1].stack(), 0);
    assert_eq!(players[1].current_bet(), 3);
    assert_eq!(round.current_bet(), 5);
    assert_eq!(round.pot(), 8);
}

#[test]
fn folded_seats_are_skipped() {
    let mut players = seats(&[100, 100, 100, 100]);
    let mut log = ActionLog::new();
    let (mut round, _rx) =
        BettingRound::new(Street::Flop, vec![0, 1, 2, 3], None, &mut players, &mut log);
    act(&mut round, &mut players, &mut log, 0, A::Raise(10));
    act(&mut round, &mut players, &mut log, 1, A::Fold);
    assert_eq!(round.current_actor(), Some(2));
    act(&mut round, &mut players, &mut log, 2, A::Call);
    act(&mut round, &mut players, &mut log, 3, A::Raise(10));
    // seat 1 folded, action wraps to seat 0
    assert_eq!(round.current_actor(), Some(0));
}

#[test]
fn fold_to_one_completes_immediately() {
    let mut players = seats(&[100, 100, 100]);
    let mut log = ActionLog::new();
    let (mut round, mut rx) =
        BettingRound::new(Street::Turn, vec![0, 1, 2], None, &mut players, &mut log);
    act(&mut round, &mut players, &mut log, 0, A::Raise(10));
    act(&mut round, &mut players, &mut log, 1, A::Fold);
    let status = act(&mut round, &mut players, &mut log, 2, A::Fold);
    assert_eq!(status, RoundStatus::Complete);
    assert_eq!(rx.try_recv(), Ok(10));
}

#[test]
fn round_without_eligible_actors_completes_at_construction() {
    // everyone but one seat is all-in; the one left owes nothing
    let mut players = seats(&[0, 0, 50]);
    let mut log = ActionLog::new();
    let (round, mut rx) =
        BettingRound::new(Street::River, vec![0, 1, 2], None, &mut players, &mut log);
    assert!(round.is_complete());
    assert_eq!(round.current_actor(), None);
    assert_eq!(rx.try_recv(), Ok(0));

    let mut players = seats(&[0, 0]);
    let (round, mut rx) =
        BettingRound::new(Street::Flop, vec![0, 1], None, &mut players, &mut log);
    assert!(round.is_complete());
    assert_eq!(rx.try_recv(), Ok(0));
}

#[test]
fn all_in_players_never_block_completion() {
    let mut players = seats(&[100, 30, 100]);
    let mut log = ActionLog::new();
    let (mut round, _rx) =
        BettingRound::new(Street::Flop, vec![0, 1, 2], None, &mut players, &mut log);
    act(&mut round, &mut players, &mut log, 0, A::Check);
    act(&mut round, &mut players, &mut log, 1, A::Raise(100));
    act(&mut round, &mut players, &mut log, 2, A::Call);
    let status = act(&mut round, &mut players, &mut log, 0, A::Call);
    assert_eq!(status, RoundStatus::Complete);
    assert_eq!(round.pot(), 90);
}
