use std::io::Cursor;

use cardroom_cli::run_with_input;
use serial_test::serial;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    for key in [
        "CARDROOM_CONFIG",
        "CARDROOM_SEED",
        "CARDROOM_BLIND",
        "CARDROOM_STARTING_STACK",
        "CARDROOM_PLAYER_NAME",
        "CARDROOM_DECISION_TIMEOUT_MS",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["cardroom", "play"];
    argv.extend_from_slice(args);
    let code = run_with_input(argv, &mut out, &mut err, &mut Cursor::new(input.to_string()));
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn folding_through_a_short_match() {
    let input = "fold\n".repeat(10);
    let (code, stdout, stderr) = play(&["--name", "Alice", "--seed", "7", "--hands", "2"], &input);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("play: player=Alice blind=5 stack=1000 seed=7"));
    assert!(stdout.contains("Hand #1 begins. Alice has the button."));
    assert!(stdout.contains("You are dealt"));
    assert!(stdout.contains("Enter action"));
    assert!(stdout.contains("Alice folds"), "stdout: {stdout}");
    assert!(stdout.contains("Match over"));
}

#[test]
#[serial]
fn table_is_shown_before_each_prompt() {
    let input = "fold\n".repeat(10);
    let (_, stdout, _) = play(&["--name", "Alice", "--seed", "11", "--hands", "1"], &input);
    let prompt = stdout.find("Enter action").unwrap();
    let before = &stdout[..prompt];
    assert!(before.contains("Hand 1 | Pre-Flop | Pot: "));
    assert!(before.contains("> Alice (D)"));
    assert!(before.contains("To call: "));
    assert!(before.contains("Your stack: 1000"));
    for bot in cardroom_cli::BOT_NAMES {
        assert!(before.contains(bot), "{bot} missing from table");
    }
}

#[test]
#[serial]
fn quit_leaves_with_interrupt_code() {
    let (code, stdout, _) = play(&["--seed", "42"], "q\n");
    assert_eq!(code, 130);
    assert!(stdout.contains("Leaving the table."));
}

#[test]
#[serial]
fn closed_input_is_an_interrupt() {
    let (code, _, stderr) = play(&["--seed", "42"], "");
    assert_eq!(code, 130);
    assert!(stderr.contains("input closed"));
}

#[test]
#[serial]
fn bad_input_is_reported_and_reprompted() {
    let input = format!("dance\nraise\n{}", "fold\n".repeat(10));
    let (code, stdout, stderr) = play(&["--seed", "5", "--hands", "1"], &input);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stderr.contains("Unrecognized action 'dance'"));
    assert!(stderr.contains("Raise requires an amount"));
    assert!(stdout.matches("Enter action").count() >= 3);
}

#[test]
#[serial]
fn bot_name_cannot_be_taken() {
    let (code, _, stderr) = play(&["--name", "Robo-Rob"], "");
    assert_eq!(code, 2);
    assert!(stderr.contains("Duplicate player name: Robo-Rob"), "stderr: {stderr}");
}

#[test]
#[serial]
fn summary_is_shown_and_the_prompt_returns() {
    let input = format!("summary\n{}", "fold\n".repeat(10));
    let (code, stdout, stderr) =
        play(&["--name", "Alice", "--seed", "7", "--hands", "1"], &input);
    assert_eq!(code, 0, "stderr: {stderr}");
    let summary = stdout.find("--- Hand Summary ---").expect("summary printed");
    let after = &stdout[summary..];
    assert!(after.contains("Current Stage: Pre-Flop"));
    assert!(after.contains("Alice's hand: "));
    assert!(after.contains("Player stacks:"));
    assert!(after.contains("Enter action"));
    assert!(!stderr.contains("Unrecognized"));
}

#[test]
#[serial]
fn stacks_beyond_the_chip_limit_are_rejected() {
    let (code, _, stderr) = play(&["--seed", "1", "--stack", "2000000000"], "");
    assert_eq!(code, 2);
    assert!(stderr.contains("chip limit"), "stderr: {stderr}");
}
