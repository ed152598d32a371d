//! # Play Command
//!
//! Seats the player with three bots and plays until the player busts, one
//! seat is left, or the hand limit is hit. Bots decide through the decision
//! requester; the player types actions at the prompt.

use std::io::{BufRead, Write};
use std::time::Duration;

use cardroom_ai::create_collaborator;
use cardroom_ai::decision::DecisionRequester;
use cardroom_engine::game::PokerGame;
use cardroom_engine::table::{MatchOutcome, SeatDecider, Table};

use super::{print_feed, runtime};
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_feed_line, format_outcome, render_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

pub const BOT_NAMES: [&str; 3] = ["Robo-Rob", "Electric Elle", "Cyber Steve"];

/// How often the prompt loop looks at the table while bots are acting.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Flags given to `play`; anything unset comes from the configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub name: Option<String>,
    pub seed: Option<u64>,
    pub blind: Option<u32>,
    pub stack: Option<u32>,
    pub hands: Option<u32>,
    pub timeout_ms: Option<u64>,
    pub collaborator: String,
}

pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    if let Some(name) = opts.name {
        cfg.player_name = name;
    }
    if let Some(blind) = opts.blind {
        cfg.blind = blind;
    }
    if let Some(stack) = opts.stack {
        cfg.starting_stack = stack;
    }
    if let Some(ms) = opts.timeout_ms {
        cfg.decision_timeout_ms = ms;
    }
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    cfg.seed = Some(seed);

    let human = cfg.player_name.trim().to_string();
    if human.is_empty() {
        return Err(CliError::InvalidInput("player name must not be empty".into()));
    }
    let game_config = cfg.game_config(opts.hands);
    game_config.validate()?;

    let mut seats = vec![human.as_str()];
    seats.extend(BOT_NAMES);
    let game = PokerGame::new(&seats, Some(human.as_str()), &game_config)?;
    let decider = DecisionRequester::new(
        create_collaborator(&opts.collaborator),
        cfg.decision_config(),
    );
    let table = Table::new(game, decider);

    writeln!(
        out,
        "play: player={} blind={} stack={} seed={}",
        human, cfg.blind, cfg.starting_stack, seed
    )?;
    tracing::info!(player = %human, seed, collaborator = %opts.collaborator, "table opened");

    let outcome = runtime()?.block_on(drive_match(&table, &human, out, err, stdin))?;
    writeln!(out, "{}", format_outcome(&outcome))?;
    Ok(())
}

/// Runs the match and, whenever the player is the seat to act, shows the
/// table and reads one action from `stdin`. Reading blocks the runtime, which
/// is fine because the match is waiting on the player anyway.
async fn drive_match<D: SeatDecider>(
    table: &Table<D>,
    human: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<MatchOutcome, CliError> {
    let mut seen = 0;
    let run = table.run_match();
    tokio::pin!(run);

    loop {
        tokio::select! {
            outcome = &mut run => {
                print_feed(table, seen, out)?;
                return Ok(outcome?);
            }
            _ = tokio::time::sleep(POLL_INTERVAL) => {}
        }
        seen = print_feed(table, seen, out)?;

        let snapshot = table.snapshot(Some(human))?;
        if snapshot.current_actor.as_deref() != Some(human) {
            continue;
        }
        for line in render_table(&snapshot, human) {
            writeln!(out, "{}", format_feed_line(&line))?;
        }
        write!(out, "Enter action (fold/check/call/raise N/summary/q): ")?;
        out.flush()?;

        let Some(input) = read_stdin_line(stdin) else {
            return Err(CliError::Interrupted("input closed".into()));
        };
        match parse_player_action(&input) {
            ParseResult::Action(action) => {
                if !table.process_action(human, action) {
                    ui::write_error(err, "action not accepted, it is no longer your turn")?;
                }
            }
            ParseResult::Quit => {
                writeln!(out, "Leaving the table.")?;
                return Err(CliError::Interrupted("player left the table".into()));
            }
            ParseResult::Summary => {
                for line in table.with_game(|game| game.summary(human))? {
                    writeln!(out, "{}", format_feed_line(&line))?;
                }
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}
