//! Bots-only match for watching the engine and collaborators play.

use std::io::Write;

use cardroom_ai::create_collaborator;
use cardroom_ai::decision::DecisionRequester;
use cardroom_engine::game::PokerGame;
use cardroom_engine::table::Table;

use super::{BOT_NAMES, print_feed, runtime};
use crate::config;
use crate::error::CliError;
use crate::formatters::format_outcome;
use crate::ui;

pub fn handle_sim_command(
    hands: u32,
    seed: Option<u64>,
    players: u8,
    verbose: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut game_config = cfg.game_config(Some(hands));
    game_config.seed = Some(seed);
    let names = seat_names(usize::from(players));
    let game = PokerGame::new(&names, None, &game_config)?;
    let decider = DecisionRequester::new(create_collaborator("baseline"), cfg.decision_config());
    let table = Table::new(game, decider);

    writeln!(
        out,
        "sim: players={} hands={} blind={} seed={}",
        names.len(),
        hands,
        cfg.blind,
        seed
    )?;

    let outcome = runtime()?.block_on(table.run_match())?;
    if verbose {
        print_feed(&table, 0, out)?;
    }

    let (played, stacks, total) = table.with_game(|game| {
        let stacks: Vec<(String, u32)> = game
            .players()
            .iter()
            .map(|p| (p.name().to_string(), p.stack()))
            .collect();
        (game.hand_number(), stacks, game.total_chips())
    })?;
    let expected = u64::from(cfg.starting_stack) * names.len() as u64;
    if u64::from(total) != expected {
        return Err(CliError::Engine(format!(
            "chip count drifted: {} on the table, {} expected",
            total, expected
        )));
    }

    writeln!(out, "Hands played: {}", played)?;
    for (name, stack) in stacks {
        writeln!(out, "{}: {}", name, stack)?;
    }
    writeln!(out, "{}", format_outcome(&outcome))?;
    tracing::info!(played, seed, ?outcome, "simulation finished");
    Ok(())
}

fn seat_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match BOT_NAMES.get(i) {
            Some(name) => (*name).to_string(),
            None => format!("Bot {}", i + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_names_extend_past_named_bots() {
        assert_eq!(
            seat_names(5),
            vec!["Robo-Rob", "Electric Elle", "Cyber Steve", "Bot 4", "Bot 5"]
        );
    }
}
