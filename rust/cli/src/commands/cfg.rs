//! `cfg`: resolved configuration with the source of every value.

use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::ui;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "player_name": {
            "value": config.player_name,
            "source": sources.player_name,
        },
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "blind": {
            "value": config.blind,
            "source": sources.blind,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "decision_timeout_ms": {
            "value": config.decision_timeout_ms,
            "source": sources.decision_timeout_ms,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
