//! Command handlers, one module per subcommand.
//!
//! Every handler takes its output streams as `&mut dyn Write` and returns
//! `Result<(), CliError>`; the dispatcher in `lib.rs` maps errors to exit
//! codes.

mod cfg;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::{BOT_NAMES, PlayOptions, handle_play_command};
pub use sim::handle_sim_command;

use std::io::Write;

use cardroom_engine::table::{SeatDecider, Table};

use crate::error::CliError;
use crate::formatters::format_feed_line;

/// Prints feed lines added since the cursor `seen` and returns the new
/// cursor.
pub(crate) fn print_feed<D: SeatDecider>(
    table: &Table<D>,
    seen: usize,
    out: &mut dyn Write,
) -> Result<usize, CliError> {
    let (fresh, total) = table.with_game(|game| game.log().messages_since(seen))?;
    for line in fresh {
        writeln!(out, "{}", format_feed_line(&line))?;
    }
    Ok(total)
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?)
}
