//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cardroom",
    version,
    about = "Texas Hold'em against rule-based or model-backed opponents"
)]
pub struct CardroomCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sit down at a table with three bots and play from the terminal
    Play {
        /// Seat name; defaults to the configured player name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        blind: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        stack: Option<u32>,
        /// Stop after this many hands
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: Option<u32>,
        /// Per-decision limit for bot seats, in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Decision collaborator for the bot seats
        #[arg(long, default_value = "baseline")]
        collaborator: String,
    },
    /// Run a bots-only match and print the result
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=9))]
        players: u8,
        /// Print every feed line instead of only the result
        #[arg(long)]
        verbose: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
