//! # Cardroom CLI Library
//!
//! Command-line front end for the cardroom engine: play a match from the
//! terminal, watch bots play each other, or inspect the configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand. [`run_with_input`]
//! does the same with an explicit input stream for `play`.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cardroom", "play", "--name", "Alice", "--hands", "10"];
//! let code = cardroom_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Sit down with three bots and act from the terminal
//! - `sim`: Bots-only match
//! - `cfg`: Display current configuration settings

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{CardroomCli, Commands};
use commands::{PlayOptions, handle_cfg_command, handle_play_command, handle_sim_command};

pub use commands::BOT_NAMES;
pub use error::CliError;

/// Main entry point for the CLI application. `play` reads actions from the
/// process's stdin.
///
/// Exit code: `0` for success, `2` for errors, `130` when the player leaves
/// mid-match.
///
/// ```
/// use std::io;
/// let args = vec!["cardroom", "sim", "--hands", "3", "--seed", "42"];
/// let code = cardroom_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with the input stream supplied by the caller.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardroomCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Cardroom Poker CLI").is_err()
                        || writeln!(err, "Usage: cardroom <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: cardroom --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            name,
            seed,
            blind,
            stack,
            hands,
            timeout_ms,
            collaborator,
        } => {
            let opts = PlayOptions {
                name,
                seed,
                blind,
                stack,
                hands,
                timeout_ms,
                collaborator,
            };
            handle_play_command(opts, out, err, input)
        }
        Commands::Sim {
            hands,
            seed,
            players,
            verbose,
        } => handle_sim_command(hands, seed, players, verbose, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            e.exit_code()
        }
    }
}
