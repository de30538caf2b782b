//! # handlog CLI Library
//!
//! Command-line front end for the `handlog-engine` crate: rebuilds poker hands
//! from platform event logs and reports per-player VPIP / PFR.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["handlog", "stats", "--input", "logs/", "--roster", "players.json"];
//! let code = handlog_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `stats`: Aggregate VPIP / PFR over one log file or a directory of logs
//! - `hands`: Export the structured hands of a log file as JSON lines
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, HandlogCli};
use commands::{
    HandsOptions, StatsOptions, handle_cfg_command, handle_hands_command, handle_stats_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Available Commands
///
/// - `stats --input PATH [--roster FILE] [--min-players N] [--max-players N] [--since T] [--until T]`
/// - `hands --input FILE [--roster FILE] [--output FILE]`
/// - `cfg`: Display configuration settings
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["stats", "hands", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandlogCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: handlog <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: handlog --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Stats {
            input,
            roster,
            min_players,
            max_players,
            since,
            until,
        } => handle_stats_command(
            StatsOptions {
                input,
                roster,
                min_players: min_players.map(usize::from),
                max_players: max_players.map(usize::from),
                since,
                until,
            },
            out,
            err,
        ),
        Commands::Hands {
            input,
            roster,
            output,
        } => handle_hands_command(
            HandsOptions {
                input,
                roster,
                output,
            },
            out,
            err,
        ),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
