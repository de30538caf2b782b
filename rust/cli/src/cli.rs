//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "handlog",
    version,
    about = "Rebuild poker hands from platform event logs and compute VPIP / PFR"
)]
pub struct HandlogCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute per-player VPIP and PFR from one log file or a directory of logs
    Stats {
        /// Log file (.csv or .csv.zst) or directory searched recursively
        #[arg(long)]
        input: String,
        /// JSON roster mapping canonical names to aliases
        #[arg(long)]
        roster: Option<String>,
        /// Only count hands with at least this many seated players
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
        min_players: Option<u8>,
        /// Only count hands with at most this many seated players
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
        max_players: Option<u8>,
        /// Only count hands started at or after this RFC 3339 time
        #[arg(long)]
        since: Option<String>,
        /// Only count hands started before this RFC 3339 time
        #[arg(long)]
        until: Option<String>,
    },
    /// Write the structured hands of one log file as JSON lines
    Hands {
        /// Log file (.csv or .csv.zst)
        #[arg(long)]
        input: String,
        /// JSON roster mapping canonical names to aliases
        #[arg(long)]
        roster: Option<String>,
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
