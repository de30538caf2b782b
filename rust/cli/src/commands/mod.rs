//! Command handler modules for the handlog CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - All errors propagated via the `CliError` enum

mod cfg;
mod hands;
mod stats;

pub use cfg::handle_cfg_command;
pub use hands::{HandsOptions, handle_hands_command};
pub use stats::{StatsOptions, handle_stats_command};
