//! Statistics aggregation command for poker event logs.
//!
//! This module parses every log file under the input path (in parallel, one
//! file per task), builds the hands of each file, and reduces the per-file
//! VPIP / PFR counters into one report.

use crate::config;
use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{collect_log_files, load_roster, load_rows};
use crate::ui;
use chrono::{DateTime, Utc};
use handlog_engine::errors::LogError;
use handlog_engine::hand::Hand;
use handlog_engine::pipeline::{HandFailure, parse_log};
use handlog_engine::roster::PlayerRoster;
use handlog_engine::stats::{Metric, MetricCounts, PlayerFilter};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options of the `stats` command. `None` falls back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    pub input: String,
    pub roster: Option<String>,
    pub min_players: Option<usize>,
    pub max_players: Option<usize>,
    pub since: Option<String>,
    pub until: Option<String>,
}

/// Half-open time window `[since, until)` on hand start times.
#[derive(Debug, Clone, Copy, Default)]
struct TimeWindow {
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
}

impl TimeWindow {
    fn parse(since: Option<&str>, until: Option<&str>) -> Result<Self, CliError> {
        let parse = |label: &str, v: Option<&str>| -> Result<Option<DateTime<Utc>>, CliError> {
            v.map(|s| {
                DateTime::parse_from_rfc3339(s)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|e| CliError::InvalidInput(format!("Invalid --{} '{}': {}", label, s, e)))
            })
            .transpose()
        };
        Ok(Self {
            since: parse("since", since)?,
            until: parse("until", until)?,
        })
    }

    fn is_open(&self) -> bool {
        self.since.is_none() && self.until.is_none()
    }

    fn contains(&self, hand: &Hand) -> bool {
        if self.is_open() {
            return true;
        }
        let Some(t) = hand.hand_time_utc() else {
            return false;
        };
        self.since.is_none_or(|s| t >= s) && self.until.is_none_or(|u| t < u)
    }
}

/// Counters and failures of one parsed file.
#[derive(Debug)]
struct FileStats {
    hands: usize,
    skipped: usize,
    failures: Vec<HandFailure>,
    vpip: MetricCounts,
    pfr: MetricCounts,
}

fn seeded(metric: Metric, roster: Option<&PlayerRoster>) -> MetricCounts {
    match roster {
        Some(r) => MetricCounts::seeded(metric, r.names()),
        None => MetricCounts::seeded(metric, std::iter::empty()),
    }
}

fn process_file(
    path: &Path,
    roster: Option<&PlayerRoster>,
    filter: &PlayerFilter,
    window: &TimeWindow,
) -> Result<FileStats, LogError> {
    let rows = load_rows(path)?;
    let report = parse_log(&rows, roster);
    let hands: Vec<&Hand> = report.valid_hands().filter(|h| window.contains(h)).collect();

    let open = roster.is_none();
    let mut vpip = seeded(Metric::Vpip, roster);
    vpip.count(hands.iter().copied(), filter, open);
    let mut pfr = seeded(Metric::Pfr, roster);
    pfr.count(hands.iter().copied(), filter, open);

    info!(
        file = %path.display(),
        hands = hands.len(),
        skipped = report.skipped,
        failures = report.failures.len(),
        "parsed log"
    );
    Ok(FileStats {
        hands: hands.len(),
        skipped: report.skipped,
        failures: report.failures,
        vpip,
        pfr,
    })
}

/// Computes VPIP and PFR from event logs.
///
/// # Arguments
///
/// * `opts` - Input path, roster and filters
/// * `out` - Output stream for the JSON report
/// * `err` - Output stream for warnings about unreadable files and failed hands
///
/// # Returns
///
/// `Ok(())` when at least one file was read (individual hand failures are
/// reported but do not fail the command). An input without log files, or
/// one where no file could be read, is an `Err` that maps to exit code `2`.
/// Returned errors are printed by the caller, not here.
pub fn handle_stats_command(
    opts: StatsOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let filter = PlayerFilter::new(
        opts.min_players.unwrap_or(cfg.min_players),
        opts.max_players.unwrap_or(cfg.max_players),
    );
    if filter.min_players > filter.max_players {
        return Err(CliError::InvalidInput(
            "--min-players must not exceed --max-players".to_string(),
        ));
    }
    let window = TimeWindow::parse(opts.since.as_deref(), opts.until.as_deref())?;

    let roster = match opts.roster.as_deref().or(cfg.roster.as_deref()) {
        Some(path) => Some(load_roster(path).map_err(|e| {
            CliError::InvalidInput(format!("Failed to load roster {}: {}", path, e))
        })?),
        None => None,
    };

    let input = Path::new(&opts.input);
    if !input.exists() {
        return Err(CliError::InvalidInput(format!("Input not found: {}", opts.input)));
    }
    let files = collect_log_files(input);
    if files.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No log files found under {}",
            opts.input
        )));
    }

    let results: Vec<(PathBuf, Result<FileStats, LogError>)> = files
        .par_iter()
        .map(|p| (p.clone(), process_file(p, roster.as_ref(), &filter, &window)))
        .collect();

    let mut total = FileStats {
        hands: 0,
        skipped: 0,
        failures: Vec::new(),
        vpip: seeded(Metric::Vpip, roster.as_ref()),
        pfr: seeded(Metric::Pfr, roster.as_ref()),
    };
    let mut read = 0usize;
    let mut unreadable: Vec<BatchValidationError<String>> = Vec::new();
    for (path, result) in results {
        match result {
            Ok(stats) => {
                read += 1;
                total.hands += stats.hands;
                total.skipped += stats.skipped;
                total.vpip.merge(stats.vpip);
                total.pfr.merge(stats.pfr);
                for failure in stats.failures {
                    ui::display_warning(err, &format!("{}: {}", path.display(), failure))?;
                    total.failures.push(failure);
                }
            }
            Err(e) => {
                let e = BatchValidationError {
                    item_context: path.display().to_string(),
                    message: e.to_string(),
                };
                ui::write_error(err, &e.to_string())?;
                unreadable.push(e);
            }
        }
    }

    if read == 0 {
        return Err(CliError::InvalidInput(format!(
            "None of {} log file(s) could be read",
            unreadable.len()
        )));
    }

    let mut counts = BTreeMap::new();
    for (player, t) in &total.vpip.tallies {
        let pfr = total.pfr.tallies.get(player).copied().unwrap_or_default();
        counts.insert(
            player.clone(),
            serde_json::json!({ "hands": t.hands, "vpip": t.qualifying, "pfr": pfr.qualifying }),
        );
    }
    let summary = serde_json::json!({
        "files": read,
        "unreadable": unreadable,
        "hands": total.hands,
        "skipped": total.skipped,
        "failures": total.failures.len(),
        "vpip": total.vpip.rates(),
        "pfr": total.pfr.rates(),
        "counts": counts,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}
