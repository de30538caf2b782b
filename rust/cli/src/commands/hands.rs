//! JSONL export of the hands rebuilt from one event log.

use crate::config;
use crate::error::CliError;
use crate::io_utils::{ensure_parent_dir, load_roster, load_rows};
use crate::ui;
use handlog_engine::logger::{HandRecord, HandWriter};
use handlog_engine::pipeline::{LogReport, parse_log};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Options of the `hands` command.
#[derive(Debug, Clone, Default)]
pub struct HandsOptions {
    pub input: String,
    pub roster: Option<String>,
    pub output: Option<String>,
}

fn write_records<W: Write>(report: &LogReport, writer: W) -> Result<(usize, W), CliError> {
    let mut hw = HandWriter::new(writer);
    for parsed in &report.hands {
        hw.write(&HandRecord {
            number: parsed.number,
            hand_id: parsed.hand_id.clone(),
            hand: parsed.hand.clone(),
            ts: None,
        })?;
    }
    let written = hw.written();
    Ok((written, hw.finish()?))
}

/// Writes every hand of `opts.input` as one JSON object per line.
///
/// Hands go to `opts.output` when given, otherwise to `out`. Hands that
/// fail to build are reported on `err` and left out of the export.
pub fn handle_hands_command(
    opts: HandsOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let roster = match opts.roster.as_deref().or(cfg.roster.as_deref()) {
        Some(path) => Some(load_roster(path).map_err(|e| {
            CliError::InvalidInput(format!("Failed to load roster {}: {}", path, e))
        })?),
        None => None,
    };

    let input = Path::new(&opts.input);
    let rows = load_rows(input)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", opts.input, e)))?;
    let report = parse_log(&rows, roster.as_ref());
    for failure in &report.failures {
        ui::display_warning(err, &failure.to_string())?;
    }

    let written = match opts.output.as_deref() {
        Some(path) => {
            let path = Path::new(path);
            ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
            let file = std::fs::File::create(path)?;
            let (written, _) = write_records(&report, BufWriter::new(file))?;
            writeln!(out, "Wrote {} hands to {}", written, path.display())?;
            written
        }
        None => write_records(&report, &mut *out)?.0,
    };

    info!(
        file = %input.display(),
        written,
        skipped = report.skipped,
        failures = report.failures.len(),
        "exported hands"
    );
    Ok(())
}
