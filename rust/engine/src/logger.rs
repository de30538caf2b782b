use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Prefix of the log row that deals this street's board.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Street::Preflop => None,
            Street::Flop => Some("Flop:"),
            Street::Turn => Some("Turn:"),
            Street::River => Some("River:"),
        }
    }
}

/// One exported line: a built hand plus where it came from.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Hand number from the log's start marker
    #[serde(default)]
    pub number: Option<u32>,
    /// Platform hand id from the log's start marker
    #[serde(default)]
    pub hand_id: Option<String>,
    #[serde(flatten)]
    pub hand: Hand,
    /// Export timestamp (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

use chrono::{SecondsFormat, Utc};
use std::io::Write;

/// Writes hand records as JSON lines.
pub struct HandWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> HandWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn finish(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
