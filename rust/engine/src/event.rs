use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::errors::LogError;

/// One row of a raw platform log: `description, timestamp, sequence id`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    /// Free-text description of the event
    pub description: String,
    /// ISO-8601 timestamp as written by the platform
    pub timestamp: String,
    /// Monotonic sequence id (numeric text)
    pub sequence_id: String,
}

impl EventRow {
    pub fn new(
        description: impl Into<String>,
        timestamp: impl Into<String>,
        sequence_id: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            timestamp: timestamp.into(),
            sequence_id: sequence_id.into(),
        }
    }

    pub fn sequence_number(&self) -> Option<u128> {
        self.sequence_id.trim().parse().ok()
    }
}

/// Reads every record of a CSV log. Each record must carry exactly three
/// fields; a header row, if present, is returned like any other row and is
/// discarded later by segmentation.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<EventRow>, LogError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
