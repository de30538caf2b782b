//! Splitting a flat log into per-hand row groups.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::EventRow;

pub const START_MARKER: &str = "-- starting hand";
pub const END_MARKER: &str = "-- ending hand";

/// Tokens of rows that carry no action or stack information.
const LIFECYCLE_NOISE: [&str; 4] = ["joined", "requested", "approved", "forced"];

/// Chronological direction of a raw row list.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RowOrder {
    /// Oldest row first
    Forward,
    /// Newest row first (the platform's export order)
    Reversed,
}

impl RowOrder {
    /// Infers the order from the numeric sequence ids of the first and last
    /// rows that carry one. Falls back to `Reversed` when undecidable.
    pub fn detect(rows: &[EventRow]) -> RowOrder {
        let first = rows.iter().find_map(EventRow::sequence_number);
        let last = rows.iter().rev().find_map(EventRow::sequence_number);
        match (first, last) {
            (Some(a), Some(b)) if a < b => RowOrder::Forward,
            _ => RowOrder::Reversed,
        }
    }
}

/// The rows of one hand, strictly between its start and end markers.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct HandSegment {
    /// `#N` from the start marker
    pub number: Option<u32>,
    /// `(id: ...)` from the start marker
    pub id: Option<String>,
    pub rows: Vec<EventRow>,
}

impl HandSegment {
    fn open(marker: &str) -> Self {
        Self {
            number: parse_hand_number(marker),
            id: parse_hand_id(marker),
            rows: Vec::new(),
        }
    }

    /// Human readable label for error messages.
    pub fn label(&self) -> String {
        match (self.number, self.id.as_deref()) {
            (Some(n), Some(id)) => format!("hand #{} ({})", n, id),
            (Some(n), None) => format!("hand #{}", n),
            (None, Some(id)) => format!("hand {}", id),
            (None, None) => "hand".to_string(),
        }
    }
}

/// Groups rows into hands. Rows outside a start/end pair are dropped, as is a
/// dangling group left open by a missing end marker.
pub fn segment_hands(rows: &[EventRow], order: RowOrder) -> Vec<HandSegment> {
    let ordered: Box<dyn Iterator<Item = &EventRow>> = match order {
        RowOrder::Forward => Box::new(rows.iter()),
        RowOrder::Reversed => Box::new(rows.iter().rev()),
    };

    let mut hands = Vec::new();
    let mut current: Option<HandSegment> = None;
    for row in ordered {
        if row.description.starts_with(START_MARKER) {
            if let Some(dangling) = current.take() {
                debug!(
                    hand = %dangling.label(),
                    rows = dangling.rows.len(),
                    "dropping hand without end marker"
                );
            }
            current = Some(HandSegment::open(&row.description));
            continue;
        }
        if row.description.starts_with(END_MARKER) {
            match current.take() {
                Some(hand) => hands.push(hand),
                None => debug!(sequence_id = %row.sequence_id, "ignoring unmatched end marker"),
            }
            continue;
        }
        if let Some(hand) = current.as_mut() {
            hand.rows.push(row.clone());
        }
    }
    if let Some(dangling) = current {
        debug!(hand = %dangling.label(), "log ends inside an open hand");
    }
    hands
}

pub fn is_lifecycle_noise(row: &EventRow) -> bool {
    LIFECYCLE_NOISE
        .iter()
        .any(|token| row.description.contains(token))
}

/// Removes seat/approval bookkeeping rows that would shift the header rows.
pub fn strip_lifecycle_noise(rows: Vec<EventRow>) -> Vec<EventRow> {
    rows.into_iter().filter(|r| !is_lifecycle_noise(r)).collect()
}

fn parse_hand_number(marker: &str) -> Option<u32> {
    let rest = marker.split_once('#')?.1;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn parse_hand_id(marker: &str) -> Option<String> {
    let rest = marker.split_once("(id: ")?.1;
    let (id, _) = rest.split_once(')')?;
    Some(id.to_string())
}
