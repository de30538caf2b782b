//! One log file in, built hands and per-hand failures out.

use serde::Serialize;
use tracing::debug;

use crate::errors::{HandError, RosterError};
use crate::event::EventRow;
use crate::hand::Hand;
use crate::roster::PlayerRoster;
use crate::segment::{segment_hands, strip_lifecycle_noise, HandSegment, RowOrder};

/// Why a single hand was not built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandFailureKind {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Hand(#[from] HandError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandFailure {
    pub number: Option<u32>,
    pub hand_id: Option<String>,
    pub label: String,
    #[serde(serialize_with = "serialize_display")]
    pub kind: HandFailureKind,
}

impl std::fmt::Display for HandFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.kind)
    }
}

fn serialize_display<S: serde::Serializer>(
    kind: &HandFailureKind,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_str(kind)
}

/// A hand that built successfully, with its start-marker context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHand {
    pub number: Option<u32>,
    pub hand_id: Option<String>,
    pub hand: Hand,
}

/// Outcome of parsing one log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogReport {
    /// Valid hands, in chronological order
    pub hands: Vec<ParsedHand>,
    /// Hands flagged invalid by their header (no small blind row)
    pub skipped: usize,
    pub failures: Vec<HandFailure>,
}

impl LogReport {
    pub fn valid_hands(&self) -> impl Iterator<Item = &Hand> {
        self.hands.iter().map(|p| &p.hand)
    }
}

/// Segments `rows`, normalizes aliases, strips lifecycle noise and builds
/// every hand. Failures are collected per hand; parsing continues.
pub fn parse_log(rows: &[EventRow], roster: Option<&PlayerRoster>) -> LogReport {
    let order = RowOrder::detect(rows);
    let mut report = LogReport::default();
    for segment in segment_hands(rows, order) {
        match build_segment(&segment, roster) {
            Ok(hand) if hand.valid => report.hands.push(ParsedHand {
                number: segment.number,
                hand_id: segment.id.clone(),
                hand,
            }),
            Ok(_) => {
                debug!(hand = %segment.label(), "header has no small blind, skipping");
                report.skipped += 1;
            }
            Err(kind) => {
                let failure = HandFailure {
                    number: segment.number,
                    hand_id: segment.id.clone(),
                    label: segment.label(),
                    kind,
                };
                debug!(%failure, "hand not built");
                report.failures.push(failure);
            }
        }
    }
    report
}

fn build_segment(
    segment: &HandSegment,
    roster: Option<&PlayerRoster>,
) -> Result<Hand, HandFailureKind> {
    let rows = match roster {
        Some(roster) => segment
            .rows
            .iter()
            .map(|r| roster.normalize_row(r))
            .collect::<Result<Vec<_>, _>>()?,
        None => segment.rows.clone(),
    };
    Ok(Hand::build(&strip_lifecycle_noise(rows))?)
}
