//! # handlog-engine: Poker Log Reconstruction Core
//!
//! Rebuilds structured poker hands from a platform's raw event log (one CSV
//! row per game event) and computes per-player VPIP / PFR from them.
//!
//! ## Core Modules
//!
//! - [`event`] - Raw log rows and CSV reading
//! - [`segment`] - Hand boundaries and lifecycle-noise filtering
//! - [`action`] - Player/verb extraction from event descriptions
//! - [`hand`] - Header validation, seating order and street bucketing
//! - [`roster`] - Canonical player names and alias normalization
//! - [`pipeline`] - Per-file parsing with per-hand failure collection
//! - [`stats`] - VPIP / PFR counting, merging and rates
//! - [`logger`] - Street definitions and JSONL hand export
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use handlog_engine::event::EventRow;
//! use handlog_engine::hand::Hand;
//!
//! let rows: Vec<EventRow> = [
//!     r#"Player stacks: #1 "George @ ZuSk" (114.14) | #4 "Mo @ C2SG" (172.60) | #8 "Connor @ UZnS" (221.00)"#,
//!     r#""Mo @ C2SG" posts a small blind of 0.50"#,
//!     r#""Connor @ UZnS" posts a big blind of 1.00"#,
//!     r#""George @ ZuSk" folds"#,
//! ]
//! .iter()
//! .map(|d| EventRow::new(*d, "2023-10-03T05:12:09.521Z", "1"))
//! .collect();
//!
//! let hand = Hand::build(&rows).unwrap();
//! assert_eq!(hand.players, ["George", "Mo", "Connor"]);
//! assert_eq!(hand.button(), Some("George"));
//! ```
//!
//! ## Statistics
//!
//! ```rust
//! use handlog_engine::stats::{calculate_vpip, PlayerFilter};
//!
//! let vpip = calculate_vpip(&[], ["Mo"], &PlayerFilter::default());
//! // no counted hands: the rate is undefined rather than NaN
//! assert_eq!(vpip["Mo"], None);
//! ```

pub mod action;
pub mod errors;
pub mod event;
pub mod hand;
pub mod logger;
pub mod pipeline;
pub mod roster;
pub mod segment;
pub mod stats;
