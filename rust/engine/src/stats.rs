//! Per-player VPIP and PFR over a set of built hands.
//!
//! Counting and dividing are separate steps: [`MetricCounts`] can be merged
//! across files parsed in parallel, and only the final reduction turns them
//! into a [`MetricTable`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::ActionKind;
use crate::hand::{Hand, MAX_PLAYERS, MIN_PLAYERS};
use crate::logger::Street;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Voluntarily put money in pot: bet, call or raise on any street
    Vpip,
    /// Raised before the flop
    Pfr,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Vpip, Metric::Pfr];

    /// Whether `player` qualifies for this metric in `hand`.
    pub fn qualifies(self, hand: &Hand, player: &str) -> bool {
        match self {
            Metric::Vpip => hand
                .all_actions()
                .any(|a| a.player == player && a.kind.is_voluntary()),
            Metric::Pfr => hand
                .actions(Street::Preflop)
                .iter()
                .any(|a| a.player == player && a.kind == ActionKind::Raise),
        }
    }
}

/// Inclusive bounds on the number of seated players.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerFilter {
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for PlayerFilter {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}

impl PlayerFilter {
    pub fn new(min_players: usize, max_players: usize) -> Self {
        Self {
            min_players,
            max_players,
        }
    }

    pub fn accepts(&self, hand: &Hand) -> bool {
        hand.valid && (self.min_players..=self.max_players).contains(&hand.players.len())
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    /// Counted hands the player was seated in
    pub hands: u64,
    /// Of those, hands where the player qualified
    pub qualifying: u64,
}

impl Tally {
    pub fn rate(&self) -> Option<f64> {
        if self.hands == 0 {
            None
        } else {
            Some(self.qualifying as f64 / self.hands as f64)
        }
    }
}

/// Player name to rate. `None` marks a player with no counted hands.
pub type MetricTable = BTreeMap<String, Option<f64>>;

/// Raw per-player counters for one metric.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MetricCounts {
    pub metric: Metric,
    pub tallies: BTreeMap<String, Tally>,
}

impl MetricCounts {
    /// Zeroed counters for every roster name.
    pub fn seeded<'a>(metric: Metric, names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            metric,
            tallies: names
                .into_iter()
                .map(|n| (n.to_string(), Tally::default()))
                .collect(),
        }
    }

    /// Counts `hands`. With `open` set, players missing from the seeded
    /// names get their own counters; otherwise they are ignored.
    pub fn count<'h>(
        &mut self,
        hands: impl IntoIterator<Item = &'h Hand>,
        filter: &PlayerFilter,
        open: bool,
    ) {
        let metric = self.metric;
        for hand in hands.into_iter().filter(|h| filter.accepts(h)) {
            for player in &hand.players {
                if open && !self.tallies.contains_key(player) {
                    self.tallies.insert(player.clone(), Tally::default());
                }
                let Some(tally) = self.tallies.get_mut(player) else {
                    continue;
                };
                tally.hands += 1;
                if metric.qualifies(hand, player) {
                    tally.qualifying += 1;
                }
            }
        }
    }

    /// Sums another set of counters for the same metric into this one.
    pub fn merge(&mut self, other: MetricCounts) {
        debug_assert_eq!(self.metric, other.metric, "merging counters of different metrics");
        for (player, t) in other.tallies {
            let mine = self.tallies.entry(player).or_default();
            mine.hands += t.hands;
            mine.qualifying += t.qualifying;
        }
    }

    pub fn rates(&self) -> MetricTable {
        self.tallies
            .iter()
            .map(|(player, t)| (player.clone(), t.rate()))
            .collect()
    }
}

/// Convenience wrapper: VPIP for a fixed roster.
pub fn calculate_vpip<'a>(
    hands: &[Hand],
    roster: impl IntoIterator<Item = &'a str>,
    filter: &PlayerFilter,
) -> MetricTable {
    calculate(Metric::Vpip, hands, roster, filter)
}

/// Convenience wrapper: PFR for a fixed roster.
pub fn calculate_pfr<'a>(
    hands: &[Hand],
    roster: impl IntoIterator<Item = &'a str>,
    filter: &PlayerFilter,
) -> MetricTable {
    calculate(Metric::Pfr, hands, roster, filter)
}

fn calculate<'a>(
    metric: Metric,
    hands: &[Hand],
    roster: impl IntoIterator<Item = &'a str>,
    filter: &PlayerFilter,
) -> MetricTable {
    let mut counts = MetricCounts::seeded(metric, roster);
    counts.count(hands, filter, false);
    counts.rates()
}
