//! Canonical player names and their log aliases.
//!
//! The roster file is a JSON object mapping each canonical name to the
//! screen names it has used:
//!
//! ```json
//! { "George": ["George", "G-man"], "Mo": ["Mo", "mo2"] }
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;

use crate::errors::{LogError, RosterError};
use crate::event::EventRow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRoster {
    players: BTreeMap<String, BTreeSet<String>>,
    by_alias: HashMap<String, String>,
}

impl PlayerRoster {
    /// Builds a roster. Canonical names are implicitly their own aliases.
    pub fn new<I, A>(entries: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = (String, A)>,
        A: IntoIterator<Item = String>,
    {
        let mut roster = PlayerRoster::default();
        for (canonical, aliases) in entries {
            let mut set: BTreeSet<String> = aliases.into_iter().collect();
            set.insert(canonical.clone());
            for alias in &set {
                match roster.by_alias.get(alias) {
                    Some(first) if first != &canonical => {
                        return Err(RosterError::DuplicateAlias {
                            alias: alias.clone(),
                            first: first.clone(),
                            second: canonical,
                        });
                    }
                    _ => {}
                }
                roster.by_alias.insert(alias.clone(), canonical.clone());
            }
            roster.players.entry(canonical).or_default().extend(set);
        }
        Ok(roster)
    }

    pub fn from_json<R: Read>(reader: R) -> Result<Self, LogError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Ok(PlayerRoster::new(raw)?)
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Canonical names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.keys().map(String::as_str)
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.players.contains_key(canonical)
    }

    pub fn aliases(&self, canonical: &str) -> Option<&BTreeSet<String>> {
        self.players.get(canonical)
    }

    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.by_alias.get(alias).map(String::as_str)
    }

    /// Rewrites every quoted `"<alias> @ <handle>"` segment of `description`
    /// to use the canonical name. Text outside those segments is untouched.
    pub fn normalize(&self, description: &str) -> Result<String, RosterError> {
        let mut out = String::with_capacity(description.len());
        let mut rest = description;
        while let Some(open) = rest.find('"') {
            let (before, after_quote) = rest.split_at(open + 1);
            out.push_str(before);
            let alias_end = after_quote
                .find(" @")
                .filter(|&at| !after_quote[..at].contains('"'));
            match alias_end {
                Some(at) => {
                    let alias = &after_quote[..at];
                    let canonical = self
                        .resolve(alias)
                        .ok_or_else(|| RosterError::UnknownAlias {
                            alias: alias.to_string(),
                        })?;
                    out.push_str(canonical);
                    // skip past the closing quote of the segment
                    let tail = &after_quote[at..];
                    let close = tail.find('"').map_or(tail.len(), |c| c + 1);
                    out.push_str(&tail[..close]);
                    rest = &tail[close..];
                }
                None => rest = after_quote,
            }
        }
        out.push_str(rest);
        Ok(out)
    }

    pub fn normalize_row(&self, row: &EventRow) -> Result<EventRow, RosterError> {
        Ok(EventRow {
            description: self.normalize(&row.description)?,
            ..row.clone()
        })
    }
}
