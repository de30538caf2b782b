//! Extraction of `(player, verb)` pairs from free-text event descriptions.
//!
//! Every position-based lookup into a description lives here, so a change in
//! the platform's wording is a one-module fix. Action rows look like:
//!
//! ```text
//! "Mo @ C2SGJZ5XJ6" raises to 2.50
//! ```
//!
//! The player token is the text between the leading quote and ` @`; the verb
//! is the first word after the closing quote, minus its trailing `s`.

use serde::{Deserialize, Serialize};

use crate::errors::ActionError;

/// Kind of a player action as written by the platform.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    /// Hole cards revealed at showdown
    Show,
    /// A mid-hand posting (straddle, missed blind)
    Post,
    /// Any verb the parser does not know about, kept verbatim
    Other(String),
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::Show => "show",
            ActionKind::Post => "post",
            ActionKind::Other(verb) => verb,
        }
    }

    /// True for the actions that put money in the pot by choice.
    pub fn is_voluntary(&self) -> bool {
        matches!(self, ActionKind::Bet | ActionKind::Call | ActionKind::Raise)
    }
}

impl From<&str> for ActionKind {
    fn from(verb: &str) -> Self {
        match verb {
            "fold" => ActionKind::Fold,
            "check" => ActionKind::Check,
            "call" => ActionKind::Call,
            "bet" => ActionKind::Bet,
            "raise" => ActionKind::Raise,
            "show" => ActionKind::Show,
            "post" => ActionKind::Post,
            other => ActionKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ActionKind {
    fn from(verb: String) -> Self {
        ActionKind::from(verb.as_str())
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single attributed action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub player: String,
    pub kind: ActionKind,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player: {}, Action: {}", self.player, self.kind)
    }
}

/// Returns the player token of a row starting with `"<player> @ <handle>"`.
pub fn parse_player(description: &str) -> Result<&str, ActionError> {
    let (head, _) = description
        .split_once(" @")
        .ok_or_else(|| ActionError::MissingPlayer(description.to_string()))?;
    head.strip_prefix('"')
        .ok_or_else(|| ActionError::MissingPlayer(description.to_string()))
}

/// Parses one action row.
///
/// Only call this on rows already known to be actions: header, street marker
/// and settlement rows do not follow the quoted-player shape.
pub fn parse_action(description: &str) -> Result<Action, ActionError> {
    let player = parse_player(description)?;
    let (_, rest) = description
        .split_once(" @")
        .ok_or_else(|| ActionError::MissingPlayer(description.to_string()))?;

    // rest: ` <handle>" <verb> ...`
    let clause = rest
        .split('"')
        .nth(1)
        .ok_or_else(|| ActionError::MissingClause(description.to_string()))?;
    let word = clause
        .split(' ')
        .nth(1)
        .ok_or_else(|| ActionError::MissingClause(description.to_string()))?;

    let verb = match word.char_indices().last() {
        Some((idx, _)) if idx > 0 => &word[..idx],
        _ => return Err(ActionError::EmptyVerb(description.to_string())),
    };

    Ok(Action {
        player: player.to_string(),
        kind: ActionKind::from(verb),
    })
}
