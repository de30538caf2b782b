use thiserror::Error;

/// Failure to read an action out of a free-text event description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("no quoted player segment in `{0}`")]
    MissingPlayer(String),
    #[error("no quoted action clause in `{0}`")]
    MissingClause(String),
    #[error("empty action verb in `{0}`")]
    EmptyVerb(String),
}

/// Hard validation failures that abort building a single hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("hand has {found} row(s), expected at least 3 header rows")]
    MissingHeader { found: usize },
    #[error("first row is not a stack announcement: `{0}`")]
    MissingStacks(String),
    #[error("third row is not a big blind posting: `{0}`")]
    MissingBigBlind(String),
    #[error("stack row lists {found} player(s), expected 2 to 10")]
    PlayerCount { found: usize },
    #[error("blind poster {player} is not seated")]
    BlindNotSeated { player: String },
    #[error("expected big blind {expected} after small blind, found {found}")]
    SeatingMismatch { expected: String, found: String },
    #[error("row {sequence_id}: {source}")]
    Action {
        sequence_id: String,
        #[source]
        source: ActionError,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("unknown player alias `{alias}`")]
    UnknownAlias { alias: String },
    #[error("alias `{alias}` is claimed by both {first} and {second}")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },
}

/// Errors raised while reading a raw log or roster file.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed log record: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed roster: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Roster(#[from] RosterError),
}
