//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.
//!
//! ## Batch Validation Errors
//!
//! The `BatchValidationError<T>` type provides a reusable pattern for commands
//! that process multiple items and need to collect errors with context. The
//! `stats` and `hands` commands use it to report unreadable log files and
//! hands that failed to build without aborting the whole run.

use std::fmt;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Log or roster parsing error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<handlog_engine::errors::LogError> for CliError {
    fn from(error: handlog_engine::errors::LogError) -> Self {
        match error {
            handlog_engine::errors::LogError::Io(e) => CliError::Io(e),
            other => CliError::Engine(other.to_string()),
        }
    }
}

// Conversion from String to CliError (for engine errors)
impl From<String> for CliError {
    fn from(error: String) -> Self {
        CliError::Engine(error)
    }
}

// Conversion from &str to CliError (for convenience)
impl From<&str> for CliError {
    fn from(error: &str) -> Self {
        CliError::Engine(error.to_string())
    }
}

/// Generic error type for batch validation operations.
///
/// Used by commands that process multiple items and need to collect errors
/// with context for user-friendly error reporting. Each error tracks the item
/// that failed and a descriptive error message.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item (e.g., `usize` for index,
///   `String` for file path, etc.). Must implement `Display` for error formatting.
///
/// # Examples
///
/// ```rust
/// use handlog_cli::BatchValidationError;
///
/// // Hand failure (by hand label)
/// let error = BatchValidationError {
///     item_context: "hand #12 (k9x)".to_string(),
///     message: "unknown player alias `zed`".to_string(),
/// };
/// assert_eq!(error.to_string(), "hand #12 (k9x): unknown player alias `zed`");
///
/// // File failure (by path)
/// let error = BatchValidationError {
///     item_context: "logs/game.csv".to_string(),
///     message: "malformed log record".to_string(),
/// };
/// assert_eq!(error.to_string(), "logs/game.csv: malformed log record");
/// ```
#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
