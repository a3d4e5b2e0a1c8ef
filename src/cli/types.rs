use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    ///
    /// Returned when an argument does not match the expected format, such
    /// as a malformed user entry.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The user store rejected a change.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either the text to print
/// or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;
