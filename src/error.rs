//! Error types for command dispatch.

use thiserror::Error;

/// Errors surfaced while dispatching a command line.
///
/// Resolution and registry operations never fail; only flag parsing,
/// handler execution and output can produce one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// The first token matched no command name or alias under the root.
    #[error("Command not found: {0}")]
    UnknownCommand(String),

    /// The leftover tokens did not parse against the command's flag set.
    /// `message` is the flag set's buffered error output.
    #[error("{command}: {message}")]
    FlagParse { command: String, message: String },

    /// The command handler returned an error.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),

    /// Writing command output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, Error>;
