//! Error types for the adventure session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors reported back to the player for a command they typed.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The command word is not recognised.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command is missing arguments.
    #[error("{0}")]
    Usage(String),

    /// No roster slot matches the given id or index.
    #[error("no monster slot '{0}'")]
    UnknownMonster(String),

    /// A reset needs a confirmation prompt the interpreter cannot show.
    #[error("reset needs confirmation; use the reset command of your frontend")]
    ConfirmationRequired,

    /// A stat, arrow or field name did not resolve.
    #[error(transparent)]
    Sheet(#[from] ficha_core::SheetError),
}
