/// Alias for `Result<T, SheetError>`.
pub type SheetResult<T> = Result<T, SheetError>;

/// Errors raised when user-facing names cannot be resolved to sheet fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    /// The name does not match any of the six stat fields.
    #[error("unknown stat: \"{0}\"")]
    UnknownStat(String),

    /// The name does not match any arrow type.
    #[error("unknown arrow type: \"{0}\"")]
    UnknownArrow(String),

    /// The name does not match a numeric monster field.
    #[error("unknown monster field: \"{0}\"")]
    UnknownMonsterField(String),
}
