//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised inside the store. None of these reach callers of
/// [`RecordStore::load`](crate::RecordStore::load) or
/// [`RecordStore::save`](crate::RecordStore::save).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not read or write a key.
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        /// The key being accessed.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The stored text is not valid JSON for the expected shape.
    #[error("cannot decode stored value: {0}")]
    Decode(#[source] serde_json::Error),

    /// A value could not be serialized.
    #[error("cannot encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored record is valid JSON but not an object.
    #[error("stored record is not a JSON object")]
    NotAnObject,
}
