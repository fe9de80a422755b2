//! Persistence for Ficha.
//!
//! Two aggregates live in a key-value store: the adventure record and the
//! monster roster. Loading never fails from the caller's point of view: a
//! missing or corrupt value is replaced by the default. Saving is
//! best-effort; failures are logged and swallowed.
//!
//! Persisted records carry a `schemaVersion` tag. Older records are brought
//! up to date by an ordered list of migration steps when they are loaded.

pub mod backend;
pub mod codec;
pub mod config;
pub mod error;
pub mod migrate;
pub mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use config::{RECORD_KEY, ROSTER_KEY, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use migrate::SCHEMA_VERSION;
pub use store::RecordStore;
