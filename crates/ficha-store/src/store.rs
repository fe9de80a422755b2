//! The fail-soft record store.

use tracing::{debug, warn};

use ficha_core::{AdventureRecord, Roster};

use crate::backend::KeyValueStore;
use crate::codec;
use crate::config::StoreConfig;
use crate::error::StoreResult;

/// Bridges the in-memory record and roster to a [`KeyValueStore`].
///
/// `load*` never fail: absent or unreadable values come back as defaults.
/// `save*` never fail either: write errors are logged and dropped. The
/// `try_*` variants expose the underlying results.
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    backend: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// A store using the default keys.
    pub fn new(backend: S) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    /// A store using custom keys.
    pub fn with_config(backend: S, config: StoreConfig) -> Self {
        Self { backend, config }
    }

    /// Load the adventure record, falling back to the default.
    pub fn load(&self) -> AdventureRecord {
        let key = &self.config.record_key;
        match self.try_load() {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(key = %key, "no stored record, starting fresh");
                AdventureRecord::default()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "stored record unreadable, using defaults");
                AdventureRecord::default()
            }
        }
    }

    /// Load the adventure record. `Ok(None)` if nothing was stored.
    pub fn try_load(&self) -> StoreResult<Option<AdventureRecord>> {
        match self.backend.get(&self.config.record_key)? {
            Some(text) => codec::decode_record(&text).map(Some),
            None => Ok(None),
        }
    }

    /// Load the monster roster, falling back to twelve blank slots.
    pub fn load_roster(&self) -> Roster {
        let key = &self.config.roster_key;
        match self.try_load_roster() {
            Ok(Some(roster)) => roster,
            Ok(None) => {
                debug!(key = %key, "no stored roster, starting fresh");
                Roster::default()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "stored roster unreadable, using defaults");
                Roster::default()
            }
        }
    }

    /// Load the monster roster. `Ok(None)` if nothing was stored.
    pub fn try_load_roster(&self) -> StoreResult<Option<Roster>> {
        match self.backend.get(&self.config.roster_key)? {
            Some(text) => codec::decode_roster(&text).map(Some),
            None => Ok(None),
        }
    }

    /// Persist the whole record. Failures are logged, not returned.
    pub fn save(&mut self, record: &AdventureRecord) {
        if let Err(e) = self.try_save(record) {
            warn!(key = %self.config.record_key, error = %e, "failed to save record");
        }
    }

    /// Persist the whole record.
    pub fn try_save(&mut self, record: &AdventureRecord) -> StoreResult<()> {
        let text = codec::encode_record(record)?;
        self.backend.set(&self.config.record_key, &text)
    }

    /// Persist the whole roster. Failures are logged, not returned.
    pub fn save_roster(&mut self, roster: &Roster) {
        if let Err(e) = self.try_save_roster(roster) {
            warn!(key = %self.config.roster_key, error = %e, "failed to save roster");
        }
    }

    /// Persist the whole roster.
    pub fn try_save_roster(&mut self, roster: &Roster) -> StoreResult<()> {
        let text = codec::encode_roster(roster)?;
        self.backend.set(&self.config.roster_key, &text)
    }
}
