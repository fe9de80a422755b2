//! Storage keys for the two aggregates.

/// Key under which the adventure record is stored.
pub const RECORD_KEY: &str = "samurai_adventure_data";

/// Key under which the monster roster is stored.
pub const ROSTER_KEY: &str = "samurai_monsters";

/// Which keys the store reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key for the adventure record.
    pub record_key: String,
    /// Key for the monster roster.
    pub roster_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            record_key: RECORD_KEY.to_string(),
            roster_key: ROSTER_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Set the record key.
    pub fn with_record_key(mut self, key: impl Into<String>) -> Self {
        self.record_key = key.into();
        self
    }

    /// Set the roster key.
    pub fn with_roster_key(mut self, key: impl Into<String>) -> Self {
        self.roster_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.record_key, "samurai_adventure_data");
        assert_eq!(cfg.roster_key, "samurai_monsters");
    }

    #[test]
    fn builder_methods() {
        let cfg = StoreConfig::default()
            .with_record_key("sheet")
            .with_roster_key("foes");
        assert_eq!(cfg.record_key, "sheet");
        assert_eq!(cfg.roster_key, "foes");
    }
}
