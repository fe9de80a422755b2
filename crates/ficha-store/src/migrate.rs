//! Schema migrations for persisted adventure records.
//!
//! A record's `schemaVersion` tag says which shape it was written in.
//! Records written before the tag existed count as version 1. At load time
//! every step whose `from` version is at or above the record's version runs
//! in order, then the tag is bumped to [`SCHEMA_VERSION`]. Steps must be
//! idempotent: running one on a record that already has the new shape
//! leaves it unchanged.

use serde_json::{Map, Value, json};

use ficha_core::ammo::DEFAULT_ARROWS;

/// The shape the current code reads and writes.
pub const SCHEMA_VERSION: u32 = 2;

/// Field carrying the schema version in a persisted record.
pub const VERSION_KEY: &str = "schemaVersion";

/// Version assumed for records that carry no tag.
pub const UNTAGGED_VERSION: u32 = 1;

/// A single upgrade step.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    /// The version this step upgrades from.
    pub from: u32,
    /// Short name used in logs.
    pub name: &'static str,
    /// Rewrites the record object in place.
    pub apply: fn(&mut Map<String, Value>),
}

/// All steps, ordered by `from`.
pub const MIGRATIONS: &[Migration] = &[Migration {
    from: 1,
    name: "inject_default_ammunition",
    apply: inject_default_ammunition,
}];

/// The version a persisted record declares.
pub fn schema_version(record: &Map<String, Value>) -> u32 {
    record
        .get(VERSION_KEY)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(UNTAGGED_VERSION)
}

/// Bring `record` up to [`SCHEMA_VERSION`]. Returns the names of the steps
/// that ran.
///
/// Records tagged with a newer version than this build knows are left as
/// they are.
pub fn migrate(record: &mut Map<String, Value>) -> Vec<&'static str> {
    let found = schema_version(record);
    if found >= SCHEMA_VERSION {
        return Vec::new();
    }

    let mut applied = Vec::new();
    for step in MIGRATIONS.iter().filter(|m| m.from >= found) {
        (step.apply)(record);
        applied.push(step.name);
    }
    record.insert(VERSION_KEY.to_string(), Value::from(SCHEMA_VERSION));
    applied
}

/// v1 → v2: records written before archery existed get three arrows of
/// each type.
fn inject_default_ammunition(record: &mut Map<String, Value>) {
    let present = record.get("flechas").is_some_and(Value::is_object);
    if !present {
        record.insert(
            "flechas".to_string(),
            json!({
                "salgueiro": DEFAULT_ARROWS,
                "rasgaEntranhas": DEFAULT_ARROWS,
                "perfuraArmadura": DEFAULT_ARROWS,
                "zunidora": DEFAULT_ARROWS,
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn legacy_record() -> Map<String, Value> {
        object(json!({
            "stats": {
                "habilidade": 9, "habilidadeInicial": 11,
                "energia": 14, "energiaInicial": 20,
                "sorte": 7, "sorteInicial": 9
            },
            "pericia": "Kyujutsu",
            "honra": 2,
            "provisoes": 6,
            "notas": "Met the ronin at the bridge"
        }))
    }

    #[test]
    fn untagged_is_version_one() {
        assert_eq!(schema_version(&legacy_record()), 1);
    }

    #[test]
    fn steps_are_ordered_and_below_current() {
        let mut last = 0;
        for step in MIGRATIONS {
            assert!(step.from > last);
            assert!(step.from < SCHEMA_VERSION);
            last = step.from;
        }
    }

    #[test]
    fn legacy_record_gains_ammunition() {
        let mut record = legacy_record();
        let applied = migrate(&mut record);
        assert_eq!(applied, vec!["inject_default_ammunition"]);
        assert_eq!(
            record["flechas"],
            json!({"salgueiro": 3, "rasgaEntranhas": 3, "perfuraArmadura": 3, "zunidora": 3})
        );
        assert_eq!(schema_version(&record), SCHEMA_VERSION);
        assert_eq!(record["pericia"], json!("Kyujutsu"));
        assert_eq!(record["provisoes"], json!(6));
    }

    #[test]
    fn existing_ammunition_is_kept() {
        let mut record = legacy_record();
        record.insert(
            "flechas".to_string(),
            json!({"salgueiro": 0, "rasgaEntranhas": 1, "perfuraArmadura": 2, "zunidora": 5}),
        );
        migrate(&mut record);
        assert_eq!(record["flechas"]["zunidora"], json!(5));
        assert_eq!(record["flechas"]["salgueiro"], json!(0));
    }

    #[test]
    fn null_ammunition_is_replaced() {
        let mut record = legacy_record();
        record.insert("flechas".to_string(), Value::Null);
        migrate(&mut record);
        assert_eq!(record["flechas"]["salgueiro"], json!(3));
    }

    #[test]
    fn current_record_is_untouched() {
        let mut record = legacy_record();
        migrate(&mut record);
        let snapshot = record.clone();
        assert!(migrate(&mut record).is_empty());
        assert_eq!(record, snapshot);
    }

    #[test]
    fn steps_are_idempotent() {
        for step in MIGRATIONS {
            let mut once = legacy_record();
            (step.apply)(&mut once);
            let mut twice = once.clone();
            (step.apply)(&mut twice);
            assert_eq!(once, twice, "step {} is not idempotent", step.name);
        }
    }

    #[test]
    fn newer_version_left_alone() {
        let mut record = legacy_record();
        record.insert(VERSION_KEY.to_string(), json!(99));
        assert!(migrate(&mut record).is_empty());
        assert!(!record.contains_key("flechas"));
        assert_eq!(schema_version(&record), 99);
    }
}
