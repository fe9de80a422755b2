//! Text encoding of the persisted aggregates.

use serde_json::{Map, Value};
use tracing::{info, warn};

use ficha_core::{AdventureRecord, Roster};

use crate::error::{StoreError, StoreResult};
use crate::migrate::{self, SCHEMA_VERSION, VERSION_KEY};

/// Encode a record as JSON tagged with the current schema version.
pub fn encode_record(record: &AdventureRecord) -> StoreResult<String> {
    let mut value = serde_json::to_value(record).map_err(StoreError::Encode)?;
    let Value::Object(ref mut fields) = value else {
        return Err(StoreError::NotAnObject);
    };
    fields.insert(VERSION_KEY.to_string(), Value::from(SCHEMA_VERSION));
    serde_json::to_string(&value).map_err(StoreError::Encode)
}

/// Decode a record, running migrations for older schema versions.
///
/// A top-level field that cannot be read as its type is dropped and takes
/// its default, so one bad field does not cost the rest of the sheet.
pub fn decode_record(text: &str) -> StoreResult<AdventureRecord> {
    let value: Value = serde_json::from_str(text).map_err(StoreError::Decode)?;
    let Value::Object(mut fields) = value else {
        return Err(StoreError::NotAnObject);
    };
    let applied = migrate::migrate(&mut fields);
    if !applied.is_empty() {
        info!(steps = ?applied, "migrated stored record");
    }
    for field in drop_unreadable_fields(&mut fields) {
        warn!(field = %field, "stored field unreadable, using its default");
    }
    serde_json::from_value(Value::Object(fields)).map_err(StoreError::Decode)
}

/// Remove the fields a record cannot be decoded from on their own. Returns
/// their names.
fn drop_unreadable_fields(fields: &mut Map<String, Value>) -> Vec<String> {
    let unreadable: Vec<String> = fields
        .iter()
        .filter(|(key, value)| {
            let single: Map<String, Value> =
                [((*key).clone(), (*value).clone())].into_iter().collect();
            serde_json::from_value::<AdventureRecord>(Value::Object(single)).is_err()
        })
        .map(|(key, _)| key.clone())
        .collect();
    for key in &unreadable {
        fields.remove(key);
    }
    unreadable
}

/// Encode the roster as a JSON array.
pub fn encode_roster(roster: &Roster) -> StoreResult<String> {
    serde_json::to_string(roster).map_err(StoreError::Encode)
}

/// Decode a roster. Anything other than an array of exactly twelve entries
/// is rejected.
pub fn decode_roster(text: &str) -> StoreResult<Roster> {
    serde_json::from_str(text).map_err(StoreError::Decode)
}
