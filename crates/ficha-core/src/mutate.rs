//! Pure update operations.
//!
//! Each function borrows the current value and returns an updated copy.
//! Arguments are never modified in place.

use crate::ammo::ArrowType;
use crate::monster::{MonsterField, MonsterPatch, Roster};
use crate::record::AdventureRecord;
use crate::stats::Stat;

/// Replace one stat field. Any value is stored verbatim.
pub fn set_stat(record: &AdventureRecord, stat: Stat, value: i32) -> AdventureRecord {
    let mut next = record.clone();
    *next.stats.slot_mut(stat) = value;
    next
}

/// Add `delta` to one stat field. No clamping.
pub fn adjust_stat(record: &AdventureRecord, stat: Stat, delta: i32) -> AdventureRecord {
    let current = record.stats.get(stat);
    set_stat(record, stat, current.saturating_add(delta))
}

/// Replace one ammunition counter, clamped to zero.
pub fn set_ammunition(record: &AdventureRecord, arrow: ArrowType, value: i32) -> AdventureRecord {
    let mut next = record.clone();
    *next.ammunition.slot_mut(arrow) = value.max(0);
    next
}

/// Add `delta` to one ammunition counter, clamped to zero.
pub fn adjust_ammunition(
    record: &AdventureRecord,
    arrow: ArrowType,
    delta: i32,
) -> AdventureRecord {
    let current = record.ammunition.get(arrow);
    set_ammunition(record, arrow, current.saturating_add(delta))
}

/// Replace the honor score.
pub fn set_honor(record: &AdventureRecord, value: i32) -> AdventureRecord {
    AdventureRecord {
        honor: value,
        ..record.clone()
    }
}

/// Add `delta` to the honor score. Honor may go negative.
pub fn adjust_honor(record: &AdventureRecord, delta: i32) -> AdventureRecord {
    set_honor(record, record.honor.saturating_add(delta))
}

/// Add `delta` to supplies, never going below zero.
pub fn adjust_supplies(record: &AdventureRecord, delta: i32) -> AdventureRecord {
    AdventureRecord {
        supplies: record.supplies.saturating_add(delta).max(0),
        ..record.clone()
    }
}

/// Replace the skill name verbatim.
pub fn set_skill_name(record: &AdventureRecord, text: impl Into<String>) -> AdventureRecord {
    AdventureRecord {
        skill_name: text.into(),
        ..record.clone()
    }
}

/// Replace the notes verbatim.
pub fn set_notes(record: &AdventureRecord, text: impl Into<String>) -> AdventureRecord {
    AdventureRecord {
        notes: text.into(),
        ..record.clone()
    }
}

/// Merge `patch` into the entry whose identifier is `id`.
///
/// Every other slot keeps its value and position. An unknown `id` returns the
/// roster unchanged.
pub fn update_monster(roster: &Roster, id: &str, patch: &MonsterPatch) -> Roster {
    let mut next = roster.clone();
    for entry in next.entries_mut().iter_mut().filter(|m| m.id == id) {
        patch.apply_to(entry);
    }
    next
}

/// Add `delta` to one numeric field of the entry whose identifier is `id`.
pub fn adjust_monster(roster: &Roster, id: &str, field: MonsterField, delta: i32) -> Roster {
    let mut next = roster.clone();
    for entry in next.entries_mut().iter_mut().filter(|m| m.id == id) {
        let slot = entry.slot_mut(field);
        *slot = slot.saturating_add(delta);
    }
    next
}

/// The default record and roster.
///
/// Callers are expected to confirm with the user first and persist both
/// values afterwards.
pub fn reset() -> (AdventureRecord, Roster) {
    (AdventureRecord::default(), Roster::default())
}
