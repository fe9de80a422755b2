//! Core types for Ficha: the adventure record, the monster roster, and the
//! pure mutation API over them.
//!
//! Nothing in this crate touches storage. Every mutation takes the current
//! value by reference and returns a new one, so the caller decides when the
//! result is persisted.

/// Archery ammunition inventory.
pub mod ammo;
/// Error types used throughout the crate.
pub mod error;
/// Coercion of free-form numeric text entry.
pub mod input;
/// Monster roster slots and partial updates.
pub mod monster;
/// Pure update operations over records and rosters.
pub mod mutate;
/// The character-sheet aggregate.
pub mod record;
/// Skill, stamina and luck scores.
pub mod stats;

/// Re-export ammunition types.
pub use ammo::{Ammunition, ArrowType};
/// Re-export error types.
pub use error::{SheetError, SheetResult};
/// Re-export the numeric coercion rule.
pub use input::parse_int_or_zero;
/// Re-export roster types.
pub use monster::{MonsterEntry, MonsterField, MonsterPatch, ROSTER_SIZE, Roster};
/// Re-export the record aggregate.
pub use record::AdventureRecord;
/// Re-export stat types.
pub use stats::{CharacterStats, Stat};
