use serde::{Deserialize, Serialize};

use crate::ammo::Ammunition;
use crate::stats::CharacterStats;

/// Supplies a fresh character starts with.
pub const DEFAULT_SUPPLIES: i32 = 10;

/// The character-sheet aggregate.
///
/// Fields missing from a persisted record fall back to their defaults when
/// decoded, so a partially written sheet still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdventureRecord {
    /// Skill, stamina and luck.
    pub stats: CharacterStats,
    /// The character's declared proficiency (e.g. "Iaijutsu").
    #[serde(rename = "pericia")]
    pub skill_name: String,
    /// Honor score. Signed and unbounded.
    #[serde(rename = "honra")]
    pub honor: i32,
    /// Provisions left. Never driven below zero by adjustment.
    #[serde(rename = "provisoes")]
    pub supplies: i32,
    /// Free-form notes and inventory.
    #[serde(rename = "notas")]
    pub notes: String,
    /// Arrows remaining.
    #[serde(rename = "flechas")]
    pub ammunition: Ammunition,
}

impl Default for AdventureRecord {
    fn default() -> Self {
        Self {
            stats: CharacterStats::default(),
            skill_name: String::new(),
            honor: 0,
            supplies: DEFAULT_SUPPLIES,
            notes: String::new(),
            ammunition: Ammunition::default(),
        }
    }
}
