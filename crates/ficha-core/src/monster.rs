use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// Number of slots in the encounter roster.
pub const ROSTER_SIZE: usize = 12;

/// One slot in the encounter roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterEntry {
    /// Stable identifier, assigned when the roster is created.
    pub id: String,
    /// The opponent's name. Empty for an unused slot.
    #[serde(rename = "nome", default)]
    pub name: String,
    /// The opponent's skill.
    #[serde(rename = "habilidade", default)]
    pub skill: i32,
    /// The opponent's stamina.
    #[serde(rename = "energia", default)]
    pub stamina: i32,
}

impl MonsterEntry {
    /// The identifier given to the slot at `index`.
    pub fn slot_id(index: usize) -> String {
        format!("monster-{index}")
    }

    /// An empty slot with zero stats.
    pub fn blank(index: usize) -> Self {
        Self {
            id: Self::slot_id(index),
            name: String::new(),
            skill: 0,
            stamina: 0,
        }
    }

    /// Whether anything has been written into this slot.
    pub fn is_used(&self) -> bool {
        !self.name.is_empty() || self.skill != 0 || self.stamina != 0
    }

    /// Read a numeric field.
    pub fn get(&self, field: MonsterField) -> i32 {
        match field {
            MonsterField::Skill => self.skill,
            MonsterField::Stamina => self.stamina,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: MonsterField) -> &mut i32 {
        match field {
            MonsterField::Skill => &mut self.skill,
            MonsterField::Stamina => &mut self.stamina,
        }
    }
}

/// A numeric field on a monster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterField {
    /// The monster's skill.
    Skill,
    /// The monster's stamina.
    Stamina,
}

impl fmt::Display for MonsterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skill => write!(f, "skill"),
            Self::Stamina => write!(f, "stamina"),
        }
    }
}

impl FromStr for MonsterField {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skill" | "habilidade" => Ok(Self::Skill),
            "stamina" | "energia" => Ok(Self::Stamina),
            _ => Err(SheetError::UnknownMonsterField(s.trim().to_string())),
        }
    }
}

/// A partial update to a monster entry. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement skill.
    pub skill: Option<i32>,
    /// Replacement stamina.
    pub stamina: Option<i32>,
}

impl MonsterPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the skill.
    pub fn with_skill(mut self, skill: i32) -> Self {
        self.skill = Some(skill);
        self
    }

    /// Set the stamina.
    pub fn with_stamina(mut self, stamina: i32) -> Self {
        self.stamina = Some(stamina);
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.skill.is_none() && self.stamina.is_none()
    }

    pub(crate) fn apply_to(&self, entry: &mut MonsterEntry) {
        if let Some(ref name) = self.name {
            entry.name.clone_from(name);
        }
        if let Some(skill) = self.skill {
            entry.skill = skill;
        }
        if let Some(stamina) = self.stamina {
            entry.stamina = stamina;
        }
    }
}

/// The fixed twelve-slot encounter roster.
///
/// The length is part of the type, so a persisted roster with any other
/// number of entries fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster([MonsterEntry; ROSTER_SIZE]);

impl Default for Roster {
    fn default() -> Self {
        Self(std::array::from_fn(MonsterEntry::blank))
    }
}

impl Roster {
    /// A fresh roster of blank slots `monster-0` .. `monster-11`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over slots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, MonsterEntry> {
        self.0.iter()
    }

    /// The slot at `index`, if in range.
    pub fn slot(&self, index: usize) -> Option<&MonsterEntry> {
        self.0.get(index)
    }

    /// Find a slot by identifier.
    pub fn get(&self, id: &str) -> Option<&MonsterEntry> {
        self.0.iter().find(|m| m.id == id)
    }

    /// Resolve user input to a slot: an exact identifier, or a slot index.
    pub fn resolve(&self, token: &str) -> Option<&MonsterEntry> {
        let token = token.trim();
        self.get(token)
            .or_else(|| token.parse::<usize>().ok().and_then(|i| self.slot(i)))
    }

    /// Number of slots that hold an opponent.
    pub fn used(&self) -> usize {
        self.0.iter().filter(|m| m.is_used()).count()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [MonsterEntry] {
        &mut self.0
    }
}
