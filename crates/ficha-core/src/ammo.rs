use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// Arrows of each type a fresh character carries.
pub const DEFAULT_ARROWS: i32 = 3;

/// The four kinds of arrow a samurai archer carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowType {
    /// Willow-leaf arrow (`salgueiro`).
    WillowLeaf,
    /// Bowel-raker arrow (`rasgaEntranhas`).
    BowelRaker,
    /// Armour-piercer arrow (`perfuraArmadura`).
    ArmourPiercer,
    /// Humming-bulb arrow (`zunidora`).
    HummingBulb,
}

impl ArrowType {
    /// Every arrow type, in sheet order.
    pub const ALL: [ArrowType; 4] = [
        Self::WillowLeaf,
        Self::BowelRaker,
        Self::ArmourPiercer,
        Self::HummingBulb,
    ];

    /// The arrow's display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::WillowLeaf => "Willow-leaf",
            Self::BowelRaker => "Bowel-raker",
            Self::ArmourPiercer => "Armour-piercer",
            Self::HummingBulb => "Humming-bulb",
        }
    }
}

impl fmt::Display for ArrowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WillowLeaf => write!(f, "willow-leaf"),
            Self::BowelRaker => write!(f, "bowel-raker"),
            Self::ArmourPiercer => write!(f, "armour-piercer"),
            Self::HummingBulb => write!(f, "humming-bulb"),
        }
    }
}

impl FromStr for ArrowType {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match normalized.as_str() {
            "willow" | "willowleaf" | "salgueiro" => Ok(Self::WillowLeaf),
            "bowelraker" | "rasgaentranhas" => Ok(Self::BowelRaker),
            "armourpiercer" | "armorpiercer" | "perfuraarmadura" => Ok(Self::ArmourPiercer),
            "hummingbulb" | "humming" | "zunidora" => Ok(Self::HummingBulb),
            _ => Err(SheetError::UnknownArrow(s.trim().to_string())),
        }
    }
}

/// Remaining arrows of each type. Counters never drop below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ammunition {
    /// Willow-leaf arrows.
    #[serde(rename = "salgueiro")]
    pub willow_leaf: i32,
    /// Bowel-raker arrows.
    #[serde(rename = "rasgaEntranhas")]
    pub bowel_raker: i32,
    /// Armour-piercer arrows.
    #[serde(rename = "perfuraArmadura")]
    pub armour_piercer: i32,
    /// Humming-bulb arrows.
    #[serde(rename = "zunidora")]
    pub humming_bulb: i32,
}

impl Default for Ammunition {
    fn default() -> Self {
        Self {
            willow_leaf: DEFAULT_ARROWS,
            bowel_raker: DEFAULT_ARROWS,
            armour_piercer: DEFAULT_ARROWS,
            humming_bulb: DEFAULT_ARROWS,
        }
    }
}

impl Ammunition {
    /// Remaining arrows of one type.
    pub fn get(&self, arrow: ArrowType) -> i32 {
        match arrow {
            ArrowType::WillowLeaf => self.willow_leaf,
            ArrowType::BowelRaker => self.bowel_raker,
            ArrowType::ArmourPiercer => self.armour_piercer,
            ArrowType::HummingBulb => self.humming_bulb,
        }
    }

    pub(crate) fn slot_mut(&mut self, arrow: ArrowType) -> &mut i32 {
        match arrow {
            ArrowType::WillowLeaf => &mut self.willow_leaf,
            ArrowType::BowelRaker => &mut self.bowel_raker,
            ArrowType::ArmourPiercer => &mut self.armour_piercer,
            ArrowType::HummingBulb => &mut self.humming_bulb,
        }
    }
}
