use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// One of the six numeric stat fields on the sheet.
///
/// Each attribute has a current value and an initial value. The initial value
/// is the starting maximum shown next to the current one; nothing ties the
/// two together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Current skill.
    Skill,
    /// Skill at the start of the adventure.
    SkillInitial,
    /// Current stamina.
    Stamina,
    /// Stamina at the start of the adventure.
    StaminaInitial,
    /// Current luck.
    Luck,
    /// Luck at the start of the adventure.
    LuckInitial,
}

impl Stat {
    /// Every stat, in sheet order.
    pub const ALL: [Stat; 6] = [
        Self::Skill,
        Self::SkillInitial,
        Self::Stamina,
        Self::StaminaInitial,
        Self::Luck,
        Self::LuckInitial,
    ];

    /// The stat's display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Skill => "Skill",
            Self::SkillInitial => "Initial Skill",
            Self::Stamina => "Stamina",
            Self::StaminaInitial => "Initial Stamina",
            Self::Luck => "Luck",
            Self::LuckInitial => "Initial Luck",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skill => write!(f, "skill"),
            Self::SkillInitial => write!(f, "skill-initial"),
            Self::Stamina => write!(f, "stamina"),
            Self::StaminaInitial => write!(f, "stamina-initial"),
            Self::Luck => write!(f, "luck"),
            Self::LuckInitial => write!(f, "luck-initial"),
        }
    }
}

impl FromStr for Stat {
    type Err = SheetError;

    /// Accepts the English names (`skill`, `stamina-initial`, ...) as well as
    /// the persisted field names (`habilidade`, `energiaInicial`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match normalized.as_str() {
            "skill" | "habilidade" => Ok(Self::Skill),
            "skillinitial" | "initialskill" | "habilidadeinicial" => Ok(Self::SkillInitial),
            "stamina" | "energia" => Ok(Self::Stamina),
            "staminainitial" | "initialstamina" | "energiainicial" => Ok(Self::StaminaInitial),
            "luck" | "sorte" => Ok(Self::Luck),
            "luckinitial" | "initialluck" | "sorteinicial" => Ok(Self::LuckInitial),
            _ => Err(SheetError::UnknownStat(s.trim().to_string())),
        }
    }
}

/// Current and initial values for skill, stamina and luck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterStats {
    /// Current skill.
    #[serde(rename = "habilidade")]
    pub skill: i32,
    /// Initial skill.
    #[serde(rename = "habilidadeInicial")]
    pub skill_initial: i32,
    /// Current stamina.
    #[serde(rename = "energia")]
    pub stamina: i32,
    /// Initial stamina.
    #[serde(rename = "energiaInicial")]
    pub stamina_initial: i32,
    /// Current luck.
    #[serde(rename = "sorte")]
    pub luck: i32,
    /// Initial luck.
    #[serde(rename = "sorteInicial")]
    pub luck_initial: i32,
}

impl CharacterStats {
    /// Read one stat field.
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Skill => self.skill,
            Stat::SkillInitial => self.skill_initial,
            Stat::Stamina => self.stamina,
            Stat::StaminaInitial => self.stamina_initial,
            Stat::Luck => self.luck,
            Stat::LuckInitial => self.luck_initial,
        }
    }

    pub(crate) fn slot_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Skill => &mut self.skill,
            Stat::SkillInitial => &mut self.skill_initial,
            Stat::Stamina => &mut self.stamina,
            Stat::StaminaInitial => &mut self.stamina_initial,
            Stat::Luck => &mut self.luck,
            Stat::LuckInitial => &mut self.luck_initial,
        }
    }
}
