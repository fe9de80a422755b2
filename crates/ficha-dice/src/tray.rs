//! Transient holder for the most recent roll.

use rand::Rng;

use crate::roll::DiceRoll;

/// Holds the latest roll for display until it is cleared or replaced.
#[derive(Debug, Clone, Default)]
pub struct DiceTray {
    last: Option<DiceRoll>,
}

impl DiceTray {
    /// An empty tray.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll `count` dice, replacing whatever the tray showed.
    pub fn roll<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> &DiceRoll {
        self.last.insert(DiceRoll::roll(count, rng))
    }

    /// The roll currently on display.
    pub fn last(&self) -> Option<&DiceRoll> {
        self.last.as_ref()
    }

    /// Dismiss the current roll.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
