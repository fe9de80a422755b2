//! Rolling and roll results.

use rand::Rng;

/// Number of faces on every die.
pub const FACES: u8 = 6;

/// Roll `count` independent dice, each uniform over `1..=6`.
pub fn roll_dice<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u8> {
    (0..count).map(|_| rng.random_range(1..=FACES)).collect()
}

/// The faces shown by one roll of the dice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceRoll {
    /// Individual die faces, in roll order.
    pub faces: Vec<u8>,
}

impl DiceRoll {
    /// Roll `count` dice.
    pub fn roll<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            faces: roll_dice(count, rng),
        }
    }

    /// Sum of all faces.
    pub fn total(&self) -> u32 {
        self.faces.iter().map(|f| u32::from(*f)).sum()
    }

    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.faces.len()
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.faces.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
