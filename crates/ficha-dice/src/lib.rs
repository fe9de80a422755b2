//! Dice for Ficha.
//!
//! Rolls any number of independent six-sided dice. Results are transient:
//! a [`DiceTray`] holds the latest roll for display and can be cleared at
//! any time. Nothing here is persisted.

pub mod roll;
pub mod tray;

pub use roll::{DiceRoll, FACES, roll_dice};
pub use tray::DiceTray;
