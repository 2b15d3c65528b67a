//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which edge of the scene a boat entered from. Fixes the sign of its
/// horizontal speed for the boat's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySide {
    #[default]
    Left,
    Right,
}

impl EntrySide {
    /// Sign of horizontal travel: +1 entering from the left, -1 from the right.
    pub fn direction(self) -> f64 {
        match self {
            EntrySide::Left => 1.0,
            EntrySide::Right => -1.0,
        }
    }
}

/// Hull colors assigned at spawn. The neutral gray hull is reserved for
/// rendering unlit boats and is never assigned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoatColor {
    Red,
    Blue,
    Teal,
}

impl BoatColor {
    /// The spawnable palette, indexable by a uniform draw.
    pub const PALETTE: [BoatColor; 3] = [BoatColor::Red, BoatColor::Blue, BoatColor::Teal];
}

/// Cosmetic rock sprite variant, fixed at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RockVariant {
    #[default]
    Craggy,
    Smooth,
}

/// Round lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Idle,
    Running,
    Ended,
}
