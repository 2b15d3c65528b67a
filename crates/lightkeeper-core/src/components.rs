//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{BoatColor, EntrySide, RockVariant};

/// Marks the lighthouse entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Beacon;

/// The steerable light source, attached to the beacon. One per world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Beam {
    /// Current aim angle (radians, wrapped to (-PI, PI] on write).
    pub angle: f64,
    /// Half-aperture of the lit sector (radians).
    pub half_width: f64,
    /// Maximum lit distance from the beacon.
    pub range: f64,
}

/// A ship crossing the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    /// Monotonic spawn id; newer boats have higher numbers.
    pub boat_number: u32,
    pub entry_side: EntrySide,
    /// Signed horizontal speed (scene units per tick); sign matches entry_side.
    pub speed: f64,
    /// Half the hull length — the collision envelope around the hull center.
    pub half_length: f64,
    /// Radius within which a lit obstacle can be seen.
    pub vision_range: f64,
    pub color: BoatColor,
}

/// Per-tick navigation flags for a boat.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NavState {
    /// Danger is near but unseen. Recomputed every tick.
    pub warning: bool,
    /// Set exactly once, when the boat exits the scene without colliding.
    pub saved: bool,
}

/// A stationary rock hazard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Monotonic spawn id, for stable snapshot ordering.
    pub obstacle_number: u32,
    pub radius: f64,
    pub variant: RockVariant,
}

/// Whether the beam currently lights this entity. Recomputed every tick
/// by the illumination pass; navigation reads it, never writes it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Illumination {
    pub lit: bool,
}
