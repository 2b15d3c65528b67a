//! Round snapshot — the complete visible state sent to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BoatColor, EntrySide, RockVariant, RoundPhase};
use crate::events::{AudioCue, GameOverReport};
use crate::types::{Position, SimTime};

/// Complete round state handed to the rendering collaborator after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub score: ScoreView,
    pub beam: BeamView,
    pub boats: Vec<BoatView>,
    pub obstacles: Vec<ObstacleView>,
    /// Cues raised during this tick, drained into the snapshot.
    pub audio_cues: Vec<AudioCue>,
    /// Present only on the tick that ended the round.
    pub game_over: Option<GameOverReport>,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub boats_saved: u32,
}

/// Beam parameters for drawing the lit sector.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BeamView {
    pub origin: Position,
    pub angle: f64,
    pub half_width: f64,
    pub range: f64,
}

/// A visible boat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatView {
    pub boat_number: u32,
    pub position: Position,
    pub entry_side: EntrySide,
    /// Signed horizontal speed (scene units per tick).
    pub speed: f64,
    pub color: BoatColor,
    pub illuminated: bool,
    pub warning: bool,
}

/// A visible rock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub obstacle_number: u32,
    pub position: Position,
    pub radius: f64,
    pub variant: RockVariant,
    pub illuminated: bool,
}
