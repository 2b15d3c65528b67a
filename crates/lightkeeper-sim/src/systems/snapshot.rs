//! Snapshot system: queries the world and builds a complete RoundSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use lightkeeper_core::components::*;
use lightkeeper_core::enums::RoundPhase;
use lightkeeper_core::events::{AudioCue, GameOverReport};
use lightkeeper_core::state::*;
use lightkeeper_core::types::{Position, SimTime};

/// Build a complete RoundSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: RoundPhase,
    score: ScoreView,
    audio_cues: Vec<AudioCue>,
    game_over: Option<GameOverReport>,
) -> RoundSnapshot {
    RoundSnapshot {
        time: *time,
        phase,
        score,
        beam: build_beam(world),
        boats: build_boats(world),
        obstacles: build_obstacles(world),
        audio_cues,
        game_over,
    }
}

/// Build the BeamView from the beacon entity.
fn build_beam(world: &World) -> BeamView {
    world
        .query::<(&Beacon, &Position, &Beam)>()
        .iter()
        .next()
        .map(|(_, (_, position, beam))| BeamView {
            origin: *position,
            angle: beam.angle,
            half_width: beam.half_width,
            range: beam.range,
        })
        .unwrap_or_default()
}

/// Build the BoatView list, sorted by spawn number for stable ordering.
fn build_boats(world: &World) -> Vec<BoatView> {
    let mut boats: Vec<BoatView> = world
        .query::<(&Boat, &Position, &Illumination, &NavState)>()
        .iter()
        .map(|(_, (boat, position, illumination, nav))| BoatView {
            boat_number: boat.boat_number,
            position: *position,
            entry_side: boat.entry_side,
            speed: boat.speed,
            color: boat.color,
            illuminated: illumination.lit,
            warning: nav.warning,
        })
        .collect();

    boats.sort_by_key(|b| b.boat_number);
    boats
}

/// Build the ObstacleView list, sorted by spawn number.
fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    let mut obstacles: Vec<ObstacleView> = world
        .query::<(&Obstacle, &Position, &Illumination)>()
        .iter()
        .map(|(_, (obstacle, position, illumination))| ObstacleView {
            obstacle_number: obstacle.obstacle_number,
            position: *position,
            radius: obstacle.radius,
            variant: obstacle.variant,
            illuminated: illumination.lit,
        })
        .collect();

    obstacles.sort_by_key(|o| o.obstacle_number);
    obstacles
}
