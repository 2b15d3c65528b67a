//! Entity spawn factories for the round world.
//!
//! Creates the beacon, boats, and obstacles with appropriate component
//! bundles. Scheduling lives in the spawner system; these factories only
//! build entities.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use lightkeeper_core::components::*;
use lightkeeper_core::constants::*;
use lightkeeper_core::enums::{BoatColor, EntrySide, RockVariant};
use lightkeeper_core::types::Position;

use crate::engine::RoundConfig;

/// Spawn the lighthouse with its beam aimed along the +x axis.
pub fn spawn_beacon(world: &mut World, config: &RoundConfig) -> hecs::Entity {
    world.spawn((
        Beacon,
        Position::new(BEACON_X, BEACON_Y),
        Beam {
            angle: 0.0,
            half_width: config.beam_half_width,
            range: config.beam_range,
        },
    ))
}

/// Spawn a boat just off a random edge, drifting into the scene.
pub fn spawn_boat(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_boat_number: &mut u32,
) -> hecs::Entity {
    let entry_side = if rng.gen_bool(0.5) {
        EntrySide::Left
    } else {
        EntrySide::Right
    };
    let x = match entry_side {
        EntrySide::Left => -BOAT_SPAWN_OFFSET,
        EntrySide::Right => SCENE_WIDTH + BOAT_SPAWN_OFFSET,
    };
    let y = LANE_TOP + rng.gen_range(0.0..LANE_HEIGHT);
    let speed = (BOAT_SPEED_MIN + rng.gen_range(0.0..BOAT_SPEED_SPAN)) * entry_side.direction();
    let color = BoatColor::PALETTE[rng.gen_range(0..BoatColor::PALETTE.len())];

    let boat_number = *next_boat_number;
    *next_boat_number += 1;

    world.spawn((
        Boat {
            boat_number,
            entry_side,
            speed,
            half_length: BOAT_LENGTH / 2.0,
            vision_range: BOAT_VISION_RANGE,
            color,
        },
        Position::new(x, y),
        Illumination::default(),
        NavState::default(),
    ))
}

/// Attempt to place one obstacle. The candidate is drawn first and accepted
/// only if every existing obstacle keeps `r_new + r_existing + clearance`
/// of open water; a rejected candidate is discarded without retry.
pub fn try_place_obstacle(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_obstacle_number: &mut u32,
) -> Option<hecs::Entity> {
    let candidate = Position::new(
        OBSTACLE_MARGIN_X + rng.gen_range(0.0..(SCENE_WIDTH - 2.0 * OBSTACLE_MARGIN_X)),
        LANE_TOP + rng.gen_range(0.0..LANE_HEIGHT),
    );
    let radius = OBSTACLE_RADIUS_MIN + rng.gen_range(0.0..OBSTACLE_RADIUS_SPAN);
    let variant = if rng.gen_bool(0.5) {
        RockVariant::Craggy
    } else {
        RockVariant::Smooth
    };

    {
        let mut query = world.query::<(&Obstacle, &Position)>();
        for (_entity, (obstacle, position)) in query.iter() {
            if candidate.distance_to(position) < radius + obstacle.radius + OBSTACLE_CLEARANCE {
                return None;
            }
        }
    }

    let obstacle_number = *next_obstacle_number;
    *next_obstacle_number += 1;

    Some(world.spawn((
        Obstacle {
            obstacle_number,
            radius,
            variant,
        },
        candidate,
        Illumination::default(),
    )))
}

/// Round setup: a fixed number of opportunistic placement attempts.
pub fn seed_initial_obstacles(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &RoundConfig,
    next_obstacle_number: &mut u32,
) {
    for _ in 0..config.initial_obstacles {
        try_place_obstacle(world, rng, next_obstacle_number);
    }
}

/// Spawn a boat at an exact position and signed speed (for tests that need
/// hand-placed traffic).
#[cfg(test)]
pub fn spawn_boat_at(
    world: &mut World,
    next_boat_number: &mut u32,
    x: f64,
    y: f64,
    speed: f64,
) -> hecs::Entity {
    let entry_side = if speed >= 0.0 {
        EntrySide::Left
    } else {
        EntrySide::Right
    };

    let boat_number = *next_boat_number;
    *next_boat_number += 1;

    world.spawn((
        Boat {
            boat_number,
            entry_side,
            speed,
            half_length: BOAT_LENGTH / 2.0,
            vision_range: BOAT_VISION_RANGE,
            color: BoatColor::Red,
        },
        Position::new(x, y),
        Illumination::default(),
        NavState::default(),
    ))
}

/// Spawn an obstacle at an exact position, bypassing the placement rule.
#[cfg(test)]
pub fn spawn_obstacle_at(
    world: &mut World,
    next_obstacle_number: &mut u32,
    x: f64,
    y: f64,
    radius: f64,
) -> hecs::Entity {
    let obstacle_number = *next_obstacle_number;
    *next_obstacle_number += 1;

    world.spawn((
        Obstacle {
            obstacle_number,
            radius,
            variant: RockVariant::default(),
        },
        Position::new(x, y),
        Illumination::default(),
    ))
}
