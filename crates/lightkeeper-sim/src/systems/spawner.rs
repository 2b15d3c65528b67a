//! Spawn scheduler — timed boat and obstacle creation.
//!
//! Timers accumulate the externally supplied tick deltas. The boat timer
//! resets whenever it fires. The obstacle timer resets only when an attempt
//! fires (the population cap holds it open), and a fired attempt may still
//! be discarded by the placement rule — spawns are opportunistic, not
//! guaranteed every interval.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use lightkeeper_core::components::Obstacle;

use crate::engine::RoundConfig;
use crate::world_setup;

/// Elapsed time since each spawn kind last fired.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnClock {
    pub since_boat_ms: f64,
    pub since_obstacle_ms: f64,
}

/// Advance the clocks and fire any due spawns.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut SpawnClock,
    config: &RoundConfig,
    next_boat_number: &mut u32,
    next_obstacle_number: &mut u32,
    dt_ms: f64,
) {
    clock.since_boat_ms += dt_ms;
    if clock.since_boat_ms > config.boat_spawn_interval_ms {
        world_setup::spawn_boat(world, rng, next_boat_number);
        clock.since_boat_ms = 0.0;
    }

    clock.since_obstacle_ms += dt_ms;
    if clock.since_obstacle_ms > config.obstacle_spawn_interval_ms {
        let count = {
            let mut query = world.query::<&Obstacle>();
            query.iter().count()
        };
        if count < config.max_obstacles {
            world_setup::try_place_obstacle(world, rng, next_obstacle_number);
            clock.since_obstacle_ms = 0.0;
        }
    }
}
