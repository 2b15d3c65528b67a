//! Cleanup system: culls boats that have fully left the scene and banks
//! their rescue.

use hecs::{Entity, World};

use lightkeeper_core::components::{Boat, NavState};
use lightkeeper_core::constants::{BOAT_EXIT_MARGIN, SCENE_WIDTH};
use lightkeeper_core::types::Position;

use crate::engine::ScoreState;

/// Remove boats beyond the exit margin on either side. Each is marked saved
/// exactly once, counted, and awarded the bonus before despawning.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
    save_bonus: u32,
) {
    despawn_buffer.clear();

    for (entity, (_boat, position, nav)) in world.query_mut::<(&Boat, &Position, &mut NavState)>()
    {
        if position.x < -BOAT_EXIT_MARGIN || position.x > SCENE_WIDTH + BOAT_EXIT_MARGIN {
            if !nav.saved {
                nav.saved = true;
                score.boats_saved += 1;
                score.score += save_bonus;
            }
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
