//! Navigation pass — each boat reacts to the nearest hazard ahead, then
//! drifts on.
//!
//! Boats are processed newest-first (back-to-front). An unseen collision
//! stops the pass immediately; the remaining boats keep last tick's state.

use hecs::{Entity, World};

use lightkeeper_core::components::{Boat, Illumination, NavState, Obstacle};
use lightkeeper_core::types::Position;

use lightkeeper_nav::decision::{self, HazardFix, NavAction, NavContext};

use crate::engine::RoundConfig;

/// What the navigation pass reported back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Continue,
    /// A boat struck an unseen obstacle; the round is over.
    Collision,
}

/// Run navigation for every boat. Decisions are made against pre-move
/// positions and this tick's illumination pass.
pub fn run(world: &mut World, config: &RoundConfig) -> NavOutcome {
    // Hazard fixes for this tick, in stable spawn order.
    let mut hazards: Vec<(u32, HazardFix)> = {
        let mut query = world.query::<(&Obstacle, &Position, &Illumination)>();
        query
            .iter()
            .map(|(_, (obstacle, position, illumination))| {
                (
                    obstacle.obstacle_number,
                    HazardFix {
                        position: *position,
                        radius: obstacle.radius,
                        lit: illumination.lit,
                    },
                )
            })
            .collect()
    };
    hazards.sort_by_key(|(number, _)| *number);
    let hazards: Vec<HazardFix> = hazards.into_iter().map(|(_, fix)| fix).collect();

    // Boats newest-first.
    let mut boats: Vec<(Entity, u32)> = {
        let mut query = world.query::<&Boat>();
        query
            .iter()
            .map(|(entity, boat)| (entity, boat.boat_number))
            .collect()
    };
    boats.sort_by_key(|(_, number)| std::cmp::Reverse(*number));

    for (entity, _number) in boats {
        let (ctx, speed) = {
            let Ok(boat) = world.get::<&Boat>(entity) else {
                continue;
            };
            let Ok(position) = world.get::<&Position>(entity) else {
                continue;
            };
            let Ok(illumination) = world.get::<&Illumination>(entity) else {
                continue;
            };
            let hazard =
                decision::nearest_ahead(&position, boat.entry_side.direction(), &hazards);
            (
                NavContext {
                    position: *position,
                    speed: boat.speed,
                    half_length: boat.half_length,
                    vision_range: boat.vision_range,
                    warning_range: config.warning_range,
                    lit: illumination.lit,
                    hazard,
                },
                boat.speed,
            )
        };

        match decision::evaluate(&ctx) {
            NavAction::Collide => return NavOutcome::Collision,
            action => {
                if let Ok(mut nav) = world.get::<&mut NavState>(entity) {
                    nav.warning = matches!(action, NavAction::Warn);
                }
                if let NavAction::Steer { dy } = action {
                    if let Ok(mut position) = world.get::<&mut Position>(entity) {
                        position.y += dy;
                    }
                }
            }
        }

        // Drift: constant signed speed per tick.
        if let Ok(mut position) = world.get::<&mut Position>(entity) {
            position.x += speed;
        }
    }

    NavOutcome::Continue
}
