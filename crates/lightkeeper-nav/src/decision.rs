//! Per-boat navigation decisions.
//!
//! Pure functions that pick the hazard ahead of a boat and decide whether
//! it holds course, steers clear, raises a warning, or collides.

use lightkeeper_core::constants::AVOID_STEER_FACTOR;
use lightkeeper_core::types::Position;

/// A hazard as seen by the navigation pass: where it is, how big it is,
/// and whether the beam currently lights it.
#[derive(Debug, Clone, Copy)]
pub struct HazardFix {
    pub position: Position,
    pub radius: f64,
    pub lit: bool,
}

/// Input to the navigation decision for a single boat.
#[derive(Debug, Clone, Copy)]
pub struct NavContext {
    pub position: Position,
    /// Signed horizontal speed (scene units per tick).
    pub speed: f64,
    pub half_length: f64,
    pub vision_range: f64,
    /// Distance below which an unseen hazard raises the warning flag.
    pub warning_range: f64,
    /// Whether the beam currently lights the boat itself.
    pub lit: bool,
    /// The nearest hazard ahead, if any.
    pub hazard: Option<HazardFix>,
}

/// Outcome of the navigation decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    /// Nothing ahead worth reacting to; hold course.
    Hold,
    /// Hazard seen — nudge the vertical position by `dy` to pass around it.
    Steer { dy: f64 },
    /// Hazard near but unseen; raise the warning flag.
    Warn,
    /// Hull inside the hazard's collision envelope; the round is lost.
    Collide,
}

/// Pick the nearest hazard strictly ahead of the boat along its direction
/// of travel. Hazards behind the boat are ignored regardless of distance;
/// ties are broken by list order.
pub fn nearest_ahead(
    position: &Position,
    direction: f64,
    hazards: &[HazardFix],
) -> Option<HazardFix> {
    let mut nearest: Option<HazardFix> = None;
    let mut min_dist = f64::INFINITY;

    for hazard in hazards {
        let ahead = (direction > 0.0 && hazard.position.x > position.x)
            || (direction < 0.0 && hazard.position.x < position.x);
        if !ahead {
            continue;
        }
        let dist = position.distance_to(&hazard.position);
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(*hazard);
        }
    }

    nearest
}

/// Decide what one boat does this tick.
///
/// Sight requires the boat and the hazard to both be lit and the hazard to
/// be inside the boat's vision range. A seen hazard is steered around; an
/// unseen one is just as solid — inside the warning range it alarms, and
/// inside `radius + half_length` it wrecks the boat.
pub fn evaluate(ctx: &NavContext) -> NavAction {
    let Some(hazard) = ctx.hazard else {
        return NavAction::Hold;
    };

    let dist = ctx.position.distance_to(&hazard.position);
    let can_see = ctx.lit && hazard.lit && dist < ctx.vision_range;

    if can_see {
        let away = if hazard.position.y > ctx.position.y {
            -1.0
        } else {
            1.0
        };
        return NavAction::Steer {
            dy: away * ctx.speed.abs() * AVOID_STEER_FACTOR,
        };
    }

    if dist < ctx.warning_range {
        if dist < hazard.radius + ctx.half_length {
            return NavAction::Collide;
        }
        return NavAction::Warn;
    }

    NavAction::Hold
}
