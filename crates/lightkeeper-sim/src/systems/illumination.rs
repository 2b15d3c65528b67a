//! Illumination pass — classifies every entity as lit or unlit.
//!
//! Runs to completion before navigation so that navigation decisions see
//! one consistent lit/unlit snapshot for the whole tick.

use hecs::World;

use lightkeeper_core::components::{Beacon, Beam, Illumination};
use lightkeeper_core::geometry::{beam_sector, is_in_sector};
use lightkeeper_core::types::Position;

/// Recompute `Illumination::lit` for every boat and obstacle: lit iff the
/// bearing from the beacon lies in the beam sector (edges inclusive) and
/// the distance is strictly less than the beam range.
pub fn run(world: &mut World) {
    let (origin, start, end, range) = {
        let mut query = world.query::<(&Beacon, &Position, &Beam)>();
        match query.iter().next() {
            Some((_, (_, position, beam))) => {
                let (start, end) = beam_sector(beam.angle, beam.half_width);
                (*position, start, end, beam.range)
            }
            None => return,
        }
    };

    for (_entity, (position, illumination)) in world.query_mut::<(&Position, &mut Illumination)>()
    {
        let bearing = origin.bearing_to(position);
        let distance = origin.distance_to(position);
        illumination.lit = is_in_sector(bearing, start, end) && distance < range;
    }
}
