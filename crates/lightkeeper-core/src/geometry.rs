//! Beam geometry: angle normalization and sector membership.
//!
//! Pure functions, no state. All angles are radians; the canonical range is
//! (-PI, PI]. Sector tests must be correct for sectors that wrap through the
//! +-PI boundary.

use std::f64::consts::{PI, TAU};

/// Wrap an angle into the canonical range (-PI, PI].
///
/// Bounded for any finite input — a single `rem_euclid`, never a loop.
pub fn normalize_angle(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

/// Test whether `angle` lies inside the sector from `start` to `end`,
/// edges inclusive.
///
/// All three inputs are normalized first. When the normalized start exceeds
/// the normalized end, the sector wraps through +-PI and membership splits
/// into `angle >= start OR angle <= end`.
pub fn is_in_sector(angle: f64, start: f64, end: f64) -> bool {
    let angle = normalize_angle(angle);
    let start = normalize_angle(start);
    let end = normalize_angle(end);

    if start <= end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

/// Sector edges for a beam aimed at `center` with the given half-aperture.
pub fn beam_sector(center: f64, half_width: f64) -> (f64, f64) {
    (
        normalize_angle(center - half_width),
        normalize_angle(center + half_width),
    )
}
