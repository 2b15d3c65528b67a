//! Simulation constants and tuning parameters.

use std::f64::consts::PI;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick at the nominal tick rate.
pub const DT_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Scene ---

/// Scene width in scene units.
pub const SCENE_WIDTH: f64 = 1200.0;

/// Scene height in scene units.
pub const SCENE_HEIGHT: f64 = 700.0;

/// Top of the shipping lane. Boats and rocks spawn below this line.
pub const LANE_TOP: f64 = 200.0;

/// Vertical extent of the shipping lane.
pub const LANE_HEIGHT: f64 = 400.0;

// --- Beam ---

/// Beacon lamp x position (scene center).
pub const BEACON_X: f64 = SCENE_WIDTH / 2.0;

/// Beacon lamp y position (near the top edge).
pub const BEACON_Y: f64 = 50.0;

/// Maximum lit distance from the beacon.
pub const BEAM_RANGE: f64 = 800.0;

/// Beam half-aperture in radians. The full lit sector spans 30 degrees.
pub const BEAM_HALF_WIDTH: f64 = PI / 12.0;

// --- Spawning ---

/// Interval between boat spawns (milliseconds).
pub const BOAT_SPAWN_INTERVAL_MS: f64 = 3000.0;

/// Interval between obstacle spawn attempts (milliseconds).
pub const OBSTACLE_SPAWN_INTERVAL_MS: f64 = 8000.0;

/// Maximum number of obstacles in the scene at once.
pub const MAX_OBSTACLES: usize = 5;

/// Obstacle placement attempts made during round setup.
pub const INITIAL_OBSTACLES: usize = 3;

// --- Boats ---

/// Boat hull length (scene units).
pub const BOAT_LENGTH: f64 = 60.0;

/// Boat hull beam, i.e. width across (scene units).
pub const BOAT_BEAM: f64 = 30.0;

/// Radius within which a boat can see a lit obstacle.
pub const BOAT_VISION_RANGE: f64 = 150.0;

/// Minimum boat speed magnitude (scene units per tick).
pub const BOAT_SPEED_MIN: f64 = 0.5;

/// Width of the uniform speed band above the minimum.
pub const BOAT_SPEED_SPAN: f64 = 1.0;

/// Spawn offset past the entered edge.
pub const BOAT_SPAWN_OFFSET: f64 = 50.0;

/// A boat this far past either edge has left the scene.
pub const BOAT_EXIT_MARGIN: f64 = 100.0;

/// Fraction of speed magnitude applied as vertical steering per tick.
pub const AVOID_STEER_FACTOR: f64 = 0.5;

// --- Obstacles ---

/// Horizontal inset of the obstacle band from both scene edges.
pub const OBSTACLE_MARGIN_X: f64 = 150.0;

/// Minimum obstacle radius (scene units).
pub const OBSTACLE_RADIUS_MIN: f64 = 20.0;

/// Width of the uniform radius band above the minimum.
pub const OBSTACLE_RADIUS_SPAN: f64 = 30.0;

/// Minimum open water required between obstacle rims at placement.
pub const OBSTACLE_CLEARANCE: f64 = 100.0;

// --- Navigation ---

/// Distance below which an unseen obstacle raises the warning flag.
pub const WARNING_RANGE: f64 = 100.0;

// --- Scoring ---

/// Score bonus for each boat that exits the scene safely.
pub const SAVE_BONUS: u32 = 100;
