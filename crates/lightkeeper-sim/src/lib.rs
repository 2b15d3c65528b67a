//! Simulation engine for Lightkeeper.
//!
//! Owns the hecs ECS world, runs the systems in fixed order each tick,
//! and produces RoundSnapshots for the driver.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::RoundEngine;
pub use lightkeeper_core as core;

#[cfg(test)]
mod tests;
