//! Navigation decision logic for Lightkeeper.
//!
//! Implements hazard selection and the see/steer/warn/collide rule for
//! boats as pure functions over plain data. No ECS dependency.

pub mod decision;

pub use lightkeeper_core as core;
