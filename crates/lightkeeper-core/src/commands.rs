//! Operator commands sent from the driver to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    /// Begin a new round (accepted from Idle or Ended); resets all round state.
    StartRound,
    /// Return an ended round to Idle without starting a new one.
    ResetRound,
    /// Steer the beam. Latest value wins; non-finite input is dropped.
    SetBeamAngle { radians: f64 },
}
