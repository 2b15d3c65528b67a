//! Headless driver for the Lightkeeper simulation.
//!
//! Wires the round engine to its collaborators: a loop thread at the fixed
//! tick cadence, an mpsc command channel, the beam-angle mailbox fed by the
//! remote input device, and injected render/audio sinks.

pub mod collaborators;
pub mod game_loop;
pub mod state;
