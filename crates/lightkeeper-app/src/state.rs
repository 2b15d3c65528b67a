//! Shared state between the round loop thread and its callers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lightkeeper_core::commands::OperatorCommand;

/// Commands sent from callers to the round loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the round engine.
    Operator(OperatorCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Single-slot mailbox for the remotely delivered beam angle.
///
/// Writers replace the stored value; the loop reads the latest once per
/// tick. Intermediate values have no observable effect once superseded,
/// so no queue is needed — just an atomic replace-on-write cell.
#[derive(Debug, Clone)]
pub struct AngleMailbox {
    bits: Arc<AtomicU64>,
}

impl AngleMailbox {
    pub fn new(initial: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(initial.to_bits())),
        }
    }

    /// Replace the stored angle (radians). Callable from any thread.
    pub fn store(&self, radians: f64) {
        self.bits.store(radians.to_bits(), Ordering::Relaxed);
    }

    /// Read the latest stored angle.
    pub fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl Default for AngleMailbox {
    fn default() -> Self {
        Self::new(0.0)
    }
}
