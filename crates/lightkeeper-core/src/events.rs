//! Events emitted by the simulation for the audio and UI collaborators.

use serde::{Deserialize, Serialize};

/// Audio cues for the sound collaborator. Kind only — the audio side
/// needs no parameters beyond which event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    /// A round just started.
    RoundStart,
    /// A boat struck an unseen rock; the round is over.
    Collision,
}

/// Final tally, delivered exactly once in the snapshot of the tick on
/// which the round ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverReport {
    pub score: u32,
    pub boats_saved: u32,
}
