//! Render and audio collaborators, injected into the round loop.
//!
//! The core never draws or plays anything; it hands each tick's snapshot
//! and cues to whatever sinks the caller wires in.

use lightkeeper_core::events::AudioCue;
use lightkeeper_core::state::RoundSnapshot;

/// Receives the read-only snapshot once per tick, after processing.
pub trait RenderSink: Send {
    fn present(&mut self, snapshot: &RoundSnapshot);
}

/// Receives lifecycle audio cues.
pub trait AudioSink: Send {
    fn play(&mut self, cue: AudioCue);
}

/// Render sink that reports through the log facade. Logs on score changes
/// rather than every frame to keep output readable.
#[derive(Debug, Default)]
pub struct LogRenderSink {
    last_score: u32,
    last_saved: u32,
}

impl RenderSink for LogRenderSink {
    fn present(&mut self, snapshot: &RoundSnapshot) {
        if snapshot.score.score != self.last_score || snapshot.score.boats_saved != self.last_saved
        {
            self.last_score = snapshot.score.score;
            self.last_saved = snapshot.score.boats_saved;
            log::info!(
                "score {} ({} boats saved)",
                snapshot.score.score,
                snapshot.score.boats_saved
            );
        }
    }
}

/// Audio sink that reports through the log facade.
#[derive(Debug, Default)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::RoundStart => log::info!("audio: round start"),
            AudioCue::Collision => log::warn!("audio: collision"),
        }
    }
}
