//! Round loop thread — ticks the engine at the fixed cadence and fans the
//! results out to the injected collaborators.
//!
//! Commands arrive via `mpsc`. The beam angle arrives via the atomic
//! mailbox and is applied once per tick, only when the remote wrote a new
//! value. The latest snapshot is stored in shared state for synchronous
//! polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use lightkeeper_core::constants::{DT_MS, TICK_RATE};
use lightkeeper_core::state::RoundSnapshot;
use lightkeeper_sim::engine::{RoundConfig, RoundEngine};

use crate::collaborators::{AudioSink, RenderSink};
use crate::state::{AngleMailbox, LoopCommand};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the round loop in a new thread.
///
/// Returns the command sender callers use to drive the round.
pub fn spawn_round_loop(
    config: RoundConfig,
    mailbox: AngleMailbox,
    render: Box<dyn RenderSink>,
    audio: Box<dyn AudioSink>,
    latest_snapshot: Arc<Mutex<Option<RoundSnapshot>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("lightkeeper-round-loop".into())
        .spawn(move || {
            run_round_loop(config, mailbox, cmd_rx, render, audio, &latest_snapshot);
        })
        .expect("Failed to spawn round loop thread");

    cmd_tx
}

/// The round loop. Runs until Shutdown command or channel disconnect.
fn run_round_loop(
    config: RoundConfig,
    mailbox: AngleMailbox,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    mut render: Box<dyn RenderSink>,
    mut audio: Box<dyn AudioSink>,
    latest_snapshot: &Mutex<Option<RoundSnapshot>>,
) {
    let mut engine = RoundEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut last_angle_bits = mailbox.load().to_bits();
    engine.set_beam_angle(mailbox.load());

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Operator(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Apply the latest remote steering value, if it changed
        let angle = mailbox.load();
        if angle.to_bits() != last_angle_bits {
            last_angle_bits = angle.to_bits();
            engine.set_beam_angle(angle);
        }

        // 3. Advance one tick (the engine handles phase gating internally)
        let snapshot = engine.tick(DT_MS);

        // 4. Fan out to the collaborators
        for cue in &snapshot.audio_cues {
            audio.play(*cue);
        }
        if let Some(report) = snapshot.game_over {
            log::info!(
                "round over: score {} with {} boats saved",
                report.score,
                report.boats_saved
            );
        }
        render.present(&snapshot);

        // 5. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 6. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightkeeper_core::commands::OperatorCommand;
    use lightkeeper_core::enums::RoundPhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Operator(OperatorCommand::StartRound))
            .unwrap();
        tx.send(LoopCommand::Operator(OperatorCommand::SetBeamAngle {
            radians: 0.5,
        }))
        .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Operator(OperatorCommand::StartRound)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Operator(OperatorCommand::SetBeamAngle { .. })
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_engine_drives_round_via_commands() {
        let mut engine = RoundEngine::new(RoundConfig::default());

        let snap = engine.tick(DT_MS);
        assert_eq!(snap.phase, RoundPhase::Idle);

        engine.queue_command(OperatorCommand::StartRound);
        let snap = engine.tick(DT_MS);
        assert_eq!(snap.phase, RoundPhase::Running);
        assert!(snap.time.tick > 0);
    }
}
