//! Headless demonstration driver: starts a round, sweeps the beam from a
//! stand-in remote thread, and logs the outcome.

use std::f64::consts::FRAC_PI_2;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lightkeeper_app::collaborators::{LogAudioSink, LogRenderSink};
use lightkeeper_app::game_loop::spawn_round_loop;
use lightkeeper_app::state::{AngleMailbox, LoopCommand};
use lightkeeper_core::commands::OperatorCommand;
use lightkeeper_core::enums::RoundPhase;
use lightkeeper_sim::engine::RoundConfig;

fn main() {
    env_logger::init();
    log::info!("Lightkeeper starting...");

    let mailbox = AngleMailbox::new(FRAC_PI_2);
    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_round_loop(
        RoundConfig::default(),
        mailbox.clone(),
        Box::new(LogRenderSink::default()),
        Box::new(LogAudioSink),
        Arc::clone(&latest_snapshot),
    );

    cmd_tx
        .send(LoopCommand::Operator(OperatorCommand::StartRound))
        .expect("round loop should be alive");

    // Stand-in for the remote device: sweep the beam across the lane.
    let sweep_mailbox = mailbox.clone();
    std::thread::spawn(move || {
        let mut t: f64 = 0.0;
        loop {
            sweep_mailbox.store(FRAC_PI_2 + (t * 0.8).sin());
            t += 0.05;
            std::thread::sleep(Duration::from_millis(50));
        }
    });

    // Poll until the round ends, capped at two minutes.
    for _ in 0..1200 {
        std::thread::sleep(Duration::from_millis(100));
        let ended = latest_snapshot
            .lock()
            .ok()
            .map(|snap| matches!(snap.as_ref().map(|s| s.phase), Some(RoundPhase::Ended)))
            .unwrap_or(false);
        if ended {
            break;
        }
    }

    let _ = cmd_tx.send(LoopCommand::Shutdown);
    log::info!("Lightkeeper shutting down");
}
