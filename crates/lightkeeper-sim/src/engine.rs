//! Round engine — the core of the game.
//!
//! `RoundEngine` owns the hecs ECS world, processes operator commands,
//! runs all systems in fixed order, and produces `RoundSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use lightkeeper_core::commands::OperatorCommand;
use lightkeeper_core::components::{Beacon, Beam, Boat, Obstacle};
use lightkeeper_core::constants::*;
use lightkeeper_core::enums::RoundPhase;
use lightkeeper_core::events::{AudioCue, GameOverReport};
use lightkeeper_core::geometry::normalize_angle;
use lightkeeper_core::state::{RoundSnapshot, ScoreView};
use lightkeeper_core::types::SimTime;

use crate::systems;
use crate::systems::navigation::NavOutcome;
use crate::systems::spawner::SpawnClock;
use crate::world_setup;

/// Configuration for a round. Fixed at construction; defaults come from
/// the constants module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    /// RNG seed for determinism. Same seed = same round.
    pub seed: u64,
    pub beam_half_width: f64,
    pub beam_range: f64,
    pub boat_spawn_interval_ms: f64,
    pub obstacle_spawn_interval_ms: f64,
    pub max_obstacles: usize,
    pub initial_obstacles: usize,
    pub warning_range: f64,
    pub save_bonus: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            beam_half_width: BEAM_HALF_WIDTH,
            beam_range: BEAM_RANGE,
            boat_spawn_interval_ms: BOAT_SPAWN_INTERVAL_MS,
            obstacle_spawn_interval_ms: OBSTACLE_SPAWN_INTERVAL_MS,
            max_obstacles: MAX_OBSTACLES,
            initial_obstacles: INITIAL_OBSTACLES,
            warning_range: WARNING_RANGE,
            save_bonus: SAVE_BONUS,
        }
    }
}

/// Accumulated score for the current round.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub score: u32,
    pub boats_saved: u32,
}

/// The round engine. Owns the ECS world and all round state.
pub struct RoundEngine {
    world: World,
    config: RoundConfig,
    time: SimTime,
    phase: RoundPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<OperatorCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_cues: Vec<AudioCue>,
    spawn_clock: SpawnClock,
    next_boat_number: u32,
    next_obstacle_number: u32,
    score: ScoreState,
    game_over: Option<GameOverReport>,
}

impl RoundEngine {
    /// Create a new engine with the given config. The world starts Idle,
    /// holding only the beacon.
    pub fn new(config: RoundConfig) -> Self {
        let mut world = World::new();
        world_setup::spawn_beacon(&mut world, &config);

        Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: RoundPhase::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_cues: Vec::new(),
            spawn_clock: SpawnClock::default(),
            next_boat_number: 0,
            next_obstacle_number: 0,
            score: ScoreState::default(),
            game_over: None,
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick of `dt_ms` milliseconds and return
    /// the resulting snapshot. Outside Running this only reports state — a
    /// no-op, never a fault. Non-finite or negative deltas count as zero.
    pub fn tick(&mut self, dt_ms: f64) -> RoundSnapshot {
        self.process_commands();

        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };

        if self.phase == RoundPhase::Running {
            self.run_systems(dt_ms);
            self.time.advance(dt_ms);
        }

        let audio_cues = std::mem::take(&mut self.audio_cues);
        let game_over = self.game_over.take();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            ScoreView {
                score: self.score.score,
                boats_saved: self.score.boats_saved,
            },
            audio_cues,
            game_over,
        )
    }

    /// Latest-value beam steering, callable at any time. Non-finite input
    /// is silently dropped; the stored angle is wrapped to (-PI, PI].
    /// Illumination picks up the new angle on the next Running tick.
    pub fn set_beam_angle(&mut self, radians: f64) {
        if !radians.is_finite() {
            return;
        }
        let angle = normalize_angle(radians);
        for (_entity, (_beacon, beam)) in self.world.query_mut::<(&Beacon, &mut Beam)>() {
            beam.angle = angle;
        }
    }

    /// Get the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Place an obstacle at an exact position (for tests — bypasses the
    /// placement rule).
    #[cfg(test)]
    pub fn place_obstacle_at(&mut self, x: f64, y: f64, radius: f64) {
        world_setup::spawn_obstacle_at(&mut self.world, &mut self.next_obstacle_number, x, y, radius);
    }

    /// Launch a boat at an exact position and signed speed (for tests).
    #[cfg(test)]
    pub fn launch_boat_at(&mut self, x: f64, y: f64, speed: f64) {
        world_setup::spawn_boat_at(&mut self.world, &mut self.next_boat_number, x, y, speed);
    }

    /// Get a copy of the score state.
    #[cfg(test)]
    pub fn score_state(&self) -> ScoreState {
        self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command.
    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::StartRound => {
                if matches!(self.phase, RoundPhase::Idle | RoundPhase::Ended) {
                    self.start();
                }
            }
            OperatorCommand::ResetRound => {
                if self.phase == RoundPhase::Ended {
                    self.clear_round();
                    self.phase = RoundPhase::Idle;
                }
            }
            OperatorCommand::SetBeamAngle { radians } => {
                self.set_beam_angle(radians);
            }
        }
    }

    /// Reset all round state and begin a new round.
    fn start(&mut self) {
        self.clear_round();
        world_setup::seed_initial_obstacles(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.next_obstacle_number,
        );
        self.phase = RoundPhase::Running;
        self.audio_cues.push(AudioCue::RoundStart);
    }

    /// Despawn every boat and obstacle and zero the counters. The beacon
    /// (and its current aim) survives resets.
    fn clear_round(&mut self) {
        self.despawn_buffer.clear();
        for (entity, _boat) in self.world.query_mut::<&Boat>() {
            self.despawn_buffer.push(entity);
        }
        for (entity, _obstacle) in self.world.query_mut::<&Obstacle>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }

        self.time = SimTime::default();
        self.score = ScoreState::default();
        self.spawn_clock = SpawnClock::default();
        self.game_over = None;
    }

    /// Running -> Ended. Emits one Collision cue and one final report.
    /// Idempotent: calling end() when already Ended has no effect.
    fn end(&mut self) {
        if self.phase != RoundPhase::Running {
            return;
        }
        self.phase = RoundPhase::Ended;
        self.audio_cues.push(AudioCue::Collision);
        self.game_over = Some(GameOverReport {
            score: self.score.score,
            boats_saved: self.score.boats_saved,
        });
    }

    /// Run all systems in order for one tick.
    fn run_systems(&mut self, dt_ms: f64) {
        // 1. Scheduled spawns
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_clock,
            &self.config,
            &mut self.next_boat_number,
            &mut self.next_obstacle_number,
            dt_ms,
        );
        // 2. Illumination — one consistent lit/unlit snapshot for the tick
        systems::illumination::run(&mut self.world);
        // 3. Navigation — may end the round on an unseen collision
        if systems::navigation::run(&mut self.world, &self.config) == NavOutcome::Collision {
            // Remaining boats keep last tick's state; no culling this tick.
            self.end();
            return;
        }
        // 4. Exit culling and scoring
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.score,
            self.config.save_bonus,
        );
    }
}
