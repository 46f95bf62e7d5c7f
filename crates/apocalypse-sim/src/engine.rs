//! The simulation engine — advances the world one tick at a time.
//!
//! `SimulationEngine` owns the [`SimulationWorld`], processes queued
//! player commands at tick boundaries, runs all systems in a fixed
//! order, and produces a [`FrameResult`] per tick. Single-threaded,
//! run-to-completion: one tick finishes before the next begins, so the
//! instrumentation never observes half-updated state.

use std::collections::VecDeque;

use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use apocalypse_core::commands::PlayerCommand;
use apocalypse_core::config::{BonusTable, ConfigError, PoolConfig};
use apocalypse_core::enums::EnginePhase;
use apocalypse_core::events::GameEvent;
use apocalypse_core::report::EntityCounts;
use apocalypse_core::score::ScoreState;
use apocalypse_core::types::SimTime;

use crate::systems;
use crate::world::SimulationWorld;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub pools: PoolConfig,
    pub bonus: BonusTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pools: PoolConfig::default(),
            bonus: BonusTable::default(),
        }
    }
}

/// The outcome of one tick, consumed by the host loop and the monitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    pub time: SimTime,
    /// The dt actually applied (malformed inputs clamp to 0.0).
    pub dt_applied: f64,
    pub phase: EnginePhase,
    pub score: ScoreState,
    pub active: EntityCounts,
    pub pool_occupancy: EntityCounts,
    pub events: Vec<GameEvent>,
}

/// One discrete simulation advance. Implemented by the engine and
/// driven by an adapter bound to the host's refresh signal; tests call
/// it synchronously without a display loop.
pub trait Simulate {
    fn tick(&mut self, dt: f64) -> FrameResult;
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    world: SimulationWorld,
    time: SimTime,
    phase: EnginePhase,
    bonus_table: BonusTable,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Create an engine. Fails fast on invalid pool sizing or spawn
    /// weights — configuration errors are fatal to initialization.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.bonus.validate()?;
        Ok(Self {
            world: SimulationWorld::new(&config.pools)?,
            time: SimTime::default(),
            phase: EnginePhase::default(),
            bonus_table: config.bonus,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the world (monitor, tests).
    pub fn world(&self) -> &SimulationWorld {
        &self.world
    }

    /// Mutable access for harnesses that inject load (self-test,
    /// benchmarks) and for wave scripting outside the core.
    pub fn world_mut(&mut self) -> &mut SimulationWorld {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::FireCounterMissile { target } => {
                // Nearest living silo with ammo; silently no-op when
                // every silo is empty or destroyed.
                if let Some(origin) = self.world.nearest_armed_silo(target) {
                    self.world.silos[origin].missiles -= 1;
                    self.world.spawn_counter_missile(origin, target);
                }
            }
            PlayerCommand::PointerShot { point } => {
                systems::bonus::pointer_shot(&mut self.world, &self.bonus_table, point);
            }
            PlayerCommand::Pause => {
                self.phase = EnginePhase::Paused;
            }
            PlayerCommand::Resume => {
                self.phase = EnginePhase::Running;
            }
        }
    }

    /// Clamp malformed time deltas to zero rather than corrupting
    /// positions. Transient input anomaly: logged, never propagated.
    fn sanitize_dt(dt: f64) -> f64 {
        if !dt.is_finite() || dt < 0.0 {
            warn!("malformed frame delta {dt}, clamping to 0");
            0.0
        } else {
            dt
        }
    }

    fn frame_result(&mut self, dt_applied: f64) -> FrameResult {
        FrameResult {
            time: self.time,
            dt_applied,
            phase: self.phase,
            score: self.world.score,
            active: self.world.active_counts(),
            pool_occupancy: self.world.pool_occupancy(),
            events: std::mem::take(&mut self.world.events),
        }
    }
}

impl Simulate for SimulationEngine {
    /// Advance one tick. Order within the tick: commands, movement,
    /// explosion update, collision resolution, counter-missile
    /// arrival, bonus spawn draw, floating-text advance. All movement
    /// happens before any collision test, and all collision tests
    /// happen before pool reclamation is observable in the result.
    fn tick(&mut self, dt: f64) -> FrameResult {
        self.process_commands();

        if self.phase != EnginePhase::Running {
            return self.frame_result(0.0);
        }

        let dt = Self::sanitize_dt(dt);

        systems::movement::run(&mut self.world, dt);
        systems::explosions::run(&mut self.world, dt);
        systems::collisions::run(&mut self.world);
        systems::counter_missile::run(&mut self.world);
        systems::bonus::run(&mut self.world, &mut self.rng, &self.bonus_table, self.time.tick);
        systems::floating_text::run(&mut self.world, dt);

        self.time.advance(dt);
        self.frame_result(dt)
    }
}
