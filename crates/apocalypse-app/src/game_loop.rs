//! Game loop thread — runs the simulation engine at 60Hz.
//!
//! The engine and the monitor are created inside the thread because
//! it's cleaner for ownership. Commands arrive via `mpsc` channel, the
//! latest frame result is stored in shared state for synchronous
//! polling, and the monitor samples once per interval using the
//! thread's own monotonic clock. Shutdown returns the final report.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{info, warn};

use apocalypse_core::commands::PlayerCommand;
use apocalypse_core::config::ConfigError;
use apocalypse_core::constants::FRAME_RATE;
use apocalypse_core::report::MonitorReport;
use apocalypse_monitor::{MonitorConfig, PerformanceMonitor};
use apocalypse_sim::{FrameResult, SimConfig, Simulate, SimulationEngine};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_frame: Arc<Mutex<Option<FrameResult>>>,
    join: JoinHandle<MonitorReport>,
}

impl GameLoopHandle {
    /// Forward a command to the loop. Lost sends mean the loop is
    /// already gone; callers learn that at shutdown.
    pub fn send(&self, command: GameLoopCommand) {
        if self.command_tx.send(command).is_err() {
            warn!("game loop channel closed, command dropped");
        }
    }

    /// Latest frame result for synchronous polling.
    pub fn latest_frame(&self) -> Option<FrameResult> {
        self.latest_frame.lock().ok().and_then(|lock| lock.clone())
    }

    /// Stop the loop and return the final monitor report.
    pub fn shutdown(self) -> MonitorReport {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.join.join().unwrap_or_else(|_| {
            warn!("game loop thread panicked, substituting an empty report");
            MonitorReport::default()
        })
    }
}

/// Spawns the game loop in a new thread.
///
/// Fails fast when the simulation configuration is invalid; the thread
/// is only started once the engine exists.
pub fn spawn_game_loop(
    sim_config: SimConfig,
    monitor_config: MonitorConfig,
) -> Result<GameLoopHandle, ConfigError> {
    let mut engine = SimulationEngine::new(sim_config)?;
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_frame: Arc<Mutex<Option<FrameResult>>> = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_frame);

    let join = thread::Builder::new()
        .name("apocalypse-game-loop".into())
        .spawn(move || run_game_loop(&mut engine, monitor_config, command_rx, &shared))
        .expect("failed to spawn game loop thread");

    Ok(GameLoopHandle {
        command_tx,
        latest_frame,
        join,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    engine: &mut SimulationEngine,
    monitor_config: MonitorConfig,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_frame: &Mutex<Option<FrameResult>>,
) -> MonitorReport {
    let epoch = Instant::now();
    let mut monitor = PerformanceMonitor::new(monitor_config);
    monitor.start(0.0);

    let mut next_tick_time = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::Player(command)) => engine.queue_command(command),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    let now = epoch.elapsed().as_secs_f64();
                    monitor.stop();
                    let report = monitor.report(now);
                    info!(
                        "game loop stopped after {:.1}s, {} samples",
                        report.runtime_secs,
                        report.fps.history.len()
                    );
                    return report;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick with the measured delta
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;
        let result = engine.tick(dt);

        // 3. Record the frame, sampling counts after pool reclamation
        monitor.frame_rendered();
        let now_secs = epoch.elapsed().as_secs_f64();
        if monitor.sample_due(now_secs) {
            monitor.sample(now_secs, result.active, result.pool_occupancy);
        }

        // 4. Store latest frame for synchronous polling
        if let Ok(mut lock) = latest_frame.lock() {
            *lock = Some(result);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
