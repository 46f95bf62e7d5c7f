//! Fixed-duration self-test mode.
//!
//! Runs the simulation under a synthetic load for a configured
//! duration, records per-frame rates, then emits a single summary and
//! stops. The loop is owned entirely by the runner — no scheduling
//! hook is patched, so there is nothing to restore on cancellation;
//! the monitor is always stopped before returning. Used for the
//! benchmark scenarios and for automated frame-budget checks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use log::info;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use apocalypse_core::constants::{
    CANVAS_WIDTH, MISSILE_SPEED, NOMINAL_DT, SELF_TEST_DURATION_SECS, SELF_TEST_WARMUP_FRAMES,
};
use apocalypse_core::types::{Position, Velocity};
use apocalypse_sim::{Simulate, SimulationEngine};

use crate::monitor::{evaluate_health, HealthCriteria};
use crate::stats;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelfTestConfig {
    /// Wall-clock duration of the run (seconds).
    pub duration_secs: f64,
    /// Simulation delta passed to each tick.
    pub dt: f64,
    /// Frames skipped at the start to avoid startup anomalies.
    pub warmup_frames: u64,
    /// Hostile missiles injected per second of synthetic load.
    pub load_missiles_per_sec: f64,
    pub criteria: HealthCriteria,
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        Self {
            duration_secs: SELF_TEST_DURATION_SECS,
            dt: NOMINAL_DT,
            warmup_frames: SELF_TEST_WARMUP_FRAMES,
            load_missiles_per_sec: 20.0,
            criteria: HealthCriteria::default(),
        }
    }
}

/// Summary emitted once at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfTestResults {
    pub frames: u64,
    pub avg_fps: f64,
    /// Outlier-filtered minimum.
    pub min_fps: f64,
    /// Outlier-filtered maximum.
    pub max_fps: f64,
    pub avg_object_count: f64,
    pub max_object_count: usize,
    pub cancelled: bool,
    pub passed: bool,
}

/// Bounded self-test runner.
pub struct SelfTest {
    config: SelfTestConfig,
}

impl SelfTest {
    pub fn new(config: SelfTestConfig) -> Self {
        Self { config }
    }

    /// Run the engine until the duration elapses or `stop` is raised.
    /// A cancelled run still emits a summary over the frames recorded
    /// so far, and never reports `passed`.
    pub fn run(
        &self,
        engine: &mut SimulationEngine,
        rng: &mut ChaCha8Rng,
        stop: &AtomicBool,
    ) -> SelfTestResults {
        let started = Instant::now();
        let mut last_frame = started;
        let mut frame_rates = Vec::new();
        let mut object_counts = Vec::new();
        let mut frames: u64 = 0;
        let mut cancelled = false;
        let mut load_carry = 0.0;

        loop {
            if stop.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }
            if started.elapsed().as_secs_f64() >= self.config.duration_secs {
                break;
            }

            // Synthetic load: a steady rain of hostile missiles.
            load_carry += self.config.load_missiles_per_sec * self.config.dt;
            while load_carry >= 1.0 {
                load_carry -= 1.0;
                let x = rng.gen_range(0.0..CANVAS_WIDTH);
                engine
                    .world_mut()
                    .spawn_missile(Position::new(x, 0.0), Velocity::new(0.0, MISSILE_SPEED));
            }

            let result = engine.tick(self.config.dt);
            frames += 1;

            let now = Instant::now();
            if frames > self.config.warmup_frames {
                let frame_secs = now.duration_since(last_frame).as_secs_f64();
                if frame_secs > 0.0 {
                    frame_rates.push(1.0 / frame_secs);
                }
                object_counts.push(result.active.total());
            }
            last_frame = now;
        }

        let results = self.summarize(frames, &frame_rates, &object_counts, cancelled);
        info!(
            "self-test complete: {} frames, avg {:.1} fps, min {:.1} fps, passed: {}",
            results.frames, results.avg_fps, results.min_fps, results.passed
        );
        results
    }

    fn summarize(
        &self,
        frames: u64,
        frame_rates: &[f64],
        object_counts: &[usize],
        cancelled: bool,
    ) -> SelfTestResults {
        let health = evaluate_health(frame_rates, self.config.criteria);
        let counts: Vec<f64> = object_counts.iter().map(|&c| c as f64).collect();
        SelfTestResults {
            frames,
            avg_fps: health.average_fps,
            min_fps: health.min_fps,
            max_fps: health.max_fps,
            avg_object_count: stats::mean(&counts),
            max_object_count: object_counts.iter().copied().max().unwrap_or(0),
            cancelled,
            passed: !cancelled && health.healthy,
        }
    }
}
