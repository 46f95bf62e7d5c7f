//! The performance monitor proper.
//!
//! Instrumentation is explicit: the host loop calls `frame_rendered`
//! once per rendered frame and `sample` when a sample is due, passing
//! count snapshots taken after that tick's pool reclamation. Nothing
//! here patches scheduling primitives, and nothing here mutates
//! simulation state. Time is supplied by the caller as seconds on any
//! monotonic clock, which keeps the monitor fully testable.

use std::collections::VecDeque;

use apocalypse_core::constants::{
    HEALTHY_AVERAGE_FPS, HEALTHY_MINIMUM_FPS, SAMPLE_HISTORY_LENGTH, SAMPLE_INTERVAL_SECS,
};
use apocalypse_core::report::{EntityCounts, FpsStats, MonitorReport, PerformanceSample};
use serde::{Deserialize, Serialize};

use crate::stats;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between samples.
    pub sample_interval_secs: f64,
    /// Samples kept; oldest evicted beyond this.
    pub history_length: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_interval_secs: SAMPLE_INTERVAL_SECS,
            history_length: SAMPLE_HISTORY_LENGTH,
        }
    }
}

/// Health thresholds for pass/fail evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthCriteria {
    /// Low-water mark for average FPS.
    pub min_average_fps: f64,
    /// Hard floor for (outlier-filtered) minimum FPS.
    pub fps_hard_floor: f64,
}

impl Default for HealthCriteria {
    fn default() -> Self {
        Self {
            min_average_fps: HEALTHY_AVERAGE_FPS,
            fps_hard_floor: HEALTHY_MINIMUM_FPS,
        }
    }
}

/// Outcome of a health check over an FPS history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthEvaluation {
    pub average_fps: f64,
    /// Minimum after outlier filtering.
    pub min_fps: f64,
    /// Maximum after outlier filtering.
    pub max_fps: f64,
    pub healthy: bool,
}

/// Evaluate a raw FPS history against the criteria. Outlier frames are
/// excluded from the min/max computation before the check.
pub fn evaluate_health(history: &[f64], criteria: HealthCriteria) -> HealthEvaluation {
    let filtered = stats::filter_outliers(history);
    let average_fps = stats::mean(history);
    let min_fps = stats::min(&filtered);
    let max_fps = stats::max(&filtered);
    HealthEvaluation {
        average_fps,
        min_fps,
        max_fps,
        healthy: !history.is_empty()
            && average_fps >= criteria.min_average_fps
            && min_fps >= criteria.fps_hard_floor,
    }
}

/// Read-only observer of frame timing and pool/active occupancy.
#[derive(Debug)]
pub struct PerformanceMonitor {
    config: MonitorConfig,
    samples: VecDeque<PerformanceSample>,
    /// Retained across `stop` so a final report still covers the whole
    /// monitored runtime.
    started_at_secs: Option<f64>,
    monitoring: bool,
    last_sample_at_secs: f64,
    frames_since_sample: u64,
    /// Registered event-listener-like side channels.
    listeners: i64,
}

impl PerformanceMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            samples: VecDeque::with_capacity(config.history_length),
            started_at_secs: None,
            monitoring: false,
            last_sample_at_secs: 0.0,
            frames_since_sample: 0,
            listeners: 0,
        }
    }

    /// Begin monitoring at `now` (seconds on the caller's clock).
    pub fn start(&mut self, now_secs: f64) {
        if self.monitoring {
            return;
        }
        self.monitoring = true;
        self.started_at_secs = Some(now_secs);
        self.last_sample_at_secs = now_secs;
        self.frames_since_sample = 0;
        self.samples.clear();
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring
    }

    /// Stop monitoring. History and the start time are retained so a
    /// final report still covers the whole monitored runtime.
    pub fn stop(&mut self) {
        self.monitoring = false;
    }

    /// Count one rendered frame.
    pub fn frame_rendered(&mut self) {
        if self.monitoring {
            self.frames_since_sample += 1;
        }
    }

    /// True when at least one sample interval has elapsed.
    pub fn sample_due(&self, now_secs: f64) -> bool {
        self.monitoring
            && now_secs - self.last_sample_at_secs >= self.config.sample_interval_secs
    }

    /// Take a sample: instantaneous FPS from frames rendered since the
    /// previous sample over elapsed time, plus the supplied occupancy
    /// snapshots. Oldest sample is evicted past the history length.
    pub fn sample(&mut self, now_secs: f64, active: EntityCounts, pool_occupancy: EntityCounts) {
        if !self.monitoring {
            return;
        }
        let elapsed = now_secs - self.last_sample_at_secs;
        let fps = if elapsed > 0.0 {
            self.frames_since_sample as f64 / elapsed
        } else {
            0.0
        };

        self.samples.push_back(PerformanceSample {
            timestamp_secs: now_secs,
            fps,
            active_counts: active,
            pool_occupancy,
        });
        while self.samples.len() > self.config.history_length {
            self.samples.pop_front();
        }

        self.frames_since_sample = 0;
        self.last_sample_at_secs = now_secs;
    }

    /// Register / unregister an event-listener-like side channel.
    pub fn listener_registered(&mut self) {
        self.listeners += 1;
    }

    pub fn listener_unregistered(&mut self) {
        self.listeners -= 1;
    }

    /// Raw FPS history, oldest first.
    pub fn fps_history(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.fps).collect()
    }

    pub fn samples(&self) -> impl Iterator<Item = &PerformanceSample> {
        self.samples.iter()
    }

    /// Evaluate the current history against the criteria.
    pub fn health(&self, criteria: HealthCriteria) -> HealthEvaluation {
        evaluate_health(&self.fps_history(), criteria)
    }

    /// Build the structured report consumed by dashboards and tests.
    pub fn report(&self, now_secs: f64) -> MonitorReport {
        let history = self.fps_history();
        let filtered = stats::filter_outliers(&history);
        let latest = self.samples.back();
        let started = self.started_at_secs.unwrap_or(self.last_sample_at_secs);

        MonitorReport {
            timestamp_secs: now_secs,
            runtime_secs: (now_secs - started).max(0.0),
            fps: FpsStats {
                current: latest.map_or(0.0, |s| s.fps),
                average: stats::mean(&history),
                min: stats::min(&filtered),
                max: stats::max(&filtered),
                history,
            },
            pool_occupancy: latest.map_or_else(EntityCounts::default, |s| s.pool_occupancy),
            active_counts: latest.map_or_else(EntityCounts::default, |s| s.active_counts),
            event_listeners: self.listeners,
        }
    }
}
