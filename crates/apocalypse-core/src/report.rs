//! Monitor report shapes consumed by external dashboards and tests.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// Per-type entity counts. Used both for active counts and for pool
/// occupancy snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub missiles: usize,
    pub counter_missiles: usize,
    pub explosions: usize,
    pub floating_texts: usize,
    pub bonus_targets: usize,
}

impl EntityCounts {
    pub fn total(&self) -> usize {
        self.missiles
            + self.counter_missiles
            + self.explosions
            + self.floating_texts
            + self.bonus_targets
    }

    pub fn get(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Missile => self.missiles,
            EntityKind::CounterMissile => self.counter_missiles,
            EntityKind::Explosion => self.explosions,
            EntityKind::FloatingText => self.floating_texts,
            EntityKind::BonusTarget => self.bonus_targets,
        }
    }
}

/// FPS summary over the sample history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FpsStats {
    /// Most recent sample.
    pub current: f64,
    /// Mean over the (unfiltered) history.
    pub average: f64,
    /// Minimum after outlier filtering.
    pub min: f64,
    /// Maximum after outlier filtering.
    pub max: f64,
    pub history: Vec<f64>,
}

/// One monitor sample, appended to the bounded history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    /// Monotonic timestamp in seconds since monitor start.
    pub timestamp_secs: f64,
    /// Instantaneous FPS: frames since previous sample over elapsed time.
    pub fps: f64,
    pub active_counts: EntityCounts,
    pub pool_occupancy: EntityCounts,
}

/// The structured report emitted by the performance monitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorReport {
    /// Timestamp of report generation, seconds since monitor start.
    pub timestamp_secs: f64,
    /// Total monitored runtime in seconds.
    pub runtime_secs: f64,
    pub fps: FpsStats,
    pub pool_occupancy: EntityCounts,
    pub active_counts: EntityCounts,
    /// Registered event-listener-like side channels.
    pub event_listeners: i64,
}
