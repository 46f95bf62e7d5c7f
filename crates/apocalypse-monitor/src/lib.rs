//! Performance monitor for APOCALYPSE.
//!
//! Observes the simulation without influencing it: frame-rate
//! sampling into a bounded history, pool occupancy snapshots, outlier
//! filtering, pass/fail health evaluation, a fixed-duration self-test
//! runner, and the pooling/collision micro-benchmarks.

pub mod bench;
pub mod monitor;
pub mod selftest;
pub mod stats;

pub use monitor::{MonitorConfig, PerformanceMonitor};
pub use selftest::{SelfTest, SelfTestConfig, SelfTestResults};
