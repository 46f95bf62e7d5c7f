//! Simulation engine for APOCALYPSE.
//!
//! Owns the [`world::SimulationWorld`] (pools plus active entity
//! arrays), runs the per-tick systems in a fixed order, and produces
//! a [`engine::FrameResult`] per tick. Completely headless — callable
//! synchronously from tests without a display loop.

pub mod engine;
pub mod pool;
pub mod systems;
pub mod world;

pub use apocalypse_core as core;
pub use engine::{FrameResult, SimConfig, Simulate, SimulationEngine};

#[cfg(test)]
mod tests;
