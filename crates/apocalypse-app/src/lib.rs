//! Headless runner for the Apocalypse engine.
//!
//! Wires the simulation, the performance monitor and the collaborator
//! contracts together: a fixed-rate game loop thread, a session flow,
//! and a small binary that runs the self-test and prints its report.

pub mod game_loop;
pub mod session;

pub use apocalypse_core as core;
