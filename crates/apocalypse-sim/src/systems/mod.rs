//! Per-tick systems that operate on the simulation world.
//!
//! Systems are free functions taking `&mut SimulationWorld`. They do
//! not own state — all state lives in the world. The engine runs them
//! in a fixed order each tick: movement, explosion update, collision,
//! counter-missile arrival, bonus spawning, floating-text advance.

pub mod bonus;
pub mod collisions;
pub mod counter_missile;
pub mod explosions;
pub mod floating_text;
pub mod movement;
