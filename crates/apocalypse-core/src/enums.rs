//! Enumerations shared across the simulation.

use serde::{Deserialize, Serialize};

/// Category of a bonus target. Each category carries a fixed-shape
/// profile (spawn weight, point value, display color) looked up from a
/// validated [`crate::config::BonusTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusCategory {
    Asteroid,
    Satellite,
    Ufo,
}

impl BonusCategory {
    /// Fixed evaluation order for cumulative spawn-weight mapping.
    pub const ORDER: [BonusCategory; 3] = [
        BonusCategory::Asteroid,
        BonusCategory::Satellite,
        BonusCategory::Ufo,
    ];
}

/// Display color identifier for floating text and bonus targets.
/// The host UI maps these to concrete palette values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorId {
    #[default]
    White,
    Amber,
    Blue,
    Green,
    Red,
}

/// Life phase of an explosion's radius envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionPhase {
    #[default]
    Growing,
    Decaying,
}

/// Coarse engine state. Ticks only advance entity state while `Running`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    #[default]
    Running,
    Paused,
}

/// Entity type names, used as keys in pool configuration and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Missile,
    CounterMissile,
    Explosion,
    FloatingText,
    BonusTarget,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Missile,
        EntityKind::CounterMissile,
        EntityKind::Explosion,
        EntityKind::FloatingText,
        EntityKind::BonusTarget,
    ];
}
