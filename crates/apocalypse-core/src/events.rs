//! Events emitted by the simulation for host UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::BonusCategory;
use crate::types::Position;

/// Per-frame side effects, collected into the frame result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A missile was destroyed by an explosion.
    MissileDestroyed { pos: Position, points: u64 },
    /// A missile reached the ground / left play without interception.
    MissileImpacted { pos: Position },
    /// A counter-missile arrived at its target and detonated.
    CounterMissileDetonated { pos: Position },
    /// A bonus target was hit by a pointer shot.
    BonusHit {
        category: BonusCategory,
        pos: Position,
        points: u64,
    },
    /// A bonus target spawned.
    BonusSpawned {
        category: BonusCategory,
        pos: Position,
    },
}
