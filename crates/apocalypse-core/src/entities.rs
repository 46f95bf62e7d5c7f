//! Entity records.
//!
//! Entities are plain value records with an `alive` lifecycle flag so
//! instances can be recycled through pools without reallocation. Every
//! record implements [`Poolable`]: `reset` returns it to a neutral
//! dormant baseline (zero kinematics, cleared payload, `alive = false`).

use serde::{Deserialize, Serialize};

use crate::enums::{BonusCategory, ColorId, ExplosionPhase};
use crate::types::{Position, Velocity};

/// An entity that can live in a fixed-capacity pool.
pub trait Poolable {
    /// Return the record to its dormant baseline. Must leave
    /// `alive = false`.
    fn reset(&mut self);
}

/// An incoming enemy missile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Missile {
    pub pos: Position,
    pub vel: Velocity,
    /// Index of the silo this missile is attributed to, if any.
    pub owner: Option<usize>,
    pub alive: bool,
}

impl Poolable for Missile {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A defensive missile fired by a player silo toward a target point.
/// On arrival it detonates into an [`Explosion`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterMissile {
    pub pos: Position,
    pub vel: Velocity,
    /// Index of the silo that fired this counter-missile.
    pub origin: usize,
    /// Detonation point.
    pub target: Position,
    pub alive: bool,
}

impl Poolable for CounterMissile {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// An expanding-then-collapsing blast circle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Position,
    /// Current radius in pixels.
    pub radius: f64,
    pub phase: ExplosionPhase,
    pub alive: bool,
}

impl Poolable for Explosion {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Transient score/event feedback text, drifting upward until its
/// lifetime expires. No collision participation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloatingText {
    pub pos: Position,
    pub text: String,
    pub color: ColorId,
    /// Remaining lifetime in seconds.
    pub lifetime_secs: f64,
    /// Vertical drift velocity (px/s, negative = up).
    pub drift_vy: f64,
    pub alive: bool,
}

impl Poolable for FloatingText {
    fn reset(&mut self) {
        self.pos = Position::default();
        self.text.clear();
        self.color = ColorId::default();
        self.lifetime_secs = 0.0;
        self.drift_vy = 0.0;
        self.alive = false;
    }
}

/// A clickable bonus target spawned stochastically between waves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusTarget {
    pub pos: Position,
    /// Hit-test radius in pixels.
    pub size: f64,
    pub category: BonusCategory,
    pub alive: bool,
}

impl Default for BonusTarget {
    fn default() -> Self {
        Self {
            pos: Position::default(),
            size: 0.0,
            category: BonusCategory::Asteroid,
            alive: false,
        }
    }
}

impl BonusTarget {
    /// Strict-inequality hit test against a pointer position.
    pub fn is_hit(&self, point: Position) -> bool {
        self.pos.distance_to(&point) < self.size
    }
}

impl Poolable for BonusTarget {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A player defense silo. Not pooled — silos live for the whole
/// session and are never recycled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Silo {
    pub pos: Position,
    /// Counter-missiles remaining.
    pub missiles: u32,
    pub alive: bool,
}
