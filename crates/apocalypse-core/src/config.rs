//! Startup configuration with fail-fast validation.
//!
//! Configuration errors are fatal to initialization; once a config has
//! validated, every downstream pool and spawn operation is total.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{BonusCategory, ColorId, EntityKind};

/// Invalid startup configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("pool for {kind:?} has zero capacity")]
    ZeroPoolCapacity { kind: EntityKind },

    #[error("pool for {kind:?} has initial size {initial} exceeding max {max}")]
    InitialExceedsMax {
        kind: EntityKind,
        initial: usize,
        max: usize,
    },

    #[error("spawn weight {weight} for {category:?} outside [0, 1]")]
    InvalidSpawnWeight {
        category: BonusCategory,
        weight: f64,
    },

    #[error("bonus spawn weights sum to {sum}, exceeding 1.0")]
    SpawnWeightsExceedUnity { sum: f64 },

    #[error("bonus category {category:?} has zero point value")]
    ZeroPointValue { category: BonusCategory },
}

/// Sizing for one entity pool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoolSizes {
    /// Entities pre-allocated (dormant) at startup.
    pub initial: usize,
    /// Capacity bound; releases past this are dropped.
    pub max: usize,
}

impl PoolSizes {
    pub fn new(initial: usize, max: usize) -> Self {
        Self { initial, max }
    }
}

/// Pool sizing for every entity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    pub missile: PoolSizes,
    pub counter_missile: PoolSizes,
    pub explosion: PoolSizes,
    pub floating_text: PoolSizes,
    pub bonus_target: PoolSizes,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            missile: PoolSizes::new(POOL_SIZE_MISSILE, POOL_SIZE_MISSILE),
            counter_missile: PoolSizes::new(POOL_SIZE_COUNTER_MISSILE, POOL_SIZE_COUNTER_MISSILE),
            explosion: PoolSizes::new(POOL_SIZE_EXPLOSION, POOL_SIZE_EXPLOSION),
            floating_text: PoolSizes::new(POOL_SIZE_FLOATING_TEXT, POOL_SIZE_FLOATING_TEXT),
            bonus_target: PoolSizes::new(POOL_SIZE_BONUS_TARGET, POOL_SIZE_BONUS_TARGET),
        }
    }
}

impl PoolConfig {
    /// Validate every pool sizing entry. Fails fast on the first error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (kind, sizes) in [
            (EntityKind::Missile, self.missile),
            (EntityKind::CounterMissile, self.counter_missile),
            (EntityKind::Explosion, self.explosion),
            (EntityKind::FloatingText, self.floating_text),
            (EntityKind::BonusTarget, self.bonus_target),
        ] {
            if sizes.max == 0 {
                return Err(ConfigError::ZeroPoolCapacity { kind });
            }
            if sizes.initial > sizes.max {
                return Err(ConfigError::InitialExceedsMax {
                    kind,
                    initial: sizes.initial,
                    max: sizes.max,
                });
            }
        }
        Ok(())
    }
}

/// Fixed-shape profile for one bonus category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BonusProfile {
    /// Spawn weight in [0, 1]. Weights need not sum to 1; the
    /// remainder is the no-spawn probability.
    pub weight: f64,
    /// Points awarded on hit.
    pub points: u64,
    pub color: ColorId,
}

/// Spawn-weight table over all bonus categories, in fixed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusTable {
    pub asteroid: BonusProfile,
    pub satellite: BonusProfile,
    pub ufo: BonusProfile,
}

impl Default for BonusTable {
    fn default() -> Self {
        Self {
            asteroid: BonusProfile {
                weight: 0.4,
                points: 200,
                color: ColorId::Amber,
            },
            satellite: BonusProfile {
                weight: 0.3,
                points: 300,
                color: ColorId::Blue,
            },
            ufo: BonusProfile {
                weight: 0.2,
                points: 500,
                color: ColorId::Green,
            },
        }
    }
}

impl BonusTable {
    /// Profile for a category.
    pub fn profile(&self, category: BonusCategory) -> &BonusProfile {
        match category {
            BonusCategory::Asteroid => &self.asteroid,
            BonusCategory::Satellite => &self.satellite,
            BonusCategory::Ufo => &self.ufo,
        }
    }

    /// Map a uniform draw in [0, 1) to a category against cumulative
    /// weight thresholds in fixed category order. A draw beyond the
    /// weight sum selects nothing.
    pub fn draw(&self, roll: f64) -> Option<BonusCategory> {
        let mut cumulative = 0.0;
        for category in BonusCategory::ORDER {
            cumulative += self.profile(category).weight;
            if roll < cumulative {
                return Some(category);
            }
        }
        None
    }

    /// Validate weights and point values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut sum = 0.0;
        for category in BonusCategory::ORDER {
            let profile = self.profile(category);
            if !profile.weight.is_finite() || !(0.0..=1.0).contains(&profile.weight) {
                return Err(ConfigError::InvalidSpawnWeight {
                    category,
                    weight: profile.weight,
                });
            }
            if profile.points == 0 {
                return Err(ConfigError::ZeroPointValue { category });
            }
            sum += profile.weight;
        }
        if sum > 1.0 {
            return Err(ConfigError::SpawnWeightsExceedUnity { sum });
        }
        Ok(())
    }
}
