//! Fixed-capacity entity pools.
//!
//! A pool hands out ready-to-use entities without allocating when
//! possible and reclaims dead entities for reuse. Ownership hand-off
//! is explicit: `acquire` moves an entity out of the pool to the
//! caller (who inserts it into an active array), `release` moves it
//! back. An entity is never in both places.

use serde::{Deserialize, Serialize};

use apocalypse_core::config::PoolSizes;
use apocalypse_core::entities::Poolable;

/// Lifetime counters for pool instrumentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Entities constructed via factory (pool was empty).
    pub constructed: u64,
    /// Entities handed out from the dormant set.
    pub reused: u64,
    /// Entities accepted back into the pool.
    pub released: u64,
    /// Entities dropped because the pool was at capacity.
    pub dropped: u64,
}

/// A bounded cache of dormant, reusable entities of one type.
#[derive(Debug)]
pub struct Pool<T: Poolable> {
    items: Vec<T>,
    max: usize,
    stats: PoolStats,
}

impl<T: Poolable> Pool<T> {
    /// Create a pool pre-filled to `sizes.initial` with dormant
    /// entities from `factory`, so early gameplay never pays
    /// construction cost. Sizing must have been validated.
    pub fn preallocate(sizes: PoolSizes, factory: impl Fn() -> T) -> Self {
        let mut items = Vec::with_capacity(sizes.max);
        for _ in 0..sizes.initial {
            let mut entity = factory();
            entity.reset();
            items.push(entity);
        }
        Self {
            items,
            max: sizes.max,
            stats: PoolStats::default(),
        }
    }

    /// Take an entity: the most recently released one when the pool is
    /// non-empty (LIFO), otherwise a fresh one from `factory`. No side
    /// effect on any active collection — the caller owns insertion.
    pub fn acquire(&mut self, factory: impl FnOnce() -> T) -> T {
        match self.items.pop() {
            Some(entity) => {
                self.stats.reused += 1;
                entity
            }
            None => {
                self.stats.constructed += 1;
                factory()
            }
        }
    }

    /// Reclaim a dead entity: reset it to its dormant baseline and
    /// push it back, unless the pool is at capacity — then it is
    /// dropped to bound worst-case memory.
    pub fn release(&mut self, mut entity: T) {
        entity.reset();
        if self.items.len() < self.max {
            self.items.push(entity);
            self.stats.released += 1;
        } else {
            self.stats.dropped += 1;
        }
    }

    /// Current dormant count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Capacity bound.
    pub fn max_size(&self) -> usize {
        self.max
    }

    pub fn stats(&self) -> PoolStats {
        self.stats
    }
}
