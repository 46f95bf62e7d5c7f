//! Micro-benchmarks for the two optimizations the engine carries:
//! entity pooling versus per-use construction, and rectangle-overlap
//! versus distance-based collision testing.
//!
//! These are comparative smoke measurements for the self-test report,
//! not rigorous benchmarks.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use apocalypse_core::config::PoolSizes;
use apocalypse_core::constants::MISSILE_RADIUS;
use apocalypse_core::entities::Missile;
use apocalypse_core::types::Position;
use apocalypse_sim::pool::Pool;

/// Result of the pooled-vs-unpooled allocation comparison.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PoolingBenchResults {
    pub time_no_pool: Duration,
    pub time_with_pool: Duration,
    /// Percent improvement of pooling over construction (may be
    /// negative on a fast allocator).
    pub improvement_pct: f64,
    pub passed: bool,
}

/// Result of the simple-vs-distance collision comparison.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CollisionBenchResults {
    pub time_simple: Duration,
    pub time_distance: Duration,
    pub improvement_pct: f64,
    /// Always true: the distance test is kept for accuracy even when
    /// it is not faster.
    pub passed: bool,
}

/// Time `iterations` acquire/release cycles against fresh construction.
pub fn bench_object_pooling(iterations: usize) -> PoolingBenchResults {
    // Without pooling: construct and drop.
    let start = Instant::now();
    let mut scratch: Vec<Missile> = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        scratch.push(black_box(Missile {
            alive: true,
            ..Default::default()
        }));
    }
    while scratch.pop().is_some() {}
    let time_no_pool = start.elapsed();

    // With pooling: same churn through a pre-allocated pool.
    let mut pool: Pool<Missile> =
        Pool::preallocate(PoolSizes::new(iterations, iterations), Missile::default);
    let start = Instant::now();
    let mut active: Vec<Missile> = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let mut missile = pool.acquire(Missile::default);
        missile.alive = true;
        active.push(black_box(missile));
    }
    while let Some(missile) = active.pop() {
        pool.release(missile);
    }
    let time_with_pool = start.elapsed();

    let improvement_pct = improvement(time_no_pool, time_with_pool);
    PoolingBenchResults {
        time_no_pool,
        time_with_pool,
        improvement_pct,
        passed: time_with_pool <= time_no_pool,
    }
}

/// Time rectangle-overlap vs euclidean-distance collision testing over
/// 100 missiles x 20 explosions x `iterations` passes.
pub fn bench_collision_detection(iterations: usize) -> CollisionBenchResults {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let missiles: Vec<Position> = (0..100)
        .map(|_| Position::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)))
        .collect();
    let explosions: Vec<(Position, f64)> = (0..20)
        .map(|_| {
            (
                Position::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)),
                rng.gen_range(30.0..50.0),
            )
        })
        .collect();

    // Simple bounding-box overlap.
    let start = Instant::now();
    let mut hits_simple = 0u64;
    for _ in 0..iterations {
        for m in &missiles {
            for &(e, radius) in &explosions {
                let hit = m.x >= e.x - radius
                    && m.x <= e.x + radius
                    && m.y >= e.y - radius
                    && m.y <= e.y + radius;
                hits_simple += u64::from(hit);
            }
        }
    }
    black_box(hits_simple);
    let time_simple = start.elapsed();

    // Distance-based test, as the engine performs it.
    let start = Instant::now();
    let mut hits_distance = 0u64;
    for _ in 0..iterations {
        for m in &missiles {
            for &(e, radius) in &explosions {
                let hit = m.distance_to(&e) < MISSILE_RADIUS + radius;
                hits_distance += u64::from(hit);
            }
        }
    }
    black_box(hits_distance);
    let time_distance = start.elapsed();

    CollisionBenchResults {
        time_simple,
        time_distance,
        improvement_pct: improvement(time_simple, time_distance),
        passed: true,
    }
}

fn improvement(baseline: Duration, candidate: Duration) -> f64 {
    let base = baseline.as_secs_f64();
    if base <= 0.0 {
        return 0.0;
    }
    (base - candidate.as_secs_f64()) / base * 100.0
}
