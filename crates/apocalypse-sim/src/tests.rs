//! Tests for the pool manager, simulation step, collision resolution,
//! and spawn policy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use apocalypse_core::commands::PlayerCommand;
use apocalypse_core::config::{BonusTable, ConfigError, PoolConfig, PoolSizes};
use apocalypse_core::constants::*;
use apocalypse_core::entities::{Explosion, Missile};
use apocalypse_core::enums::{BonusCategory, EnginePhase, ExplosionPhase};
use apocalypse_core::events::GameEvent;
use apocalypse_core::types::{Position, Velocity};

use crate::engine::{SimConfig, Simulate, SimulationEngine};
use crate::pool::Pool;
use crate::systems;
use crate::world::SimulationWorld;

fn engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig::default()).unwrap()
}

fn world() -> SimulationWorld {
    SimulationWorld::new(&PoolConfig::default()).unwrap()
}

/// Push an explosion with a fixed radius directly into the active array.
fn place_explosion(world: &mut SimulationWorld, x: f64, y: f64, radius: f64) {
    let mut explosion = world.pools.explosion.acquire(Explosion::default);
    explosion.pos = Position::new(x, y);
    explosion.radius = radius;
    explosion.phase = ExplosionPhase::Growing;
    explosion.alive = true;
    world.explosions.push(explosion);
}

// ---- Pool manager ----

#[test]
fn test_pool_preallocation() {
    let pool: Pool<Missile> = Pool::preallocate(PoolSizes::new(10, 20), Missile::default);
    assert_eq!(pool.len(), 10);
    assert_eq!(pool.max_size(), 20);
    assert_eq!(pool.stats().constructed, 0);
}

#[test]
fn test_pool_acquire_reuses_lifo_then_constructs() {
    let mut pool: Pool<Missile> = Pool::preallocate(PoolSizes::new(2, 4), Missile::default);

    let a = pool.acquire(Missile::default);
    let b = pool.acquire(Missile::default);
    assert_eq!(pool.len(), 0);
    assert_eq!(pool.stats().reused, 2);

    // Pool empty: factory path.
    let c = pool.acquire(Missile::default);
    assert_eq!(pool.stats().constructed, 1);

    pool.release(a);
    pool.release(b);
    pool.release(c);
    assert_eq!(pool.len(), 3);
}

#[test]
fn test_pool_release_resets_and_bounds_capacity() {
    let mut pool: Pool<Missile> = Pool::preallocate(PoolSizes::new(0, 2), Missile::default);

    for _ in 0..4 {
        let missile = Missile {
            pos: Position::new(5.0, 5.0),
            vel: Velocity::new(1.0, 1.0),
            owner: Some(1),
            alive: true,
        };
        pool.release(missile);
    }

    // Capacity 2: two accepted, two dropped.
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.stats().released, 2);
    assert_eq!(pool.stats().dropped, 2);

    // Released entities came back at the dormant baseline.
    let reused = pool.acquire(Missile::default);
    assert!(!reused.alive);
    assert_eq!(reused.pos, Position::default());
    assert_eq!(reused.owner, None);
}

#[test]
fn test_pool_conservation_invariant() {
    let initial = 5usize;
    let mut pool: Pool<Missile> = Pool::preallocate(PoolSizes::new(initial, initial), Missile::default);
    let mut active: Vec<Missile> = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..1000 {
        if rng.gen_bool(0.5) {
            let mut missile = pool.acquire(Missile::default);
            missile.alive = true;
            active.push(missile);
        } else if let Some(missile) = active.pop() {
            pool.release(missile);
        }

        let stats = pool.stats();
        let budget = initial as u64 + stats.constructed;
        let accounted = active.len() as u64 + pool.len() as u64 + stats.dropped;
        assert!(
            accounted <= budget,
            "conservation violated: {accounted} accounted > {budget} budget"
        );
    }
}

// ---- Collision resolution ----

#[test]
fn test_collision_boundary_strict_inequality() {
    // Radii: missile 2 + explosion 10 = threshold 12.
    // 11.9 apart: collision. 12.0 exactly: miss. 12.1: miss.
    for (separation, expect_hit) in [(11.9, true), (12.0, false), (12.1, false)] {
        let mut world = world();
        world.spawn_missile(Position::new(100.0, 100.0), Velocity::default());
        place_explosion(&mut world, 100.0 + separation, 100.0, 10.0);

        systems::collisions::run(&mut world);

        let survived = world.missiles.len();
        if expect_hit {
            assert_eq!(survived, 0, "separation {separation} should collide");
            assert_eq!(world.score.score, MISSILE_KILL_POINTS);
        } else {
            assert_eq!(survived, 1, "separation {separation} should not collide");
            assert_eq!(world.score.score, 0);
        }
    }
}

#[test]
fn test_missile_dies_at_most_once_per_tick() {
    let mut world = world();
    world.spawn_missile(Position::new(100.0, 100.0), Velocity::default());
    // Two explosions both overlapping the missile.
    place_explosion(&mut world, 102.0, 100.0, 10.0);
    place_explosion(&mut world, 98.0, 100.0, 10.0);

    let pooled_before = world.pools.missile.len();
    systems::collisions::run(&mut world);

    assert_eq!(world.missiles.len(), 0);
    // Released exactly once: pool grew by exactly one.
    assert_eq!(world.pools.missile.len(), pooled_before + 1);
    // Credited exactly once.
    assert_eq!(world.score.score, MISSILE_KILL_POINTS);
    assert_eq!(world.score.missiles_destroyed, 1);
}

#[test]
fn test_collision_only_destroys_overlapping_missiles() {
    let mut world = world();
    world.spawn_missile(Position::new(100.0, 100.0), Velocity::default());
    world.spawn_missile(Position::new(200.0, 200.0), Velocity::default());
    world.spawn_missile(Position::new(300.0, 300.0), Velocity::default());
    place_explosion(&mut world, 105.0, 105.0, 10.0);

    systems::collisions::run(&mut world);

    assert_eq!(world.missiles.len(), 2);
    assert!(world
        .missiles
        .iter()
        .all(|m| m.pos != Position::new(100.0, 100.0)));
}

#[test]
fn test_collision_spawns_floating_text_at_kill_position() {
    let mut world = world();
    world.spawn_missile(Position::new(100.0, 100.0), Velocity::default());
    place_explosion(&mut world, 100.0, 100.0, 10.0);

    systems::collisions::run(&mut world);

    assert_eq!(world.floating_texts.len(), 1);
    let text = &world.floating_texts[0];
    assert_eq!(text.text, "+100");
    assert_eq!(text.pos, Position::new(100.0, 100.0));
    assert!(text.lifetime_secs > 0.0);
}

// ---- Movement and lifecycle ----

#[test]
fn test_movement_integrates_velocity() {
    let mut world = world();
    world.spawn_missile(Position::new(100.0, 100.0), Velocity::new(60.0, 30.0));

    systems::movement::run(&mut world, 0.5);

    assert_eq!(world.missiles[0].pos, Position::new(130.0, 115.0));
}

#[test]
fn test_off_canvas_missile_released() {
    let mut world = world();
    world.spawn_missile(Position::new(-100.0, 50.0), Velocity::new(-10.0, 0.0));
    let pooled_before = world.pools.missile.len();

    systems::movement::run(&mut world, NOMINAL_DT);

    assert_eq!(world.missiles.len(), 0);
    assert_eq!(world.pools.missile.len(), pooled_before + 1);
}

#[test]
fn test_missile_ground_impact_emits_event() {
    let mut world = world();
    world.spawn_missile(Position::new(400.0, 599.9), Velocity::new(0.0, 60.0));

    systems::movement::run(&mut world, NOMINAL_DT);

    assert_eq!(world.missiles.len(), 0);
    assert!(matches!(
        world.events.as_slice(),
        [GameEvent::MissileImpacted { .. }]
    ));
}

#[test]
fn test_non_finite_position_isolated_to_entity() {
    let mut world = world();
    world.spawn_missile(Position::new(100.0, 100.0), Velocity::new(f64::NAN, 0.0));
    world.spawn_missile(Position::new(200.0, 200.0), Velocity::new(1.0, 0.0));

    systems::movement::run(&mut world, NOMINAL_DT);

    // The anomalous missile is released; the healthy one advances.
    assert_eq!(world.missiles.len(), 1);
    assert!(world.missiles[0].pos.is_finite());
}

#[test]
fn test_explosion_grows_peaks_decays_and_releases() {
    let mut world = world();
    world.spawn_explosion(Position::new(300.0, 300.0));
    let pooled_before = world.pools.explosion.len();

    let dt = NOMINAL_DT;
    let mut peaked = false;
    for _ in 0..10_000 {
        systems::explosions::run(&mut world, dt);
        match world.explosions.first() {
            Some(e) => {
                assert!(e.radius <= EXPLOSION_MAX_RADIUS);
                if e.radius == EXPLOSION_MAX_RADIUS {
                    peaked = true;
                }
            }
            None => break,
        }
    }

    assert!(peaked, "explosion never reached max radius");
    assert!(world.explosions.is_empty(), "explosion never released");
    assert_eq!(world.pools.explosion.len(), pooled_before + 1);
}

#[test]
fn test_floating_text_expires_after_lifetime() {
    let mut world = world();
    world.spawn_floating_text(
        Position::new(100.0, 100.0),
        "+200",
        apocalypse_core::enums::ColorId::Amber,
    );
    let start_y = world.floating_texts[0].pos.y;

    systems::floating_text::run(&mut world, 0.5);
    assert_eq!(world.floating_texts.len(), 1);
    assert!(world.floating_texts[0].pos.y < start_y, "text should drift upward");

    systems::floating_text::run(&mut world, FLOATING_TEXT_LIFETIME_SECS);
    assert!(world.floating_texts.is_empty());
}

// ---- Counter-missiles and silos ----

#[test]
fn test_nearest_armed_silo_selected() {
    let mut world = world();
    world.silos[0].missiles = 5;
    world.silos[1].missiles = 3;
    world.silos[2].missiles = 0;

    // (300, 300) ties between silo 0 and 1; strict < keeps the first.
    assert_eq!(world.nearest_armed_silo(Position::new(300.0, 300.0)), Some(0));
    // Near the right edge only silo 1 qualifies (silo 2 is dry).
    assert_eq!(world.nearest_armed_silo(Position::new(700.0, 300.0)), Some(1));
}

#[test]
fn test_no_silo_selected_when_all_empty_or_dead() {
    let mut world = world();
    world.silos[0].missiles = 0;
    world.silos[1].alive = false;
    world.silos[2].missiles = 0;

    assert_eq!(world.nearest_armed_silo(Position::new(300.0, 300.0)), None);
}

#[test]
fn test_fire_command_decrements_ammo_and_spawns() {
    let mut engine = engine();
    engine.queue_command(PlayerCommand::FireCounterMissile {
        target: Position::new(300.0, 300.0),
    });
    engine.tick(NOMINAL_DT);

    assert_eq!(engine.world().counter_missiles.len(), 1);
    assert_eq!(engine.world().silos[0].missiles, 9);
    let cm = &engine.world().counter_missiles[0];
    assert_eq!(cm.origin, 0);
    assert_eq!(cm.target, Position::new(300.0, 300.0));
    assert!((cm.vel.speed() - COUNTER_MISSILE_SPEED).abs() < 1e-9);
}

#[test]
fn test_fire_command_noop_when_silos_dry() {
    let mut engine = engine();
    for silo in &mut engine.world_mut().silos {
        silo.missiles = 0;
    }
    engine.queue_command(PlayerCommand::FireCounterMissile {
        target: Position::new(300.0, 300.0),
    });
    engine.tick(NOMINAL_DT);

    assert!(engine.world().counter_missiles.is_empty());
}

#[test]
fn test_counter_missile_arrival_spawns_explosion_at_target() {
    let mut world = world();
    world.silos[0].missiles -= 1;
    world.spawn_counter_missile(0, Position::new(300.0, 300.0));
    // Walk it right up to the target.
    world.counter_missiles[0].pos = Position::new(299.0, 301.0);

    systems::counter_missile::run(&mut world);

    assert!(world.counter_missiles.is_empty());
    assert_eq!(world.explosions.len(), 1);
    assert_eq!(world.explosions[0].pos, Position::new(300.0, 300.0));
    assert!(matches!(
        world.events.as_slice(),
        [GameEvent::CounterMissileDetonated { .. }]
    ));
}

// ---- Bonus targets ----

#[test]
fn test_spawn_distribution_over_1000_draws() {
    let table = BonusTable::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut asteroids = 0;
    let mut satellites = 0;
    let mut ufos = 0;
    let mut none = 0;
    for _ in 0..1000 {
        match table.draw(rng.gen()) {
            Some(BonusCategory::Asteroid) => asteroids += 1,
            Some(BonusCategory::Satellite) => satellites += 1,
            Some(BonusCategory::Ufo) => ufos += 1,
            None => none += 1,
        }
    }

    // Stochastic tolerance, not exact (weights 0.4 / 0.3 / 0.2).
    assert!((asteroids as i64 - 400).abs() < 50, "asteroids: {asteroids}");
    assert!((satellites as i64 - 300).abs() < 50, "satellites: {satellites}");
    assert!((ufos as i64 - 200).abs() < 50, "ufos: {ufos}");
    assert_eq!(asteroids + satellites + ufos + none, 1000);
}

#[test]
fn test_pointer_shot_awards_category_points() {
    let mut engine = engine();
    engine.world_mut().spawn_bonus_target(BonusCategory::Ufo, Position::new(100.0, 100.0));
    engine.queue_command(PlayerCommand::PointerShot {
        point: Position::new(110.0, 110.0),
    });

    let result = engine.tick(NOMINAL_DT);

    assert!(engine.world().bonus_targets.is_empty());
    assert_eq!(result.score.score, 500);
    assert_eq!(result.score.bonus_hits, 1);
    assert!(result.events.iter().any(|e| matches!(
        e,
        GameEvent::BonusHit {
            category: BonusCategory::Ufo,
            points: 500,
            ..
        }
    )));
}

#[test]
fn test_pointer_shot_miss_is_noop() {
    let mut engine = engine();
    engine.world_mut().spawn_bonus_target(BonusCategory::Asteroid, Position::new(100.0, 100.0));
    engine.queue_command(PlayerCommand::PointerShot {
        point: Position::new(150.0, 150.0),
    });

    let result = engine.tick(NOMINAL_DT);

    assert_eq!(engine.world().bonus_targets.len(), 1);
    assert_eq!(result.score.score, 0);
}

#[test]
fn test_bonus_spawn_draw_runs_on_interval() {
    let mut engine = engine();
    let mut spawned = 0;
    // Enough intervals that at least one draw lands inside the 0.9
    // cumulative weight (seeded, deterministic).
    for _ in 0..BONUS_SPAWN_INTERVAL_TICKS * 10 {
        let result = engine.tick(NOMINAL_DT);
        spawned += result
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BonusSpawned { .. }))
            .count();
    }
    assert!(spawned > 0, "no bonus target spawned in 10 intervals");
    assert!(spawned <= 10);
}

// ---- Engine semantics ----

#[test]
fn test_malformed_dt_clamped_to_zero() {
    for bad_dt in [f64::NAN, -1.0, f64::INFINITY, f64::NEG_INFINITY] {
        let mut engine = engine();
        engine
            .world_mut()
            .spawn_missile(Position::new(100.0, 100.0), Velocity::new(60.0, 0.0));

        let result = engine.tick(bad_dt);

        assert_eq!(result.dt_applied, 0.0, "dt {bad_dt} not clamped");
        assert_eq!(
            engine.world().missiles[0].pos,
            Position::new(100.0, 100.0),
            "position corrupted by dt {bad_dt}"
        );
    }
}

#[test]
fn test_pause_freezes_simulation() {
    let mut engine = engine();
    engine
        .world_mut()
        .spawn_missile(Position::new(100.0, 100.0), Velocity::new(60.0, 0.0));

    engine.queue_command(PlayerCommand::Pause);
    let result = engine.tick(NOMINAL_DT);
    assert_eq!(result.phase, EnginePhase::Paused);
    assert_eq!(result.time.tick, 0);
    assert_eq!(engine.world().missiles[0].pos, Position::new(100.0, 100.0));

    engine.queue_command(PlayerCommand::Resume);
    let result = engine.tick(NOMINAL_DT);
    assert_eq!(result.phase, EnginePhase::Running);
    assert_eq!(result.time.tick, 1);
    assert!(engine.world().missiles[0].pos.x > 100.0);
}

#[test]
fn test_invalid_config_fails_fast() {
    let mut config = SimConfig::default();
    config.pools.missile = PoolSizes::new(10, 0);
    assert!(matches!(
        SimulationEngine::new(config),
        Err(ConfigError::ZeroPoolCapacity { .. })
    ));

    let mut config = SimConfig::default();
    config.bonus.ufo.weight = -0.2;
    assert!(matches!(
        SimulationEngine::new(config),
        Err(ConfigError::InvalidSpawnWeight { .. })
    ));
}

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = engine();
    let mut engine_b = engine();

    for eng in [&mut engine_a, &mut engine_b] {
        eng.queue_command(PlayerCommand::FireCounterMissile {
            target: Position::new(300.0, 300.0),
        });
        eng.world_mut()
            .spawn_missile(Position::new(400.0, 50.0), Velocity::new(0.0, 60.0));
    }

    for _ in 0..600 {
        let result_a = engine_a.tick(NOMINAL_DT);
        let result_b = engine_b.tick(NOMINAL_DT);
        let json_a = serde_json::to_string(&result_a).unwrap();
        let json_b = serde_json::to_string(&result_b).unwrap();
        assert_eq!(json_a, json_b, "frame results diverged with same seed");
    }
}

#[test]
fn test_active_and_pool_counts_in_frame_result() {
    let mut engine = engine();
    engine
        .world_mut()
        .spawn_missile(Position::new(400.0, 100.0), Velocity::default());

    let result = engine.tick(NOMINAL_DT);

    assert_eq!(result.active.missiles, 1);
    assert_eq!(result.pool_occupancy.missiles, POOL_SIZE_MISSILE - 1);
    assert_eq!(result.pool_occupancy.explosions, POOL_SIZE_EXPLOSION);
}

// ---- End-to-end scenario ----

#[test]
fn test_end_to_end_intercept_scenario() {
    let mut engine = engine();

    // A hostile missile hangs at (295, 305).
    engine
        .world_mut()
        .spawn_missile(Position::new(295.0, 305.0), Velocity::default());

    // Fire a counter-missile from the (200, 500) silo toward (300, 300).
    engine.queue_command(PlayerCommand::FireCounterMissile {
        target: Position::new(300.0, 300.0),
    });

    let mut detonated_at = None;
    let mut destroyed_tick = None;
    for _ in 0..300 {
        let result = engine.tick(NOMINAL_DT);
        for event in &result.events {
            match event {
                GameEvent::CounterMissileDetonated { pos } => detonated_at = Some(*pos),
                GameEvent::MissileDestroyed { .. } => {
                    destroyed_tick = Some(result.time.tick);
                    // The explosion is still active in the tick the
                    // missile is resolved and released.
                    assert_eq!(result.active.explosions, 1);
                    assert_eq!(result.active.missiles, 0);
                }
                _ => {}
            }
        }
        if destroyed_tick.is_some() {
            break;
        }
    }

    assert_eq!(
        detonated_at,
        Some(Position::new(300.0, 300.0)),
        "explosion not acquired at the target point"
    );
    assert!(destroyed_tick.is_some(), "missile never intercepted");
    assert_eq!(engine.world().score.score, MISSILE_KILL_POINTS);
    // The intercepted missile went back to its pool.
    assert_eq!(engine.world().pool_occupancy().missiles, POOL_SIZE_MISSILE);
}
