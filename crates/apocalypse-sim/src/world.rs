//! The simulation world — sole owner of all pools and active arrays.
//!
//! Active entities live in the `Vec`s here; dormant entities live in
//! the pools. Transfer between the two is the only permitted hand-off.
//! Nothing in this module is global: the world is passed by reference
//! to the systems and read by the monitor at sample time.

use apocalypse_core::config::{ConfigError, PoolConfig};
use apocalypse_core::constants::*;
use apocalypse_core::entities::{
    BonusTarget, CounterMissile, Explosion, FloatingText, Missile, Silo,
};
use apocalypse_core::enums::{BonusCategory, ColorId, ExplosionPhase};
use apocalypse_core::events::GameEvent;
use apocalypse_core::report::EntityCounts;
use apocalypse_core::score::ScoreState;
use apocalypse_core::types::{Position, Velocity};

use crate::pool::Pool;

/// One pool per entity type.
#[derive(Debug)]
pub struct Pools {
    pub missile: Pool<Missile>,
    pub counter_missile: Pool<CounterMissile>,
    pub explosion: Pool<Explosion>,
    pub floating_text: Pool<FloatingText>,
    pub bonus_target: Pool<BonusTarget>,
}

impl Pools {
    fn preallocate(config: &PoolConfig) -> Self {
        Self {
            missile: Pool::preallocate(config.missile, Missile::default),
            counter_missile: Pool::preallocate(config.counter_missile, CounterMissile::default),
            explosion: Pool::preallocate(config.explosion, Explosion::default),
            floating_text: Pool::preallocate(config.floating_text, FloatingText::default),
            bonus_target: Pool::preallocate(config.bonus_target, BonusTarget::default),
        }
    }

    /// Dormant count per pool.
    pub fn occupancy(&self) -> EntityCounts {
        EntityCounts {
            missiles: self.missile.len(),
            counter_missiles: self.counter_missile.len(),
            explosions: self.explosion.len(),
            floating_texts: self.floating_text.len(),
            bonus_targets: self.bonus_target.len(),
        }
    }
}

/// All mutable simulation state: pools, active arrays, silos, score,
/// and the per-frame event feed.
#[derive(Debug)]
pub struct SimulationWorld {
    pub missiles: Vec<Missile>,
    pub counter_missiles: Vec<CounterMissile>,
    pub explosions: Vec<Explosion>,
    pub floating_texts: Vec<FloatingText>,
    pub bonus_targets: Vec<BonusTarget>,
    pub silos: Vec<Silo>,
    pub pools: Pools,
    pub score: ScoreState,
    /// Side effects of the current tick, drained into the frame result.
    pub events: Vec<GameEvent>,
}

impl SimulationWorld {
    /// Build a world with validated pool sizing and the default silo
    /// emplacement (three silos along the ground line).
    pub fn new(config: &PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            missiles: Vec::new(),
            counter_missiles: Vec::new(),
            explosions: Vec::new(),
            floating_texts: Vec::new(),
            bonus_targets: Vec::new(),
            silos: default_silos(),
            pools: Pools::preallocate(config),
            score: ScoreState::default(),
            events: Vec::new(),
        })
    }

    /// Active (alive, in-simulation) counts per type.
    pub fn active_counts(&self) -> EntityCounts {
        EntityCounts {
            missiles: self.missiles.len(),
            counter_missiles: self.counter_missiles.len(),
            explosions: self.explosions.len(),
            floating_texts: self.floating_texts.len(),
            bonus_targets: self.bonus_targets.len(),
        }
    }

    /// Pool occupancy per type.
    pub fn pool_occupancy(&self) -> EntityCounts {
        self.pools.occupancy()
    }

    /// Spawn an incoming missile into the active array.
    pub fn spawn_missile(&mut self, pos: Position, vel: Velocity) {
        let mut missile = self.pools.missile.acquire(Missile::default);
        missile.pos = pos;
        missile.vel = vel;
        missile.owner = None;
        missile.alive = true;
        self.missiles.push(missile);
    }

    /// Fire a counter-missile from silo `origin` toward `target`.
    /// Caller has already checked and decremented the silo's ammo.
    pub fn spawn_counter_missile(&mut self, origin: usize, target: Position) {
        let start = self.silos[origin].pos;
        let mut cm = self.pools.counter_missile.acquire(CounterMissile::default);
        cm.pos = start;
        cm.vel = Velocity::toward(start, target, COUNTER_MISSILE_SPEED);
        cm.origin = origin;
        cm.target = target;
        cm.alive = true;
        self.counter_missiles.push(cm);
    }

    /// Spawn an explosion centered at `pos`, starting at zero radius.
    pub fn spawn_explosion(&mut self, pos: Position) {
        let mut explosion = self.pools.explosion.acquire(Explosion::default);
        explosion.pos = pos;
        explosion.radius = 0.0;
        explosion.phase = ExplosionPhase::Growing;
        explosion.alive = true;
        self.explosions.push(explosion);
    }

    /// Spawn score/event feedback text at `pos`.
    pub fn spawn_floating_text(&mut self, pos: Position, text: &str, color: ColorId) {
        let mut entity = self.pools.floating_text.acquire(FloatingText::default);
        entity.pos = pos;
        entity.text.clear();
        entity.text.push_str(text);
        entity.color = color;
        entity.lifetime_secs = FLOATING_TEXT_LIFETIME_SECS;
        entity.drift_vy = FLOATING_TEXT_DRIFT_VY;
        entity.alive = true;
        self.floating_texts.push(entity);
    }

    /// Spawn a bonus target of the given category.
    pub fn spawn_bonus_target(&mut self, category: BonusCategory, pos: Position) {
        let mut target = self.pools.bonus_target.acquire(BonusTarget::default);
        target.pos = pos;
        target.size = BONUS_TARGET_SIZE;
        target.category = category;
        target.alive = true;
        self.bonus_targets.push(target);
        self.events.push(GameEvent::BonusSpawned { category, pos });
    }

    /// Nearest living silo with remaining ammunition, or None when all
    /// are empty or destroyed.
    pub fn nearest_armed_silo(&self, target: Position) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, silo) in self.silos.iter().enumerate() {
            if !silo.alive || silo.missiles == 0 {
                continue;
            }
            let dist = silo.pos.distance_to(&target);
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((index, dist));
            }
        }
        best.map(|(index, _)| index)
    }
}

fn default_silos() -> Vec<Silo> {
    [200.0, 400.0, 600.0]
        .into_iter()
        .map(|x| Silo {
            pos: Position::new(x, 500.0),
            missiles: 10,
            alive: true,
        })
        .collect()
}
