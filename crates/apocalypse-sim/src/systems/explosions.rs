//! Explosion radius envelope: linear growth to max, then linear decay
//! to zero, then release.

use apocalypse_core::constants::{EXPLOSION_DECAY_RATE, EXPLOSION_GROWTH_RATE, EXPLOSION_MAX_RADIUS};
use apocalypse_core::enums::ExplosionPhase;

use crate::world::SimulationWorld;

pub fn run(world: &mut SimulationWorld, dt: f64) {
    let mut i = 0;
    while i < world.explosions.len() {
        let explosion = &mut world.explosions[i];
        match explosion.phase {
            ExplosionPhase::Growing => {
                explosion.radius += EXPLOSION_GROWTH_RATE * dt;
                if explosion.radius >= EXPLOSION_MAX_RADIUS {
                    explosion.radius = EXPLOSION_MAX_RADIUS;
                    explosion.phase = ExplosionPhase::Decaying;
                }
            }
            ExplosionPhase::Decaying => {
                explosion.radius -= EXPLOSION_DECAY_RATE * dt;
            }
        }

        if explosion.phase == ExplosionPhase::Decaying && explosion.radius <= 0.0 {
            let explosion = world.explosions.remove(i);
            world.pools.explosion.release(explosion);
            continue;
        }

        i += 1;
    }
}
