//! Missile vs explosion collision resolution.
//!
//! O(n*m) distance test: a collision is declared when the Euclidean
//! distance between centers is strictly less than
//! `MISSILE_RADIUS + explosion.radius` — exact equality is a miss.
//! Explosions are tested in list order and a missile is resolved on
//! the first collision found; it dies at most once per tick.

use apocalypse_core::constants::{MISSILE_KILL_POINTS, MISSILE_RADIUS};
use apocalypse_core::enums::ColorId;
use apocalypse_core::events::GameEvent;

use crate::world::SimulationWorld;

pub fn run(world: &mut SimulationWorld) {
    let mut i = 0;
    while i < world.missiles.len() {
        let pos = world.missiles[i].pos;
        let collided = world
            .explosions
            .iter()
            .any(|explosion| pos.distance_to(&explosion.pos) < MISSILE_RADIUS + explosion.radius);

        if !collided {
            i += 1;
            continue;
        }

        let missile = world.missiles.remove(i);
        world.score.score += MISSILE_KILL_POINTS;
        world.score.missiles_destroyed += 1;
        world.events.push(GameEvent::MissileDestroyed {
            pos: missile.pos,
            points: MISSILE_KILL_POINTS,
        });
        // Score feedback at the missile's last position.
        let text = format!("+{MISSILE_KILL_POINTS}");
        world.spawn_floating_text(missile.pos, &text, ColorId::White);
        world.pools.missile.release(missile);
    }
}
