//! Kinematic integration: position += velocity * dt.
//!
//! Entities leaving the canvas bounds are released to their pools.
//! An entity whose position goes non-finite is the isolated-anomaly
//! case: it is released and logged, never aborting the tick.

use log::warn;

use apocalypse_core::constants::*;
use apocalypse_core::events::GameEvent;
use apocalypse_core::types::Position;

use crate::world::SimulationWorld;

/// Integrate missiles and counter-missiles by `dt` seconds.
pub fn run(world: &mut SimulationWorld, dt: f64) {
    let mut i = 0;
    while i < world.missiles.len() {
        let missile = &mut world.missiles[i];
        missile.pos.x += missile.vel.x * dt;
        missile.pos.y += missile.vel.y * dt;

        if !missile.pos.is_finite() {
            warn!("missile position went non-finite, releasing");
            let missile = world.missiles.remove(i);
            world.pools.missile.release(missile);
            continue;
        }

        if missile.pos.y >= CANVAS_HEIGHT {
            // Reached the ground line: impact, not interception.
            let missile = world.missiles.remove(i);
            world.events.push(GameEvent::MissileImpacted { pos: missile.pos });
            world.pools.missile.release(missile);
            continue;
        }

        if off_canvas(missile.pos) {
            let missile = world.missiles.remove(i);
            world.pools.missile.release(missile);
            continue;
        }

        i += 1;
    }

    let mut i = 0;
    while i < world.counter_missiles.len() {
        let cm = &mut world.counter_missiles[i];
        cm.pos.x += cm.vel.x * dt;
        cm.pos.y += cm.vel.y * dt;

        if !cm.pos.is_finite() || off_canvas(cm.pos) {
            if !cm.pos.is_finite() {
                warn!("counter-missile position went non-finite, releasing");
            }
            let cm = world.counter_missiles.remove(i);
            world.pools.counter_missile.release(cm);
            continue;
        }

        i += 1;
    }
}

/// True when a position is outside the canvas plus margin.
pub fn off_canvas(pos: Position) -> bool {
    pos.x < -OFF_CANVAS_MARGIN
        || pos.x > CANVAS_WIDTH + OFF_CANVAS_MARGIN
        || pos.y < -OFF_CANVAS_MARGIN
        || pos.y > CANVAS_HEIGHT + OFF_CANVAS_MARGIN
}
