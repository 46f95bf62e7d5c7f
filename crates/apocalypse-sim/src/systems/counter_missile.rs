//! Counter-missile arrival: when remaining distance-to-target falls
//! below the arrival epsilon, the counter-missile is released and an
//! explosion is acquired at the target point.

use apocalypse_core::constants::ARRIVAL_EPSILON;
use apocalypse_core::events::GameEvent;

use crate::world::SimulationWorld;

pub fn run(world: &mut SimulationWorld) {
    let mut i = 0;
    while i < world.counter_missiles.len() {
        let cm = &world.counter_missiles[i];
        if cm.pos.distance_to(&cm.target) >= ARRIVAL_EPSILON {
            i += 1;
            continue;
        }

        let cm = world.counter_missiles.remove(i);
        world.events.push(GameEvent::CounterMissileDetonated { pos: cm.target });
        world.spawn_explosion(cm.target);
        world.pools.counter_missile.release(cm);
    }
}
