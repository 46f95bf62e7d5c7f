//! Floating-text advance: drift upward, decay, release on expiry.
//! No collision participation — purely a timed decay chain.

use crate::world::SimulationWorld;

pub fn run(world: &mut SimulationWorld, dt: f64) {
    let mut i = 0;
    while i < world.floating_texts.len() {
        let text = &mut world.floating_texts[i];
        text.pos.y += text.drift_vy * dt;
        text.lifetime_secs -= dt;

        if text.lifetime_secs <= 0.0 {
            let text = world.floating_texts.remove(i);
            world.pools.floating_text.release(text);
            continue;
        }

        i += 1;
    }
}
