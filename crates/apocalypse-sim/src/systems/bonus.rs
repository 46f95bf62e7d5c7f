//! Bonus target spawning and pointer hit testing.
//!
//! Spawn policy: every spawn interval, one uniform draw in [0, 1) is
//! mapped against cumulative spawn-weight thresholds in fixed category
//! order. A draw beyond the weight sum spawns nothing that tick —
//! weights are not required to sum to 1.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use apocalypse_core::config::BonusTable;
use apocalypse_core::constants::{BONUS_SPAWN_INTERVAL_TICKS, CANVAS_HEIGHT, CANVAS_WIDTH};
use apocalypse_core::events::GameEvent;
use apocalypse_core::types::Position;

use crate::world::SimulationWorld;

/// Run the periodic spawn draw.
pub fn run(world: &mut SimulationWorld, rng: &mut ChaCha8Rng, table: &BonusTable, tick: u64) {
    if tick == 0 || tick % BONUS_SPAWN_INTERVAL_TICKS != 0 {
        return;
    }

    let roll: f64 = rng.gen();
    let Some(category) = table.draw(roll) else {
        return;
    };

    // Bonus targets appear in the upper half of the canvas.
    let pos = Position::new(
        rng.gen_range(0.1..0.9) * CANVAS_WIDTH,
        rng.gen_range(0.1..0.5) * CANVAS_HEIGHT,
    );
    world.spawn_bonus_target(category, pos);
}

/// Resolve a pointer shot against active bonus targets. The first
/// target hit (strict `distance < size`) is released and its
/// category's point value awarded.
pub fn pointer_shot(world: &mut SimulationWorld, table: &BonusTable, point: Position) {
    let Some(index) = world.bonus_targets.iter().position(|t| t.is_hit(point)) else {
        return;
    };

    let target = world.bonus_targets.remove(index);
    let profile = table.profile(target.category);
    world.score.score += profile.points;
    world.score.bonus_hits += 1;
    world.events.push(GameEvent::BonusHit {
        category: target.category,
        pos: target.pos,
        points: profile.points,
    });
    let text = format!("+{}", profile.points);
    world.spawn_floating_text(target.pos, &text, profile.color);
    world.pools.bonus_target.release(target);
}
