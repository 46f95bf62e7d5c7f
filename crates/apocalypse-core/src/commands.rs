//! Player commands, queued and drained at tick boundaries.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Commands from the host input layer. Processed in arrival order at
/// the start of the next tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire a counter-missile toward `target` from the nearest living
    /// silo with remaining ammunition. No-op when no silo qualifies.
    FireCounterMissile { target: Position },
    /// Pointer shot — hit-tests bonus targets at the given point.
    PointerShot { point: Position },
    Pause,
    Resume,
}
