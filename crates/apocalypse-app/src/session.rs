//! Session flow: wallet check, play, score submission.
//!
//! Collaborators sit strictly at the session boundary. A disconnected
//! wallet or a failed submission is logged and ignored; the gameplay
//! outcome is returned regardless.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use apocalypse_core::collaborators::{HighScoreBackend, WalletConnection};
use apocalypse_sim::{FrameResult, Simulate, SimulationEngine};

/// How a session is driven.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub player: String,
    /// Frames to run.
    pub frames: u64,
    /// Simulation delta per frame.
    pub dt: f64,
}

/// What a completed session produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub score: u64,
    pub level: u32,
    pub wallet_connected: bool,
    pub score_submitted: bool,
}

/// Run one bounded session against the given collaborators.
pub fn run_session<W, B>(
    engine: &mut SimulationEngine,
    wallet: &W,
    backend: &mut B,
    config: &SessionConfig,
) -> SessionOutcome
where
    W: WalletConnection,
    B: HighScoreBackend,
{
    let wallet_connected = wallet.is_connected();
    if !wallet_connected {
        warn!("wallet not connected, playing without a ledger identity");
    }

    let mut last = FrameResult::default();
    for _ in 0..config.frames {
        last = engine.tick(config.dt);
    }

    let score = last.score.score;
    let level = last.score.player_level();

    let score_submitted = backend.submit(&config.player, score, level);
    if score_submitted {
        info!("session over: {} scored {score} (level {level})", config.player);
    } else {
        warn!("score submission failed for {}, result kept locally", config.player);
    }

    SessionOutcome {
        score,
        level,
        wallet_connected,
        score_submitted,
    }
}
