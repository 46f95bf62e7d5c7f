//! Headless self-test binary.
//!
//! Runs the engine under synthetic load for a bounded duration, prints
//! the monitor report and the self-test summary as JSON, then runs one
//! session against the in-memory collaborators.

use std::sync::atomic::AtomicBool;

use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use apocalypse_core::collaborators::{HighScoreBackend, LocalScoreStore, MockWallet};
use apocalypse_core::commands::PlayerCommand;
use apocalypse_core::constants::NOMINAL_DT;
use apocalypse_core::types::Position;
use apocalypse_monitor::{MonitorConfig, SelfTest, SelfTestConfig};
use apocalypse_sim::{SimConfig, SimulationEngine};

use apocalypse_app::game_loop::{self, GameLoopCommand};
use apocalypse_app::session::{self, SessionConfig};

fn main() {
    env_logger::init();

    let config = SimConfig::default();
    let mut engine = match SimulationEngine::new(config.clone()) {
        Ok(engine) => engine,
        Err(err) => {
            error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    // Optional duration override: `apocalypse-app [seconds]`.
    let mut self_test_config = SelfTestConfig::default();
    if let Some(secs) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        self_test_config.duration_secs = secs;
    }

    // Short live-loop run: a couple of launches, then the report.
    match game_loop::spawn_game_loop(config.clone(), MonitorConfig::default()) {
        Ok(handle) => {
            for x in [250.0, 400.0, 550.0] {
                handle.send(GameLoopCommand::Player(PlayerCommand::FireCounterMissile {
                    target: Position::new(x, 300.0),
                }));
            }
            std::thread::sleep(std::time::Duration::from_secs(2));
            let report = handle.shutdown();
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(err) => error!("failed to serialize monitor report: {err}"),
            }
        }
        Err(err) => error!("game loop failed to start: {err}"),
    }

    // Never raised here; embedders wire this to their own interrupt.
    let stop = AtomicBool::new(false);

    info!(
        "starting self-test: {:.1}s at nominal dt {NOMINAL_DT:.4}",
        self_test_config.duration_secs
    );
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let results = SelfTest::new(self_test_config).run(&mut engine, &mut rng, &stop);

    match serde_json::to_string_pretty(&results) {
        Ok(json) => println!("{json}"),
        Err(err) => error!("failed to serialize self-test results: {err}"),
    }

    // One session against the local collaborators.
    let mut session_engine = match SimulationEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    let wallet = MockWallet::connected();
    let mut backend = LocalScoreStore::default();
    let outcome = session::run_session(
        &mut session_engine,
        &wallet,
        &mut backend,
        &SessionConfig {
            player: "local".into(),
            frames: 600,
            dt: NOMINAL_DT,
        },
    );
    info!(
        "session: score {} level {} submitted {}",
        outcome.score, outcome.level, outcome.score_submitted
    );
    for entry in backend.high_scores() {
        info!("leaderboard: {} {} (level {})", entry.player, entry.score, entry.level);
    }

    if !results.passed {
        std::process::exit(1);
    }
}
