//! Simulation constants and tuning parameters.

// --- Canvas ---

/// Playfield width in pixels.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Playfield height in pixels.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Margin beyond the canvas edge before an entity counts as off-canvas.
pub const OFF_CANVAS_MARGIN: f64 = 20.0;

// --- Missiles ---

/// Collision radius of a missile (pixels).
pub const MISSILE_RADIUS: f64 = 2.0;

/// Incoming missile base speed (px/s).
pub const MISSILE_SPEED: f64 = 60.0;

/// Points credited for an intercepted missile.
pub const MISSILE_KILL_POINTS: u64 = 100;

// --- Counter-missiles ---

/// Counter-missile speed (px/s) — 5 px/frame at the original 60fps.
pub const COUNTER_MISSILE_SPEED: f64 = 300.0;

/// Remaining distance-to-target below which a counter-missile detonates.
pub const ARRIVAL_EPSILON: f64 = 5.0;

// --- Explosions ---

/// Maximum explosion radius (pixels).
pub const EXPLOSION_MAX_RADIUS: f64 = 30.0;

/// Radius growth rate while expanding (px/s).
pub const EXPLOSION_GROWTH_RATE: f64 = 60.0;

/// Radius decay rate while collapsing (px/s).
pub const EXPLOSION_DECAY_RATE: f64 = 40.0;

// --- Floating text ---

/// Lifetime of a floating-text entity (seconds).
pub const FLOATING_TEXT_LIFETIME_SECS: f64 = 1.0;

/// Upward drift velocity of floating text (px/s, negative = up).
pub const FLOATING_TEXT_DRIFT_VY: f64 = -40.0;

// --- Bonus targets ---

/// Ticks between bonus spawn draws (~5 seconds at 60Hz).
pub const BONUS_SPAWN_INTERVAL_TICKS: u64 = 300;

/// Bonus target collision size (pixels).
pub const BONUS_TARGET_SIZE: f64 = 20.0;

// --- Pool sizes (original defaults) ---

/// Pre-allocated / maximum missile pool size.
pub const POOL_SIZE_MISSILE: usize = 100;

/// Pre-allocated / maximum counter-missile pool size.
pub const POOL_SIZE_COUNTER_MISSILE: usize = 50;

/// Pre-allocated / maximum explosion pool size.
pub const POOL_SIZE_EXPLOSION: usize = 50;

/// Pre-allocated / maximum floating-text pool size.
pub const POOL_SIZE_FLOATING_TEXT: usize = 30;

/// Pre-allocated / maximum bonus-target pool size.
pub const POOL_SIZE_BONUS_TARGET: usize = 8;

// --- Scheduling ---

/// Nominal frame rate (Hz).
pub const FRAME_RATE: u32 = 60;

/// Nominal seconds per frame.
pub const NOMINAL_DT: f64 = 1.0 / FRAME_RATE as f64;

// --- Performance monitor ---

/// Seconds between monitor samples.
pub const SAMPLE_INTERVAL_SECS: f64 = 1.0;

/// Number of samples kept in the monitor history.
pub const SAMPLE_HISTORY_LENGTH: usize = 60;

/// A run is healthy only if average FPS meets this low-water mark.
pub const HEALTHY_AVERAGE_FPS: f64 = 45.0;

/// A run is healthy only if minimum FPS (after outlier filtering)
/// meets this hard floor.
pub const HEALTHY_MINIMUM_FPS: f64 = 30.0;

/// Outlier cutoff in standard deviations.
pub const OUTLIER_SIGMA: f64 = 3.0;

/// Frames skipped at self-test start to avoid startup anomalies.
pub const SELF_TEST_WARMUP_FRAMES: u64 = 5;

/// Default self-test duration (seconds).
pub const SELF_TEST_DURATION_SECS: f64 = 10.0;

// --- Scoring / progression ---

/// Score per player level.
pub const POINTS_PER_LEVEL: u64 = 1000;
