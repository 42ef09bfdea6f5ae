//! Neon Dash - a side-scrolling rhythm-platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level generation,
//!   run/attempt state machine)
//! - `settings`: Immutable per-run physics constants
//!
//! Rendering and HUD live outside this crate; they consume read-only
//! snapshots of the simulation state after each frame.

pub mod settings;
pub mod sim;

pub use settings::SimulationSettings;
pub use sim::{GameEvent, Mode, SimError, Simulation};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in seconds (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World geometry
    pub const FLOOR_Y: f32 = 540.0;
    pub const CEILING_Y: f32 = 0.0;

    /// Player box (collision uses an inset hitbox, see `HITBOX_INSET`)
    pub const PLAYER_SIZE: f32 = 38.0;
    /// Player's fixed screen-space x; world x = scroll offset + this
    pub const PLAYER_SCREEN_X: f32 = 400.0;
    /// Margin shaved off each side of the player box before overlap tests
    pub const HITBOX_INSET: f32 = 10.0;

    /// Default physics (units are per tick, not per second)
    pub const GRAVITY: f32 = 0.82;
    pub const JUMP_IMPULSE: f32 = -12.5;
    pub const SCROLL_SPEED: f32 = 9.2;

    /// Mode-specific tuning
    pub const CUBE_SPIN_DEG: f32 = 6.0;
    pub const SHIP_THRUST: f32 = 0.52;
    pub const SHIP_FALL: f32 = 0.42;
    pub const SHIP_TILT_FACTOR: f32 = 2.5;
    pub const BALL_GRAVITY: f32 = 0.85;
    pub const BALL_SPIN_DEG: f32 = 5.0;
    pub const WAVE_SPEED: f32 = 9.5;
    pub const WAVE_TILT_DEG: f32 = 25.0;
    pub const ROBOT_IMPULSE: f32 = -15.0;
    pub const UFO_IMPULSE: f32 = -10.0;

    /// Collision tuning
    /// Obstacles further ahead than this past the player's right edge
    /// cannot overlap yet; the resolver stops scanning there.
    pub const SCAN_AHEAD: f32 = 200.0;
    /// Pre-motion clearance for landing-vs-wall classification on blocks
    pub const BLOCK_TOLERANCE: f32 = 12.0;

    /// Level generation
    /// Obstacle-free run-up at the start of every level
    pub const SPAWN_RUNWAY: f32 = 1200.0;
    /// Trailing buffer appended to the generated length so the progress
    /// meter never reports 100% before the player physically finishes
    pub const TRAILING_BUFFER: f32 = 2000.0;
    /// Nominal level duration the length multiplier scales against (ticks)
    pub const BASELINE_TICKS: f32 = 60.0 * 60.0;
    /// Default obstacle box when a pattern does not override it
    pub const OBSTACLE_SIZE: f32 = 40.0;

    /// Wall-clock delay between a crash and the respawn, in seconds
    pub const CRASH_DELAY: f32 = 0.45;
}

/// Snap an angle in degrees to the nearest multiple of 90
#[inline]
pub fn snap_to_right_angle(deg: f32) -> f32 {
    (deg / 90.0).round() * 90.0
}
