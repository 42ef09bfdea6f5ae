//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; physics is computed in per-tick units
//! - Seeded RNG only (level generation)
//! - Obstacles ordered by ascending x, never mutated after generation
//! - No rendering or platform dependencies
//!
//! The one wall-clock-gated behavior is the crash-feedback delay, modelled
//! as an explicit countdown in the `Crashed` phase so the whole state
//! machine remains steppable in tests without real delays.

pub mod collision;
pub mod level;
pub mod mode;
pub mod state;
pub mod tick;

pub use collision::{BlockContact, Hitbox, classify_block_contact};
pub use level::{Level, LevelSpec, build_level, level_specs};
pub use mode::Pattern;
pub use state::{
    GameEvent, InputState, Mode, Obstacle, ObstacleKind, Player, RunPhase, RunState, SimError,
    Simulation,
};
pub use tick::{advance, tick};
