//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here: settings, RNG seed,
//! run phase, player kinematics and the generated obstacle sequence.
//! There are no process-wide globals; every core operation takes the
//! `Simulation` context.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::level::{self, Level};
use crate::consts::*;
use crate::settings::SimulationSettings;

/// Boundary-validation failures. In-game "failures" (crashes) are ordinary
/// state transitions and never surface as errors.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("unknown level index {0}")]
    UnknownLevel(usize),
    #[error("tick duration must be finite and > 0, got {0}")]
    InvalidTickDuration(f32),
    #[error("scroll speed must be finite and > 0, got {0}")]
    InvalidScrollSpeed(f32),
}

/// The player's locomotion behavior variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Cube,
    Ship,
    Ball,
    Wave,
    Robot,
    Ufo,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cube => "CUBE",
            Mode::Ship => "SHIP",
            Mode::Ball => "BALL",
            Mode::Wave => "WAVE",
            Mode::Robot => "ROBOT",
            Mode::Ufo => "UFO",
        }
    }

    /// Modes a portal may switch the player into (everything but Cube)
    pub const PORTAL_TARGETS: [Mode; 5] =
        [Mode::Ship, Mode::Ball, Mode::Wave, Mode::Robot, Mode::Ufo];
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Solid box; landable on top, deadly from the side
    Block,
    /// Always fatal on contact
    Spike,
    /// Non-solid; switches the player's mode on contact
    Portal { target: Mode },
}

/// A static world obstacle. Created once at level build time, never
/// mutated; the generator emits them in ascending x, which the collision
/// resolver relies on to stop scanning early.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner in world coordinates
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, pos: Vec2, size: Vec2) -> Self {
        Self { kind, pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The player avatar. Horizontal position is implicit: world x equals the
/// camera scroll offset plus the fixed screen x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Vertical offset (top edge of the 38x38 box)
    pub y: f32,
    /// Vertical velocity per tick
    pub vy: f32,
    /// Cosmetic rotation in degrees; never affects collision
    pub rot_deg: f32,
    pub mode: Mode,
    /// Resting on the floor, a block top, or (Ball only) the ceiling
    pub on_ground: bool,
    pub dead: bool,
    /// Gravity sign, only ever +1 or -1; flipped by Ball jumps
    pub grav_dir: f32,
}

impl Player {
    /// Spawn flush with the floor in the level's starting mode
    pub fn spawn(mode: Mode, settings: &SimulationSettings) -> Self {
        Self {
            y: settings.floor_y - PLAYER_SIZE,
            vy: 0.0,
            rot_deg: 0.0,
            mode,
            on_ground: true,
            dead: false,
            grav_dir: 1.0,
        }
    }
}

/// Run/attempt state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// No level selected, nothing ticks
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Player is dead; physics frozen while the crash countdown drains
    Crashed,
}

/// Per-run bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunState {
    pub phase: RunPhase,
    /// Camera scroll offset = world distance travelled this attempt
    pub scroll: f32,
    /// 1-based attempt counter; incremented on respawn, reset on start
    pub attempts: u32,
    pub level_index: usize,
    /// Leftover wall-clock time not yet consumed by a full tick
    pub accumulator: f32,
    /// Seconds of crash feedback remaining (Crashed phase only)
    pub crash_timer: f32,
    /// Simulation tick counter for this attempt
    pub time_ticks: u64,
}

/// Unified jump/ascend/thrust button. Last write wins; edge-triggered
/// modes (Ball, Ufo) consume the flag by force-clearing it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub hold: bool,
}

/// Edge events for the presentation layer, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Fatal contact this tick; flash/fade effects key off this
    Crashed,
    /// Crash countdown expired, attempt counter already incremented
    Respawned { attempt: u32 },
    /// Portal contact switched the active mode
    ModeChanged(Mode),
}

/// Complete simulation context (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub settings: SimulationSettings,
    /// Run seed for reproducible level generation
    pub seed: u64,
    pub run: RunState,
    pub player: Player,
    pub input: InputState,
    pub level: Level,
    /// Pending edge events (not part of replayable state)
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Simulation {
    /// Create an idle simulation with default settings
    pub fn new(seed: u64) -> Self {
        Self {
            settings: SimulationSettings::default(),
            seed,
            run: RunState::default(),
            player: Player::spawn(Mode::Cube, &SimulationSettings::default()),
            input: InputState::default(),
            level: Level::default(),
            events: Vec::new(),
        }
    }

    /// Create an idle simulation with custom settings, rejecting
    /// configurations the scheduler cannot run with
    pub fn with_settings(settings: SimulationSettings, seed: u64) -> Result<Self, SimError> {
        settings.validate()?;
        let mut sim = Self::new(seed);
        sim.settings = settings;
        sim.player = Player::spawn(Mode::Cube, &sim.settings);
        Ok(sim)
    }

    /// Idle -> Running: select a level, build its obstacles and place the
    /// player at spawn. An out-of-table index is a caller bug and is
    /// rejected rather than defaulted.
    pub fn start_level(&mut self, index: usize) -> Result<(), SimError> {
        let spec = level::level_specs()
            .get(index)
            .ok_or(SimError::UnknownLevel(index))?;

        let mut rng = level::level_rng(self.seed, index);
        self.level = level::build_level(spec, spec.start_mode, &self.settings, &mut rng);
        self.run = RunState {
            phase: RunPhase::Running,
            scroll: 0.0,
            attempts: 1,
            level_index: index,
            accumulator: 0.0,
            crash_timer: 0.0,
            time_ticks: 0,
        };
        self.player = Player::spawn(self.level.start_mode, &self.settings);
        self.input = InputState::default();
        self.events.clear();

        log::info!(
            "Starting level {} \"{}\": {} obstacles, length {}",
            index,
            spec.name,
            self.level.obstacles.len(),
            self.level.total_length
        );
        Ok(())
    }

    /// Force Idle (menu/abort). Obstacles are kept only as dead data.
    pub fn abort(&mut self) {
        self.run.phase = RunPhase::Idle;
        self.input = InputState::default();
    }

    /// Set or clear the unified hold input (keyboard or pointer)
    pub fn set_hold(&mut self, hold: bool) {
        self.input.hold = hold;
    }

    /// Completion percentage for the progress display, floored, 0-100
    pub fn completion_percent(&self) -> u32 {
        if self.level.total_length <= 0.0 {
            return 0;
        }
        let frac = (self.run.scroll / self.level.total_length).clamp(0.0, 1.0);
        (frac * 100.0).floor() as u32
    }

    /// Label for the mode display
    pub fn mode_label(&self) -> &'static str {
        self.player.mode.as_str()
    }

    pub fn is_active(&self) -> bool {
        self.run.phase != RunPhase::Idle
    }

    /// Obstacle sequence for the renderer (ascending x; cull as you like)
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.level.obstacles
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain events accumulated since the last call (one frame's worth)
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
