//! Per-mode locomotion rules
//!
//! The single place that knows how each mode moves. The integrator calls
//! [`Mode::integrate`] once per tick; the level generator asks
//! [`Mode::pattern`] which obstacle pattern fits the mode. Keeping both
//! here avoids duplicated mode checks between physics and generation.

use serde::{Deserialize, Serialize};

use super::state::{InputState, Mode, Player};
use crate::consts::*;
use crate::settings::SimulationSettings;
use crate::snap_to_right_angle;

/// Obstacle pattern class a mode's sections are generated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    /// Ground blocks with occasional spikes (Cube, Ship, Robot, Ufo)
    Ground,
    /// Elevated platforms near the floor band (Ball)
    Platforms,
    /// Dense sine-shaped vertical gap corridor (Wave)
    Corridor,
}

impl Mode {
    /// Apply this mode's vertical-motion and rotation rule for one tick.
    ///
    /// Mutates velocity, rotation and the grounded flag; Ball and Ufo are
    /// edge-triggered and consume the hold input by clearing it, so a
    /// continuous physical hold only fires once.
    pub fn integrate(
        self,
        player: &mut Player,
        input: &mut InputState,
        settings: &SimulationSettings,
    ) {
        match self {
            Mode::Cube => {
                player.vy += settings.gravity;
                if player.on_ground && input.hold {
                    player.vy = settings.jump_impulse;
                    player.on_ground = false;
                }
                if !player.on_ground {
                    player.rot_deg += CUBE_SPIN_DEG;
                } else {
                    player.rot_deg = snap_to_right_angle(player.rot_deg);
                }
            }
            Mode::Ship => {
                player.vy += if input.hold { -SHIP_THRUST } else { SHIP_FALL };
                player.rot_deg = player.vy * SHIP_TILT_FACTOR;
            }
            Mode::Ball => {
                player.vy += BALL_GRAVITY * player.grav_dir;
                if player.on_ground && input.hold {
                    player.grav_dir = -player.grav_dir;
                    player.on_ground = false;
                    input.hold = false;
                }
                player.rot_deg += BALL_SPIN_DEG * player.grav_dir;
            }
            Mode::Wave => {
                // Pure diagonal motion, no inertia: velocity is set, not accumulated
                player.vy = if input.hold { -WAVE_SPEED } else { WAVE_SPEED };
                player.rot_deg = if player.vy > 0.0 {
                    WAVE_TILT_DEG
                } else {
                    -WAVE_TILT_DEG
                };
            }
            Mode::Robot => {
                player.vy += settings.gravity;
                if player.on_ground && input.hold {
                    player.vy = ROBOT_IMPULSE;
                    player.on_ground = false;
                }
            }
            Mode::Ufo => {
                player.vy += settings.gravity;
                if input.hold {
                    player.vy = UFO_IMPULSE;
                    input.hold = false;
                }
            }
        }
    }

    /// Generation pattern for sections built while this mode is active
    pub fn pattern(self) -> Pattern {
        match self {
            Mode::Wave => Pattern::Corridor,
            Mode::Ball => Pattern::Platforms,
            Mode::Cube | Mode::Ship | Mode::Robot | Mode::Ufo => Pattern::Ground,
        }
    }

    /// Whether ceiling contact counts as ground instead of a crash.
    /// Ball rides the ceiling when gravity is flipped; every other mode
    /// dies on it.
    pub fn ceiling_is_ground(self) -> bool {
        self == Mode::Ball
    }
}
