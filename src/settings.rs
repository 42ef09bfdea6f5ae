//! Immutable per-run simulation settings
//!
//! All physics numbers are expressed in units of "per tick": the integrator
//! never rescales by wall-clock time. The tick duration only feeds the
//! frame accumulator that decides how many ticks to run.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SimError;

/// Physics constants fixed for the duration of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Downward acceleration per tick (Cube/Robot/Ufo)
    pub gravity: f32,
    /// Velocity applied on a grounded Cube jump (negative = up)
    pub jump_impulse: f32,
    /// Horizontal world scroll per tick
    pub scroll_speed: f32,
    /// Y coordinate of the floor line
    pub floor_y: f32,
    /// Fixed physics timestep in seconds
    pub tick_dt: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            floor_y: FLOOR_Y,
            tick_dt: SIM_DT,
        }
    }
}

impl SimulationSettings {
    /// Reject configurations the scheduler cannot run with.
    ///
    /// A non-positive or non-finite tick duration would make the
    /// accumulator loop spin forever, so this is a fail-fast boundary
    /// check rather than something the sim tolerates.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.tick_dt.is_finite() || self.tick_dt <= 0.0 {
            return Err(SimError::InvalidTickDuration(self.tick_dt));
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed <= 0.0 {
            return Err(SimError::InvalidScrollSpeed(self.scroll_speed));
        }
        Ok(())
    }
}
