//! Collision detection between the player's inset hitbox and obstacles
//!
//! Detection and classification live here; the per-tick resolution loop
//! (what to do about a hit) is in `tick`. Collision is a pure read of the
//! obstacle data cross-referenced against mutable player state.

use super::state::{Obstacle, Player};
use crate::consts::*;

/// The player's collision box in world coordinates, inset from the full
/// 38x38 avatar so grazing contact feels fair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Hitbox {
    pub fn from_player(player: &Player, scroll: f32) -> Self {
        let world_x = scroll + PLAYER_SCREEN_X;
        Self {
            left: world_x + HITBOX_INSET,
            right: world_x + PLAYER_SIZE - HITBOX_INSET,
            top: player.y + HITBOX_INSET,
            bottom: player.y + PLAYER_SIZE - HITBOX_INSET,
        }
    }

    /// Standard axis-aligned rectangle overlap (strict, so edge-touching
    /// boxes do not collide)
    #[inline]
    pub fn overlaps(&self, o: &Obstacle) -> bool {
        self.right > o.left() && self.left < o.right() && self.bottom > o.top() && self.top < o.bottom()
    }

    /// Obstacles at or beyond this x cannot overlap yet; since the
    /// sequence ascends in x, the scan stops at the first one.
    #[inline]
    pub fn scan_limit(&self) -> f32 {
        self.right + SCAN_AHEAD
    }
}

/// How the player touched a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContact {
    /// Came down onto the top face: clamp on top, grounded
    Land,
    /// Came up into the bottom face: clamp below, grounded
    Underside,
    /// Side or corner hit: fatal
    Side,
}

/// Classify a block overlap using the player's pre-motion position
/// (current y minus this tick's velocity delta). The tolerance band
/// disambiguates a landing from a wall hit when the player clips a
/// corner at speed.
pub fn classify_block_contact(player: &Player, block: &Obstacle) -> BlockContact {
    let pre_y = player.y - player.vy;
    if pre_y + PLAYER_SIZE <= block.top() + BLOCK_TOLERANCE {
        BlockContact::Land
    } else if pre_y >= block.bottom() - BLOCK_TOLERANCE {
        BlockContact::Underside
    } else {
        BlockContact::Side
    }
}
