//! Fixed timestep simulation tick
//!
//! The host hands wall-clock frame deltas to [`advance`]; the accumulator
//! drains them in constant-size ticks so collision outcomes are identical
//! at any frame rate. One tick = scroll, mode dispatch, vertical motion,
//! floor/ceiling snap, obstacle resolution, in that order.

use super::collision::{BlockContact, Hitbox, classify_block_contact};
use super::state::{GameEvent, ObstacleKind, Player, RunPhase, Simulation};
use crate::consts::*;

/// Consume one frame's wall-clock delta.
///
/// Running: accumulate and drain fixed ticks (capped at `MAX_SUBSTEPS`).
/// Crashed: physics is frozen; only the crash countdown drains, in real
/// time, until it expires and triggers the respawn.
/// Idle: nothing moves.
pub fn advance(sim: &mut Simulation, frame_dt: f32) {
    match sim.run.phase {
        RunPhase::Idle => {}
        RunPhase::Crashed => {
            // Real wall-clock time, deliberately unclamped: a long frame
            // during the crash flash just ends the delay sooner
            sim.run.crash_timer -= frame_dt;
            if sim.run.crash_timer <= 0.0 {
                respawn(sim);
            }
        }
        RunPhase::Running => {
            // Clamp pathological frame gaps before banking them
            sim.run.accumulator += frame_dt.min(0.1);
            let mut substeps = 0;
            while sim.run.accumulator >= sim.settings.tick_dt && substeps < MAX_SUBSTEPS {
                tick(sim);
                sim.run.accumulator -= sim.settings.tick_dt;
                substeps += 1;
                if sim.run.phase != RunPhase::Running {
                    // Crashed mid-frame; leftover time stays banked
                    break;
                }
            }
        }
    }
}

/// Advance the simulation by exactly one fixed physics step
pub fn tick(sim: &mut Simulation) {
    if sim.run.phase != RunPhase::Running || sim.player.dead {
        return;
    }
    sim.run.time_ticks += 1;

    // World scrolls at constant speed; the player's world x is implicit
    sim.run.scroll += sim.settings.scroll_speed;

    // Mode dispatch: vertical velocity, rotation, edge-input consumption
    let mode = sim.player.mode;
    mode.integrate(&mut sim.player, &mut sim.input, &sim.settings);

    sim.player.y += sim.player.vy;

    // Floor/ceiling snap
    if sim.player.y + PLAYER_SIZE >= sim.settings.floor_y {
        sim.player.y = sim.settings.floor_y - PLAYER_SIZE;
        sim.player.vy = 0.0;
        sim.player.on_ground = true;
    } else if sim.player.y <= CEILING_Y {
        sim.player.y = CEILING_Y;
        sim.player.vy = 0.0;
        if mode.ceiling_is_ground() {
            // Ball rides the ceiling when gravity is flipped
            sim.player.on_ground = true;
        } else {
            crash(sim);
            return;
        }
    } else {
        sim.player.on_ground = false;
    }

    resolve_obstacles(sim);
}

/// Scan the obstacle window around the player and apply outcomes.
///
/// Obstacles ascend in x, so the scan starts at the front and stops at
/// the first obstacle past the hitbox's scan limit; per-tick cost is a
/// small local window, not the whole level. The hitbox is computed once
/// per tick: a landing clamp earlier in the scan does not re-test
/// already-passed obstacles.
fn resolve_obstacles(sim: &mut Simulation) {
    let hitbox = Hitbox::from_player(&sim.player, sim.run.scroll);
    let limit = hitbox.scan_limit();

    for i in 0..sim.level.obstacles.len() {
        let obstacle = sim.level.obstacles[i];
        if obstacle.left() > limit {
            break;
        }
        if !hitbox.overlaps(&obstacle) {
            continue;
        }

        match obstacle.kind {
            ObstacleKind::Spike => {
                crash(sim);
                return;
            }
            ObstacleKind::Block => match classify_block_contact(&sim.player, &obstacle) {
                BlockContact::Land => {
                    sim.player.y = obstacle.top() - PLAYER_SIZE;
                    sim.player.vy = 0.0;
                    sim.player.on_ground = true;
                }
                BlockContact::Underside => {
                    sim.player.y = obstacle.bottom();
                    sim.player.vy = 0.0;
                    sim.player.on_ground = true;
                }
                BlockContact::Side => {
                    crash(sim);
                    return;
                }
            },
            // Non-solid: switch mode in place, no kinematic change.
            // Overlapping portals each reassign; the last one scanned wins.
            ObstacleKind::Portal { target } => {
                if sim.player.mode != target {
                    log::debug!("portal: {} -> {}", sim.player.mode.as_str(), target.as_str());
                    sim.player.mode = target;
                    sim.push_event(GameEvent::ModeChanged(target));
                }
            }
        }
    }
}

/// Running -> Crashed: mark dead and arm the feedback countdown
fn crash(sim: &mut Simulation) {
    sim.player.dead = true;
    sim.run.phase = RunPhase::Crashed;
    sim.run.crash_timer = CRASH_DELAY;
    sim.push_event(GameEvent::Crashed);
    log::debug!(
        "crashed at {}% (attempt {})",
        sim.completion_percent(),
        sim.run.attempts
    );
}

/// Crashed -> Running: restart the attempt from the level's beginning.
/// Obstacles are not regenerated; kinematics, mode and scroll reset.
fn respawn(sim: &mut Simulation) {
    sim.run.attempts += 1;
    sim.run.scroll = 0.0;
    sim.run.crash_timer = 0.0;
    sim.run.time_ticks = 0;
    sim.player = Player::spawn(sim.level.start_mode, &sim.settings);
    sim.run.phase = RunPhase::Running;
    sim.push_event(GameEvent::Respawned {
        attempt: sim.run.attempts,
    });
    log::info!("attempt {}", sim.run.attempts);
}
