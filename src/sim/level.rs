//! Procedural level generation
//!
//! A level is built exactly once per start, from a seeded RNG, for the
//! mode active at build time. Mode portals hit during play do NOT
//! regenerate the remaining obstacles: a section laid out for Cube may be
//! traversed in Ship. That is intentional source behavior, pinned by
//! `test_generation_snapshots_mode`, not something to fix here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::mode::Pattern;
use super::state::{Mode, Obstacle, ObstacleKind};
use crate::consts::*;
use crate::settings::SimulationSettings;

/// Static per-level configuration (baked in, never loaded externally)
#[derive(Debug, Clone, Copy)]
pub struct LevelSpec {
    pub name: &'static str,
    /// Background identifier for the presentation layer
    pub background: &'static str,
    /// Scales the nominal 60-second baseline length
    pub length_mult: f32,
    pub start_mode: Mode,
}

const LEVELS: [LevelSpec; 6] = [
    LevelSpec {
        name: "Stereo Madness",
        background: "#0066ff",
        length_mult: 1.0,
        start_mode: Mode::Cube,
    },
    LevelSpec {
        name: "Back on Track",
        background: "#00ccff",
        length_mult: 1.2,
        start_mode: Mode::Cube,
    },
    LevelSpec {
        name: "Polargeist",
        background: "#a020f0",
        length_mult: 1.4,
        start_mode: Mode::Cube,
    },
    LevelSpec {
        name: "Dry Out",
        background: "#ff8c00",
        length_mult: 1.6,
        start_mode: Mode::Cube,
    },
    LevelSpec {
        name: "Cycles",
        background: "#00008B",
        length_mult: 2.0,
        start_mode: Mode::Cube,
    },
    // The designated all-wave level
    LevelSpec {
        name: "Blast Processing",
        background: "#222",
        length_mult: 2.5,
        start_mode: Mode::Wave,
    },
];

/// The built-in level table, indexed by `start_level`
pub fn level_specs() -> &'static [LevelSpec] {
    &LEVELS
}

/// A generated level: ordered obstacles plus metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Obstacles in ascending x (the collision resolver relies on this)
    pub obstacles: Vec<Obstacle>,
    /// Generated length + trailing buffer; 100% progress requires
    /// scrolling past all of it
    pub total_length: f32,
    /// Mode the player spawns (and respawns) in
    pub start_mode: Mode,
}

/// Derive the generator RNG for a (run seed, level index) pair
pub fn level_rng(seed: u64, level_index: usize) -> Pcg32 {
    // Golden-ratio mix so adjacent level indices get unrelated streams
    Pcg32::seed_from_u64(seed ^ (level_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Build the obstacle layout for one level.
///
/// The cursor starts past an obstacle-free runway and advances
/// monotonically to the length bound. `mode` is captured once for the
/// whole build; it selects the obstacle pattern via [`Mode::pattern`].
pub fn build_level(
    spec: &LevelSpec,
    mode: Mode,
    settings: &SimulationSettings,
    rng: &mut impl Rng,
) -> Level {
    let limit = settings.scroll_speed * BASELINE_TICKS * spec.length_mult;
    let pattern = mode.pattern();
    let mut obstacles = Vec::new();
    let mut x = SPAWN_RUNWAY;

    let block = |x: f32, y: f32, w: f32, h: f32| {
        Obstacle::new(ObstacleKind::Block, Vec2::new(x, y), Vec2::new(w, h))
    };
    let spike = |x: f32, y: f32| {
        Obstacle::new(
            ObstacleKind::Spike,
            Vec2::new(x, y),
            Vec2::splat(OBSTACLE_SIZE),
        )
    };

    while x < limit {
        // Portal sections override the pattern. Full floor-to-ceiling
        // height so they cannot be dodged.
        if x > 5000.0 && x % 7000.0 < 500.0 {
            let target = Mode::PORTAL_TARGETS[rng.random_range(0..Mode::PORTAL_TARGETS.len())];
            obstacles.push(Obstacle::new(
                ObstacleKind::Portal { target },
                Vec2::new(x, 0.0),
                Vec2::new(150.0, settings.floor_y),
            ));
            x += 1000.0;
            continue;
        }

        match pattern {
            Pattern::Corridor => {
                // Sine-shaped gap: ceiling block down to `gap`, floor block
                // from `gap + 170`, leaving a 170-unit corridor
                let gap = 170.0 + (x / 400.0).sin() * 90.0;
                obstacles.push(block(x, 0.0, 80.0, gap));
                obstacles.push(block(x, gap + 170.0, 80.0, 400.0));
                x += 80.0;
            }
            Pattern::Platforms => {
                obstacles.push(block(x, settings.floor_y - 150.0, 100.0, 40.0));
                if x % 800.0 == 0.0 {
                    obstacles.push(spike(x + 40.0, settings.floor_y - OBSTACLE_SIZE));
                }
                x += 400.0;
            }
            Pattern::Ground => {
                obstacles.push(block(x, settings.floor_y - 40.0, 80.0, 40.0));
                if rng.random::<f32>() < 0.55 {
                    obstacles.push(spike(x + 140.0, settings.floor_y - OBSTACLE_SIZE));
                }
                x += 450.0;
            }
        }
    }

    Level {
        obstacles,
        total_length: x + TRAILING_BUFFER,
        start_mode: mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(spec_index: usize, mode: Mode, seed: u64) -> Level {
        let spec = &level_specs()[spec_index];
        let settings = SimulationSettings::default();
        let mut rng = level_rng(seed, spec_index);
        build_level(spec, mode, &settings, &mut rng)
    }

    #[test]
    fn test_length_scales_with_multiplier() {
        // 9.2 * 3600 * 1.0 = 33120 generated units, plus the trailing
        // buffer and at most one step of cursor overshoot
        let level = build(0, Mode::Cube, 42);
        let bound = 9.2 * 3600.0;
        assert!(level.total_length >= bound + TRAILING_BUFFER);
        assert!(level.total_length < bound + TRAILING_BUFFER + 1000.0);

        let longer = build(5, Mode::Cube, 42);
        assert!(longer.total_length > bound * 2.0);
    }

    #[test]
    fn test_runway_is_clear() {
        let level = build(0, Mode::Cube, 42);
        assert!(!level.obstacles.is_empty());
        for o in &level.obstacles {
            assert!(o.left() >= SPAWN_RUNWAY);
        }
    }

    #[test]
    fn test_obstacles_ascend_in_x() {
        for mode in [Mode::Cube, Mode::Ball, Mode::Wave] {
            let level = build(2, mode, 42);
            for pair in level.obstacles.windows(2) {
                assert!(pair[1].left() >= pair[0].left());
            }
        }
    }

    #[test]
    fn test_portals_are_unmissable_and_never_target_cube() {
        let level = build(4, Mode::Cube, 42);
        let settings = SimulationSettings::default();
        let portals: Vec<_> = level
            .obstacles
            .iter()
            .filter(|o| matches!(o.kind, ObstacleKind::Portal { .. }))
            .collect();
        assert!(!portals.is_empty());
        for p in portals {
            assert!(p.left() > 5000.0);
            assert_eq!(p.size, Vec2::new(150.0, settings.floor_y));
            if let ObstacleKind::Portal { target } = p.kind {
                assert_ne!(target, Mode::Cube);
            }
        }
    }

    #[test]
    fn test_corridor_pattern_is_dense_with_sine_gap() {
        let level = build(5, Mode::Wave, 42);
        // Two blocks per 80-unit step makes the corridor far denser than
        // ground sections
        let per_unit = level.obstacles.len() as f32 / level.total_length;
        assert!(per_unit > 1.0 / 100.0);

        // Every corridor column: ceiling block from y=0, floor block 170
        // units below the ceiling block's bottom edge
        let first = &level.obstacles[0];
        let second = &level.obstacles[1];
        assert_eq!(first.top(), 0.0);
        let expected_gap = 170.0 + (first.left() / 400.0).sin() * 90.0;
        assert!((first.bottom() - expected_gap).abs() < 1e-3);
        assert!((second.top() - (expected_gap + 170.0)).abs() < 1e-3);
    }

    #[test]
    fn test_platform_pattern_spikes_every_800() {
        let level = build(3, Mode::Ball, 42);
        let spikes: Vec<_> = level
            .obstacles
            .iter()
            .filter(|o| o.kind == ObstacleKind::Spike)
            .collect();
        assert!(!spikes.is_empty());
        // Spikes sit 40 past a platform whose x was a multiple of 800
        for s in &spikes {
            assert_eq!((s.left() - 40.0) % 800.0, 0.0);
        }
    }

    #[test]
    fn test_generation_is_reproducible_per_seed() {
        let a = build(1, Mode::Cube, 1234);
        let b = build(1, Mode::Cube, 1234);
        assert_eq!(a, b);

        let c = build(1, Mode::Cube, 5678);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generation_snapshots_mode() {
        // The layout is chosen by the mode captured at build time; it is
        // not regenerated when portals change the live mode mid-run.
        // Building the same level for two different modes must therefore
        // produce structurally different layouts.
        let cube = build(5, Mode::Cube, 42);
        let wave = build(5, Mode::Wave, 42);
        assert_ne!(cube.obstacles.len(), wave.obstacles.len());
        assert_eq!(cube.start_mode, Mode::Cube);
        assert_eq!(wave.start_mode, Mode::Wave);
    }
}
