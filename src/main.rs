//! Neon Dash entry point
//!
//! Headless demo runner: steps the simulation with fixed frame deltas,
//! tapping the hold input on a simple cadence, and prints a JSON run
//! summary. The real presentation layer drives the same `advance` +
//! accessor surface from its frame callback.

use neon_dash::Simulation;
use neon_dash::consts::SIM_DT;
use neon_dash::sim::{GameEvent, advance};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let level: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut sim = Simulation::new(seed);
    if let Err(err) = sim.start_level(level) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    // One simulated minute at 60 fps, tapping for 6 ticks out of every 30
    let frames = 60 * 60;
    for frame in 0..frames {
        sim.set_hold(frame % 30 < 6);
        advance(&mut sim, SIM_DT);

        for event in sim.take_events() {
            match event {
                GameEvent::Crashed => {
                    log::info!("crashed at {}%", sim.completion_percent());
                }
                GameEvent::Respawned { attempt } => log::info!("ATTEMPT {attempt}"),
                GameEvent::ModeChanged(mode) => log::info!("mode -> {}", mode.as_str()),
            }
        }
    }

    let summary = serde_json::json!({
        "level": level,
        "seed": seed,
        "attempts": sim.run.attempts,
        "progress_percent": sim.completion_percent(),
        "mode": sim.mode_label(),
    });
    println!("{summary}");
}
