//! Headless chargefield runner.
//!
//! Builds a small charge layout, runs it for a number of ticks and reports
//! statistics and field-line counts through `tracing`.
//!
//! Usage: `chargefield [ticks] [config.json]`
//!
//! Set `RUST_LOG=chargefield=debug` for per-particle events.

use chargefield::prelude::*;
use std::env;
use std::error::Error;
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);
    let config = match args.next() {
        Some(path) => {
            tracing::info!(%path, "loading configuration");
            SimConfig::from_json(&fs::read_to_string(&path)?)?
        }
        None => SimConfig::default(),
    };

    let mut sim = Simulation::with_config(config)?.with_seed(0x5eed);
    let center = sim.config().bounds.center();

    // Dipole in the middle, a ring of random charges around it
    sim.create_particle(center.x - 100.0, center.y, 1.0)?;
    sim.create_particle(center.x + 100.0, center.y, -1.0)?;
    for i in 0..6 {
        let angle = std::f32::consts::TAU * i as f32 / 6.0;
        let at = center + Vec2::from_angle(angle) * 220.0;
        sim.spawn_particle(at.x, at.y, ChargeChoice::Random);
    }

    tracing::info!(stats = %sim.stats(), "initial state");
    for t in 1..=ticks {
        sim.tick();
        if t % 120 == 0 {
            tracing::info!(stats = %sim.stats(), "progress");
        }
    }

    let lines = sim.field_lines();
    let points: usize = lines.iter().map(FieldLine::len).sum();
    let arrows = sim.field_grid();
    let strongest = arrows.iter().map(FieldSample::magnitude).fold(0.0f32, f32::max);
    tracing::info!(
        lines = lines.len(),
        points,
        arrows = arrows.len(),
        strongest,
        "field snapshot"
    );
    tracing::info!(stats = %sim.stats(), "done");
    Ok(())
}
