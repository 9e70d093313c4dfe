//! # chargefield
//!
//! A 2D system of point charges under mutual Coulomb forces, with analytic
//! electric field sampling and field-line tracing for visualization.
//!
//! The crate is the physics core only. Drawing, mouse tools and the control
//! panel live outside and talk to a [`Simulation`] through a handful of
//! calls: create, erase, pick, drag, tick, and read-only field queries.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chargefield::prelude::*;
//!
//! let mut sim = Simulation::with_config(SimConfig::default().with_bounds(800.0, 600.0))?;
//! sim.create_particle(300.0, 300.0, 1.0)?;
//! sim.create_particle(500.0, 300.0, -1.0)?;
//!
//! let mut clock = FrameClock::new();
//! loop {
//!     for _ in 0..clock.update() {
//!         sim.tick();
//!     }
//!     let lines = sim.field_lines();
//!     let arrows = sim.field_grid();
//!     // hand sim.instances(), lines and arrows to the renderer
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Ticks
//!
//! A tick is one fixed explicit step. The force engine visits every
//! unordered pair once and applies equal and opposite Coulomb forces, with
//! separations clamped to `min_distance`. The integrator then damps the
//! velocity by `friction`, adds the accumulated acceleration, moves the
//! particle and reflects it off the walls of the domain.
//!
//! ### Field Queries
//!
//! [`Simulation::sample_field`] sums `k q / r²` contributions, skipping any
//! charge closer than `min_distance` to the query point.
//! [`Simulation::trace_field_line`] walks the normalized field in fixed steps
//! until the field vanishes, the line leaves the canvas, or it is absorbed by
//! a negative charge.
//!
//! ## Feature Overview
//!
//! | Concern | Items |
//! |---------|-------|
//! | State | [`Particle`], [`ParticleId`], [`ChargeSign`] |
//! | Tunables | [`SimConfig`], [`FieldLineConfig`], [`FieldGridConfig`], [`Bounds`] |
//! | Physics | [`forces::apply_coulomb_forces`], [`integrator::integrate`] |
//! | Field | [`field::sample_field`], [`field::sample_grid`], [`streamline::trace_field_line`] |
//! | Driving | [`Simulation`], [`time::FrameClock`] |
//! | Output | [`render::ParticleInstance`], [`render::line_vertices`], [`Stats`] |

pub mod config;
pub mod error;
pub mod field;
pub mod forces;
pub mod integrator;
mod particle;
pub mod render;
mod simulation;
pub mod spawn;
mod stats;
pub mod streamline;
pub mod time;

pub use config::{Bounds, FieldGridConfig, FieldLineConfig, SimConfig};
pub use error::{ConfigError, SimulationError};
pub use field::FieldSample;
pub use glam::Vec2;
pub use particle::{ChargeSign, Particle, ParticleId};
pub use simulation::{Simulation, HIT_MARGIN};
pub use spawn::ChargeChoice;
pub use stats::Stats;
pub use streamline::FieldLine;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use chargefield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Bounds, FieldGridConfig, FieldLineConfig, SimConfig};
    pub use crate::error::{ConfigError, SimulationError};
    pub use crate::field::FieldSample;
    pub use crate::particle::{ChargeSign, Particle, ParticleId};
    pub use crate::render::{LineVertices, ParticleInstance};
    pub use crate::simulation::Simulation;
    pub use crate::spawn::ChargeChoice;
    pub use crate::stats::Stats;
    pub use crate::streamline::FieldLine;
    pub use crate::time::FrameClock;
    pub use crate::Vec2;
}
