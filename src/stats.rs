//! Info-panel statistics.

use crate::particle::Particle;
use serde::Serialize;
use std::fmt;

/// Summary of the current particle configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Stats {
    pub particles: usize,
    pub positive: usize,
    pub negative: usize,
    /// Sum of the signed charges.
    pub net_charge: f32,
    /// Sum of `m v² / 2`.
    pub kinetic_energy: f32,
    pub max_speed: f32,
    /// Ticks run since the simulation was created.
    pub ticks: u64,
}

impl Stats {
    pub fn collect(particles: &[Particle], ticks: u64) -> Self {
        particles.iter().fold(
            Stats {
                ticks,
                ..Stats::default()
            },
            |mut s, p| {
                s.particles += 1;
                if p.is_positive() {
                    s.positive += 1;
                } else {
                    s.negative += 1;
                }
                s.net_charge += p.charge;
                s.kinetic_energy += p.kinetic_energy();
                s.max_speed = s.max_speed.max(p.velocity.length());
                s
            },
        )
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particles: {} (+{} / -{})  KE: {:.3}  Max speed: {:.3}  Tick: {}",
            self.particles, self.positive, self.negative, self.kinetic_energy, self.max_speed, self.ticks
        )
    }
}
