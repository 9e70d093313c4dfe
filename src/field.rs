//! Analytic electric field of the point charges.
//!
//! The field at a query point is the superposition of `k q / r²` along the
//! unit vector from each charge to the point. Unlike the force engine, which
//! clamps short separations, the sampler *skips* charges closer than
//! `min_distance`: the point is then treated as inside that charge's disc.
//!
//! Sampling is read-only and may be called any number of times per tick.
//!
//! # Grid Sampling
//!
//! [`sample_grid`] evaluates the field at the centres of a regular grid of
//! square cells covering the domain, which is what the renderer draws as
//! arrows:
//!
//! ```ignore
//! for sample in sample_grid(&bounds, sim.particles(), 800.0, 8.0, 40.0) {
//!     draw_arrow(sample.position, sample.direction() * 12.0);
//! }
//! ```

use crate::config::Bounds;
use crate::particle::Particle;
use glam::Vec2;

/// Contribution of a single charge at `point`, or zero if `point` lies
/// within `min_distance` of it.
#[inline]
pub fn charge_field(point: Vec2, particle: &Particle, k: f32, min_distance: f32) -> Vec2 {
    let r_vec = point - particle.position;
    let r2 = r_vec.length_squared();
    if r2 < min_distance * min_distance {
        return Vec2::ZERO;
    }
    let r = r2.sqrt();
    let e = k * particle.charge / r2;
    r_vec * (e / r)
}

/// Net field at `point` from every particle.
pub fn sample_field(point: Vec2, particles: &[Particle], k: f32, min_distance: f32) -> Vec2 {
    particles
        .iter()
        .map(|p| charge_field(point, p, k, min_distance))
        .fold(Vec2::ZERO, |acc, e| acc + e)
}

/// One arrow of the field grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSample {
    /// Cell centre.
    pub position: Vec2,
    /// Field at the cell centre.
    pub field: Vec2,
}

impl FieldSample {
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.field.length()
    }

    /// Unit direction of the field, or zero where it vanishes.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.field.normalize_or_zero()
    }
}

/// Number of grid cells along each axis.
pub fn grid_dims(bounds: &Bounds, spacing: f32) -> (usize, usize) {
    let cols = (bounds.width / spacing).floor().max(0.0) as usize;
    let rows = (bounds.height / spacing).floor().max(0.0) as usize;
    (cols, rows)
}

/// Sample the field at the centre of every `spacing`-sized cell, row-major
/// starting from the origin corner.
pub fn sample_grid(
    bounds: &Bounds,
    particles: &[Particle],
    k: f32,
    min_distance: f32,
    spacing: f32,
) -> Vec<FieldSample> {
    let (cols, rows) = grid_dims(bounds, spacing);
    let half = spacing * 0.5;
    let mut out = Vec::with_capacity(cols * rows);
    for j in 0..rows {
        let y = half + j as f32 * spacing;
        for i in 0..cols {
            let position = Vec2::new(half + i as f32 * spacing, y);
            out.push(FieldSample {
                position,
                field: sample_field(position, particles, k, min_distance),
            });
        }
    }
    out
}
