//! Field-line tracing.
//!
//! A field line is followed by fixed-length Euler steps along the unit field
//! direction. Tracing stops at the first of:
//!
//! - the field magnitude dropping below `min_field` (null region),
//! - the line leaving the canvas,
//! - the line reaching a negative charge (a sink),
//! - `max_steps` points having been produced.
//!
//! The seed itself is not part of the returned polyline. Tracing is a pure
//! function of the seed and the particle configuration; there is no tracer
//! state carried between calls.
//!
//! # Seeding
//!
//! Lines radiate from positive charges only: [`seed_points`] places
//! `lines_per_charge` seeds at evenly spaced angles just outside each
//! positive charge's disc.

use crate::config::{Bounds, FieldLineConfig};
use crate::field::sample_field;
use crate::particle::Particle;
use glam::Vec2;
use std::f32::consts::TAU;

/// Polyline approximating a field line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldLine {
    points: Vec<Vec2>,
}

impl FieldLine {
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last point reached, if any step was taken.
    pub fn end(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Arc length of the polyline (excluding the segment from the seed).
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

/// Field constants shared with the force engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub k: f32,
    pub min_distance: f32,
}

/// Whether `point` is inside the absorption zone of any negative charge.
#[inline]
fn absorbed(point: Vec2, particles: &[Particle], margin: f32) -> bool {
    particles
        .iter()
        .any(|p| p.is_negative() && p.hit(point, margin))
}

/// Trace one field line from `seed`.
pub fn trace_field_line(
    seed: Vec2,
    particles: &[Particle],
    params: FieldParams,
    config: &FieldLineConfig,
    bounds: &Bounds,
) -> FieldLine {
    let mut points = Vec::new();
    let mut current = seed;

    for _ in 0..config.max_steps {
        let e = sample_field(current, particles, params.k, params.min_distance);
        let magnitude = e.length();
        // A null point has no direction even when `min_field` is zero
        if magnitude < config.min_field || magnitude == 0.0 {
            break;
        }

        current += e / magnitude * config.step_length;
        points.push(current);

        if !bounds.contains(current) {
            break;
        }
        if absorbed(current, particles, config.sink_margin) {
            break;
        }
    }

    FieldLine { points }
}

/// Seeds around every positive charge, in collection order.
pub fn seed_points(particles: &[Particle], lines_per_charge: usize, seed_offset: f32) -> Vec<Vec2> {
    let mut seeds = Vec::with_capacity(particles.len() * lines_per_charge);
    for p in particles.iter().filter(|p| p.is_positive()) {
        let r = p.radius + seed_offset;
        for i in 0..lines_per_charge {
            let angle = TAU * i as f32 / lines_per_charge as f32;
            seeds.push(p.position + Vec2::from_angle(angle) * r);
        }
    }
    seeds
}

/// Seed and trace every field line of the configuration.
pub fn trace_all(
    particles: &[Particle],
    params: FieldParams,
    config: &FieldLineConfig,
    bounds: &Bounds,
) -> Vec<FieldLine> {
    seed_points(particles, config.lines_per_charge, config.seed_offset)
        .into_iter()
        .map(|seed| trace_field_line(seed, particles, params, config, bounds))
        .collect()
}
