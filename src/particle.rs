//! Point charges.
//!
//! A [`Particle`] is a charged disc in the 2D domain. Its charge drives the
//! Coulomb interaction, its radius is used for hit-testing and as the
//! absorption radius of negative charges when tracing field lines.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a particle owned by a [`Simulation`](crate::Simulation).
///
/// Ids are handed out in creation order and never reused, so a handle stays
/// valid while other particles are erased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual class of a charge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeSign {
    /// Field lines start here.
    Positive,
    /// Field lines are absorbed here.
    Negative,
}

impl ChargeSign {
    /// Classify a charge value. Zero is never stored, but maps to positive.
    #[inline]
    pub fn of(charge: f32) -> Self {
        if charge < 0.0 {
            ChargeSign::Negative
        } else {
            ChargeSign::Positive
        }
    }

    /// Unit charge of this sign.
    #[inline]
    pub fn unit(self) -> f32 {
        match self {
            ChargeSign::Positive => 1.0,
            ChargeSign::Negative => -1.0,
        }
    }
}

/// A point charge with Newtonian state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Stable handle.
    pub id: ParticleId,
    /// Centre of the charge.
    pub position: Vec2,
    /// Displacement per tick.
    pub velocity: Vec2,
    /// Accumulator, consumed and zeroed by every integration step.
    pub acceleration: Vec2,
    /// Signed charge, never zero.
    pub charge: f32,
    /// Inertial mass, always positive.
    pub mass: f32,
    /// Disc radius used for picking and sink absorption.
    pub radius: f32,
}

impl Particle {
    /// Create a particle at rest.
    pub fn new(id: ParticleId, position: Vec2, charge: f32, mass: f32, radius: f32) -> Self {
        debug_assert!(mass > 0.0, "particle mass must be positive");
        debug_assert!(charge != 0.0, "particle charge must be nonzero");
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            charge,
            mass,
            radius,
        }
    }

    /// Accumulate a force for this tick (`a += F / m`).
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.mass;
    }

    /// Sign class of the charge.
    #[inline]
    pub fn sign(&self) -> ChargeSign {
        ChargeSign::of(self.charge)
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.charge > 0.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.charge < 0.0
    }

    /// Whether `point` lies within `radius + margin` of the centre.
    #[inline]
    pub fn hit(&self, point: Vec2, margin: f32) -> bool {
        self.position.distance(point) <= self.radius + margin
    }

    /// Kinetic energy `m v² / 2`.
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
