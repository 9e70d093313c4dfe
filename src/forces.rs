//! Pairwise Coulomb forces.
//!
//! Every unordered pair is visited exactly once. The force on the first
//! particle is computed, and the second receives its exact negation, so
//! momentum is conserved by construction rather than by floating-point luck.
//!
//! Close encounters are tamed by clamping the separation to `min_distance`
//! before the inverse-square magnitude is formed, which bounds the force at
//! `k |q_a q_b| / min_distance²`.

use crate::particle::Particle;
use glam::Vec2;

/// Coulomb force on `a` due to `b`.
///
/// Points away from `b` for like charges and toward it for unlike charges.
/// The direction is `r_vec / r` with the clamped `r`, so inside the floor it
/// shrinks with the true separation. Coincident particles have no direction
/// of their own and are pushed apart along +x at the full floor magnitude.
#[inline]
pub fn pair_force(a: &Particle, b: &Particle, k: f32, min_distance: f32) -> Vec2 {
    let r_vec = a.position - b.position;
    let r = r_vec.length().max(min_distance);
    let r_hat = if r_vec == Vec2::ZERO { Vec2::X } else { r_vec / r };
    let magnitude = k * a.charge * b.charge / (r * r);
    r_hat * magnitude
}

/// Accumulate Coulomb forces for every pair into the particles' accelerations.
pub fn apply_coulomb_forces(particles: &mut [Particle], k: f32, min_distance: f32) {
    let n = particles.len();
    for i in 0..n {
        // Split so `i` and every `j > i` can be borrowed mutably together
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            let f = pair_force(a, b, k, min_distance);
            a.apply_force(f);
            b.apply_force(-f);
        }
    }
}
