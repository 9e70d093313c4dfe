//! Fixed-step motion integration.
//!
//! One call advances one particle by one tick:
//!
//! 1. damp: `v *= 1 - friction`
//! 2. kick: `v += a`
//! 3. drift: `x += v`
//! 4. consume the accumulator: `a = 0`
//! 5. reflect off the walls of [`Bounds`]
//!
//! Damping happens before the new acceleration is added. Swapping the two
//! changes the trajectories, so the order is fixed.

use crate::config::Bounds;
use crate::particle::Particle;
use glam::Vec2;

/// Advance `particle` by one tick.
pub fn integrate(particle: &mut Particle, friction: f32, bounds: &Bounds) {
    particle.velocity *= 1.0 - friction;
    particle.velocity += particle.acceleration;
    particle.position += particle.velocity;
    particle.acceleration = Vec2::ZERO;
    reflect(particle, bounds);
}

/// Clamp the position into `bounds`, inverting the velocity of every axis
/// that had to be clamped. Axes are handled independently, so a corner hit
/// reflects both.
pub fn reflect(particle: &mut Particle, bounds: &Bounds) {
    let (x, vx) = reflect_axis(particle.position.x, particle.velocity.x, bounds.width);
    let (y, vy) = reflect_axis(particle.position.y, particle.velocity.y, bounds.height);
    particle.position = Vec2::new(x, y);
    particle.velocity = Vec2::new(vx, vy);
}

#[inline]
fn reflect_axis(pos: f32, vel: f32, extent: f32) -> (f32, f32) {
    if pos < 0.0 {
        (0.0, -vel)
    } else if pos > extent {
        (extent, -vel)
    } else {
        (pos, vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleId;

    fn at_rest(x: f32, y: f32) -> Particle {
        Particle::new(ParticleId(0), Vec2::new(x, y), 1.0, 1.0, 10.0)
    }

    #[test]
    fn test_right_wall_reflection() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut p = at_rest(799.0, 300.0);
        p.velocity = Vec2::new(5.0, 0.0);
        integrate(&mut p, 0.0, &bounds);
        assert_eq!(p.position.x, 800.0);
        assert!(p.velocity.x < 0.0);
        assert_eq!(p.velocity.x, -5.0);
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = at_rest(1.0, 1.0);
        p.velocity = Vec2::new(-3.0, -4.0);
        integrate(&mut p, 0.0, &bounds);
        assert_eq!(p.position, Vec2::ZERO);
        assert_eq!(p.velocity, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_friction_applies_before_acceleration() {
        let bounds = Bounds::new(1000.0, 1000.0);
        let mut p = at_rest(500.0, 500.0);
        p.velocity = Vec2::new(10.0, 0.0);
        p.acceleration = Vec2::new(1.0, 0.0);
        integrate(&mut p, 0.5, &bounds);
        // 10 * 0.5 + 1, not (10 + 1) * 0.5
        assert_eq!(p.velocity.x, 6.0);
        assert_eq!(p.position.x, 506.0);
    }

    #[test]
    fn test_accumulator_is_consumed() {
        let bounds = Bounds::new(1000.0, 1000.0);
        let mut p = at_rest(500.0, 500.0);
        p.acceleration = Vec2::new(0.25, -0.5);
        integrate(&mut p, 0.02, &bounds);
        assert_eq!(p.acceleration, Vec2::ZERO);
        assert_eq!(p.velocity, Vec2::new(0.25, -0.5));
    }

    #[test]
    fn test_friction_decreases_speed_monotonically() {
        let bounds = Bounds::new(1.0e6, 1.0e6);
        let mut p = at_rest(5.0e5, 5.0e5);
        p.velocity = Vec2::new(3.0, 4.0);
        let mut last = p.velocity.length();
        for _ in 0..2000 {
            integrate(&mut p, 0.02, &bounds);
            let speed = p.velocity.length();
            assert!(speed <= last);
            if last > 0.0 {
                assert!(speed < last);
            }
            last = speed;
        }
        assert!(last < 1e-6);
    }
}
