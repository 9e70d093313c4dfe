//! Snapshots handed to the external renderer.
//!
//! The renderer draws circles for charges and polylines for field lines. It
//! receives plain `#[repr(C)]` data it can upload as-is:
//!
//! ```ignore
//! let instances = sim.instances();
//! queue.write_buffer(&instance_buffer, 0, render::as_bytes(&instances));
//!
//! let lines = render::line_vertices(&sim.field_lines());
//! for range in &lines.ranges {
//!     draw_polyline(&lines.vertices[range.clone()]);
//! }
//! ```

use crate::particle::{ChargeSign, Particle};
use crate::streamline::FieldLine;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::ops::Range;

/// One charge as the renderer sees it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: Vec2,
    pub radius: f32,
    pub charge: f32,
    /// 0 = positive, 1 = negative.
    pub class: u32,
    pub _pad: [u32; 3],
}

impl From<&Particle> for ParticleInstance {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position,
            radius: p.radius,
            charge: p.charge,
            class: match p.sign() {
                ChargeSign::Positive => 0,
                ChargeSign::Negative => 1,
            },
            _pad: [0; 3],
        }
    }
}

/// Build instances in collection order.
pub fn instances(particles: &[Particle]) -> Vec<ParticleInstance> {
    particles.iter().map(ParticleInstance::from).collect()
}

/// Field lines flattened into one vertex list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineVertices {
    pub vertices: Vec<[f32; 2]>,
    /// Vertex range of each non-empty line.
    pub ranges: Vec<Range<usize>>,
}

/// Flatten polylines. Lines with fewer than two points draw nothing and
/// are left out.
pub fn line_vertices(lines: &[FieldLine]) -> LineVertices {
    let mut out = LineVertices::default();
    for line in lines.iter().filter(|l| l.len() >= 2) {
        let start = out.vertices.len();
        out.vertices.extend(line.points().iter().map(|p| p.to_array()));
        out.ranges.push(start..out.vertices.len());
    }
    out
}

/// Raw bytes of a Pod slice, ready for a GPU buffer.
#[inline]
pub fn as_bytes<T: Pod>(data: &[T]) -> &[u8] {
    bytemuck::cast_slice(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleId;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
        let p = Particle::new(ParticleId(1), Vec2::new(3.0, 4.0), -1.0, 1.0, 10.0);
        let inst = ParticleInstance::from(&p);
        assert_eq!(inst.position, Vec2::new(3.0, 4.0));
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&inst));
        assert_eq!(&floats[..4], &[3.0, 4.0, 10.0, -1.0]);
        assert_eq!(inst.class, 1);
        assert_eq!(as_bytes(&[inst]).len(), 32);
    }

    #[test]
    fn test_line_vertices_skip_degenerate_lines() {
        let ps = [Particle::new(ParticleId(0), Vec2::new(700.0, 300.0), 1.0, 1.0, 10.0)];
        let seed_line = crate::streamline::trace_field_line(
            Vec2::new(711.0, 300.0),
            &ps,
            crate::streamline::FieldParams {
                k: 800.0,
                min_distance: 8.0,
            },
            &crate::config::FieldLineConfig::default(),
            &crate::config::Bounds::default(),
        );
        let lines = vec![FieldLine::default(), seed_line.clone(), seed_line];
        let flat = line_vertices(&lines);
        let n = lines[1].len();
        assert_eq!(flat.ranges, vec![0..n, n..2 * n]);
        assert_eq!(flat.vertices.len(), 2 * n);
    }
}
