//! Simulation state and the operations exposed to input and UI layers.

use crate::config::SimConfig;
use crate::error::SimulationError;
use crate::field::{sample_grid, FieldSample};
use crate::forces::apply_coulomb_forces;
use crate::integrator::integrate;
use crate::particle::{Particle, ParticleId};
use crate::render::{self, ParticleInstance};
use crate::spawn::{ChargeChoice, ChargePicker};
use crate::stats::Stats;
use crate::streamline::{self, FieldLine, FieldParams};
use glam::Vec2;

/// Extra slack around a particle's radius for picking and erasing.
pub const HIT_MARGIN: f32 = 2.0;

/// A 2D system of point charges.
///
/// Particles are kept in creation order. One [`tick`](Self::tick) runs the
/// force pass over all pairs and then integrates every particle; field
/// queries borrow the simulation immutably and never change it.
#[derive(Debug)]
pub struct Simulation {
    particles: Vec<Particle>,
    config: SimConfig,
    picker: ChargePicker,
    next_id: u64,
    ticks: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// Empty simulation with default tunables.
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            config: SimConfig::default(),
            picker: ChargePicker::new(),
            next_id: 0,
            ticks: 0,
        }
    }

    /// Empty simulation with validated tunables.
    pub fn with_config(config: SimConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Fix the seed used for random charge choices.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.picker = ChargePicker::seeded(seed);
        self
    }

    // ========== Tunables ==========

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Replace the tunables, keeping the old ones if validation fails.
    pub fn set_config(&mut self, config: SimConfig) -> Result<(), SimulationError> {
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejected configuration");
            return Err(e.into());
        }
        self.config = config;
        Ok(())
    }

    /// Edit a copy of the tunables and commit it only if it validates.
    ///
    /// ```ignore
    /// sim.update_config(|c| c.field_lines.max_steps = 200)?;
    /// ```
    pub fn update_config(
        &mut self,
        edit: impl FnOnce(&mut SimConfig),
    ) -> Result<(), SimulationError> {
        let mut config = self.config.clone();
        edit(&mut config);
        self.set_config(config)
    }

    // Slider setters for the control panel

    pub fn set_k_coulomb(&mut self, k: f32) -> Result<(), SimulationError> {
        self.update_config(|c| c.k_coulomb = k)
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<(), SimulationError> {
        self.update_config(|c| c.friction = friction)
    }

    pub fn set_min_distance(&mut self, min_distance: f32) -> Result<(), SimulationError> {
        self.update_config(|c| c.min_distance = min_distance)
    }

    fn field_params(&self) -> FieldParams {
        FieldParams {
            k: self.config.k_coulomb,
            min_distance: self.config.min_distance,
        }
    }

    // ========== Particle collection ==========

    /// Append a particle at `(x, y)` with the given charge.
    ///
    /// A zero or non-finite charge is rejected and nothing is added.
    pub fn create_particle(
        &mut self,
        x: f32,
        y: f32,
        charge: f32,
    ) -> Result<ParticleId, SimulationError> {
        if charge == 0.0 || !charge.is_finite() {
            return Err(SimulationError::InvalidCharge(charge));
        }
        Ok(self.push_particle(x, y, charge))
    }

    /// Append a unit charge whose sign comes from `choice`.
    pub fn spawn_particle(&mut self, x: f32, y: f32, choice: ChargeChoice) -> ParticleId {
        let charge = self.picker.pick(choice);
        self.push_particle(x, y, charge)
    }

    fn push_particle(&mut self, x: f32, y: f32, charge: f32) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.particles.push(Particle::new(
            id,
            Vec2::new(x, y),
            charge,
            self.config.particle_mass,
            self.config.particle_radius,
        ));
        tracing::debug!(%id, x, y, charge, "particle created");
        id
    }

    /// Remove the newest particle whose disc (plus [`HIT_MARGIN`]) covers
    /// `(x, y)`.
    pub fn delete_particle_near(&mut self, x: f32, y: f32) -> Option<Particle> {
        let point = Vec2::new(x, y);
        let index = self.particles.iter().rposition(|p| p.hit(point, HIT_MARGIN))?;
        let removed = self.particles.remove(index);
        tracing::debug!(id = %removed.id, "particle erased");
        Some(removed)
    }

    /// Oldest particle whose disc (plus [`HIT_MARGIN`]) covers `(x, y)`.
    pub fn find_particle_near(&self, x: f32, y: f32) -> Option<ParticleId> {
        let point = Vec2::new(x, y);
        self.particles
            .iter()
            .find(|p| p.hit(point, HIT_MARGIN))
            .map(|p| p.id)
    }

    pub fn clear_all_particles(&mut self) {
        tracing::debug!(count = self.particles.len(), "particles cleared");
        self.particles.clear();
    }

    /// Drag: overwrite the position, leaving the velocity untouched.
    pub fn set_position(&mut self, id: ParticleId, x: f32, y: f32) -> Result<(), SimulationError> {
        let particle = self
            .particles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SimulationError::UnknownParticle(id))?;
        particle.position = Vec2::new(x, y);
        Ok(())
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// Particles in creation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // ========== Stepping ==========

    /// Advance one fixed step: Coulomb forces over all pairs, then motion.
    pub fn tick(&mut self) {
        let SimConfig {
            k_coulomb,
            friction,
            min_distance,
            bounds,
            ..
        } = self.config;

        apply_coulomb_forces(&mut self.particles, k_coulomb, min_distance);
        for p in &mut self.particles {
            integrate(p, friction, &bounds);
        }
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, particles = self.particles.len(), "tick");
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // ========== Field queries ==========

    /// Electric field at `(x, y)`.
    pub fn sample_field(&self, x: f32, y: f32) -> Vec2 {
        crate::field::sample_field(
            Vec2::new(x, y),
            &self.particles,
            self.config.k_coulomb,
            self.config.min_distance,
        )
    }

    /// Field line starting at `(seed_x, seed_y)`.
    pub fn trace_field_line(&self, seed_x: f32, seed_y: f32) -> FieldLine {
        streamline::trace_field_line(
            Vec2::new(seed_x, seed_y),
            &self.particles,
            self.field_params(),
            &self.config.field_lines,
            &self.config.bounds,
        )
    }

    /// Every field line seeded around the positive charges.
    pub fn field_lines(&self) -> Vec<FieldLine> {
        streamline::trace_all(
            &self.particles,
            self.field_params(),
            &self.config.field_lines,
            &self.config.bounds,
        )
    }

    /// Field arrows on the configured grid.
    pub fn field_grid(&self) -> Vec<FieldSample> {
        sample_grid(
            &self.config.bounds,
            &self.particles,
            self.config.k_coulomb,
            self.config.min_distance,
            self.config.field_grid.spacing,
        )
    }

    // ========== Presentation ==========

    pub fn stats(&self) -> Stats {
        Stats::collect(&self.particles, self.ticks)
    }

    pub fn instances(&self) -> Vec<ParticleInstance> {
        render::instances(&self.particles)
    }
}
