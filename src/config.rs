//! Run-time tunables.
//!
//! Everything the control panel can change lives in a [`SimConfig`] owned by
//! a [`Simulation`](crate::Simulation), so independent simulations never share
//! state. The engine re-reads the config on every tick and every query.
//!
//! # Example
//!
//! ```ignore
//! let config = SimConfig::default()
//!     .with_bounds(800.0, 600.0)
//!     .with_k_coulomb(1200.0)
//!     .with_friction(0.05);
//! let sim = Simulation::with_config(config)?;
//! ```
//!
//! Configs are plain serde types, so presets can be loaded from JSON:
//!
//! ```ignore
//! let config = SimConfig::from_json(r#"{ "k_coulomb": 400.0 }"#)?;
//! ```

use crate::error::ConfigError;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Closed rectangular domain `[0, width] × [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Upper corner of the domain.
    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Whether `point` lies inside the closed domain.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.extent() * 0.5
    }
}

/// Field-line tracing and seeding parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLineConfig {
    /// Distance advanced per tracer step.
    pub step_length: f32,
    /// Hard cap on points per line.
    pub max_steps: usize,
    /// Field magnitude below which a line stops (null region).
    pub min_field: f32,
    /// Seeds placed around every positive charge.
    pub lines_per_charge: usize,
    /// Seeds sit at `radius + seed_offset` from the charge centre.
    pub seed_offset: f32,
    /// A line ends within `radius + sink_margin` of a negative charge.
    pub sink_margin: f32,
}

impl Default for FieldLineConfig {
    fn default() -> Self {
        Self {
            step_length: 2.2,
            max_steps: 600,
            min_field: 0.01,
            lines_per_charge: 32,
            seed_offset: 1.0,
            sink_margin: 4.0,
        }
    }
}

/// Spacing of the arrow grid used for field vector display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldGridConfig {
    pub spacing: f32,
}

impl Default for FieldGridConfig {
    fn default() -> Self {
        Self { spacing: 40.0 }
    }
}

/// Simulation tunables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Coulomb constant `k` shared by forces and field sampling.
    pub k_coulomb: f32,
    /// Per-tick velocity damping in `[0, 1)`.
    pub friction: f32,
    /// Separation floor (forces clamp to it, the field skips inside it).
    pub min_distance: f32,
    /// Simulation domain and tracing canvas.
    pub bounds: Bounds,
    /// Mass given to new particles.
    pub particle_mass: f32,
    /// Radius given to new particles.
    pub particle_radius: f32,
    pub field_lines: FieldLineConfig,
    pub field_grid: FieldGridConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            k_coulomb: 800.0,
            friction: 0.02,
            min_distance: 8.0,
            bounds: Bounds::default(),
            particle_mass: 1.0,
            particle_radius: 10.0,
            field_lines: FieldLineConfig::default(),
            field_grid: FieldGridConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn with_k_coulomb(mut self, k: f32) -> Self {
        self.k_coulomb = k;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    pub fn with_particle_mass(mut self, mass: f32) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_particle_radius(mut self, radius: f32) -> Self {
        self.particle_radius = radius;
        self
    }

    pub fn with_field_lines(mut self, field_lines: FieldLineConfig) -> Self {
        self.field_lines = field_lines;
        self
    }

    pub fn with_grid_spacing(mut self, spacing: f32) -> Self {
        self.field_grid.spacing = spacing;
        self
    }

    /// Check every invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("min_distance", self.min_distance)?;
        positive("bounds.width", self.bounds.width)?;
        positive("bounds.height", self.bounds.height)?;
        positive("particle_mass", self.particle_mass)?;
        positive("particle_radius", self.particle_radius)?;
        positive("field_lines.step_length", self.field_lines.step_length)?;
        positive("field_lines.min_field", self.field_lines.min_field)?;
        non_negative("field_lines.seed_offset", self.field_lines.seed_offset)?;
        non_negative("field_lines.sink_margin", self.field_lines.sink_margin)?;
        positive("field_grid.spacing", self.field_grid.spacing)?;
        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::OutOfRange {
                field: "friction",
                value: self.friction,
                min: 0.0,
                max: 1.0,
            });
        }
        if !self.k_coulomb.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "k_coulomb",
                value: self.k_coulomb,
                min: f32::MIN,
                max: f32::MAX,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON preset. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // `!(v > 0)` also rejects NaN
    if !(value > 0.0) {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(value >= 0.0 && value.is_finite()) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: f32::INFINITY,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_control_panel() {
        let c = SimConfig::default();
        assert_eq!(c.k_coulomb, 800.0);
        assert_eq!(c.friction, 0.02);
        assert_eq!(c.min_distance, 8.0);
        assert_eq!(c.field_lines.max_steps, 600);
        assert_eq!(c.field_lines.lines_per_charge, 32);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_friction_must_be_below_one() {
        let c = SimConfig::default().with_friction(1.0);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::OutOfRange { field: "friction", .. })
        ));
        assert!(SimConfig::default().with_friction(0.0).validate().is_ok());
    }

    #[test]
    fn test_min_distance_must_be_positive() {
        let c = SimConfig::default().with_min_distance(0.0);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NonPositive { field: "min_distance", .. })
        ));
        let c = SimConfig::default().with_min_distance(f32::NAN);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_tracer_parameters_are_checked() {
        assert!(matches!(
            SimConfig::from_json(r#"{ "field_lines": { "min_field": 0.0 } }"#),
            Err(ConfigError::NonPositive { field: "field_lines.min_field", .. })
        ));
        let mut c = SimConfig::default();
        c.field_lines.sink_margin = -1.0;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::OutOfRange { field: "field_lines.sink_margin", .. })
        ));
        c.field_lines.sink_margin = 0.0;
        c.field_lines.seed_offset = f32::NAN;
        assert!(c.validate().is_err());
        c.field_lines.seed_offset = 0.0;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c = SimConfig::from_json(r#"{ "k_coulomb": 400.0, "field_lines": { "max_steps": 10 } }"#)
            .unwrap();
        assert_eq!(c.k_coulomb, 400.0);
        assert_eq!(c.friction, 0.02);
        assert_eq!(c.field_lines.max_steps, 10);
        assert_eq!(c.field_lines.step_length, 2.2);
    }

    #[test]
    fn test_invalid_json_preset_is_rejected() {
        assert!(matches!(SimConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
        assert!(SimConfig::from_json(r#"{ "friction": 2.0 }"#).is_err());
    }

    #[test]
    fn test_json_preserves_values() {
        let c = SimConfig::default().with_bounds(320.0, 240.0).with_k_coulomb(50.0);
        let back = SimConfig::from_json(&c.to_json().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_bounds_contains_is_closed() {
        let b = Bounds::new(100.0, 50.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(100.0, 50.0)));
        assert!(!b.contains(Vec2::new(100.1, 10.0)));
        assert!(!b.contains(Vec2::new(10.0, -0.1)));
    }
}
