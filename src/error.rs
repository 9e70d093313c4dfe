//! Error types for chargefield.
//!
//! The physics itself is total; these errors only cover configuration
//! validation and handles that no longer refer to a live particle.

use crate::particle::ParticleId;
use std::fmt;

/// Errors produced while validating or loading a [`SimConfig`](crate::SimConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// A value that must be strictly positive was not.
    NonPositive {
        field: &'static str,
        value: f32,
    },
    /// A value fell outside its half-open range `[min, max)`.
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    /// A preset could not be parsed or serialized.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "`{}` must be positive, got {}", field, value)
            }
            ConfigError::OutOfRange { field, value, min, max } => {
                write!(f, "`{}` must be in [{}, {}), got {}", field, min, max, value)
            }
            ConfigError::Json(e) => write!(f, "Invalid configuration JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Errors returned by [`Simulation`](crate::Simulation) operations.
#[derive(Debug)]
pub enum SimulationError {
    /// The handle does not name a live particle.
    UnknownParticle(ParticleId),
    /// A particle charge must be finite and nonzero.
    InvalidCharge(f32),
    /// The configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnknownParticle(id) => write!(f, "No particle with id {}", id),
            SimulationError::InvalidCharge(q) => {
                write!(f, "Particle charge must be finite and nonzero, got {}", q)
            }
            SimulationError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(e) => Some(e),
            SimulationError::UnknownParticle(_) | SimulationError::InvalidCharge(_) => None,
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}
