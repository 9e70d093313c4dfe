//! Charge selection for newly placed particles.
//!
//! The placement tools create exactly `+1`, `-1`, or a coin flip between the
//! two. The coin is drawn from a [`SmallRng`] owned by the simulation; seed it
//! with [`ChargePicker::seeded`] for reproducible runs.

use crate::particle::ChargeSign;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Which charge a placement request should produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeChoice {
    #[default]
    Positive,
    Negative,
    /// Either sign with equal probability.
    Random,
}

impl From<ChargeSign> for ChargeChoice {
    fn from(sign: ChargeSign) -> Self {
        match sign {
            ChargeSign::Positive => ChargeChoice::Positive,
            ChargeSign::Negative => ChargeChoice::Negative,
        }
    }
}

/// Resolves [`ChargeChoice`]s to unit charges.
#[derive(Clone, Debug)]
pub struct ChargePicker {
    rng: SmallRng,
}

impl Default for ChargePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ChargePicker {
    /// Picker seeded from the wall clock, different every run.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(seed)
    }

    /// Picker with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// `+1.0` or `-1.0`.
    pub fn pick(&mut self, choice: ChargeChoice) -> f32 {
        match choice {
            ChargeChoice::Positive => 1.0,
            ChargeChoice::Negative => -1.0,
            ChargeChoice::Random => {
                if self.rng.gen_bool(0.5) {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}
