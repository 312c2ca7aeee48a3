//! JSON run configuration.
//!
//! ```json
//! {
//!     "balloon": { "type": "HAB-3000", "reserve_mass_kg": 2.0, "bleed_mass_kg": 1.0 },
//!     "payload": { "bus_mass_kg": 2.0, "ballast_mass_kg": 0.0 },
//!     "simulation": {
//!         "id": "example",
//!         "duration": 3000, "dt": 0.1,
//!         "initial_altitude": 0, "initial_velocity": 0
//!     }
//! }
//! ```
//!
//! Every numeric key is required. Other top-level sections (for instance an
//! altitude controller `pid` block) are accepted and ignored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::balloon::{Balloon, Gas, Payload};
use crate::error::{Error, Result};
use crate::sim::RunSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub balloon: BalloonConfig,
    pub payload: PayloadConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalloonConfig {
    /// Part number in the balloon library, e.g. `HAB-3000`.
    #[serde(rename = "type")]
    pub part_number: String,
    /// Lift gas that always stays in the balloon, kg.
    pub reserve_mass_kg: f64,
    /// Lift gas available for venting, kg. Starts inside the balloon.
    pub bleed_mass_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadConfig {
    pub bus_mass_kg: f64,
    pub ballast_mass_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub id: String,
    pub duration: f64,
    pub dt: f64,
    pub initial_altitude: f64,
    pub initial_velocity: f64,
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::MalformedConfig { source })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Lift gas loaded at launch, kg.
    pub fn lift_gas_mass(&self) -> f64 {
        self.balloon.reserve_mass_kg + self.balloon.bleed_mass_kg
    }

    /// Resolve the balloon, fill it, and assemble the run inputs.
    pub fn build(&self) -> Result<(Balloon, Payload, RunSettings)> {
        for (key, value) in [
            ("reserve_mass_kg", self.balloon.reserve_mass_kg),
            ("bleed_mass_kg", self.balloon.bleed_mass_kg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{key} must be a non-negative number, not {value}"
                )));
            }
        }

        let mut balloon = Balloon::from_part_number(&self.balloon.part_number)?;
        let species = balloon.spec().lifting_gas;
        *balloon.lift_gas_mut() = Gas::new(species, self.lift_gas_mass());

        let payload = Payload::new(self.payload.bus_mass_kg, self.payload.ballast_mass_kg);
        let settings = RunSettings {
            duration: self.simulation.duration,
            dt: self.simulation.dt,
            initial_altitude: self.simulation.initial_altitude,
            initial_velocity: self.simulation.initial_velocity,
        };
        Ok((balloon, payload, settings))
    }
}
