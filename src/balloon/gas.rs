use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::physics::atmosphere::AtmosphereSample;
use crate::physics::constants::{GAS_CONSTANT, STANDARD_PRESSURE, STANDARD_TEMPERATURE};

// ---------------------------------------------------------------------------
// Gas species table (dry gases at sea level, US Standard Atmosphere 1976)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GasSpecies {
    Air,
    Helium,
    Hydrogen,
    Nitrogen,
    Oxygen,
    Argon,
    CarbonDioxide,
    Neon,
    Krypton,
    Xenon,
    Methane,
}

impl GasSpecies {
    pub const ALL: [GasSpecies; 11] = [
        GasSpecies::Air,
        GasSpecies::Helium,
        GasSpecies::Hydrogen,
        GasSpecies::Nitrogen,
        GasSpecies::Oxygen,
        GasSpecies::Argon,
        GasSpecies::CarbonDioxide,
        GasSpecies::Neon,
        GasSpecies::Krypton,
        GasSpecies::Xenon,
        GasSpecies::Methane,
    ];

    /// Molar mass, kg/mol.
    pub fn molar_mass(self) -> f64 {
        match self {
            GasSpecies::Air => 0.028_97,
            GasSpecies::Helium => 0.004_002_6,
            GasSpecies::Hydrogen => 0.002_015_94,
            GasSpecies::Nitrogen => 0.028_013_4,
            GasSpecies::Oxygen => 0.031_998_8,
            GasSpecies::Argon => 0.039_948,
            GasSpecies::CarbonDioxide => 0.044_009_95,
            GasSpecies::Neon => 0.020_183,
            GasSpecies::Krypton => 0.083_80,
            GasSpecies::Xenon => 0.131_30,
            GasSpecies::Methane => 0.016_043_03,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GasSpecies::Air => "air",
            GasSpecies::Helium => "helium",
            GasSpecies::Hydrogen => "hydrogen",
            GasSpecies::Nitrogen => "nitrogen",
            GasSpecies::Oxygen => "oxygen",
            GasSpecies::Argon => "argon",
            GasSpecies::CarbonDioxide => "carbon dioxide",
            GasSpecies::Neon => "neon",
            GasSpecies::Krypton => "krypton",
            GasSpecies::Xenon => "xenon",
            GasSpecies::Methane => "methane",
        }
    }

    /// Chemical abbreviation; air has none beyond its name.
    pub fn symbol(self) -> &'static str {
        match self {
            GasSpecies::Air => "air",
            GasSpecies::Helium => "he",
            GasSpecies::Hydrogen => "h2",
            GasSpecies::Nitrogen => "n2",
            GasSpecies::Oxygen => "o2",
            GasSpecies::Argon => "ar",
            GasSpecies::CarbonDioxide => "co2",
            GasSpecies::Neon => "ne",
            GasSpecies::Krypton => "kr",
            GasSpecies::Xenon => "xe",
            GasSpecies::Methane => "ch4",
        }
    }
}

/// Every accepted species key (abbreviations and full names).
pub fn known_species() -> Vec<&'static str> {
    let mut keys = Vec::with_capacity(GasSpecies::ALL.len() * 2);
    for species in GasSpecies::ALL {
        if species.symbol() != species.name() {
            keys.push(species.symbol());
        }
        keys.push(species.name());
    }
    keys
}

impl FromStr for GasSpecies {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        GasSpecies::ALL
            .into_iter()
            .find(|g| g.name() == key || g.symbol() == key)
            .ok_or_else(|| Error::UnknownGas {
                name: s.to_string(),
                known: known_species().join(", "),
            })
    }
}

impl TryFrom<String> for GasSpecies {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<GasSpecies> for String {
    fn from(g: GasSpecies) -> Self {
        g.name().to_string()
    }
}

impl fmt::Display for GasSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ---------------------------------------------------------------------------
// Ideal gas parcel
// ---------------------------------------------------------------------------

/// A finite mass of one gas species obeying the ideal gas law.
///
/// Temperature and pressure are state: they are overwritten in place each
/// integration step by [`Gas::match_ambient`], and every derived property is
/// read from the latest values.
#[derive(Debug, Clone, PartialEq)]
pub struct Gas {
    species: GasSpecies,
    pub mass: f64,        // kg
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
}

impl Gas {
    /// New gas at standard temperature and pressure.
    pub fn new(species: GasSpecies, mass: f64) -> Self {
        Self {
            species,
            mass,
            temperature: STANDARD_TEMPERATURE,
            pressure: STANDARD_PRESSURE,
        }
    }

    /// New gas from a species name or abbreviation, e.g. `"He"` or `"helium"`.
    pub fn from_name(species: &str, mass: f64) -> Result<Self> {
        Ok(Self::new(species.parse()?, mass))
    }

    pub fn species(&self) -> GasSpecies {
        self.species
    }

    pub fn molar_mass(&self) -> f64 {
        self.species.molar_mass()
    }

    /// Ideal gas volume (m^3).
    ///
    /// Zero mass gives zero volume; a negative (nonphysical) mass gives a
    /// negative volume rather than an error.
    pub fn volume(&self) -> f64 {
        let moles = self.mass / self.molar_mass();
        moles * GAS_CONSTANT * self.temperature / self.pressure
    }

    /// Ideal gas density (kg/m^3). Independent of mass.
    pub fn density(&self) -> f64 {
        self.molar_mass() * self.pressure / (GAS_CONSTANT * self.temperature)
    }

    /// Take on the ambient temperature and pressure.
    pub fn match_ambient(&mut self, atm: &AtmosphereSample) {
        log::debug!(
            "matching {} to ambient at {:.1} m ({:.2} K, {:.1} Pa)",
            self.species,
            atm.altitude,
            atm.temperature,
            atm.pressure
        );
        self.temperature = atm.temperature;
        self.pressure = atm.pressure;
    }

    pub fn match_conditions(&mut self, temperature: f64, pressure: f64) {
        log::debug!("setting {} to {temperature:.2} K, {pressure:.1} Pa", self.species);
        self.temperature = temperature;
        self.pressure = pressure;
    }
}
