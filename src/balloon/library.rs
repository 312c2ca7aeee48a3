use serde::Deserialize;

use super::gas::GasSpecies;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Balloon specification records
// ---------------------------------------------------------------------------

/// Manufacturer data for one balloon part number. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct BalloonSpec {
    pub name: String,
    pub part_number: String,
    pub datasheet: String,
    pub lifting_gas: GasSpecies, // manufacturer-recommended lift gas
    pub drag_coefficient: f64,   // sphere assumption
    pub mass: f64,               // kg, envelope only
    pub burst_diameter: f64,     // m
}

/// Part numbers bundled with the crate, paired with their JSON records.
const LIBRARY: &[(&str, &str)] = &[
    ("HAB-800", include_str!("library/HAB-800.json")),
    ("HAB-1200", include_str!("library/HAB-1200.json")),
    ("HAB-1500", include_str!("library/HAB-1500.json")),
    ("HAB-2000", include_str!("library/HAB-2000.json")),
    ("HAB-3000", include_str!("library/HAB-3000.json")),
];

#[derive(Deserialize)]
struct RawRecord {
    name: String,
    part_number: String,
    #[serde(default)]
    datasheet: String,
    spec: RawSpec,
}

#[derive(Deserialize)]
struct RawSpec {
    lifting_gas: GasSpecies,
    drag_coefficient: f64,
    mass: Quantity,
    diameter_burst: Quantity,
}

#[derive(Deserialize)]
struct Quantity {
    value: f64,
    unit: String,
}

impl Quantity {
    fn mass_kg(&self, part_number: &str) -> Result<f64> {
        match self.unit.as_str() {
            "kg" => Ok(self.value),
            "g" => Ok(self.value / 1000.0),
            other => Err(unit_error(part_number, "mass", other)),
        }
    }

    fn length_m(&self, part_number: &str) -> Result<f64> {
        match self.unit.as_str() {
            "m" => Ok(self.value),
            "cm" => Ok(self.value / 100.0),
            other => Err(unit_error(part_number, "diameter_burst", other)),
        }
    }
}

fn unit_error(part_number: &str, key: &str, unit: &str) -> Error {
    Error::InvalidConfig(format!("{part_number}: unsupported unit \"{unit}\" for {key}"))
}

impl BalloonSpec {
    /// Parse one JSON specification record.
    pub fn from_json(part_number: &str, json: &str) -> Result<Self> {
        let raw: RawRecord = serde_json::from_str(json).map_err(|source| Error::MalformedLibrary {
            part_number: part_number.to_string(),
            source,
        })?;
        let mass = raw.spec.mass.mass_kg(part_number)?;
        let burst_diameter = raw.spec.diameter_burst.length_m(part_number)?;
        Ok(Self {
            name: raw.name,
            part_number: raw.part_number,
            datasheet: raw.datasheet,
            lifting_gas: raw.spec.lifting_gas,
            drag_coefficient: raw.spec.drag_coefficient,
            mass,
            burst_diameter,
        })
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Part numbers of every bundled balloon.
pub fn known_balloons() -> Vec<&'static str> {
    LIBRARY.iter().map(|(pn, _)| *pn).collect()
}

/// Part numbers are case sensitive: `HAB-3000` is valid, `hab-3000` is not.
pub fn is_valid_balloon(part_number: &str) -> bool {
    LIBRARY.iter().any(|(pn, _)| *pn == part_number)
}

/// Resolve a part number to its specification.
pub fn lookup(part_number: &str) -> Result<BalloonSpec> {
    let (_, json) = LIBRARY
        .iter()
        .find(|(pn, _)| *pn == part_number)
        .ok_or_else(|| Error::UnknownBalloon(part_number.to_string()))?;
    log::debug!("known balloons: {:?}", known_balloons());
    BalloonSpec::from_json(part_number, json)
}
