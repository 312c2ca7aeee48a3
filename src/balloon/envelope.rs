use std::f64::consts::PI;

use super::gas::Gas;
use super::library::{self, BalloonSpec};
use crate::error::{Error, Result};
use crate::physics::atmosphere::AtmosphereSample;

/// Radius (m) of a sphere with the given volume (m^3).
pub fn radius_from_volume(volume: f64) -> Result<f64> {
    if volume < 0.0 {
        return Err(Error::NegativeVolume(volume));
    }
    Ok((volume / (4.0 / 3.0 * PI)).cbrt())
}

/// A balloon envelope and the lift gas inside it.
///
/// The spec never changes after construction. The lift gas is the only
/// mutable part: its temperature and pressure follow the ambient air, and
/// its mass may be adjusted by callers between runs.
#[derive(Debug, Clone)]
pub struct Balloon {
    spec: BalloonSpec,
    lift_gas: Gas,
}

impl Balloon {
    pub fn new(spec: BalloonSpec, lift_gas: Gas) -> Self {
        Self { spec, lift_gas }
    }

    /// Balloon from the bundled library, filled with zero mass of the
    /// manufacturer-recommended lift gas.
    pub fn from_part_number(part_number: &str) -> Result<Self> {
        let spec = library::lookup(part_number)?;
        let lift_gas = Gas::new(spec.lifting_gas, 0.0);
        Ok(Self::new(spec, lift_gas))
    }

    pub fn spec(&self) -> &BalloonSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Envelope mass (kg), excluding the lift gas.
    pub fn mass(&self) -> f64 {
        self.spec.mass
    }

    pub fn lift_gas(&self) -> &Gas {
        &self.lift_gas
    }

    pub fn lift_gas_mut(&mut self) -> &mut Gas {
        &mut self.lift_gas
    }

    /// Current lift gas volume (m^3).
    pub fn volume(&self) -> f64 {
        self.lift_gas.volume()
    }

    pub fn radius(&self) -> Result<f64> {
        radius_from_volume(self.volume())
    }

    pub fn diameter(&self) -> Result<f64> {
        Ok(2.0 * self.radius()?)
    }

    /// Cross-sectional area (m^2) seen by the oncoming air, assuming a sphere.
    pub fn projected_area(&self) -> Result<f64> {
        let r = self.radius()?;
        Ok(PI * r * r)
    }

    /// True once the current diameter reaches the rated burst diameter.
    pub fn burst_threshold_exceeded(&self) -> Result<bool> {
        let diameter = self.diameter()?;
        log::trace!(
            "balloon diameter {:.3} m (burst at {:.3} m)",
            diameter,
            self.spec.burst_diameter
        );
        Ok(diameter >= self.spec.burst_diameter)
    }

    pub fn match_ambient(&mut self, atm: &AtmosphereSample) {
        self.lift_gas.match_ambient(atm);
    }

    pub fn match_conditions(&mut self, temperature: f64, pressure: f64) {
        self.lift_gas.match_conditions(temperature, pressure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balloon::GasSpecies;
    use approx::assert_relative_eq;

    fn hab_3000(gas_mass: f64) -> Balloon {
        let mut b = Balloon::from_part_number("HAB-3000").unwrap();
        b.lift_gas_mut().mass = gas_mass;
        b
    }

    #[test]
    fn radius_of_unit_volume() {
        assert_relative_eq!(radius_from_volume(1.0).unwrap(), 0.620_350_490_899_4, epsilon = 1e-12);
        assert_eq!(radius_from_volume(0.0).unwrap(), 0.0);
    }

    #[test]
    fn negative_volume_has_no_radius() {
        let err = radius_from_volume(-1.0).unwrap_err();
        assert!(matches!(err, Error::NegativeVolume(v) if v == -1.0));
        assert!(err.is_configuration());
    }

    #[test]
    fn fills_with_recommended_gas() {
        let b = Balloon::from_part_number("HAB-3000").unwrap();
        assert_eq!(b.lift_gas().species(), GasSpecies::Helium);
        assert_eq!(b.volume(), 0.0);
        assert_eq!(b.projected_area().unwrap(), 0.0);
    }

    #[test]
    fn projected_area_matches_sphere() {
        let b = hab_3000(2.0);
        let r = b.radius().unwrap();
        assert_relative_eq!(4.0 / 3.0 * PI * r.powi(3), b.volume(), max_relative = 1e-12);
        assert_relative_eq!(b.projected_area().unwrap(), PI * r * r, max_relative = 1e-12);
    }

    #[test]
    fn burst_threshold() {
        let mut b = hab_3000(3.0);
        b.match_conditions(288.15, 101_325.0);
        assert!(!b.burst_threshold_exceeded().unwrap());

        // Low enough pressure to inflate past 13 m
        b.match_conditions(220.0, 500.0);
        assert!(b.diameter().unwrap() >= b.spec().burst_diameter);
        assert!(b.burst_threshold_exceeded().unwrap());
    }

    #[test]
    fn over_bled_gas_is_an_error() {
        let b = hab_3000(-0.5);
        assert!(matches!(b.burst_threshold_exceeded(), Err(Error::NegativeVolume(_))));
        assert!(b.projected_area().is_err());
    }
}
