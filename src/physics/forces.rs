use crate::balloon::Balloon;
use crate::error::Result;
use crate::physics::atmosphere::AtmosphereSample;

// ---------------------------------------------------------------------------
// Vertical force model (positive up)
// ---------------------------------------------------------------------------

/// Weight (N) of `total_mass` (kg). `gravity_accel` is negative, so is the result.
pub fn weight(gravity_accel: f64, total_mass: f64) -> f64 {
    gravity_accel * total_mass
}

/// Buoyancy (N) from the ambient air displaced by `gas_volume` (m^3) of lift gas.
///
/// Positive whenever the lift gas is lighter than the surrounding air.
pub fn buoyancy(gravity_accel: f64, gas_density: f64, ambient_density: f64, gas_volume: f64) -> f64 {
    gravity_accel * gas_volume * (gas_density - ambient_density)
}

/// Quadratic drag (N) on the projected area, always opposing the ascent rate.
pub fn drag(ascent_rate: f64, drag_coeff: f64, projected_area: f64, ambient_density: f64) -> f64 {
    if ascent_rate == 0.0 {
        return 0.0;
    }
    -ascent_rate.signum() * 0.5 * drag_coeff * projected_area * ascent_rate * ascent_rate * ambient_density
}

/// The three vertical forces acting on the flight train at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub weight: f64,
    pub buoyancy: f64,
    pub drag: f64,
}

impl ForceBreakdown {
    /// Evaluate every force for a balloon whose lift gas already matches `atm`.
    pub fn evaluate(
        atm: &AtmosphereSample,
        balloon: &Balloon,
        total_mass: f64,
        ascent_rate: f64,
    ) -> Result<Self> {
        let gas = balloon.lift_gas();
        Ok(Self {
            weight: weight(atm.gravity, total_mass),
            buoyancy: buoyancy(atm.gravity, gas.density(), atm.density, gas.volume()),
            drag: drag(
                ascent_rate,
                balloon.spec().drag_coefficient,
                balloon.projected_area()?,
                atm.density,
            ),
        })
    }

    pub fn net(&self) -> f64 {
        self.weight + self.buoyancy + self.drag
    }
}
