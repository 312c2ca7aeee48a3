use crate::balloon::{Balloon, Payload};
use crate::error::Result;
use crate::physics::atmosphere::Atmosphere;
use crate::physics::forces::ForceBreakdown;

// ---------------------------------------------------------------------------
// Explicit Euler step
// ---------------------------------------------------------------------------

/// Rates of change produced by one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub accel: f64,    // m/s^2, from this step's forces
    pub dv: f64,       // m/s
    pub dh: f64,       // m, from the ascent rate at the start of the step
    pub forces: ForceBreakdown,
    pub diameter: f64, // m, after matching ambient at the start altitude
}

/// Advance the vertical state by `dt` seconds.
///
/// The balloon's lift gas is first brought to the ambient conditions at
/// `altitude`; that mutation persists after the step. The altitude change uses
/// the incoming `ascent_rate`, not the updated one.
pub fn euler_step(
    altitude: f64,
    ascent_rate: f64,
    dt: f64,
    balloon: &mut Balloon,
    payload: &Payload,
    atmosphere: &dyn Atmosphere,
) -> Result<Step> {
    let atm = atmosphere.sample(altitude);
    balloon.match_ambient(&atm);
    let total_mass = balloon.mass() + payload.total_mass();

    let forces = ForceBreakdown::evaluate(&atm, balloon, total_mass, ascent_rate)?;
    let accel = forces.net() / total_mass;

    log::debug!(
        "f_net {:.4} N | f_weight {:.4} N | f_buoyancy {:.4} N | f_drag {:.4} N",
        forces.net(),
        forces.weight,
        forces.buoyancy,
        forces.drag
    );

    Ok(Step {
        accel,
        dv: accel * dt,
        dh: ascent_rate * dt,
        forces,
        diameter: balloon.diameter()?,
    })
}
