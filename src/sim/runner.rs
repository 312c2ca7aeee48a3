use serde::Serialize;

use super::event::Termination;
use super::integrator::euler_step;
use super::step::TimeStep;
use crate::balloon::{Balloon, Payload};
use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::physics::atmosphere::{Atmosphere, StandardAtmosphere};

// ---------------------------------------------------------------------------
// Run inputs and outputs
// ---------------------------------------------------------------------------

/// Duration, step and initial conditions of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSettings {
    pub duration: f64,         // s
    pub dt: f64,               // s, requested
    pub initial_altitude: f64, // m
    pub initial_velocity: f64, // m/s
}

impl RunSettings {
    fn validate(&self, payload: &Payload, balloon: &Balloon) -> Result<()> {
        let numbers = [
            ("duration", self.duration),
            ("initial_altitude", self.initial_altitude),
            ("initial_velocity", self.initial_velocity),
            ("payload dry mass", payload.dry_mass),
            ("payload ballast mass", payload.ballast_mass),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfig(format!("{name} must be finite, not {value}")));
        }
        if self.duration < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "duration must not be negative, not {}",
                self.duration
            )));
        }
        if payload.dry_mass < 0.0 || payload.ballast_mass < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "payload masses must not be negative (dry {} kg, ballast {} kg)",
                payload.dry_mass, payload.ballast_mass
            )));
        }
        let total = balloon.mass() + payload.total_mass();
        if total <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "total mass must be positive, not {total} kg"
            )));
        }
        Ok(())
    }
}

/// One recorded integration step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64,             // s, start of the step
    pub altitude: f64,         // m, after the step
    pub ascent_rate: f64,      // m/s, after the step
    pub ascent_accel: f64,     // m/s^2
    pub balloon_diameter: f64, // m, during the step
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub samples: Vec<Sample>,
    pub termination: Termination,
    pub time_step: TimeStep,
}

impl Flight {
    pub fn peak_altitude(&self) -> Option<&Sample> {
        self.samples
            .iter()
            .max_by(|a, b| a.altitude.total_cmp(&b.altitude))
    }
}

// ---------------------------------------------------------------------------
// Simulation loop
// ---------------------------------------------------------------------------

/// Integrate the ascent until the duration elapses or the balloon bursts.
///
/// The burst check runs before every step; on burst the run stops without
/// taking that step, so every recorded sample predates the burst time.
/// Configuration problems are reported before any step is taken.
pub fn simulate(
    atmosphere: &dyn Atmosphere,
    balloon: &mut Balloon,
    payload: &Payload,
    settings: &RunSettings,
) -> Result<Flight> {
    settings.validate(payload, balloon)?;
    let time_step = TimeStep::new(settings.dt)?;
    let dt = time_step.effective;
    let steps = time_step.step_count(settings.duration);

    log::warn!(
        "Starting simulation: balloon: {} | duration: {} s | dt: {} s",
        balloon.name(),
        settings.duration,
        dt
    );

    let mut h = settings.initial_altitude;
    let mut v = settings.initial_velocity;
    let mut samples = Vec::with_capacity(steps.min(1_000_000));
    let mut termination = Termination::DurationComplete;

    for i in 0..steps {
        let t = time_step.time_at(i);

        if balloon.burst_threshold_exceeded()? {
            let diameter = balloon.diameter()?;
            log::warn!(
                "Balloon burst threshold exceeded: time {t:.1} s, altitude {h:.1} m, diameter {diameter:.3} m"
            );
            termination = Termination::Burst { time: t, altitude: h, diameter };
            break;
        }

        let step = euler_step(h, v, dt, balloon, payload, atmosphere)?;
        v += step.dv;
        h += step.dh;

        log::info!("{t:6.1} s | {:.4} m/s^2 | {v:.4} m/s | {h:.2} m", step.accel);

        samples.push(Sample {
            time: t,
            altitude: h,
            ascent_rate: v,
            ascent_accel: step.accel,
            balloon_diameter: step.diameter,
        });
    }

    Ok(Flight { samples, termination, time_step })
}

/// Simulate against the US Standard Atmosphere 1976.
pub fn simulate_standard(
    balloon: &mut Balloon,
    payload: &Payload,
    settings: &RunSettings,
) -> Result<Flight> {
    simulate(&StandardAtmosphere, balloon, payload, settings)
}

/// Build every run input from a configuration and simulate it.
pub fn run(config: &SimConfig) -> Result<Flight> {
    let (mut balloon, payload, settings) = config.build()?;
    simulate_standard(&mut balloon, &payload, &settings)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
