use super::constants::G0;
use super::gravity::gravity_accel;

// ---------------------------------------------------------------------------
// US Standard Atmosphere 1976 (-5 km to 86 km)
// ---------------------------------------------------------------------------

const R_AIR: f64 = 287.052_87; // specific gas constant for dry air, J/(kg·K)
const R0: f64 = 6_356_766.0; // effective Earth radius for geopotential altitude, m

const T0: f64 = 288.15; // sea-level temperature, K
const P0: f64 = 101_325.0; // sea-level pressure, Pa

/// Lowest geometric altitude the table covers, m.
pub const MIN_ALTITUDE: f64 = -5_004.0;

/// Geopotential altitude of the 86 km geometric boundary, m.
const TOP_OF_TABLE: f64 = 84_852.0;

/// Ambient conditions at a given geometric altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereSample {
    pub altitude: f64,    // m (geometric)
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
    pub density: f64,     // kg/m^3
    pub gravity: f64,     // m/s^2, negative (positive-up frame)
}

/// Maps an altitude to ambient conditions.
///
/// The integrator only ever talks to the atmosphere through this trait, so a
/// measured sounding or a constant test atmosphere can replace the standard
/// model without touching the core loop.
pub trait Atmosphere {
    fn sample(&self, altitude: f64) -> AtmosphereSample;
}

impl<F> Atmosphere for F
where
    F: Fn(f64) -> AtmosphereSample,
{
    fn sample(&self, altitude: f64) -> AtmosphereSample {
        self(altitude)
    }
}

/// US Standard Atmosphere 1976 with inverse-square gravity.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAtmosphere;

impl Atmosphere for StandardAtmosphere {
    fn sample(&self, altitude: f64) -> AtmosphereSample {
        isa(altitude)
    }
}

/// Convert geometric altitude to geopotential altitude.
pub fn geopotential_altitude(geometric: f64) -> f64 {
    R0 * geometric / (R0 + geometric)
}

/// Standard atmosphere at a geometric altitude (m).
///
/// Piecewise temperature profile with 7 layers indexed by geopotential
/// altitude. Altitudes below -5004 m are clamped to the bottom of the table;
/// above 86 km pressure decays exponentially.
pub fn isa(altitude_m: f64) -> AtmosphereSample {
    let z = altitude_m.max(MIN_ALTITUDE);
    let h = geopotential_altitude(z);

    let (temperature, pressure) = if h < 11_000.0 {
        // Troposphere: lapse -6.5 K/km (extends below sea level)
        gradient_layer(h, 0.0, T0, -0.0065, P0)
    } else if h < 20_000.0 {
        // Tropopause: isothermal 216.65 K
        isothermal_layer(h, 11_000.0, 216.65, 22_632.1)
    } else if h < 32_000.0 {
        // Stratosphere I: lapse +1.0 K/km
        gradient_layer(h, 20_000.0, 216.65, 0.001, 5_474.89)
    } else if h < 47_000.0 {
        // Stratosphere II: lapse +2.8 K/km
        gradient_layer(h, 32_000.0, 228.65, 0.0028, 868.019)
    } else if h < 51_000.0 {
        // Stratopause: isothermal 270.65 K
        isothermal_layer(h, 47_000.0, 270.65, 110.906)
    } else if h < 71_000.0 {
        // Mesosphere I: lapse -2.8 K/km
        gradient_layer(h, 51_000.0, 270.65, -0.0028, 66.9389)
    } else if h < TOP_OF_TABLE {
        // Mesosphere II: lapse -2.0 K/km
        gradient_layer(h, 71_000.0, 214.65, -0.002, 3.956_42)
    } else {
        // Above 86 km: exponential decay approximation
        let t = 186.87;
        let p = 0.3734 * (-0.000_15 * (h - TOP_OF_TABLE)).exp();
        (t, p.max(0.0))
    };

    let density = if temperature > 0.0 {
        pressure / (R_AIR * temperature)
    } else {
        0.0
    };

    AtmosphereSample {
        altitude: z,
        temperature,
        pressure,
        density,
        gravity: gravity_accel(z),
    }
}

// ---------------------------------------------------------------------------
// Layer helpers
// ---------------------------------------------------------------------------

/// Gradient layer: T = T_base + lapse * (h - h_base)
fn gradient_layer(h: f64, h_base: f64, t_base: f64, lapse: f64, p_base: f64) -> (f64, f64) {
    let t = t_base + lapse * (h - h_base);
    let p = p_base * (t / t_base).powf(-G0 / (lapse * R_AIR));
    (t, p)
}

/// Isothermal layer: T = const, pressure decays exponentially
fn isothermal_layer(h: f64, h_base: f64, t: f64, p_base: f64) -> (f64, f64) {
    let p = p_base * ((-G0 / (R_AIR * t)) * (h - h_base)).exp();
    (t, p)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_standard_values() {
        let a = isa(0.0);
        assert!((a.temperature - 288.15).abs() < 0.01);
        assert!((a.pressure - 101_325.0).abs() < 1.0);
        assert!((a.density - 1.225).abs() < 0.001);
        assert!((a.gravity + G0).abs() < 1e-9);
    }

    #[test]
    fn tropopause_11km_geopotential() {
        let a = isa(11_019.0);
        assert!((a.temperature - 216.65).abs() < 0.5);
        assert!((a.pressure - 22_632.0).abs() < 100.0);
    }

    #[test]
    fn density_monotonically_decreases() {
        let rho_low = isa(-2_000.0).density;
        let rho_0 = isa(0.0).density;
        let rho_10k = isa(10_000.0).density;
        let rho_50k = isa(50_000.0).density;
        assert!(rho_low > rho_0);
        assert!(rho_0 > rho_10k);
        assert!(rho_10k > rho_50k);
        assert!(rho_50k > 0.0);
    }

    #[test]
    fn below_sea_level_is_warmer() {
        let a = isa(-1_000.0);
        assert!(a.temperature > 288.15);
        assert!(a.pressure > 101_325.0);
    }

    #[test]
    fn clamps_below_table_bottom() {
        let a = isa(-10_000.0);
        let b = isa(MIN_ALTITUDE);
        assert_eq!(a.temperature, b.temperature);
        assert_eq!(a.altitude, MIN_ALTITUDE);
    }

    #[test]
    fn continuous_across_86km() {
        let below = isa(85_990.0);
        let above = isa(86_010.0);
        assert!((below.pressure - above.pressure).abs() / below.pressure < 0.01);
    }

    #[test]
    fn closures_act_as_atmospheres() {
        let fixed = |altitude: f64| AtmosphereSample {
            altitude,
            temperature: 250.0,
            pressure: 50_000.0,
            density: 0.7,
            gravity: -9.8,
        };
        assert_eq!(fixed.sample(1234.0).density, 0.7);
        assert_eq!(StandardAtmosphere.sample(0.0), isa(0.0));
    }
}
