// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665; // standard gravity, m/s^2
pub const MEAN_EARTH_RADIUS: f64 = 6_371_007.2; // mean Earth radius, m
pub const GAS_CONSTANT: f64 = 8.314_462_618; // universal gas constant, J/(mol·K)

// Conditions a freshly created gas starts at before matching ambient air
pub const STANDARD_TEMPERATURE: f64 = 273.15; // K
pub const STANDARD_PRESSURE: f64 = 101_325.0; // Pa
