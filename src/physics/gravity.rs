use super::constants::{G0, MEAN_EARTH_RADIUS};

/// Inverse-square gravitational acceleration at a geometric altitude (m).
///
/// Signed negative: every force in this crate uses a positive-up frame.
pub fn gravity_accel(altitude: f64) -> f64 {
    -G0 * (MEAN_EARTH_RADIUS / (MEAN_EARTH_RADIUS + altitude)).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_gravity() {
        assert!((gravity_accel(0.0) + G0).abs() < 1e-12);
    }

    #[test]
    fn gravity_points_down_and_weakens_with_altitude() {
        let g0 = gravity_accel(0.0);
        let g30k = gravity_accel(30_000.0);
        assert!(g30k < 0.0);
        assert!(g30k.abs() < g0.abs());
    }

    #[test]
    fn gravity_strengthens_below_sea_level() {
        assert!(gravity_accel(-5_000.0).abs() > G0);
    }
}
