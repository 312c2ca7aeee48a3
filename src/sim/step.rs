use serde::Serialize;

use crate::error::{Error, Result};

// Explicit Euler goes unstable outside this band
pub const MIN_TIME_STEP: f64 = 0.001; // s
pub const MAX_TIME_STEP: f64 = 0.5; // s

/// The integration time step actually used for a run.
///
/// A requested step outside `[MIN_TIME_STEP, MAX_TIME_STEP]` is not an
/// error: it is clamped to the nearest bound and the substitution is kept
/// here so callers can report it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeStep {
    pub requested: f64,
    pub effective: f64,
}

impl TimeStep {
    pub fn new(requested: f64) -> Result<Self> {
        if !requested.is_finite() {
            return Err(Error::InvalidConfig(format!("time step must be finite, not {requested}")));
        }
        let effective = requested.clamp(MIN_TIME_STEP, MAX_TIME_STEP);
        if effective != requested {
            log::warn!(
                "time step must be between {MIN_TIME_STEP} and {MAX_TIME_STEP} seconds, not {requested}; \
                 using closest allowed time step: {effective} seconds"
            );
        }
        Ok(Self { requested, effective })
    }

    pub fn was_clamped(&self) -> bool {
        self.effective != self.requested
    }

    /// Number of whole steps that fit in `duration`.
    pub fn step_count(&self, duration: f64) -> usize {
        // Tolerance keeps e.g. 3000 / 0.1 from flooring to 29999
        ((duration / self.effective) * (1.0 + 1e-12)).floor().max(0.0) as usize
    }

    /// Start time of step `index`.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.effective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_band_step_is_kept() {
        let dt = TimeStep::new(0.1).unwrap();
        assert_eq!(dt.effective, 0.1);
        assert!(!dt.was_clamped());
    }

    #[test]
    fn large_step_clamps_to_max() {
        let dt = TimeStep::new(0.9).unwrap();
        assert_eq!(dt.effective, 0.5);
        assert!(dt.was_clamped());
    }

    #[test]
    fn small_step_clamps_to_min() {
        let dt = TimeStep::new(0.0001).unwrap();
        assert_eq!(dt.effective, 0.001);
        assert_eq!(dt.requested, 0.0001);
    }

    #[test]
    fn zero_and_negative_steps_clamp_to_min() {
        assert_eq!(TimeStep::new(0.0).unwrap().effective, MIN_TIME_STEP);
        assert_eq!(TimeStep::new(-1.0).unwrap().effective, MIN_TIME_STEP);
    }

    #[test]
    fn nan_step_is_rejected() {
        assert!(TimeStep::new(f64::NAN).is_err());
    }

    #[test]
    fn step_count_floors() {
        assert_eq!(TimeStep::new(0.1).unwrap().step_count(3000.0), 30_000);
        assert_eq!(TimeStep::new(0.3).unwrap().step_count(1.0), 3);
        assert_eq!(TimeStep::new(0.5).unwrap().step_count(0.0), 0);
    }
}
