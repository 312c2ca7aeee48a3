use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Run termination
// ---------------------------------------------------------------------------

/// Why a simulation run stopped. Neither variant is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Termination {
    /// Every requested step was taken.
    DurationComplete,
    /// The balloon reached its burst diameter before the step starting at `time`.
    Burst {
        time: f64,     // s
        altitude: f64, // m
        diameter: f64, // m
    },
}

impl Termination {
    pub fn is_burst(&self) -> bool {
        matches!(self, Termination::Burst { .. })
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::DurationComplete => write!(f, "duration complete"),
            Termination::Burst { time, altitude, diameter } => write!(
                f,
                "burst at t={time:.1}s, altitude {altitude:.0} m, diameter {diameter:.2} m"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_is_flagged() {
        let t = Termination::Burst { time: 10.0, altitude: 30_000.0, diameter: 13.1 };
        assert!(t.is_burst());
        assert!(!Termination::DurationComplete.is_burst());
        assert!(t.to_string().contains("30000 m"));
    }

    #[test]
    fn serializes_with_reason_tag() {
        let json = serde_json::to_string(&Termination::DurationComplete).unwrap();
        assert_eq!(json, r#"{"reason":"duration_complete"}"#);
    }
}
