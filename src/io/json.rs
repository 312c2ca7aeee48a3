use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::sim::{Flight, Termination, TimeStep};

/// Summary statistics computed from a flight series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub id: String,
    pub balloon: String,
    pub steps: usize,
    pub time_step: TimeStep,
    pub flight_time_s: f64,
    pub peak_altitude_m: f64,
    pub peak_altitude_time_s: f64,
    pub max_ascent_rate_ms: f64,
    pub max_accel_ms2: f64,
    pub final_altitude_m: f64,
    pub final_ascent_rate_ms: f64,
    pub termination: Termination,
}

impl FlightSummary {
    /// Compute summary from flight data. An empty series summarizes to zeros.
    pub fn from_flight(id: &str, balloon: &str, flight: &Flight) -> Self {
        let samples = &flight.samples;
        let (peak_altitude_m, peak_altitude_time_s) = flight
            .peak_altitude()
            .map_or((0.0, 0.0), |s| (s.altitude, s.time));

        let max_ascent_rate_ms = samples
            .iter()
            .map(|s| s.ascent_rate)
            .fold(0.0_f64, f64::max);

        let max_accel_ms2 = samples
            .iter()
            .map(|s| s.ascent_accel.abs())
            .fold(0.0_f64, f64::max);

        let (final_altitude_m, final_ascent_rate_ms, flight_time_s) = samples
            .last()
            .map_or((0.0, 0.0, 0.0), |s| {
                (s.altitude, s.ascent_rate, s.time + flight.time_step.effective)
            });

        FlightSummary {
            id: id.to_string(),
            balloon: balloon.to_string(),
            steps: samples.len(),
            time_step: flight.time_step,
            flight_time_s,
            peak_altitude_m,
            peak_altitude_time_s,
            max_ascent_rate_ms,
            max_accel_ms2,
            final_altitude_m,
            final_ascent_rate_ms,
            termination: flight.termination,
        }
    }
}

/// Write flight summary as pretty-printed JSON to a writer.
pub fn write_summary<W: Write>(writer: W, summary: &FlightSummary) -> Result<()> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(path: impl AsRef<Path>, summary: &FlightSummary) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    write_summary(&mut file, summary)?;
    writeln!(file)?;
    log::info!("Flight summary saved to {}", path.display());
    Ok(())
}
