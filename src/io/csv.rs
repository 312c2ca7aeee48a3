use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sim::Sample;

/// Fixed column header of the exported series.
pub const HEADER: [&str; 4] = ["time", "altitude", "ascent_rate", "ascent_accel"];

/// Write the flight series as CSV, one row per recorded step.
///
/// Columns: time (s), altitude (m), ascent_rate (m/s), ascent_accel (m/s^2)
pub fn write_series<W: Write>(writer: W, samples: &[Sample]) -> Result<()> {
    let mut out = ::csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;
    for s in samples {
        out.write_record([
            format!("{:.6}", s.time),
            format!("{:.6}", s.altitude),
            format!("{:.6}", s.ascent_rate),
            format!("{:.6}", s.ascent_accel),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Write the flight series to a CSV file at the given path.
pub fn write_series_file(path: impl AsRef<Path>, samples: &[Sample]) -> Result<()> {
    let path = path.as_ref();
    write_series(File::create(path)?, samples)?;
    log::warn!("Simulation output saved to {}", path.display());
    Ok(())
}
