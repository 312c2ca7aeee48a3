pub mod balloon;
pub mod config;
pub mod error;
pub mod io;
pub mod physics;
pub mod sim;

pub use balloon::{Balloon, BalloonSpec, Gas, GasSpecies, Payload};
pub use config::SimConfig;
pub use error::{Error, ErrorKind, Result};
pub use physics::{Atmosphere, AtmosphereSample, StandardAtmosphere};
pub use sim::{run, simulate, simulate_standard, Flight, RunSettings, Sample, Termination};
