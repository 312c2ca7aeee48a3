pub mod event;
pub mod integrator;
pub mod runner;
pub mod step;

pub use event::Termination;
pub use integrator::{euler_step, Step};
pub use runner::{run, simulate, simulate_standard, Flight, RunSettings, Sample};
pub use step::{TimeStep, MAX_TIME_STEP, MIN_TIME_STEP};
