pub mod atmosphere;
pub mod constants;
pub mod forces;
pub mod gravity;

pub use atmosphere::{Atmosphere, AtmosphereSample, StandardAtmosphere};
pub use forces::ForceBreakdown;
