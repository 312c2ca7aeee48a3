pub mod envelope;
pub mod gas;
pub mod library;
pub mod payload;

pub use envelope::{radius_from_volume, Balloon};
pub use gas::{known_species, Gas, GasSpecies};
pub use library::{is_valid_balloon, known_balloons, BalloonSpec};
pub use payload::Payload;
