/// The load carried below the balloon.
///
/// Ballast is the only part that may change in flight; nothing in the
/// ascent model releases it, but it always counts toward the total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payload {
    pub dry_mass: f64,     // kg
    pub ballast_mass: f64, // kg
}

impl Payload {
    pub fn new(dry_mass: f64, ballast_mass: f64) -> Self {
        Self { dry_mass, ballast_mass }
    }

    pub fn total_mass(&self) -> f64 {
        self.dry_mass + self.ballast_mass
    }
}
