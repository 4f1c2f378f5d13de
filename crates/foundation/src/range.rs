/// Camera-distance interval (meters) gating visibility of a rendered element.
///
/// Well-formed ranges satisfy `0 <= min_m < max_m`. This is not enforced at
/// construction; authored data is validated (and repaired) by whoever loads
/// it, so the raw values stay observable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DistanceRange {
    pub min_m: f64,
    pub max_m: f64,
}

impl DistanceRange {
    pub const fn new(min_m: f64, max_m: f64) -> Self {
        Self { min_m, max_m }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, distance_m: f64) -> bool {
        distance_m >= self.min_m && distance_m <= self.max_m
    }

    pub fn is_well_formed(&self) -> bool {
        self.min_m >= 0.0 && self.min_m < self.max_m
    }

    /// This range with its upper bound clamped to `limit_m`.
    pub fn clamp_max(&self, limit_m: f64) -> Self {
        Self {
            min_m: self.min_m,
            max_m: self.max_m.min(limit_m),
        }
    }
}
