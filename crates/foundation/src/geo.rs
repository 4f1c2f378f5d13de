/// WGS84 semi-major axis (meters).
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor axis (meters).
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);
/// Mean radius of the WGS84 ellipsoid (meters).
pub const WGS84_MEAN_RADIUS: f64 = (2.0 * WGS84_A + WGS84_B) / 3.0;

/// Geographic position in degrees and meters.
///
/// Invariants, established at construction and never violated afterwards:
/// - `lon_deg` is clamped to `[-180, 180]`
/// - `lat_deg` is clamped to `[-90, 90]`
/// - `alt_m` is clamped to `>= 0` (0 means "on the ground")
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    lon_deg: f64,
    lat_deg: f64,
    alt_m: f64,
}

impl GeoPoint {
    /// A point on the ground (altitude 0).
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self::with_altitude(lon_deg, lat_deg, 0.0)
    }

    pub fn with_altitude(lon_deg: f64, lat_deg: f64, alt_m: f64) -> Self {
        Self {
            lon_deg: lon_deg.clamp(-180.0, 180.0),
            lat_deg: lat_deg.clamp(-90.0, 90.0),
            alt_m: alt_m.max(0.0),
        }
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon_deg
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    pub fn alt_m(&self) -> f64 {
        self.alt_m
    }

    /// Same horizontal position at a different altitude.
    pub fn at_altitude(&self, alt_m: f64) -> Self {
        Self::with_altitude(self.lon_deg, self.lat_deg, alt_m)
    }
}

/// Great-circle distance between the ground projections of two points,
/// in meters (haversine on the mean WGS84 sphere). Altitude is ignored.
pub fn surface_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat_deg.to_radians();
    let lat_b = b.lat_deg.to_radians();
    let d_lat = (b.lat_deg - a.lat_deg).to_radians();
    let d_lon = (b.lon_deg - a.lon_deg).to_radians();

    let s_lat = (d_lat * 0.5).sin();
    let s_lon = (d_lon * 0.5).sin();
    let h = s_lat * s_lat + lat_a.cos() * lat_b.cos() * s_lon * s_lon;

    2.0 * WGS84_MEAN_RADIUS * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::{GeoPoint, WGS84_MEAN_RADIUS, surface_distance_m};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn construction_clamps_to_valid_ranges() {
        let p = GeoPoint::with_altitude(-200.0, 95.0, -10.0);
        assert_eq!(p.lon_deg(), -180.0);
        assert_eq!(p.lat_deg(), 90.0);
        assert_eq!(p.alt_m(), 0.0);
    }

    #[test]
    fn default_altitude_is_ground() {
        let p = GeoPoint::new(-116.169, 34.012);
        assert_eq!(p.alt_m(), 0.0);
        assert_eq!(p.lon_deg(), -116.169);
        assert_eq!(p.lat_deg(), 34.012);
    }

    #[test]
    fn quarter_circumference_along_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(90.0, 0.0);
        let expected = WGS84_MEAN_RADIUS * std::f64::consts::FRAC_PI_2;
        assert_close(surface_distance_m(a, b), expected, 1e-3);
    }

    #[test]
    fn distance_ignores_altitude() {
        let a = GeoPoint::with_altitude(10.0, 20.0, 0.0);
        let b = GeoPoint::with_altitude(10.0, 20.0, 5000.0);
        assert_close(surface_distance_m(a, b), 0.0, 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(-116.169, 34.012);
        let b = GeoPoint::new(-119.634, 37.723);
        assert_close(surface_distance_m(a, b), surface_distance_m(b, a), 1e-9);
    }
}
