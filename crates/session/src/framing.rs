//! Server-side framing of the result view: given the guess/actual pair,
//! choose the camera center and zoom the result page is handed. Companion of
//! [`crate::result_view`]; scoring itself lives elsewhere.

use foundation::geo::{GeoPoint, surface_distance_m};

/// Injected constants for the result page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultFraming {
    /// Arithmetic midpoint of guess and actual (ground level).
    pub center: GeoPoint,
    /// Discrete web-map zoom level, 4 (continent) to 16 (crag).
    pub zoom_level: u8,
    pub distance_km: f64,
    /// Human-readable distance ("3.20 km", "640.00 m").
    pub distance_text: String,
}

pub fn frame_result(guess: GeoPoint, actual: GeoPoint) -> ResultFraming {
    let distance_km = surface_distance_m(guess, actual) / 1000.0;
    ResultFraming {
        center: GeoPoint::new(
            (guess.lon_deg() + actual.lon_deg()) / 2.0,
            (guess.lat_deg() + actual.lat_deg()) / 2.0,
        ),
        zoom_level: zoom_for_distance_km(distance_km),
        distance_km,
        distance_text: format_distance_km(distance_km),
    }
}

/// The closer the guess, the tighter the frame.
pub fn zoom_for_distance_km(distance_km: f64) -> u8 {
    if distance_km < 1.0 {
        16
    } else if distance_km < 3.0 {
        14
    } else if distance_km < 5.0 {
        13
    } else if distance_km < 10.0 {
        12
    } else if distance_km < 20.0 {
        11
    } else if distance_km < 40.0 {
        10
    } else if distance_km < 80.0 {
        9
    } else if distance_km < 150.0 {
        8
    } else {
        4
    }
}

pub fn format_distance_km(distance_km: f64) -> String {
    if distance_km >= 1.0 {
        format!("{distance_km:.2} km")
    } else {
        format!("{:.2} m", distance_km * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_distance_km, frame_result, zoom_for_distance_km};
    use foundation::geo::GeoPoint;
    use pretty_assertions::assert_eq;

    #[test]
    fn zoom_ladder_boundaries() {
        assert_eq!(zoom_for_distance_km(0.0), 16);
        assert_eq!(zoom_for_distance_km(0.99), 16);
        assert_eq!(zoom_for_distance_km(1.0), 14);
        assert_eq!(zoom_for_distance_km(4.0), 13);
        assert_eq!(zoom_for_distance_km(9.0), 12);
        assert_eq!(zoom_for_distance_km(15.0), 11);
        assert_eq!(zoom_for_distance_km(39.0), 10);
        assert_eq!(zoom_for_distance_km(79.0), 9);
        assert_eq!(zoom_for_distance_km(149.0), 8);
        assert_eq!(zoom_for_distance_km(150.0), 4);
        assert_eq!(zoom_for_distance_km(3000.0), 4);
    }

    #[test]
    fn center_is_the_arithmetic_midpoint() {
        let framing = frame_result(GeoPoint::new(-116.0, 34.0), GeoPoint::new(-118.0, 38.0));
        assert_eq!(framing.center, GeoPoint::new(-117.0, 36.0));
    }

    #[test]
    fn sub_kilometer_distances_format_as_meters() {
        assert_eq!(format_distance_km(0.64), "640.00 m");
        assert_eq!(format_distance_km(3.2), "3.20 km");
        assert_eq!(format_distance_km(1.0), "1.00 km");
    }

    #[test]
    fn perfect_guess_frames_tight() {
        let p = GeoPoint::new(-116.16795, 34.0122);
        let framing = frame_result(p, p);
        assert_eq!(framing.zoom_level, 16);
        assert_eq!(framing.center, p);
        assert_eq!(framing.distance_text, "0.00 m");
    }
}
