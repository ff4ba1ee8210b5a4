//! Great-circle distance between coordinates

use std::f64::consts::PI;

/// Mean Earth radius used by the Pro6pp service, in kilometres
pub const EARTH_RADIUS_KM: f64 = 6372.797;

/// Kilometre to statute mile factor
pub const KM_TO_MILES: f64 = 0.621371192;

/// Haversine distance between two points given in decimal degrees.
///
/// Returns kilometres, or miles when `miles` is set. Coordinates are not
/// range checked; any finite input gives a finite result.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64, miles: bool) -> f64 {
    let deg_to_rad = PI / 180.0;
    let lat1 = lat1 * deg_to_rad;
    let lng1 = lng1 * deg_to_rad;
    let lat2 = lat2 * deg_to_rad;
    let lng2 = lng2 * deg_to_rad;

    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;

    let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let km = EARTH_RADIUS_KM * c;

    if miles {
        km * KM_TO_MILES
    } else {
        km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_maastricht_reference_distance() {
        let d = haversine_distance(50.858030, 5.717376, 50.840078, 5.659258, false);
        assert!((d - 4.5435663553281715).abs() < 1e-12, "got {}", d);
    }

    #[test]
    fn test_symmetry() {
        let points = [
            (50.858030, 5.717376),
            (50.840078, 5.659258),
            (52.370216, 4.895168),
            (-33.868820, 151.209296),
            (0.0, 179.9),
            (0.0, -179.9),
            (89.9, 0.0),
        ];
        for &(lat1, lng1) in &points {
            for &(lat2, lng2) in &points {
                let ab = haversine_distance(lat1, lng1, lat2, lng2, false);
                let ba = haversine_distance(lat2, lng2, lat1, lng1, false);
                assert!((ab - ba).abs() < EPSILON, "{} vs {}", ab, ba);
            }
        }
    }

    #[test]
    fn test_zero_distance() {
        for &(lat, lng) in &[(50.858030, 5.717376), (0.0, 0.0), (-45.5, 170.25)] {
            assert_eq!(haversine_distance(lat, lng, lat, lng, false), 0.0);
        }
    }

    #[test]
    fn test_miles_conversion() {
        let km = haversine_distance(52.370216, 4.895168, 51.924420, 4.477733, false);
        let miles = haversine_distance(52.370216, 4.895168, 51.924420, 4.477733, true);
        assert_eq!(miles, km * KM_TO_MILES);
    }

    #[test]
    fn test_antipodal_points_are_half_circumference() {
        let d = haversine_distance(0.0, 0.0, 0.0, 180.0, false);
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_near_antipodal_points_stay_finite() {
        for step in 0..=9000 {
            let lat = f64::from(step) / 100.0;
            for &(lng1, lng2) in &[(0.0, 180.0), (5.717376, 185.717376), (-179.5, 0.5)] {
                let d = haversine_distance(lat, lng1, -lat, lng2, false);
                assert!(d.is_finite(), "({}, {}) -> ({}, {}) gave {}", lat, lng1, -lat, lng2, d);
                assert!(d <= PI * EARTH_RADIUS_KM + 1e-6);

                let miles = haversine_distance(lat, lng1, -lat, lng2, true);
                assert!(miles.is_finite());
            }
        }
    }
}
