//! Spherical-earth distance and coordinate sanity checks.

use safezone_types::GeoPoint;
use thiserror::Error;

/// Mean earth radius in meters, the value web mapping libraries use for `distanceTo`.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinate ({lat}, {lon}) is not finite")]
    NonFinite { lat: f64, lon: f64 },
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Great-circle distance between two points using the haversine formula.
///
/// Symmetric, zero for identical points, and never larger than half the circumference.
/// Non-finite input propagates as NaN.
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lon - a.lon).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push `h` a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Reject coordinates a geolocation source could never produce.
pub fn validate_point(p: GeoPoint) -> Result<GeoPoint, CoordinateError> {
    if !p.lat.is_finite() || !p.lon.is_finite() {
        return Err(CoordinateError::NonFinite {
            lat: p.lat,
            lon: p.lon,
        });
    }
    if !(-90.0..=90.0).contains(&p.lat) {
        return Err(CoordinateError::LatitudeOutOfRange(p.lat));
    }
    if !(-180.0..=180.0).contains(&p.lon) {
        return Err(CoordinateError::LongitudeOutOfRange(p.lon));
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} +/- {tolerance}, got {actual}"
        );
    }

    #[test]
    fn identical_points_are_zero_apart() {
        let p = GeoPoint::new(47.178, -1.4464);
        assert_eq!(haversine_distance_m(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_on_the_equator() {
        let d = haversine_distance_m(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        approx(d, 111_194.93, 0.01);
    }

    #[test]
    fn nantes_suburb_pair_matches_reference_value() {
        let d = haversine_distance_m(
            GeoPoint::new(47.1780, -1.4464),
            GeoPoint::new(47.1699, -1.4651),
        );
        approx(d, 1676.06, 0.01);
    }

    #[test]
    fn london_to_paris() {
        let d = haversine_distance_m(
            GeoPoint::new(51.5074, -0.1278),
            GeoPoint::new(48.8566, 2.3522),
        );
        approx(d, 343_556.06, 0.01);
    }

    #[test]
    fn antipodes_are_half_the_circumference() {
        let d = haversine_distance_m(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        approx(d, std::f64::consts::PI * EARTH_RADIUS_M, 1e-6);
    }

    #[test]
    fn nan_input_yields_nan() {
        let d = haversine_distance_m(GeoPoint::new(f64::NAN, 0.0), GeoPoint::new(0.0, 0.0));
        assert!(d.is_nan());
    }

    #[test]
    fn validate_point_accepts_bounds() {
        assert!(validate_point(GeoPoint::new(90.0, 180.0)).is_ok());
        assert!(validate_point(GeoPoint::new(-90.0, -180.0)).is_ok());
    }

    #[test]
    fn validate_point_rejects_out_of_range_and_non_finite() {
        assert_eq!(
            validate_point(GeoPoint::new(90.5, 0.0)),
            Err(CoordinateError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            validate_point(GeoPoint::new(0.0, -181.0)),
            Err(CoordinateError::LongitudeOutOfRange(-181.0))
        );
        assert!(matches!(
            validate_point(GeoPoint::new(0.0, f64::INFINITY)),
            Err(CoordinateError::NonFinite { .. })
        ));
    }
}
