//! Solar zenith and altitude angles.

use crate::constants::HORIZON_ZENITH_ANGLE;
use crate::error::check_zenith_angle;
use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees, sin};
use crate::Result;

/// Calculates the solar zenith angle in degrees, clamped to [0, 90].
///
/// cos θz = sin φ · sin δ + cos φ · cos δ · cos H
///
/// Sub-horizon positions saturate at 90°, which the air mass and radiation
/// models downstream rely on. Inputs are not range checked; a NaN input yields NaN.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Solar declination in degrees
/// * `hour_angle` - Hour angle in degrees
///
/// # Example
/// ```
/// # use solar_irradiance::zenith::solar_zenith_angle;
/// assert!((solar_zenith_angle(45.0, 0.0, 0.0) - 45.0).abs() < 1e-9);
/// assert_eq!(solar_zenith_angle(45.0, 0.0, 180.0), 90.0);
/// ```
#[must_use]
pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let h = degrees_to_radians(hour_angle);

    let cos_zenith = sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(h);
    // rounding can push |cos θz| slightly past 1
    let zenith = radians_to_degrees(acos(cos_zenith.clamp(-1.0, 1.0)));

    zenith.clamp(0.0, HORIZON_ZENITH_ANGLE)
}

/// Converts a zenith angle to the solar altitude (elevation) angle: 90° - θz.
///
/// # Errors
/// Returns `InvalidZenithAngle` if `zenith` is outside [0, 180] degrees.
///
/// # Example
/// ```
/// # use solar_irradiance::zenith::solar_altitude;
/// assert_eq!(solar_altitude(30.0).unwrap(), 60.0);
/// assert_eq!(solar_altitude(180.0).unwrap(), -90.0);
/// assert!(solar_altitude(180.0001).is_err());
/// ```
pub fn solar_altitude(zenith: f64) -> Result<f64> {
    let zenith = check_zenith_angle(zenith)?;
    Ok(HORIZON_ZENITH_ANGLE - zenith)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_overhead_sun() {
        assert!(solar_zenith_angle(0.0, 0.0, 0.0).abs() < EPSILON);
        assert!(solar_zenith_angle(23.44, 23.44, 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_noon_zenith_is_latitude_minus_declination() {
        for (lat, dec) in [(45.0, 0.0), (45.0, 23.44), (-30.0, -10.0), (60.0, -20.0)] {
            let z = solar_zenith_angle(lat, dec, 0.0);
            assert!((z - f64::abs(lat - dec)).abs() < 1e-6, "lat {lat} dec {dec}: {z}");
        }
    }

    #[test]
    fn test_clamped_below_horizon() {
        assert_eq!(solar_zenith_angle(0.0, 0.0, 180.0), 90.0);
        assert_eq!(solar_zenith_angle(60.0, -23.44, 150.0), 90.0);
        assert_eq!(solar_zenith_angle(-89.0, 20.0, 0.0), 90.0);
    }

    #[test]
    fn test_zenith_range_over_grid() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut h = -360.0;
            while h <= 360.0 {
                for dec in [-23.44, 0.0, 23.44] {
                    let z = solar_zenith_angle(lat, dec, h);
                    assert!((0.0..=90.0).contains(&z), "{lat} {dec} {h}: {z}");
                }
                h += 7.5;
            }
            lat += 5.0;
        }
    }

    #[test]
    fn test_nan_propagates() {
        assert!(solar_zenith_angle(f64::NAN, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_altitude_complements_zenith() {
        for z in [0.0, 0.5, 45.0, 89.9, 90.0, 135.0, 180.0] {
            assert!((solar_altitude(z).unwrap() + z - 90.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_altitude_rejects_out_of_range_zenith() {
        assert!(solar_altitude(-0.0001).is_err());
        assert!(solar_altitude(180.0001).is_err());
        assert!(solar_altitude(f64::NAN).is_err());
        assert!(solar_altitude(0.0).is_ok());
        assert!(solar_altitude(180.0).is_ok());
    }
}
