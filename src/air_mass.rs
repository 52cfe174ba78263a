//! Relative optical air mass.
//!
//! Up to 60° zenith the plane-parallel approximation 1/cos θz is used. Beyond
//! that the Kasten & Young (1989) formula keeps the air mass finite down to the
//! horizon (about 38 at θz = 90°).
//!
//! Reference: Kasten, F.; Young, A. T. (1989). Revised optical air mass tables
//! and approximation formula. Applied Optics, 28(22), 4735-4738.

use crate::constants::{
    KASTEN_YOUNG_EXPONENT, KASTEN_YOUNG_FACTOR, KASTEN_YOUNG_OFFSET, PLANE_PARALLEL_MAX_ZENITH,
};
use crate::declination::solar_declination;
use crate::error::{check_coordinates, check_zenith_above_horizon};
use crate::hour_angle::hour_angle;
use crate::math::{cos, degrees_to_radians, powf};
use crate::time::Timestamp;
use crate::zenith::solar_zenith_angle;
use crate::Result;

/// Calculates the relative air mass for a zenith angle in degrees.
///
/// # Errors
/// Returns `InvalidZenithAngle` if `zenith` is outside [0, 90] degrees.
///
/// # Example
/// ```
/// # use solar_irradiance::air_mass::air_mass;
/// assert_eq!(air_mass(0.0).unwrap(), 1.0);
/// assert!((air_mass(60.0).unwrap() - 2.0).abs() < 1e-12);
/// assert!(air_mass(90.5).is_err());
/// ```
pub fn air_mass(zenith: f64) -> Result<f64> {
    let zenith = check_zenith_above_horizon(zenith)?;
    let theta = degrees_to_radians(zenith);

    if zenith <= PLANE_PARALLEL_MAX_ZENITH {
        return Ok(1.0 / cos(theta));
    }

    let correction = KASTEN_YOUNG_FACTOR * powf(KASTEN_YOUNG_OFFSET - zenith, KASTEN_YOUNG_EXPONENT);
    Ok(1.0 / (cos(theta) + correction))
}

/// Calculates the relative air mass for a location and UTC time.
///
/// Chains declination, hour angle and the clamped zenith angle, so a sun below
/// the horizon yields the horizon air mass.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn air_mass_at(latitude: f64, longitude: f64, timestamp: Timestamp) -> Result<f64> {
    check_coordinates(latitude, longitude)?;

    let declination = solar_declination(timestamp);
    let hour_angle = hour_angle(timestamp, longitude);
    air_mass(solar_zenith_angle(latitude, declination, hour_angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_plane_parallel_branch() {
        assert_eq!(air_mass(0.0).unwrap(), 1.0);
        assert!((air_mass(60.0).unwrap() - 2.0).abs() < EPSILON);
        let am_45 = air_mass(45.0).unwrap();
        assert!((am_45 - core::f64::consts::SQRT_2).abs() < EPSILON);
    }

    #[test]
    fn test_kasten_young_branch() {
        let am_75 = air_mass(75.0).unwrap();
        assert!(am_75 > 3.7 && am_75 < 3.9, "{am_75}");

        let am_horizon = air_mass(90.0).unwrap();
        assert!(am_horizon > 37.0 && am_horizon < 39.0, "{am_horizon}");
    }

    #[test]
    fn test_branch_boundary_step_is_small() {
        let at_boundary = air_mass(60.0).unwrap();
        let past_boundary = air_mass(60.0 + 1e-9).unwrap();
        assert!((at_boundary - past_boundary).abs() < 0.01);
    }

    #[test]
    fn test_monotonic_within_each_branch() {
        let mut previous = air_mass(0.0).unwrap();
        for tenth in 1..=600 {
            let am = air_mass(f64::from(tenth) / 10.0).unwrap();
            assert!(am > previous, "zenith {}", f64::from(tenth) / 10.0);
            previous = am;
        }

        let mut previous = air_mass(60.1).unwrap();
        for tenth in 602..=900 {
            let am = air_mass(f64::from(tenth) / 10.0).unwrap();
            assert!(am > previous, "zenith {}", f64::from(tenth) / 10.0);
            previous = am;
        }
    }

    #[test]
    fn test_zenith_validation() {
        assert_eq!(
            air_mass(-0.1),
            Err(Error::invalid_zenith_angle(-0.1, 90.0))
        );
        assert!(air_mass(90.0001).is_err());
        assert!(air_mass(f64::NAN).is_err());
    }

    #[test]
    fn test_location_air_mass() {
        let noon = Timestamp::new(2024, 3, 20, 12, 0, 0.0).unwrap();
        let am = air_mass_at(0.0, 0.0, noon).unwrap();
        assert!((am - 1.0).abs() < 1e-3, "{am}");

        let midnight = Timestamp::new(2024, 3, 20, 0, 0, 0.0).unwrap();
        let am_night = air_mass_at(0.0, 0.0, midnight).unwrap();
        assert!((am_night - air_mass(90.0).unwrap()).abs() < EPSILON);
    }

    #[test]
    fn test_location_validation() {
        let ts = Timestamp::new(2024, 3, 20, 12, 0, 0.0).unwrap();
        assert_eq!(
            air_mass_at(90.5, 0.0, ts),
            Err(Error::invalid_latitude(90.5))
        );
        assert_eq!(
            air_mass_at(0.0, -180.5, ts),
            Err(Error::invalid_longitude(-180.5))
        );
    }
}
