//! Combined solar position for a location and UTC time.

use crate::azimuth::solar_azimuth;
use crate::declination::solar_declination;
use crate::error::check_coordinates;
use crate::hour_angle::hour_angle;
use crate::time::Timestamp;
use crate::zenith::{solar_altitude, solar_zenith_angle};
use crate::{Result, SolarPosition};

/// Calculates declination, hour angle, zenith, altitude and azimuth in one pass.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates,
/// and `UndefinedAzimuth` at the poles or with the sun exactly at the zenith.
///
/// # Example
/// ```
/// # use solar_irradiance::{position::solar_position, time::Timestamp};
/// let ts = Timestamp::new(2024, 6, 21, 9, 0, 0.0).unwrap();
/// let pos = solar_position(48.21, 16.37, ts).unwrap();
/// assert!(pos.is_sun_up());
/// assert!((0.0..360.0).contains(&pos.azimuth()));
/// ```
pub fn solar_position(latitude: f64, longitude: f64, timestamp: Timestamp) -> Result<SolarPosition> {
    check_coordinates(latitude, longitude)?;

    let declination = solar_declination(timestamp);
    let hour_angle = hour_angle(timestamp, longitude);
    let zenith = solar_zenith_angle(latitude, declination, hour_angle);
    let altitude = solar_altitude(zenith)?;
    let azimuth = solar_azimuth(latitude, altitude, declination, hour_angle)?;

    Ok(SolarPosition::new(declination, hour_angle, zenith, azimuth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_components_match_individual_operations() {
        let ts = Timestamp::new(2024, 9, 1, 15, 20, 0.0).unwrap();
        let pos = solar_position(-33.87, 151.21, ts).unwrap();

        assert_eq!(pos.declination(), solar_declination(ts));
        assert_eq!(pos.hour_angle(), hour_angle(ts, 151.21));
        assert_eq!(
            pos.zenith_angle(),
            solar_zenith_angle(-33.87, pos.declination(), pos.hour_angle())
        );
        assert!((pos.altitude_angle() + pos.zenith_angle() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_night_position() {
        let ts = Timestamp::new(2024, 12, 21, 0, 0, 0.0).unwrap();
        let pos = solar_position(51.5, 0.0, ts).unwrap();
        assert_eq!(pos.zenith_angle(), 90.0);
        assert!(!pos.is_sun_up());
    }

    #[test]
    fn test_pole_is_rejected() {
        let ts = Timestamp::new(2024, 6, 21, 12, 0, 0.0).unwrap();
        assert!(matches!(
            solar_position(90.0, 0.0, ts),
            Err(Error::UndefinedAzimuth { .. })
        ));
        assert_eq!(
            solar_position(0.0, 200.0, ts),
            Err(Error::invalid_longitude(200.0))
        );
    }
}
