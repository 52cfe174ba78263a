//! Hour angle from UTC time and longitude.
//!
//! Local solar time here is mean solar time: UTC shifted by longitude/15 hours,
//! without the equation of time.

use crate::constants::{DEGREES_PER_HOUR, SOLAR_NOON_HOURS};
use crate::time::Timestamp;

/// Local mean solar time in hours for a UTC timestamp and longitude in degrees.
///
/// UTC time of day is taken in whole minutes. The result is not wrapped and lies
/// in [-12, 36) for longitudes in [-180, 180].
#[must_use]
pub fn local_solar_time(timestamp: Timestamp, longitude: f64) -> f64 {
    let hours_since_midnight = f64::from(timestamp.minutes_since_midnight()) / 60.0;
    hours_since_midnight + longitude / DEGREES_PER_HOUR
}

/// Calculates the hour angle in degrees: 15° per hour from local solar noon.
///
/// Negative before noon, positive after. Longitude is not range checked.
///
/// # Example
/// ```
/// # use solar_irradiance::{hour_angle::hour_angle, time::Timestamp};
/// let noon_utc = Timestamp::new(2024, 3, 20, 12, 0, 0.0).unwrap();
/// assert_eq!(hour_angle(noon_utc, 0.0), 0.0);
/// assert_eq!(hour_angle(noon_utc, 15.0), 15.0);
/// ```
#[must_use]
pub fn hour_angle(timestamp: Timestamp, longitude: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time(timestamp, longitude) - SOLAR_NOON_HOURS)
}
