//! Earth-Sun distance from the day of the year.

use crate::constants::{
    ASTRONOMICAL_UNIT_KM, DAYS_PER_YEAR, FULL_CIRCLE_DEGREES, MEAN_ANOMALY_PERIHELION,
    MEAN_DISTANCE_MULTIPLIER, ORBITAL_ECCENTRICITY, SECOND_HARMONIC_COEFFICIENT,
};
use crate::math::{cos, degrees_to_radians};
use crate::time::Timestamp;

/// Mean anomaly in radians for an ordinal day of the year.
fn mean_anomaly(day_of_year: u32) -> f64 {
    let degrees =
        MEAN_ANOMALY_PERIHELION + (FULL_CIRCLE_DEGREES / DAYS_PER_YEAR) * f64::from(day_of_year);
    degrees_to_radians(degrees % FULL_CIRCLE_DEGREES)
}

/// Earth-Sun distance in kilometers.
///
/// Depends only on the calendar day; the time of day is ignored.
///
/// # Example
/// ```
/// # use solar_irradiance::{distance::absolute_earth_sun_distance, time::Timestamp};
/// let perihelion = Timestamp::new(2024, 1, 3, 0, 0, 0.0).unwrap();
/// let km = absolute_earth_sun_distance(perihelion);
/// assert!(km > 1.47e8 && km < 1.48e8);
/// ```
#[must_use]
pub fn absolute_earth_sun_distance(timestamp: Timestamp) -> f64 {
    let m = mean_anomaly(timestamp.day_of_year());
    (MEAN_DISTANCE_MULTIPLIER
        - ORBITAL_ECCENTRICITY * cos(m)
        - SECOND_HARMONIC_COEFFICIENT * cos(2.0 * m))
        * ASTRONOMICAL_UNIT_KM
}

/// Earth-Sun distance in astronomical units.
#[must_use]
pub fn relative_earth_sun_distance(timestamp: Timestamp) -> f64 {
    absolute_earth_sun_distance(timestamp) / ASTRONOMICAL_UNIT_KM
}
