//! Solar declination from a low-precision model of the Sun's apparent orbit.
//!
//! The chain is: Julian Day → centuries since J2000.0 → mean longitude and mean
//! anomaly → ecliptic longitude (equation of center) → obliquity of the ecliptic
//! → declination. Accuracy is on the order of 0.01°, which is ample for
//! irradiance work.

use crate::constants::{
    DAYS_PER_CENTURY, EQUATION_OF_CENTER_1, EQUATION_OF_CENTER_2, MEAN_ANOMALY_AT_J2000,
    MEAN_ANOMALY_DAILY_MOTION, MEAN_LONGITUDE_AT_J2000, MEAN_LONGITUDE_DAILY_MOTION,
    OBLIQUITY_AT_J2000, OBLIQUITY_DAILY_DECREASE,
};
use crate::math::{
    asin, degrees_to_radians, normalize_degrees_0_to_360, polynomial, radians_to_degrees, sin,
};
use crate::time::{JulianDate, Timestamp};

/// Calculates the solar declination in degrees for a UTC timestamp.
///
/// Positive values mean the Sun is north of the celestial equator.
///
/// # Example
/// ```
/// # use solar_irradiance::{declination::solar_declination, time::Timestamp};
/// let june = Timestamp::new(2024, 6, 21, 12, 0, 0.0).unwrap();
/// assert!((solar_declination(june) - 23.44).abs() < 0.1);
/// ```
#[must_use]
pub fn solar_declination(timestamp: Timestamp) -> f64 {
    let jc = JulianDate::from_timestamp(timestamp).julian_century();

    let lambda = ecliptic_longitude(mean_longitude(jc), mean_anomaly(jc));
    declination(lambda, obliquity(jc))
}

/// Mean longitude of the Sun in degrees, normalized to [0, 360).
#[must_use]
pub fn mean_longitude(julian_century: f64) -> f64 {
    let days = julian_century * DAYS_PER_CENTURY;
    normalize_degrees_0_to_360(polynomial(
        &[MEAN_LONGITUDE_AT_J2000, MEAN_LONGITUDE_DAILY_MOTION],
        days,
    ))
}

/// Mean anomaly of the Sun in degrees, normalized to [0, 360).
#[must_use]
pub fn mean_anomaly(julian_century: f64) -> f64 {
    let days = julian_century * DAYS_PER_CENTURY;
    normalize_degrees_0_to_360(polynomial(
        &[MEAN_ANOMALY_AT_J2000, MEAN_ANOMALY_DAILY_MOTION],
        days,
    ))
}

/// Ecliptic longitude in degrees: mean longitude plus the equation of center.
///
/// Not normalized; it may exceed 360° by up to about 2°.
#[must_use]
pub fn ecliptic_longitude(mean_longitude: f64, mean_anomaly: f64) -> f64 {
    let g = degrees_to_radians(mean_anomaly);
    mean_longitude + EQUATION_OF_CENTER_1 * sin(g) + EQUATION_OF_CENTER_2 * sin(2.0 * g)
}

/// Obliquity of the ecliptic in degrees.
#[must_use]
pub fn obliquity(julian_century: f64) -> f64 {
    OBLIQUITY_AT_J2000 - OBLIQUITY_DAILY_DECREASE * julian_century * DAYS_PER_CENTURY
}

/// Declination in degrees from ecliptic longitude and obliquity (both degrees).
#[must_use]
pub fn declination(ecliptic_longitude: f64, obliquity: f64) -> f64 {
    radians_to_degrees(asin(
        sin(degrees_to_radians(obliquity)) * sin(degrees_to_radians(ecliptic_longitude)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(year: i32, month: u32, day: u32, hour: u32) -> Timestamp {
        Timestamp::new(year, month, day, hour, 0, 0.0).unwrap()
    }

    #[test]
    fn test_elements_at_j2000() {
        assert!((mean_longitude(0.0) - 280.46).abs() < 1e-12);
        assert!((mean_anomaly(0.0) - 357.528).abs() < 1e-12);
        assert!((obliquity(0.0) - 23.439).abs() < 1e-12);
    }

    #[test]
    fn test_elements_are_normalized() {
        for jc in [-1.5, -0.3, 0.0, 0.24, 0.7, 2.0] {
            let l = mean_longitude(jc);
            let g = mean_anomaly(jc);
            assert!((0.0..360.0).contains(&l), "mean longitude {l} for {jc}");
            assert!((0.0..360.0).contains(&g), "mean anomaly {g} for {jc}");
        }
    }

    #[test]
    fn test_obliquity_decreases() {
        assert!(obliquity(1.0) < obliquity(0.0));
        assert!((obliquity(1.0) - (23.439 - 0.0000004 * 36_525.0)).abs() < 1e-12);
    }

    #[test]
    fn test_declination_limits() {
        assert!((declination(90.0, 23.44) - 23.44).abs() < 1e-9);
        assert!((declination(270.0, 23.44) + 23.44).abs() < 1e-9);
        assert!(declination(0.0, 23.44).abs() < 1e-12);
        assert!(declination(180.0, 23.44).abs() < 1e-9);
    }

    #[test]
    fn test_seasonal_declination() {
        let march = solar_declination(ts(2024, 3, 20, 12));
        let june = solar_declination(ts(2024, 6, 21, 12));
        let september = solar_declination(ts(2024, 9, 22, 12));
        let december = solar_declination(ts(2024, 12, 21, 12));

        assert!(march.abs() < 0.5, "march equinox: {march}");
        assert!((june - 23.44).abs() < 0.1, "june solstice: {june}");
        assert!(september.abs() < 0.5, "september equinox: {september}");
        assert!((december + 23.44).abs() < 0.1, "december solstice: {december}");
    }

    #[test]
    fn test_declination_bounded_over_a_year() {
        for day in 1..=366 {
            let t = Timestamp::from_day_of_year(2024, day, 0, 0, 0.0).unwrap();
            let d = solar_declination(t);
            assert!(d.abs() <= 23.45, "day {day}: {d}");
        }
    }
}
