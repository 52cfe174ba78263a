//! Named physical and astronomical constants.
//!
//! All angles are in degrees unless the name says otherwise.

#![allow(clippy::unreadable_literal)]

// Orbital elements of the low-precision solar model (mean elements at J2000.0).

/// Mean longitude of the Sun at J2000.0 (degrees).
pub const MEAN_LONGITUDE_AT_J2000: f64 = 280.46;

/// Daily motion of the mean longitude (degrees/day).
pub const MEAN_LONGITUDE_DAILY_MOTION: f64 = 0.9856474;

/// Mean anomaly of the Sun at J2000.0 (degrees).
pub const MEAN_ANOMALY_AT_J2000: f64 = 357.528;

/// Daily motion of the mean anomaly (degrees/day).
pub const MEAN_ANOMALY_DAILY_MOTION: f64 = 0.9856003;

/// Amplitude of the equation of center, first harmonic (degrees).
pub const EQUATION_OF_CENTER_1: f64 = 1.915;

/// Amplitude of the equation of center, second harmonic (degrees).
pub const EQUATION_OF_CENTER_2: f64 = 0.020;

/// Obliquity of the ecliptic at J2000.0 (degrees).
pub const OBLIQUITY_AT_J2000: f64 = 23.439;

/// Daily decrease of the obliquity of the ecliptic (degrees/day).
pub const OBLIQUITY_DAILY_DECREASE: f64 = 0.0000004;

/// Degrees in a full circle.
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

// Calendar and Julian Day arithmetic.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00 UTC).
pub const J2000_JULIAN_DAY: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days per Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Mean month length factor of the civil-to-Julian-Day conversion.
pub const DAYS_PER_MONTH_FACTOR: f64 = 30.6001;

/// Year offset of the civil-to-Julian-Day conversion.
pub const JULIAN_YEAR_OFFSET: f64 = 4716.0;

/// Day offset of the civil-to-Julian-Day conversion.
pub const JULIAN_DAY_OFFSET: f64 = 1524.5;

/// First year to which the Gregorian calendar correction applies.
pub const GREGORIAN_CALENDAR_START: i32 = 1582;

/// Hours per day.
pub const HOURS_PER_DAY: f64 = 24.0;

// Hour angle.

/// Degrees of Earth rotation per hour (also the longitude span of one hour).
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Local solar time of solar noon (hours).
pub const SOLAR_NOON_HOURS: f64 = 12.0;

// Zenith and altitude.

/// Zenith angle of the horizon, and the reference for altitude = 90° - zenith.
pub const HORIZON_ZENITH_ANGLE: f64 = 90.0;

/// Largest zenith angle accepted by the altitude conversion (nadir).
pub const MAX_ZENITH_ANGLE: f64 = 180.0;

// Air mass (Kasten & Young 1989).

/// Zenith angle up to which the plane-parallel air mass model is used (inclusive).
pub const PLANE_PARALLEL_MAX_ZENITH: f64 = 60.0;

/// Kasten-Young correction factor.
pub const KASTEN_YOUNG_FACTOR: f64 = 0.50572;

/// Kasten-Young zenith offset (degrees).
pub const KASTEN_YOUNG_OFFSET: f64 = 96.07995;

/// Kasten-Young exponent.
pub const KASTEN_YOUNG_EXPONENT: f64 = -1.6364;

// Earth-Sun distance.

/// Astronomical unit in kilometers.
pub const ASTRONOMICAL_UNIT_KM: f64 = 149_597_870.7;

/// Eccentricity of Earth's orbit.
pub const ORBITAL_ECCENTRICITY: f64 = 0.01671123;

/// Mean anomaly at the start of the year, referenced to perihelion (degrees).
pub const MEAN_ANOMALY_PERIHELION: f64 = 357.5291;

/// Mean distance multiplier of the Earth-Sun distance series.
pub const MEAN_DISTANCE_MULTIPLIER: f64 = 1.00014;

/// Coefficient of the second cosine harmonic of the Earth-Sun distance series.
pub const SECOND_HARMONIC_COEFFICIENT: f64 = 0.00014;

// Radiation.

/// Solar constant: irradiance at 1 AU above the atmosphere (W/m²).
pub const SOLAR_CONSTANT: f64 = 1361.0;

/// Optical depth band for clear sky (lower bound).
pub const OPTICAL_DEPTH_CLEAR_SKY_MIN: f64 = 0.1;
/// Optical depth band for clear sky (upper bound).
pub const OPTICAL_DEPTH_CLEAR_SKY_MAX: f64 = 0.3;
/// Optical depth band for thin cloud (lower bound).
pub const OPTICAL_DEPTH_THIN_CLOUD_MIN: f64 = 0.1;
/// Optical depth band for thin cloud (upper bound).
pub const OPTICAL_DEPTH_THIN_CLOUD_MAX: f64 = 1.0;
/// Optical depth band for thick cloud (lower bound).
pub const OPTICAL_DEPTH_THICK_CLOUD_MIN: f64 = 10.0;
/// Optical depth band for thick cloud (upper bound).
pub const OPTICAL_DEPTH_THICK_CLOUD_MAX: f64 = 50.0;

// Geographic ranges.

/// Southernmost valid latitude.
pub const MIN_LATITUDE: f64 = -90.0;
/// Northernmost valid latitude.
pub const MAX_LATITUDE: f64 = 90.0;
/// Westernmost valid longitude.
pub const MIN_LONGITUDE: f64 = -180.0;
/// Easternmost valid longitude.
pub const MAX_LONGITUDE: f64 = 180.0;
