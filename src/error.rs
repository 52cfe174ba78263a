//! Error types for the solar irradiance library.

use crate::constants::{
    HORIZON_ZENITH_ANGLE, MAX_LATITUDE, MAX_LONGITUDE, MAX_ZENITH_ANGLE, MIN_LATITUDE,
    MIN_LONGITUDE,
};
use crate::math::normalize_degrees_0_to_360;
use core::fmt;
use log::debug;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar position and irradiance calculations.
///
/// Every variant except `ComputationError` is a validation failure: an input was
/// outside the domain of the operation that rejected it.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid zenith angle (must be between 0 and `max` degrees).
    InvalidZenithAngle {
        /// The invalid zenith angle provided.
        value: f64,
        /// Upper bound of the accepted range.
        max: f64,
    },
    /// Invalid solar altitude angle (must be between -90 and +90 degrees).
    InvalidAltitudeAngle {
        /// The invalid altitude angle provided.
        value: f64,
    },
    /// Azimuth is undefined at the poles and when the sun stands at the zenith.
    UndefinedAzimuth {
        /// Observer latitude in degrees.
        latitude: f64,
        /// Solar altitude angle in degrees.
        altitude: f64,
    },
    /// Invalid date/time component.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g., a non-finite intermediate).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidZenithAngle { value, max } => {
                write!(
                    f,
                    "invalid zenith angle {value}° (must be between 0° and {max}°)"
                )
            }
            Self::InvalidAltitudeAngle { value } => {
                write!(
                    f,
                    "invalid altitude angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::UndefinedAzimuth { latitude, altitude } => {
                write!(
                    f,
                    "azimuth is undefined for latitude {latitude}° and altitude {altitude}°"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid zenith angle error for the range `[0, max]`.
    #[must_use]
    pub const fn invalid_zenith_angle(value: f64, max: f64) -> Self {
        Self::InvalidZenithAngle { value, max }
    }

    /// Creates an invalid altitude angle error.
    #[must_use]
    pub const fn invalid_altitude_angle(value: f64) -> Self {
        Self::InvalidAltitudeAngle { value }
    }

    /// Creates an undefined azimuth error.
    #[must_use]
    pub const fn undefined_azimuth(latitude: f64, altitude: f64) -> Self {
        Self::UndefinedAzimuth { latitude, altitude }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }

    /// Whether this error reports an input outside the domain of an operation.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        !matches!(self, Self::ComputationError { .. })
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)
        .and_then(|()| check_longitude(longitude))
        .inspect_err(|err| debug!("rejected location ({latitude}, {longitude}): {err}"))
}

/// Validates a zenith angle to be within the range [0, 180] degrees.
///
/// # Errors
/// Returns `InvalidZenithAngle` if the angle is not finite or outside the range.
pub fn check_zenith_angle(zenith: f64) -> Result<f64> {
    check_zenith_up_to(zenith, MAX_ZENITH_ANGLE)
}

/// Validates a zenith angle to be at or above the horizon, [0, 90] degrees.
///
/// # Errors
/// Returns `InvalidZenithAngle` if the angle is not finite or outside the range.
pub fn check_zenith_above_horizon(zenith: f64) -> Result<f64> {
    check_zenith_up_to(zenith, HORIZON_ZENITH_ANGLE)
}

fn check_zenith_up_to(zenith: f64, max: f64) -> Result<f64> {
    if !(0.0..=max).contains(&zenith) {
        return Err(Error::invalid_zenith_angle(zenith, max));
    }
    Ok(zenith)
}

/// Validates a solar altitude angle to be within the range [-90, 90] degrees.
///
/// # Errors
/// Returns `InvalidAltitudeAngle` if the angle is not finite or outside the range.
pub fn check_altitude_angle(altitude: f64) -> Result<f64> {
    if !(-HORIZON_ZENITH_ANGLE..=HORIZON_ZENITH_ANGLE).contains(&altitude) {
        return Err(Error::invalid_altitude_angle(altitude));
    }
    Ok(altitude)
}

/// Validates and normalizes an azimuth angle to the range [0, 360) degrees.
///
/// # Errors
/// Returns `ComputationError` if azimuth is not finite.
pub fn check_azimuth(azimuth: f64) -> Result<f64> {
    if !azimuth.is_finite() {
        return Err(Error::computation_error("azimuth is not finite"));
    }
    Ok(normalize_degrees_0_to_360(azimuth))
}
