//! Solar azimuth angle.

use crate::error::{check_altitude_angle, check_azimuth, check_latitude};
use crate::math::{atan2, cos, degrees_to_radians, radians_to_degrees, sin};
use crate::{Error, Result};
use log::debug;

/// Below this, cos φ or cos α is treated as zero (cos 90° evaluates to ~6e-17).
const DEGENERATE_COSINE: f64 = 1e-12;

/// Calculates the solar azimuth angle in degrees, in [0, 360).
///
/// sin Az = cos δ · sin H / cos α
/// cos Az = (sin α - sin φ · sin δ) / (cos φ · cos α)
///
/// Az = atan2(sin Az, cos Az), shifted by 360° when negative.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `altitude` - Solar altitude angle in degrees (-90 to +90)
/// * `declination` - Solar declination in degrees
/// * `hour_angle` - Hour angle in degrees
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidAltitudeAngle` for out-of-range inputs,
/// `UndefinedAzimuth` at the poles (|φ| = 90°) and with the sun at the zenith
/// (α = 90°) where both formulas divide by zero, and `ComputationError` if the
/// result is not finite (e.g. a NaN declination).
///
/// # Example
/// ```
/// # use solar_irradiance::azimuth::solar_azimuth;
/// let az = solar_azimuth(0.0, 0.0, 0.0, -90.0).unwrap();
/// assert!((az - 270.0).abs() < 1e-9);
/// assert!(solar_azimuth(90.0, 23.0, 23.0, 0.0).is_err());
/// ```
pub fn solar_azimuth(
    latitude: f64,
    altitude: f64,
    declination: f64,
    hour_angle: f64,
) -> Result<f64> {
    check_latitude(latitude)?;
    check_altitude_angle(altitude)?;

    let phi = degrees_to_radians(latitude);
    let alpha = degrees_to_radians(altitude);
    let delta = degrees_to_radians(declination);
    let h = degrees_to_radians(hour_angle);

    let cos_phi = cos(phi);
    let cos_alpha = cos(alpha);
    if cos_phi.abs() < DEGENERATE_COSINE || cos_alpha.abs() < DEGENERATE_COSINE {
        debug!("azimuth undefined for latitude {latitude}°, altitude {altitude}°");
        return Err(Error::undefined_azimuth(latitude, altitude));
    }

    let sin_az = cos(delta) * sin(h) / cos_alpha;
    let cos_az = (sin(alpha) - sin(phi) * sin(delta)) / (cos_phi * cos_alpha);

    check_azimuth(radians_to_degrees(atan2(sin_az, cos_az)))
}
