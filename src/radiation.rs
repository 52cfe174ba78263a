//! Surface solar irradiance with single-term exponential attenuation.
//!
//! I = I₀ · r · exp(-τ · m)
//!
//! where I₀ is the solar constant, r the relative Earth-Sun distance, τ the
//! atmospheric optical depth and m the relative air mass.

use crate::air_mass::air_mass_at;
use crate::constants::SOLAR_CONSTANT;
use crate::distance::relative_earth_sun_distance;
use crate::error::check_coordinates;
use crate::math::exp;
use crate::time::Timestamp;
use crate::Result;
use log::trace;

/// Irradiance at the top of the atmosphere in W/m², scaled by the relative
/// Earth-Sun distance.
#[must_use]
pub fn extraterrestrial_radiation(timestamp: Timestamp) -> f64 {
    SOLAR_CONSTANT * relative_earth_sun_distance(timestamp)
}

/// Calculates the solar irradiance reaching the surface in W/m².
///
/// The optical depth `tau` is not range checked: negative values amplify rather
/// than attenuate. See [`SkyCondition`](crate::SkyCondition) for typical bands.
///
/// When the sun is below the horizon the zenith angle saturates at 90°, so the
/// result is the horizon value rather than zero.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `timestamp` - UTC time
/// * `tau` - Atmospheric optical depth
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
///
/// # Example
/// ```
/// # use solar_irradiance::{radiation::solar_radiation, time::Timestamp};
/// let solstice = Timestamp::new(2024, 6, 21, 12, 0, 0.0).unwrap();
/// let irradiance = solar_radiation(45.0, 0.0, solstice, 0.3).unwrap();
/// assert!(irradiance > 900.0 && irradiance < 1100.0);
/// ```
pub fn solar_radiation(latitude: f64, longitude: f64, timestamp: Timestamp, tau: f64) -> Result<f64> {
    check_coordinates(latitude, longitude)?;

    let air_mass = air_mass_at(latitude, longitude, timestamp)?;
    let extraterrestrial = extraterrestrial_radiation(timestamp);
    let irradiance = extraterrestrial * exp(-tau * air_mass);

    trace!(
        "solar radiation at ({latitude}, {longitude}) {timestamp:?}: air mass {air_mass}, \
         extraterrestrial {extraterrestrial} W/m², tau {tau} -> {irradiance} W/m²"
    );
    Ok(irradiance)
}
