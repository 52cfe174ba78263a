//! Core data types for solar position and irradiance calculations.

use crate::constants::{
    HORIZON_ZENITH_ANGLE, OPTICAL_DEPTH_CLEAR_SKY_MAX, OPTICAL_DEPTH_CLEAR_SKY_MIN,
    OPTICAL_DEPTH_THICK_CLOUD_MAX, OPTICAL_DEPTH_THICK_CLOUD_MIN, OPTICAL_DEPTH_THIN_CLOUD_MAX,
    OPTICAL_DEPTH_THIN_CLOUD_MIN,
};

/// Reference bands of atmospheric optical depth (τ) for common sky conditions.
///
/// Informational only: radiation calculations accept any τ.
///
/// # Example
/// ```
/// # use solar_irradiance::SkyCondition;
/// assert_eq!(SkyCondition::ClearSky.optical_depth_range(), (0.1, 0.3));
/// assert!(SkyCondition::ThickCloud.contains(25.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkyCondition {
    /// Cloudless sky, τ between 0.1 and 0.3
    ClearSky,
    /// Thin cloud layer, τ between 0.1 and 1.0
    ThinCloud,
    /// Thick cloud cover, τ between 10 and 50
    ThickCloud,
}

impl SkyCondition {
    /// Gets the (min, max) optical depth band for this condition.
    #[must_use]
    pub const fn optical_depth_range(&self) -> (f64, f64) {
        match self {
            Self::ClearSky => (OPTICAL_DEPTH_CLEAR_SKY_MIN, OPTICAL_DEPTH_CLEAR_SKY_MAX),
            Self::ThinCloud => (OPTICAL_DEPTH_THIN_CLOUD_MIN, OPTICAL_DEPTH_THIN_CLOUD_MAX),
            Self::ThickCloud => (OPTICAL_DEPTH_THICK_CLOUD_MIN, OPTICAL_DEPTH_THICK_CLOUD_MAX),
        }
    }

    /// Checks whether `tau` falls within this condition's band (inclusive).
    #[must_use]
    pub fn contains(&self, tau: f64) -> bool {
        let (min, max) = self.optical_depth_range();
        (min..=max).contains(&tau)
    }
}

/// Solar position as seen from a point on Earth's surface.
///
/// Produced by [`solar_position`](crate::position::solar_position). The zenith
/// angle is clamped to [0°, 90°], so the altitude never goes below 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    declination: f64,
    hour_angle: f64,
    zenith_angle: f64,
    azimuth: f64,
}

impl SolarPosition {
    pub(crate) const fn new(
        declination: f64,
        hour_angle: f64,
        zenith_angle: f64,
        azimuth: f64,
    ) -> Self {
        Self {
            declination,
            hour_angle,
            zenith_angle,
            azimuth,
        }
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the hour angle in degrees (negative before local solar noon).
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Gets the zenith angle in degrees (0° to 90°).
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Gets the altitude angle in degrees: 90° - zenith.
    #[must_use]
    pub fn altitude_angle(&self) -> f64 {
        HORIZON_ZENITH_ANGLE - self.zenith_angle
    }

    /// Gets the azimuth angle in degrees (0° to 360°).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Checks if the sun is above the horizon (altitude angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude_angle() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sky_condition_bands() {
        assert_eq!(SkyCondition::ClearSky.optical_depth_range(), (0.1, 0.3));
        assert_eq!(SkyCondition::ThinCloud.optical_depth_range(), (0.1, 1.0));
        assert_eq!(SkyCondition::ThickCloud.optical_depth_range(), (10.0, 50.0));
    }

    #[test]
    fn test_sky_condition_contains() {
        assert!(SkyCondition::ClearSky.contains(0.1));
        assert!(SkyCondition::ClearSky.contains(0.3));
        assert!(!SkyCondition::ClearSky.contains(0.5));
        assert!(SkyCondition::ThinCloud.contains(0.5));
        assert!(!SkyCondition::ThickCloud.contains(1.0));
        assert!(!SkyCondition::ThickCloud.contains(f64::NAN));
    }

    #[test]
    fn test_solar_position_accessors() {
        let pos = SolarPosition::new(10.0, -15.0, 30.0, 120.0);
        assert_eq!(pos.declination(), 10.0);
        assert_eq!(pos.hour_angle(), -15.0);
        assert_eq!(pos.zenith_angle(), 30.0);
        assert_eq!(pos.altitude_angle(), 60.0);
        assert_eq!(pos.azimuth(), 120.0);
        assert!(pos.is_sun_up());
    }

    #[test]
    fn test_horizon_is_not_up() {
        let pos = SolarPosition::new(0.0, 180.0, 90.0, 0.0);
        assert_eq!(pos.altitude_angle(), 0.0);
        assert!(!pos.is_sun_up());
    }
}
