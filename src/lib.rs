//! # Solar Irradiance Library
//!
//! Solar position and surface irradiance from a geographic location and a UTC time.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The library chains a small set of classic formulas:
//! - **Declination** from a low-precision orbital model referenced to J2000.0
//! - **Hour angle** from UTC and longitude (mean solar time)
//! - **Zenith, altitude and azimuth** angles
//! - **Earth-Sun distance** from the day of the year
//! - **Air mass**: plane-parallel up to 60° zenith, Kasten & Young beyond
//! - **Irradiance**: solar constant attenuated by `exp(-τ · air mass)`
//!
//! Every function is a pure computation on its arguments; results are safe to
//! compute from any number of threads and in any order.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Convert `chrono::DateTime<Tz>` into [`Timestamp`]
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-irradiance = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! solar-irradiance = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Validation
//!
//! Operations that take a geographic location ([`air_mass::air_mass_at`],
//! [`position::solar_position`], [`radiation::solar_radiation`]) reject latitudes
//! outside ±90° and longitudes outside ±180°. Operations on angles check the
//! domain they need: [`zenith::solar_altitude`] accepts zenith 0°..=180°,
//! [`air_mass::air_mass`] accepts 0°..=90°, and [`azimuth::solar_azimuth`] fails
//! where azimuth is undefined. Declination, hour angle and zenith angle are total
//! functions of their inputs.
//!
//! ## Quick Start
//!
//! ### Irradiance (numeric API)
//! ```rust
//! use solar_irradiance::{radiation::solar_radiation, time::Timestamp, SkyCondition};
//!
//! let noon = Timestamp::new(2024, 6, 21, 12, 0, 0.0).unwrap();
//! let (_, tau) = SkyCondition::ClearSky.optical_depth_range();
//!
//! let irradiance = solar_radiation(45.0, 0.0, noon, tau).unwrap();
//! println!("Irradiance: {irradiance:.1} W/m²");
//! ```
//!
//! ### Solar Position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use solar_irradiance::position::solar_position;
//!
//! // Vienna, 11:00 local summer time
//! let datetime = "2026-06-21T11:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = solar_position(48.21, 16.37, datetime.into()).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Altitude: {:.3}°", position.altitude_angle());
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Zenith angle**: 0° = directly overhead, clamped to the horizon at 90°
//! - **Altitude angle**: 90° - zenith
//! - **Azimuth**: 0° to 360°, measured from north

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::time::{JulianDate, Timestamp};
pub use crate::types::{SkyCondition, SolarPosition};

// Pipeline modules
pub mod air_mass;
pub mod azimuth;
pub mod declination;
pub mod distance;
pub mod hour_angle;
pub mod position;
pub mod radiation;
pub mod zenith;

#[cfg(feature = "std")]
pub mod series;

// Core modules
pub mod constants;
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_zoned_and_utc_inputs_agree() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let r1 = radiation::solar_radiation(37.7749, -122.4194, datetime_fixed.into(), 0.3)
            .unwrap();
        let r2 =
            radiation::solar_radiation(37.7749, -122.4194, datetime_utc.into(), 0.3).unwrap();
        assert_eq!(r1, r2);

        let p1 = position::solar_position(37.7749, -122.4194, datetime_fixed.into()).unwrap();
        let p2 = position::solar_position(37.7749, -122.4194, datetime_utc.into()).unwrap();
        assert_eq!(p1, p2);
        assert!((0.0..360.0).contains(&p1.azimuth()));
        assert!((0.0..=90.0).contains(&p1.zenith_angle()));
    }
}
