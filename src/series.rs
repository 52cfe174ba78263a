//! Irradiance series over a latitude × day-of-year grid.
//!
//! This is the consumption pattern of charting front ends: one series per
//! latitude, one point per day at 12:00 UTC.

use crate::radiation::solar_radiation;
use crate::time::Timestamp;
use crate::Result;
use log::debug;

/// Noon irradiance for every day of a year at one latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiationSeries {
    latitude: f64,
    points: Vec<(u32, f64)>,
}

impl RadiationSeries {
    /// Gets the latitude of this series in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the `(day_of_year, W/m²)` points in day order.
    #[must_use]
    pub fn points(&self) -> &[(u32, f64)] {
        &self.points
    }

    /// Gets the point with the highest irradiance, if any.
    #[must_use]
    pub fn peak(&self) -> Option<(u32, f64)> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Computes noon (12:00 UTC) irradiance for each day of `year` at each latitude.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for the first out-of-range
/// coordinate.
///
/// # Example
/// ```
/// # use solar_irradiance::series::noon_radiation_by_latitude;
/// let series = noon_radiation_by_latitude(2024, &[0.0, 45.0], 0.0, 1.0).unwrap();
/// assert_eq!(series.len(), 2);
/// assert_eq!(series[0].points().len(), 366);
/// ```
pub fn noon_radiation_by_latitude(
    year: i32,
    latitudes: &[f64],
    longitude: f64,
    tau: f64,
) -> Result<Vec<RadiationSeries>> {
    let noons = (1..=366)
        .map_while(|day| Timestamp::from_day_of_year(year, day, 12, 0, 0.0).ok())
        .collect::<Vec<_>>();

    debug!(
        "computing {} noon series over {} days of {year}, tau {tau}",
        latitudes.len(),
        noons.len()
    );

    latitudes
        .iter()
        .map(|&latitude| -> Result<RadiationSeries> {
            let points = noons
                .iter()
                .map(|&noon| {
                    solar_radiation(latitude, longitude, noon, tau)
                        .map(|irradiance| (noon.day_of_year(), irradiance))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(RadiationSeries { latitude, points })
        })
        .collect()
}
