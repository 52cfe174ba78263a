//! Time-related calculations for solar positioning.
//!
//! This module provides the UTC [`Timestamp`] value type and the Julian Day
//! arithmetic the solar model is built on.

use crate::constants::{
    DAYS_PER_CENTURY, DAYS_PER_MONTH_FACTOR, DAYS_PER_YEAR, GREGORIAN_CALENDAR_START,
    HOURS_PER_DAY, J2000_JULIAN_DAY, JULIAN_DAY_OFFSET, JULIAN_YEAR_OFFSET,
};
use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// A civil date and time interpreted as UTC.
///
/// No time zone conversion is performed on the components; callers holding a
/// zoned time should go through the `chrono` conversion, which normalizes to UTC.
///
/// # Example
/// ```
/// # use solar_irradiance::time::Timestamp;
/// let ts = Timestamp::new(2024, 3, 20, 12, 0, 0.0).unwrap();
/// assert_eq!(ts.day_of_year(), 80);
/// assert_eq!(ts.minutes_since_midnight(), 720);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestamp {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl Timestamp {
    /// Creates a timestamp from UTC date/time components.
    ///
    /// # Arguments
    /// * `year` - Year (can be negative for BCE years)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range or the
    /// day does not exist in the month.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        if day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates a timestamp from a year, a day of that year (1-based) and a time of day.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the ordinal day does not exist in `year` or the
    /// time components are out of range.
    ///
    /// # Example
    /// ```
    /// # use solar_irradiance::time::Timestamp;
    /// let ts = Timestamp::from_day_of_year(2024, 60, 12, 0, 0.0).unwrap();
    /// assert_eq!((ts.month(), ts.day()), (2, 29));
    /// ```
    pub fn from_day_of_year(
        year: i32,
        day_of_year: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if day_of_year == 0 || day_of_year > days_in_year(year) {
            return Err(Error::invalid_datetime("day of year is out of range"));
        }

        let mut remaining = day_of_year;
        let mut month = 1;
        while remaining > days_in_month(year, month) {
            remaining -= days_in_month(year, month);
            month += 1;
        }
        Self::new(year, month, remaining, hour, minute, second)
    }

    /// Creates a timestamp from a timezone-aware chrono `DateTime`.
    ///
    /// The datetime is converted to UTC before its components are read.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&chrono::Utc);
        Self {
            year: utc.year(),
            month: utc.month(),
            day: utc.day(),
            hour: utc.hour(),
            minute: utc.minute(),
            second: f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9,
        }
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the second, including any fractional part.
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Gets the ordinal day of the year (1-366).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        (1..self.month)
            .map(|month| days_in_month(self.year, month))
            .sum::<u32>()
            + self.day
    }

    /// Gets the whole minutes elapsed since midnight UTC (0-1439).
    ///
    /// Seconds are truncated.
    #[must_use]
    pub const fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Gets the fraction of the day elapsed since midnight UTC, in hours.
    fn fractional_hours(&self) -> f64 {
        f64::from(self.hour) + (f64::from(self.minute) + self.second / 60.0) / 60.0
    }
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for Timestamp {
    fn from(datetime: chrono::DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

/// Julian date representation for astronomical calculations.
///
/// Follows the civil-calendar conversion of Meeus, "Astronomical Algorithms".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Creates a Julian date from a UTC timestamp.
    ///
    /// # Example
    /// ```
    /// # use solar_irradiance::time::{JulianDate, Timestamp};
    /// let ts = Timestamp::new(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert_eq!(JulianDate::from_timestamp(ts).julian_date(), 2_451_545.0);
    /// ```
    #[must_use]
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self {
            jd: calculate_julian_date(&timestamp),
        }
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since the J2000.0 epoch.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JULIAN_DAY
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        centuries_since_j2000(self.jd)
    }
}

/// Converts a UTC timestamp to its Julian Day number.
#[must_use]
pub fn julian_day(timestamp: Timestamp) -> f64 {
    JulianDate::from_timestamp(timestamp).julian_date()
}

/// Julian centuries elapsed between J2000.0 and `julian_day`.
#[must_use]
pub fn centuries_since_j2000(julian_day: f64) -> f64 {
    (julian_day - J2000_JULIAN_DAY) / DAYS_PER_CENTURY
}

/// Calculates Julian Date from UTC date/time components.
///
/// January and February count as months 13 and 14 of the previous year. Years
/// from 1582 on (after that shift) get the Gregorian correction; earlier years
/// are treated as proleptic Julian calendar with no correction.
fn calculate_julian_date(timestamp: &Timestamp) -> f64 {
    let mut y = timestamp.year;
    let mut m = timestamp.month;

    if m < 3 {
        y -= 1;
        m += 12;
    }

    let correction = if y >= GREGORIAN_CALENDAR_START {
        let a = y / 100;
        2 - a + a / 4
    } else {
        0
    };

    let d = f64::from(timestamp.day) + timestamp.fractional_hours() / HOURS_PER_DAY;

    floor(DAYS_PER_YEAR * (f64::from(y) + JULIAN_YEAR_OFFSET))
        + floor(DAYS_PER_MONTH_FACTOR * f64::from(m + 1))
        + d
        + f64::from(correction)
        - JULIAN_DAY_OFFSET
}

const fn is_leap_year(year: i32) -> bool {
    if year >= GREGORIAN_CALENDAR_START {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
