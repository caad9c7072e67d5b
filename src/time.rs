//! Julian Day time representation.
//!
//! Every stage of the sunrise equation exchanges instants as a [`JulianDay`]: a continuous
//! count of days (the fractional part encodes the time of day) since the Julian Day epoch.
//! Conversion from Unix time is exact up to floating-point precision. Conversion back to
//! whole seconds floors, so a round trip can lose up to one second.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day of the Unix epoch (1970-01-01 00:00:00 UTC)
const UNIX_EPOCH_JDN: f64 = 2_440_587.5;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// A UTC instant expressed as a Julian Day.
///
/// # Example
/// ```
/// # use sunrise_equation::time::JulianDay;
/// let jd = JulianDay::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
/// assert_eq!(jd, JulianDay::J2000);
/// assert_eq!(jd.unix_seconds(), 946_728_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// The J2000.0 epoch, 2000-01-01 12:00:00 UTC.
    pub const J2000: Self = Self(J2000_JDN);

    /// Wraps a raw Julian Day value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Gets the raw Julian Day value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Creates a Julian Day from year, month, day, hour, minute, and second in UTC.
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
    /// Returns error if any date/time component is outside valid ranges (month 1-12, day valid
    /// for the month, hour 0-23, minute 0-59, second 0-59.999).
    pub fn from_utc(
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

        if day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        Ok(Self(calculate_julian_date(
            year, month, day, hour, minute, second,
        )))
    }

    /// Julian Day of 12:00 UTC on the given calendar date.
    ///
    /// # Errors
    /// Returns error if the date components are invalid.
    pub fn noon_of(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_utc(year, month, day, 12, 0, 0.0)
    }

    /// Converts whole Unix seconds to a Julian Day: `seconds / 86400 + 2440587.5`.
    #[must_use]
    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds as f64 / SECONDS_PER_DAY + UNIX_EPOCH_JDN)
    }

    /// Converts back to whole Unix seconds, flooring any sub-second remainder.
    #[must_use]
    pub fn unix_seconds(self) -> i64 {
        floor((self.0 - UNIX_EPOCH_JDN) * SECONDS_PER_DAY) as i64
    }

    /// Julian Day of 12:00 UTC on the UTC calendar date containing this instant.
    ///
    /// Julian Days start at noon, so the date's noon is `floor(jd + 0.5)`.
    #[must_use]
    pub fn noon(self) -> Self {
        Self(floor(self.0 + 0.5))
    }

    /// Days elapsed since the J2000.0 epoch.
    #[must_use]
    pub fn days_since_j2000(self) -> f64 {
        self.0 - J2000_JDN
    }

    /// Julian centuries elapsed since the J2000.0 epoch.
    #[must_use]
    pub fn julian_century(self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    /// Shifts the instant by a (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Creates a Julian Day from a timezone-aware chrono `DateTime`.
    ///
    /// Only whole seconds are used; the instant is taken as UTC.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_unix_seconds(datetime.timestamp())
    }

    /// Julian Day of 12:00 UTC on a chrono calendar date.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(calculate_julian_date(
            date.year(),
            date.month(),
            date.day(),
            12,
            0,
            0.0,
        ))
    }

    /// Converts to a UTC `DateTime`, truncated to whole seconds.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the value is not finite or falls outside chrono's range.
    #[cfg(feature = "chrono")]
    pub fn to_datetime(self) -> Result<DateTime<Utc>> {
        if !self.0.is_finite() {
            return Err(Error::invalid_datetime("Julian Day is not finite"));
        }
        DateTime::from_timestamp(self.unix_seconds(), 0).ok_or(Error::invalid_datetime(
            "Julian Day is outside the representable date range",
        ))
    }
}

/// Julian Day of the mean solar noon at `longitude` on the UTC date of `date`.
///
/// Calendar noon UTC shifted by `-longitude / 360` days, before any equation-of-time
/// correction. Not to be confused with the true solar transit.
#[must_use]
pub fn mean_solar_noon(longitude: f64, date: JulianDay) -> JulianDay {
    date.noon().add_days(-longitude / 360.0)
}

/// Calculates Julian Date from UTC date/time components.
///
/// Meeus, "Astronomical Algorithms", 2nd edition, chapter 7.
#[allow(clippy::cast_possible_wrap)]
fn calculate_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let mut y = year;
    let mut m = month as i32;

    // January and February count as months 13 and 14 of the previous year
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let mut jd =
        floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + d - 1524.5;

    // Gregorian correction from JDN 2299161 (1582-10-15)
    if jd >= 2_299_161.0 {
        let a = floor(f64::from(y) / 100.0);
        let b = 2.0 - a + floor(a / 4.0);
        jd += b;
    }

    jd
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year, is_gregorian) => Ok(29),
        2 => Ok(28),
        _ => Err(Error::invalid_datetime("month must be between 1 and 12")),
    }
}
