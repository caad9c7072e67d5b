//! Sunrise, sunset, twilight and other elevation crossings.
//!
//! All queries take a UTC calendar date. The orbital state is evaluated once for that date at
//! the location's longitude, and crossings are placed symmetrically around the true solar
//! transit. Polar days and nights come back as [`Crossings::AlwaysAbove`] and
//! [`Crossings::AlwaysBelow`]; the single-event helpers turn them into errors.
//!
//! # Example
//! ```
//! # #[cfg(feature = "chrono")] {
//! use sunrise_equation::{Location, Twilight, events};
//! use chrono::NaiveDate;
//!
//! let toronto = Location::new(43.65, -79.38);
//! let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
//!
//! let (sunrise, sunset) = events::sunrise_sunset(toronto, date).unwrap();
//! let (dawn, dusk) = events::dawn_dusk(toronto, date, Twilight::Civil).unwrap();
//! assert!(dawn < sunrise && sunset < dusk);
//! # }
//! ```

use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees, sin};
use crate::orbit::SolarDay;
use crate::time::JulianDay;
use crate::{Crossings, HourAngle, Location};
#[cfg(feature = "chrono")]
use crate::{Error, Result, Twilight};
#[cfg(feature = "chrono")]
use chrono::{DateTime, NaiveDate, Utc};

/// Elevation of the sun's center at sunrise and sunset, in degrees (-50 arcminutes).
///
/// Combines atmospheric refraction at the horizon (34') with the solar semi-diameter (16').
pub const SUNRISE_SUNSET_ANGLE: f64 = -50.0 / 60.0;

/// Solves the sunrise equation for the half-day arc at the sunrise/sunset elevation.
///
/// # Example
/// ```
/// use sunrise_equation::{HourAngle, events};
///
/// assert!(matches!(events::hour_angle(0.0, 0.0), HourAngle::Degrees(_)));
/// assert_eq!(events::hour_angle(78.22, 23.0), HourAngle::NeverSets);
/// assert_eq!(events::hour_angle(78.22, -23.0), HourAngle::NeverRises);
/// ```
#[must_use]
pub fn hour_angle(latitude: f64, declination: f64) -> HourAngle {
    hour_angle_for_elevation(latitude, declination, SUNRISE_SUNSET_ANGLE)
}

/// Solves the hour-angle equation for an arbitrary target elevation in degrees.
///
/// A ratio above 1 means the sun stays below the target all day, below -1 that it stays
/// above. Out-of-range coordinates yield `NaN` inside [`HourAngle::Degrees`].
#[must_use]
pub fn hour_angle_for_elevation(latitude: f64, declination: f64, elevation: f64) -> HourAngle {
    let lat = degrees_to_radians(latitude);
    let decl = degrees_to_radians(declination);
    let ratio =
        (sin(degrees_to_radians(elevation)) - sin(lat) * sin(decl)) / (cos(lat) * cos(decl));

    if ratio > 1.0 {
        HourAngle::NeverRises
    } else if ratio < -1.0 {
        HourAngle::NeverSets
    } else {
        HourAngle::Degrees(radians_to_degrees(acos(ratio)))
    }
}

/// Calculates when the sun crosses `elevation` degrees on the UTC date containing `date`.
///
/// # Example
/// ```
/// use sunrise_equation::{Location, events, time::JulianDay};
///
/// let toronto = Location::new(43.65, -79.38);
/// let noon = JulianDay::noon_of(2000, 1, 1).unwrap();
/// let civil = events::crossings_from_julian(toronto, noon, -6.0);
/// assert!(civil.is_regular());
/// ```
#[must_use]
pub fn crossings_from_julian(location: Location, date: JulianDay, elevation: f64) -> Crossings {
    let solar = SolarDay::compute(location.longitude(), date);
    let hour_angle =
        hour_angle_for_elevation(location.latitude(), solar.declination, elevation);
    crossings_for_day(location, &solar, hour_angle, elevation)
}

/// Calculates sunrise, true transit and sunset on the UTC date containing `date`.
#[must_use]
pub fn sunrise_sunset_from_julian(location: Location, date: JulianDay) -> Crossings {
    let solar = SolarDay::compute(location.longitude(), date);
    let hour_angle = hour_angle(location.latitude(), solar.declination);
    crossings_for_day(location, &solar, hour_angle, SUNRISE_SUNSET_ANGLE)
}

fn crossings_for_day(
    location: Location,
    solar: &SolarDay,
    hour_angle: HourAngle,
    elevation: f64,
) -> Crossings {
    let transit = solar.transit;
    match hour_angle {
        HourAngle::Degrees(angle) => {
            let half_day = angle / 360.0;
            Crossings::Regular {
                morning: transit.add_days(-half_day),
                transit,
                evening: transit.add_days(half_day),
            }
        }
        HourAngle::NeverRises => {
            log::debug!(
                "sun stays below {elevation}° at {location} (declination {:.4}°)",
                solar.declination
            );
            Crossings::AlwaysBelow { transit }
        }
        HourAngle::NeverSets => {
            log::debug!(
                "sun stays above {elevation}° at {location} (declination {:.4}°)",
                solar.declination
            );
            Crossings::AlwaysAbove { transit }
        }
    }
}

/// Calculates sunrise, true solar transit and sunset for a date, keeping polar outcomes.
///
/// # Errors
/// Returns `InvalidDateTime` if a computed instant cannot be represented.
///
/// # Example
/// ```
/// use sunrise_equation::{Crossings, Location, events};
/// use chrono::NaiveDate;
///
/// let arctic = Location::new(69.3321443, -81.6781126);
/// let date = NaiveDate::from_ymd_opt(2020, 6, 25).unwrap();
///
/// match events::sunrise_sunset_crossings(arctic, date).unwrap() {
///     Crossings::Regular { morning, evening, .. } => println!("{morning} - {evening}"),
///     Crossings::AlwaysAbove { transit } => println!("midnight sun, noon at {transit}"),
///     Crossings::AlwaysBelow { transit } => println!("polar night, noon at {transit}"),
/// }
/// ```
#[cfg(feature = "chrono")]
pub fn sunrise_sunset_crossings(
    location: Location,
    date: NaiveDate,
) -> Result<Crossings<DateTime<Utc>>> {
    sunrise_sunset_from_julian(location, JulianDay::from_date(date)).try_map(JulianDay::to_datetime)
}

/// Calculates when the sun crosses `elevation` degrees on a date, keeping polar outcomes.
///
/// # Errors
/// Returns `InvalidDateTime` if a computed instant cannot be represented.
#[cfg(feature = "chrono")]
pub fn elevation_crossings(
    location: Location,
    date: NaiveDate,
    elevation: f64,
) -> Result<Crossings<DateTime<Utc>>> {
    crossings_from_julian(location, JulianDay::from_date(date), elevation)
        .try_map(JulianDay::to_datetime)
}

/// Calculates sunrise and sunset for a date.
///
/// # Errors
/// Returns `SunNeverRises` during polar night and `SunNeverSets` during midnight sun.
///
/// # Example
/// ```
/// use sunrise_equation::{Location, events};
/// use chrono::{NaiveDate, Timelike};
///
/// let equator = Location::new(0.0, 0.0);
/// let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
/// let (sunrise, sunset) = events::sunrise_sunset(equator, date).unwrap();
/// assert_eq!((sunrise.hour(), sunrise.minute()), (5, 59));
/// assert_eq!((sunset.hour(), sunset.minute()), (18, 7));
/// ```
#[cfg(feature = "chrono")]
pub fn sunrise_sunset(
    location: Location,
    date: NaiveDate,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let crossings = sunrise_sunset_from_julian(location, JulianDay::from_date(date));
    let (sunrise, sunset) = match crossings {
        Crossings::Regular {
            morning, evening, ..
        } => (morning, evening),
        Crossings::AlwaysBelow { .. } => return Err(Error::SunNeverRises),
        Crossings::AlwaysAbove { .. } => return Err(Error::SunNeverSets),
    };
    Ok((sunrise.to_datetime()?, sunset.to_datetime()?))
}

/// Calculates sunrise for a date.
///
/// # Errors
/// Returns `SunNeverRises` during polar night and `SunNeverSets` during midnight sun.
#[cfg(feature = "chrono")]
pub fn sunrise(location: Location, date: NaiveDate) -> Result<DateTime<Utc>> {
    sunrise_sunset(location, date).map(|(sunrise, _)| sunrise)
}

/// Calculates sunset for a date.
///
/// # Errors
/// Returns `SunNeverRises` during polar night and `SunNeverSets` during midnight sun.
#[cfg(feature = "chrono")]
pub fn sunset(location: Location, date: NaiveDate) -> Result<DateTime<Utc>> {
    sunrise_sunset(location, date).map(|(_, sunset)| sunset)
}

/// Calculates the morning and evening instants at which the sun is at `elevation` degrees.
///
/// # Errors
/// Returns `ElevationUnreachable` if the sun stays above or below `elevation` all day.
///
/// # Example
/// ```
/// use sunrise_equation::{Error, Location, events};
/// use chrono::NaiveDate;
///
/// let toronto = Location::new(43.65, -79.38);
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
///
/// assert!(events::time_of_elevation(toronto, 6.0, date).is_ok());
/// assert_eq!(
///     events::time_of_elevation(toronto, 60.0, date),
///     Err(Error::elevation_unreachable(60.0))
/// );
/// ```
#[cfg(feature = "chrono")]
pub fn time_of_elevation(
    location: Location,
    elevation: f64,
    date: NaiveDate,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let (morning, evening) = crossings_from_julian(location, JulianDay::from_date(date), elevation)
        .into_pair()
        .ok_or(Error::elevation_unreachable(elevation))?;
    Ok((morning.to_datetime()?, evening.to_datetime()?))
}

/// Calculates dawn and dusk for a twilight kind.
///
/// # Errors
/// Returns `ElevationUnreachable` if the twilight elevation is never crossed on this date.
#[cfg(feature = "chrono")]
pub fn dawn_dusk(
    location: Location,
    date: NaiveDate,
    twilight: Twilight,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    time_of_elevation(location, twilight.elevation_angle(), date)
}

/// Calculates dawn (morning twilight start) for a twilight kind.
///
/// # Errors
/// Returns `ElevationUnreachable` if the twilight elevation is never crossed on this date.
#[cfg(feature = "chrono")]
pub fn dawn(location: Location, date: NaiveDate, twilight: Twilight) -> Result<DateTime<Utc>> {
    dawn_dusk(location, date, twilight).map(|(dawn, _)| dawn)
}

/// Calculates dusk (evening twilight end) for a twilight kind.
///
/// # Errors
/// Returns `ElevationUnreachable` if the twilight elevation is never crossed on this date.
#[cfg(feature = "chrono")]
pub fn dusk(location: Location, date: NaiveDate, twilight: Twilight) -> Result<DateTime<Utc>> {
    dawn_dusk(location, date, twilight).map(|(_, dusk)| dusk)
}

/// Calculates the mean solar noon: calendar noon UTC shifted by the longitude.
///
/// This is the estimate before the equation-of-time correction; see [`solar_noon`] for the
/// true transit.
///
/// # Errors
/// Returns `InvalidDateTime` if the instant cannot be represented.
#[cfg(feature = "chrono")]
pub fn mean_solar_noon(location: Location, date: NaiveDate) -> Result<DateTime<Utc>> {
    crate::time::mean_solar_noon(location.longitude(), JulianDay::from_date(date)).to_datetime()
}

/// Calculates the true solar noon (transit), when the sun crosses the local meridian.
///
/// # Errors
/// Returns `InvalidDateTime` if the instant cannot be represented.
#[cfg(feature = "chrono")]
pub fn solar_noon(location: Location, date: NaiveDate) -> Result<DateTime<Utc>> {
    SolarDay::compute(location.longitude(), JulianDay::from_date(date))
        .transit
        .to_datetime()
}
