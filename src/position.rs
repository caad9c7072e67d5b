//! Solar elevation and azimuth at an arbitrary instant.
//!
//! Both are evaluated from the orbital state of the instant's UTC calendar date, with the hour
//! angle of the instant itself measured from that date's true solar transit.

use crate::math::{
    TAU, acos, asin, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees,
    sin, wrap_radians_signed,
};
use crate::orbit::SolarDay;
use crate::time::JulianDay;
use crate::{Location, SolarPosition};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Calculates the solar elevation in degrees at a Julian Day.
///
/// # Example
/// ```
/// use sunrise_equation::{Location, position, time::JulianDay};
///
/// let nyc = Location::new(40.7128, -74.0060);
/// let jd = JulianDay::from_utc(2022, 6, 21, 12, 0, 0.0).unwrap();
/// let elevation = position::elevation_from_julian(nyc, jd);
/// assert!((elevation - 26.5).abs() < 0.1);
/// ```
#[must_use]
pub fn elevation_from_julian(location: Location, jd: JulianDay) -> f64 {
    let solar = SolarDay::compute(location.longitude(), jd);
    elevation_for_day(location, jd, &solar)
}

/// Calculates the solar azimuth in degrees at a Julian Day, in [0, 360).
///
/// 0° is north, increasing clockwise. Instants before the true transit lie in the eastern
/// half of the sky, instants after it in the western half.
#[must_use]
pub fn azimuth_from_julian(location: Location, jd: JulianDay) -> f64 {
    let solar = SolarDay::compute(location.longitude(), jd);
    let elevation = elevation_for_day(location, jd, &solar);
    azimuth_for_day(location, jd, &solar, elevation)
}

/// Calculates elevation and azimuth at a Julian Day from a single orbital evaluation.
#[must_use]
pub fn solar_position_from_julian(location: Location, jd: JulianDay) -> SolarPosition {
    let solar = SolarDay::compute(location.longitude(), jd);
    let elevation = elevation_for_day(location, jd, &solar);
    let azimuth = azimuth_for_day(location, jd, &solar, elevation);
    SolarPosition::new(elevation, azimuth)
}

/// Calculates the solar elevation in degrees at a date and time.
///
/// Sub-second precision is dropped; the time zone only affects how the instant is expressed.
///
/// # Example
/// ```
/// use sunrise_equation::{Location, position};
/// use chrono::{TimeZone, Utc};
///
/// let toronto = Location::new(43.65, -79.38);
/// let noonish = Utc.with_ymd_and_hms(2000, 1, 1, 17, 0, 0).unwrap();
/// assert!(position::elevation(toronto, noonish) > 20.0);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn elevation<Tz: TimeZone>(location: Location, datetime: DateTime<Tz>) -> f64 {
    elevation_from_julian(location, JulianDay::from_datetime(&datetime))
}

/// Calculates the solar azimuth in degrees at a date and time, in [0, 360).
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn azimuth<Tz: TimeZone>(location: Location, datetime: DateTime<Tz>) -> f64 {
    azimuth_from_julian(location, JulianDay::from_datetime(&datetime))
}

/// Calculates elevation and azimuth at a date and time.
///
/// # Example
/// ```
/// use sunrise_equation::{Location, position};
/// use chrono::{TimeZone, Utc};
///
/// let toronto = Location::new(43.65, -79.38);
/// let datetime = Utc.with_ymd_and_hms(2000, 1, 1, 17, 0, 0).unwrap();
/// let pos = position::solar_position(toronto, datetime);
/// println!("Elevation: {:.2}°, azimuth: {:.2}°", pos.elevation(), pos.azimuth());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position<Tz: TimeZone>(location: Location, datetime: DateTime<Tz>) -> SolarPosition {
    solar_position_from_julian(location, JulianDay::from_datetime(&datetime))
}

fn elevation_for_day(location: Location, jd: JulianDay, solar: &SolarDay) -> f64 {
    let lat = degrees_to_radians(location.latitude());
    let decl = degrees_to_radians(solar.declination);
    let hour_angle = TAU * (solar.transit.value() - jd.value());

    // Rounding can push the sine just past 1 when the sun is overhead
    let sin_elevation =
        (sin(lat) * sin(decl) + cos(lat) * cos(decl) * cos(hour_angle)).clamp(-1.0, 1.0);
    radians_to_degrees(asin(sin_elevation))
}

fn azimuth_for_day(location: Location, jd: JulianDay, solar: &SolarDay, elevation: f64) -> f64 {
    let lat = degrees_to_radians(location.latitude());
    let decl = degrees_to_radians(solar.declination);
    // Measured from the date's transit, this can exceed half a turn near the antimeridian
    let hour_angle = wrap_radians_signed(TAU * (jd.value() - solar.transit.value()));

    let cos_elevation = cos(degrees_to_radians(elevation));
    if cos_elevation <= f64::EPSILON {
        // Sun at the zenith or nadir, azimuth is undefined
        return 0.0;
    }

    let cos_azimuth = ((sin(decl) * cos(lat) - cos(decl) * sin(lat) * cos(hour_angle))
        / cos_elevation)
        .clamp(-1.0, 1.0);
    let azimuth = radians_to_degrees(acos(cos_azimuth));

    // acos only covers [0°, 180°]; afternoon positions are in the western half
    let azimuth = if hour_angle >= 0.0 {
        360.0 - azimuth
    } else {
        azimuth
    };
    normalize_degrees_0_to_360(azimuth)
}
