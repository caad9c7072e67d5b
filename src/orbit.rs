//! The sun's orbital elements for one solar day.
//!
//! Low-order series for the mean anomaly, equation of center and ecliptic longitude, followed
//! by the equation-of-time correction that yields the true solar transit and the solar
//! declination. Angles are exchanged in degrees; each function converts to radians only where
//! it evaluates trigonometry.

#![allow(clippy::unreadable_literal)]

use crate::math::{asin, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees, sin};
use crate::time::{DAYS_PER_CENTURY, JulianDay, mean_solar_noon};

/// Mean anomaly at J2000.0 (degrees)
const MEAN_ANOMALY_AT_EPOCH: f64 = 357.5291;

/// Daily motion of the mean anomaly (degrees per day)
const MEAN_ANOMALY_RATE: f64 = 0.98560028;

/// Equation of center coefficients for sin(M), sin(2M) and sin(3M) (degrees)
const EQUATION_OF_CENTER_COEFFS: [f64; 3] = [1.9148, 0.0200, 0.0003];

/// Argument of perihelion at J2000.0 (degrees)
const PERIHELION_AT_EPOCH: f64 = 102.93005;

/// Precession of the perihelion (degrees per Julian century)
const PERIHELION_RATE: f64 = 0.3179526;

/// Equation of time amplitude of the eccentricity term (days)
const TRANSIT_ECCENTRICITY_TERM: f64 = 0.0053;

/// Equation of time amplitude of the obliquity term (days)
const TRANSIT_OBLIQUITY_TERM: f64 = 0.0069;

/// Sine of the obliquity of the ecliptic (about 23.44°)
const SIN_OBLIQUITY: f64 = 0.39779;

/// Calculates the mean anomaly in degrees, normalized to [0, 360).
#[must_use]
pub fn mean_anomaly(jd: JulianDay) -> f64 {
    normalize_degrees_0_to_360(
        MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * jd.days_since_j2000(),
    )
}

/// Calculates the equation of center in degrees from the mean anomaly in degrees.
#[must_use]
pub fn equation_of_center(mean_anomaly: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly);
    let [c1, c2, c3] = EQUATION_OF_CENTER_COEFFS;
    c1 * sin(m) + c2 * sin(2.0 * m) + c3 * sin(3.0 * m)
}

/// Calculates the argument of perihelion in degrees (linear precession from J2000.0).
#[must_use]
pub fn argument_of_perihelion(jd: JulianDay) -> f64 {
    PERIHELION_AT_EPOCH + PERIHELION_RATE * jd.days_since_j2000() / DAYS_PER_CENTURY
}

/// Calculates the sun's ecliptic longitude in degrees, normalized to [0, 360).
#[must_use]
pub fn ecliptic_longitude(mean_anomaly: f64, equation_of_center: f64, jd: JulianDay) -> f64 {
    normalize_degrees_0_to_360(
        mean_anomaly + equation_of_center + 180.0 + argument_of_perihelion(jd),
    )
}

/// Applies the equation of time to a mean solar noon, giving the true solar transit.
#[must_use]
pub fn transit(mean_solar_noon: JulianDay, mean_anomaly: f64, ecliptic_longitude: f64) -> JulianDay {
    let m = degrees_to_radians(mean_anomaly);
    let lambda = degrees_to_radians(ecliptic_longitude);
    mean_solar_noon.add_days(
        TRANSIT_ECCENTRICITY_TERM * sin(m) - TRANSIT_OBLIQUITY_TERM * sin(2.0 * lambda),
    )
}

/// Calculates the solar declination in degrees from the ecliptic longitude in degrees.
#[must_use]
pub fn declination(ecliptic_longitude: f64) -> f64 {
    radians_to_degrees(asin(sin(degrees_to_radians(ecliptic_longitude)) * SIN_OBLIQUITY))
}

/// Orbital state of the sun for one UTC calendar date at one longitude.
///
/// Pure function of `(longitude, date)`: nothing is cached, and computing the same pair twice
/// yields bit-identical values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    /// Mean solar noon (calendar noon UTC shifted by longitude)
    pub mean_solar_noon: JulianDay,
    /// Mean anomaly (degrees)
    pub mean_anomaly: f64,
    /// Equation of center (degrees)
    pub equation_of_center: f64,
    /// Argument of perihelion (degrees)
    pub argument_of_perihelion: f64,
    /// Ecliptic longitude (degrees)
    pub ecliptic_longitude: f64,
    /// True solar transit
    pub transit: JulianDay,
    /// Solar declination (degrees)
    pub declination: f64,
}

impl SolarDay {
    /// Computes the orbital chain for the UTC date containing `date` at `longitude`.
    ///
    /// `date` may be any instant of the day; it is reduced to the date's noon first.
    #[must_use]
    pub fn compute(longitude: f64, date: JulianDay) -> Self {
        let mean_solar_noon = mean_solar_noon(longitude, date);
        let mean_anomaly = mean_anomaly(mean_solar_noon);
        let equation_of_center = equation_of_center(mean_anomaly);
        let argument_of_perihelion = argument_of_perihelion(mean_solar_noon);
        let ecliptic_longitude = ecliptic_longitude(mean_anomaly, equation_of_center, mean_solar_noon);
        let transit = transit(mean_solar_noon, mean_anomaly, ecliptic_longitude);
        let declination = declination(ecliptic_longitude);

        log::trace!(
            "solar day at JD {:.5}: M={mean_anomaly:.6}° C={equation_of_center:.6}° \
             λ={ecliptic_longitude:.6}° δ={declination:.6}° transit JD {:.6}",
            mean_solar_noon.value(),
            transit.value()
        );

        Self {
            mean_solar_noon,
            mean_anomaly,
            equation_of_center,
            argument_of_perihelion,
            ecliptic_longitude,
            transit,
            declination,
        }
    }
}
