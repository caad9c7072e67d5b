//! Core data types for sunrise equation queries.

use core::fmt;

use crate::error::check_coordinates;
use crate::time::JulianDay;
use crate::{Error, Result};

/// Observer position on the Earth's surface.
///
/// Latitude is positive north, longitude positive east, both in degrees. [`Location::new`]
/// does not validate: out-of-range values flow through the trigonometry unchanged and may
/// produce `NaN`. Use [`Location::try_new`] to reject them up front.
///
/// # Example
/// ```
/// # use sunrise_equation::Location;
/// let toronto = Location::new(43.65, -79.38);
/// assert_eq!(toronto.to_string(), "43.6500°N, 79.3800°W");
/// assert!(Location::try_new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location without range checks.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a location, rejecting coordinates outside ±90° latitude or ±180° longitude.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Gets the latitude in degrees (positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding 0.0 turns -0.0 into 0.0
        let (lat, lat_dir) = if self.latitude < 0.0 {
            (-self.latitude, 'S')
        } else {
            (self.latitude + 0.0, 'N')
        };
        let (lon, lon_dir) = if self.longitude < 0.0 {
            (-self.longitude, 'W')
        } else {
            (self.longitude + 0.0, 'E')
        };
        write!(f, "{lat:.4}°{lat_dir}, {lon:.4}°{lon_dir}")
    }
}

/// Twilight definitions by depth of the sun below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Twilight {
    /// Civil twilight (sun is 6° below horizon)
    #[default]
    Civil,
    /// Nautical twilight (sun is 12° below horizon)
    Nautical,
    /// Astronomical twilight (sun is 18° below horizon)
    Astronomical,
}

impl Twilight {
    /// Every twilight kind, from the shallowest to the deepest.
    pub const ALL: [Self; 3] = [Self::Civil, Self::Nautical, Self::Astronomical];

    /// Gets the elevation angle in degrees that bounds this twilight.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::Civil => -6.0,
            Self::Nautical => -12.0,
            Self::Astronomical => -18.0,
        }
    }
}

/// Outcome of the sunrise hour-angle equation.
///
/// A regular day yields the half-day arc in degrees: sunrise is `transit - angle / 360` days
/// and sunset is `transit + angle / 360` days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourAngle {
    /// Half-day arc in degrees, within [0, 180].
    Degrees(f64),
    /// The sun stays below the sunrise/sunset elevation all day (polar night).
    NeverRises,
    /// The sun stays above the sunrise/sunset elevation all day (midnight sun).
    NeverSets,
}

impl HourAngle {
    /// Gets the angle in degrees for a regular day.
    #[must_use]
    pub const fn degrees(&self) -> Option<f64> {
        match self {
            Self::Degrees(angle) => Some(*angle),
            Self::NeverRises | Self::NeverSets => None,
        }
    }

    /// Converts the polar outcomes into their errors.
    ///
    /// # Errors
    /// Returns `SunNeverRises` or `SunNeverSets` for the polar outcomes.
    pub const fn into_result(self) -> Result<f64> {
        match self {
            Self::Degrees(angle) => Ok(angle),
            Self::NeverRises => Err(Error::SunNeverRises),
            Self::NeverSets => Err(Error::SunNeverSets),
        }
    }
}

/// Times at which the sun crosses a given elevation on one day.
///
/// Polar days and nights are explicit variants rather than sentinel values. The transit
/// (true solar noon) is always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossings<T = JulianDay> {
    /// The sun rises through the elevation in the morning and sinks through it in the evening.
    Regular {
        /// Morning crossing (sunrise, dawn)
        morning: T,
        /// True solar transit
        transit: T,
        /// Evening crossing (sunset, dusk)
        evening: T,
    },
    /// The sun stays above the elevation all day.
    AlwaysAbove {
        /// True solar transit
        transit: T,
    },
    /// The sun stays below the elevation all day.
    AlwaysBelow {
        /// True solar transit
        transit: T,
    },
}

impl<T> Crossings<T> {
    /// Gets the transit time (true solar noon) for any outcome.
    pub const fn transit(&self) -> &T {
        match self {
            Self::Regular { transit, .. }
            | Self::AlwaysAbove { transit }
            | Self::AlwaysBelow { transit } => transit,
        }
    }

    /// Gets the morning crossing if there is one.
    pub const fn morning(&self) -> Option<&T> {
        if let Self::Regular { morning, .. } = self {
            Some(morning)
        } else {
            None
        }
    }

    /// Gets the evening crossing if there is one.
    pub const fn evening(&self) -> Option<&T> {
        if let Self::Regular { evening, .. } = self {
            Some(evening)
        } else {
            None
        }
    }

    /// Checks if the elevation is crossed twice this day.
    pub const fn is_regular(&self) -> bool {
        matches!(self, Self::Regular { .. })
    }

    /// Checks if the sun stays above the elevation all day.
    pub const fn is_always_above(&self) -> bool {
        matches!(self, Self::AlwaysAbove { .. })
    }

    /// Checks if the sun stays below the elevation all day.
    pub const fn is_always_below(&self) -> bool {
        matches!(self, Self::AlwaysBelow { .. })
    }

    /// Returns the morning and evening crossings of a regular day.
    pub fn into_pair(self) -> Option<(T, T)> {
        match self {
            Self::Regular {
                morning, evening, ..
            } => Some((morning, evening)),
            Self::AlwaysAbove { .. } | Self::AlwaysBelow { .. } => None,
        }
    }

    /// Converts every contained time with `f`.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Crossings<U> {
        match self {
            Self::Regular {
                morning,
                transit,
                evening,
            } => Crossings::Regular {
                morning: f(morning),
                transit: f(transit),
                evening: f(evening),
            },
            Self::AlwaysAbove { transit } => Crossings::AlwaysAbove {
                transit: f(transit),
            },
            Self::AlwaysBelow { transit } => Crossings::AlwaysBelow {
                transit: f(transit),
            },
        }
    }

    /// Converts every contained time with the fallible `f`.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, F: FnMut(T) -> Result<U>>(self, mut f: F) -> Result<Crossings<U>> {
        Ok(match self {
            Self::Regular {
                morning,
                transit,
                evening,
            } => Crossings::Regular {
                morning: f(morning)?,
                transit: f(transit)?,
                evening: f(evening)?,
            },
            Self::AlwaysAbove { transit } => Crossings::AlwaysAbove {
                transit: f(transit)?,
            },
            Self::AlwaysBelow { transit } => Crossings::AlwaysBelow {
                transit: f(transit)?,
            },
        })
    }
}

/// Apparent solar position seen from a location.
///
/// - Elevation: 0° = horizon, 90° = directly overhead, negative below the horizon
/// - Azimuth: 0° = North, measured clockwise to 360°
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    elevation: f64,
    azimuth: f64,
}

impl SolarPosition {
    /// Creates a solar position from elevation and azimuth in degrees.
    #[must_use]
    pub const fn new(elevation: f64, azimuth: f64) -> Self {
        Self {
            elevation,
            azimuth,
        }
    }

    /// Gets the elevation angle in degrees.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Gets the azimuth in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the zenith angle in degrees (90° - elevation).
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_accessors() {
        let loc = Location::new(43.65, -79.38);
        assert_eq!(loc.latitude(), 43.65);
        assert_eq!(loc.longitude(), -79.38);

        // Unchecked constructor keeps whatever it is given
        let odd = Location::new(120.0, 400.0);
        assert_eq!(odd.latitude(), 120.0);
    }

    #[test]
    fn test_location_try_new() {
        assert!(Location::try_new(-90.0, 180.0).is_ok());
        assert_eq!(
            Location::try_new(-91.0, 0.0),
            Err(Error::invalid_latitude(-91.0))
        );
        assert_eq!(
            Location::try_new(0.0, -180.5),
            Err(Error::invalid_longitude(-180.5))
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_location_display() {
        assert_eq!(
            Location::new(43.65, -79.38).to_string(),
            "43.6500°N, 79.3800°W"
        );
        assert_eq!(
            Location::new(-33.8688, 151.2093).to_string(),
            "33.8688°S, 151.2093°E"
        );
        assert_eq!(Location::new(0.0, 0.0).to_string(), "0.0000°N, 0.0000°E");
        assert_eq!(Location::new(-0.0, -0.0).to_string(), "0.0000°N, 0.0000°E");
    }

    #[test]
    fn test_twilight_angles() {
        assert_eq!(Twilight::Civil.elevation_angle(), -6.0);
        assert_eq!(Twilight::Nautical.elevation_angle(), -12.0);
        assert_eq!(Twilight::Astronomical.elevation_angle(), -18.0);
        assert_eq!(Twilight::default(), Twilight::Civil);
    }

    #[test]
    fn test_hour_angle_outcomes() {
        assert_eq!(HourAngle::Degrees(92.5).degrees(), Some(92.5));
        assert_eq!(HourAngle::NeverRises.degrees(), None);
        assert_eq!(HourAngle::Degrees(92.5).into_result(), Ok(92.5));
        assert_eq!(
            HourAngle::NeverRises.into_result(),
            Err(Error::SunNeverRises)
        );
        assert_eq!(HourAngle::NeverSets.into_result(), Err(Error::SunNeverSets));
    }

    #[test]
    fn test_crossings_regular() {
        let result = Crossings::Regular {
            morning: 1.0,
            transit: 2.0,
            evening: 3.0,
        };

        assert!(result.is_regular());
        assert!(!result.is_always_above());
        assert!(!result.is_always_below());
        assert_eq!(result.transit(), &2.0);
        assert_eq!(result.morning(), Some(&1.0));
        assert_eq!(result.evening(), Some(&3.0));
        assert_eq!(result.into_pair(), Some((1.0, 3.0)));

        let doubled = result.map(|t| t * 2.0);
        assert_eq!(doubled.morning(), Some(&2.0));
        assert_eq!(doubled.transit(), &4.0);
    }

    #[test]
    fn test_crossings_polar() {
        let above = Crossings::AlwaysAbove { transit: 5.0 };
        assert!(above.is_always_above());
        assert_eq!(above.transit(), &5.0);
        assert_eq!(above.morning(), None);
        assert_eq!(above.evening(), None);
        assert_eq!(above.into_pair(), None);

        let below = Crossings::AlwaysBelow { transit: 5.0 };
        assert!(below.is_always_below());
        assert!(below.map(|t| t + 1.0).is_always_below());
    }

    #[test]
    fn test_crossings_try_map() {
        let result = Crossings::Regular {
            morning: 1.0,
            transit: 2.0,
            evening: 3.0,
        };
        let failed: Result<Crossings<f64>> = result.try_map(|t| {
            if t > 2.5 {
                Err(Error::invalid_datetime("too late"))
            } else {
                Ok(t)
            }
        });
        assert_eq!(failed, Err(Error::invalid_datetime("too late")));

        let ok = Crossings::AlwaysBelow { transit: 1.0 }.try_map(|t| Ok(t * 10.0));
        assert_eq!(ok, Ok(Crossings::AlwaysBelow { transit: 10.0 }));
    }

    #[test]
    fn test_solar_position() {
        let pos = SolarPosition::new(30.0, 180.0);
        assert_eq!(pos.elevation(), 30.0);
        assert_eq!(pos.azimuth(), 180.0);
        assert_eq!(pos.zenith_angle(), 60.0);
        assert!(pos.is_sun_up());
        assert!(!SolarPosition::new(-0.5, 270.0).is_sun_up());
    }
}
