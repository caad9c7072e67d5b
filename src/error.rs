//! Error types for sunrise equation queries.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar event calculations.
///
/// `SunNeverRises`, `SunNeverSets` and `ElevationUnreachable` are ordinary outcomes for
/// polar locations, not faults. Callers are expected to branch on them.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The sun stays below the sunrise/sunset elevation all day (polar night).
    SunNeverRises,
    /// The sun stays above the sunrise/sunset elevation all day (midnight sun).
    SunNeverSets,
    /// The sun never crosses the requested elevation on the requested date.
    ElevationUnreachable {
        /// The target elevation in degrees.
        elevation: f64,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid or unrepresentable date/time.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Malformed NMEA sentence.
    InvalidNmea {
        /// Description of the structural problem.
        message: &'static str,
    },
    /// NMEA checksum mismatch or unparsable checksum.
    InvalidChecksum {
        /// Checksum computed over the sentence body.
        calculated: u8,
        /// Checksum transmitted after `*`, if it could be parsed.
        expected: Option<u8>,
    },
    /// NMEA sentence type other than GGA or RMC.
    UnsupportedSentence {
        /// Last three bytes of the sentence address field (e.g. `GSV`).
        kind: [u8; 3],
    },
    /// Unparsable latitude/longitude fields in an NMEA sentence.
    InvalidPosition {
        /// Description of the coordinate problem.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SunNeverRises => {
                write!(f, "sun never rises at this location on this date")
            }
            Self::SunNeverSets => {
                write!(f, "sun never sets at this location on this date")
            }
            Self::ElevationUnreachable { elevation } => {
                write!(
                    f,
                    "sun never reaches an elevation of {elevation}° at this location on this date"
                )
            }
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidNmea { message } => {
                write!(f, "invalid NMEA sentence: {message}")
            }
            Self::InvalidChecksum {
                calculated,
                expected: Some(expected),
            } => {
                write!(
                    f,
                    "invalid NMEA checksum: calculated {calculated:02X}, expected {expected:02X}"
                )
            }
            Self::InvalidChecksum {
                expected: None, ..
            } => {
                write!(f, "invalid NMEA checksum: cannot parse checksum")
            }
            Self::UnsupportedSentence { kind } => {
                let kind = core::str::from_utf8(kind).unwrap_or("???");
                write!(
                    f,
                    "unsupported NMEA sentence type: {kind} (supported: GGA, RMC)"
                )
            }
            Self::InvalidPosition { message } => {
                write!(f, "invalid position data: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an unreachable elevation error.
    #[must_use]
    pub const fn elevation_unreachable(elevation: f64) -> Self {
        Self::ElevationUnreachable { elevation }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid NMEA sentence error.
    #[must_use]
    pub const fn invalid_nmea(message: &'static str) -> Self {
        Self::InvalidNmea { message }
    }

    /// Creates an invalid position error.
    #[must_use]
    pub const fn invalid_position(message: &'static str) -> Self {
        Self::InvalidPosition { message }
    }

    /// Checks whether this is one of the polar outcomes (never rises, never sets, unreachable).
    #[must_use]
    pub const fn is_polar(&self) -> bool {
        matches!(
            self,
            Self::SunNeverRises | Self::SunNeverSets | Self::ElevationUnreachable { .. }
        )
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(45.5).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-79.38).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_coordinates_validation() {
        assert!(check_coordinates(43.65, -79.38).is_ok());
        assert_eq!(
            check_coordinates(95.0, 200.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            check_coordinates(45.0, 200.0),
            Err(Error::invalid_longitude(200.0))
        );
    }

    #[test]
    fn test_polar_classification() {
        assert!(Error::SunNeverRises.is_polar());
        assert!(Error::SunNeverSets.is_polar());
        assert!(Error::elevation_unreachable(60.0).is_polar());
        assert!(!Error::invalid_latitude(95.0).is_polar());
        assert!(!Error::invalid_nmea("missing $ prefix").is_polar());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        assert_eq!(
            Error::SunNeverRises.to_string(),
            "sun never rises at this location on this date"
        );
        assert_eq!(
            Error::elevation_unreachable(60.0).to_string(),
            "sun never reaches an elevation of 60° at this location on this date"
        );
        assert_eq!(
            Error::invalid_latitude(95.0).to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );
        assert_eq!(
            Error::InvalidChecksum {
                calculated: 0x6A,
                expected: Some(0x6B)
            }
            .to_string(),
            "invalid NMEA checksum: calculated 6A, expected 6B"
        );
        assert_eq!(
            Error::UnsupportedSentence { kind: *b"GSV" }.to_string(),
            "unsupported NMEA sentence type: GSV (supported: GGA, RMC)"
        );
    }
}
