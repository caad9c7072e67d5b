//! NMEA 0183 position/time decoding.
//!
//! Turns a `$..GGA` or `$..RMC` sentence into a [`Fix`]: a [`Location`] plus a UTC timestamp.
//! The sunrise equation itself never sees sentence text; it consumes the decoded values.
//!
//! ```
//! use sunrise_equation::{events, nmea};
//!
//! let fix = nmea::parse(
//!     "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
//!     None,
//! )
//! .unwrap();
//! assert!((fix.location().latitude() - 48.1173).abs() < 1e-9);
//!
//! let (sunrise, sunset) = events::sunrise_sunset(fix.location(), fix.date()).unwrap();
//! assert!(sunrise < sunset);
//! ```

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::{Error, Location, Result, events};

/// Upper bound on the number of comma-separated fields kept from a sentence.
const MAX_FIELDS: usize = 24;

/// Position and UTC time decoded from a GPS sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    location: Location,
    time: DateTime<Utc>,
}

impl Fix {
    /// Gets the decoded position.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Gets the decoded UTC timestamp.
    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Gets the UTC calendar date of the fix.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.time.date_naive()
    }
}

/// Parses a GGA or RMC sentence.
///
/// GGA sentences carry only a time of day, so `date` must be supplied for them. RMC sentences
/// carry their own date and ignore `date`.
///
/// # Errors
/// - `InvalidNmea` for structural problems (missing `$`, missing checksum, too few fields,
///   RMC status other than `A`)
/// - `InvalidChecksum` when the XOR checksum does not match or cannot be parsed
/// - `UnsupportedSentence` for sentence types other than GGA and RMC
/// - `InvalidPosition` for malformed coordinates or hemisphere letters
/// - `InvalidDateTime` for malformed or impossible dates and times, or a GGA without `date`
pub fn parse(sentence: &str, date: Option<NaiveDate>) -> Result<Fix> {
    parse_sentence(sentence, date)
        .inspect_err(|err| log::debug!("rejected NMEA sentence {sentence:?}: {err}"))
}

/// Calculates sunrise and sunset at the position and date of a sentence.
///
/// # Errors
/// Returns any [`parse`] error, or `SunNeverRises`/`SunNeverSets` for polar dates.
pub fn sunrise_sunset(
    sentence: &str,
    date: Option<NaiveDate>,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let fix = parse(sentence, date)?;
    events::sunrise_sunset(fix.location, fix.date())
}

/// Calculates sunrise at the position and date of a sentence.
///
/// # Errors
/// Returns any [`parse`] error, or `SunNeverRises`/`SunNeverSets` for polar dates.
pub fn sunrise(sentence: &str, date: Option<NaiveDate>) -> Result<DateTime<Utc>> {
    sunrise_sunset(sentence, date).map(|(sunrise, _)| sunrise)
}

/// Calculates sunset at the position and date of a sentence.
///
/// # Errors
/// Returns any [`parse`] error, or `SunNeverRises`/`SunNeverSets` for polar dates.
pub fn sunset(sentence: &str, date: Option<NaiveDate>) -> Result<DateTime<Utc>> {
    sunrise_sunset(sentence, date).map(|(_, sunset)| sunset)
}

fn parse_sentence(sentence: &str, date: Option<NaiveDate>) -> Result<Fix> {
    let sentence = sentence.trim();
    let body = sentence
        .strip_prefix('$')
        .ok_or(Error::invalid_nmea("missing $ prefix"))?;

    let (data, checksum) = body
        .split_once('*')
        .filter(|(_, checksum)| !checksum.contains('*'))
        .ok_or(Error::invalid_nmea("missing or invalid checksum"))?;
    validate_checksum(data, checksum)?;

    let fields = Fields::split(data);
    if fields.len() < 2 {
        return Err(Error::invalid_nmea("insufficient fields"));
    }

    let address = fields.get(0).as_bytes();
    // Talker prefix varies (GP, GN, GL, ...); the last three letters name the sentence
    let Some(&[a, b, c]) = address.get(address.len().saturating_sub(3)..) else {
        return Err(Error::invalid_nmea("invalid sentence type"));
    };

    match &[a, b, c] {
        b"GGA" => parse_gga(&fields, date),
        b"RMC" => parse_rmc(&fields),
        kind => Err(Error::UnsupportedSentence { kind: *kind }),
    }
}

fn validate_checksum(data: &str, checksum: &str) -> Result<()> {
    let calculated = data.bytes().fold(0_u8, |acc, byte| acc ^ byte);
    let expected = u8::from_str_radix(checksum, 16).ok();
    if expected == Some(calculated) {
        Ok(())
    } else {
        Err(Error::InvalidChecksum {
            calculated,
            expected,
        })
    }
}

/// Comma-separated sentence fields, stored without allocation.
struct Fields<'a> {
    items: [&'a str; MAX_FIELDS],
    len: usize,
}

impl<'a> Fields<'a> {
    fn split(data: &'a str) -> Self {
        let mut items = [""; MAX_FIELDS];
        let mut len = 0;
        for (slot, field) in items.iter_mut().zip(data.split(',')) {
            *slot = field;
            len += 1;
        }
        Self { items, len }
    }

    const fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> &'a str {
        self.items[..self.len].get(index).copied().unwrap_or("")
    }
}

// $--GGA,hhmmss.ss,llll.ll,a,yyyyy.yy,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx
fn parse_gga(fields: &Fields<'_>, date: Option<NaiveDate>) -> Result<Fix> {
    if fields.len() < 7 {
        return Err(Error::invalid_nmea("GGA sentence too short"));
    }
    let date = date.ok_or(Error::invalid_datetime(
        "GGA sentence requires a date parameter",
    ))?;

    let time = parse_time(fields.get(1), date)?;
    let latitude = parse_latitude(fields.get(2), fields.get(3))?;
    let longitude = parse_longitude(fields.get(4), fields.get(5))?;

    Ok(Fix {
        location: Location::new(latitude, longitude),
        time,
    })
}

// $--RMC,hhmmss.ss,A,llll.ll,a,yyyyy.yy,a,x.x,x.x,ddmmyy,x.x,a
fn parse_rmc(fields: &Fields<'_>) -> Result<Fix> {
    if fields.len() < 10 {
        return Err(Error::invalid_nmea("RMC sentence too short"));
    }
    if fields.get(2) != "A" {
        return Err(Error::invalid_nmea("GPS fix status is not valid (A)"));
    }

    let date = parse_date(fields.get(9))?;
    let time = parse_time(fields.get(1), date)?;
    let latitude = parse_latitude(fields.get(3), fields.get(4))?;
    let longitude = parse_longitude(fields.get(5), fields.get(6))?;

    Ok(Fix {
        location: Location::new(latitude, longitude),
        time,
    })
}

/// Parses `ddmmyy`; two-digit years below 50 are 20xx, the rest 19xx.
#[allow(clippy::cast_possible_wrap)]
fn parse_date(field: &str) -> Result<NaiveDate> {
    if field.len() != 6 {
        return Err(Error::invalid_datetime("RMC date must be ddmmyy"));
    }
    let day = two_digits(field, 0).ok_or(Error::invalid_datetime("invalid day"))?;
    let month = two_digits(field, 2).ok_or(Error::invalid_datetime("invalid month"))?;
    let year = two_digits(field, 4).ok_or(Error::invalid_datetime("invalid year"))?;
    let year = if year < 50 { 2000 + year } else { 1900 + year };

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or(Error::invalid_datetime("date does not exist"))
}

/// Parses `hhmmss[.sss...]`, keeping fractional seconds to nanosecond precision.
fn parse_time(field: &str, date: NaiveDate) -> Result<DateTime<Utc>> {
    if field.len() < 6 {
        return Err(Error::invalid_datetime("time string too short"));
    }
    let hour = two_digits(field, 0).ok_or(Error::invalid_datetime("invalid hour"))?;
    let minute = two_digits(field, 2).ok_or(Error::invalid_datetime("invalid minute"))?;
    let second = two_digits(field, 4).ok_or(Error::invalid_datetime("invalid second"))?;

    let nanosecond = match field.as_bytes() {
        [_, _, _, _, _, _, b'.', fraction @ ..] if !fraction.is_empty() => parse_nanos(fraction)
            .ok_or(Error::invalid_datetime("invalid fractional seconds"))?,
        _ => 0,
    };

    let datetime = date
        .and_hms_nano_opt(hour, minute, second, nanosecond)
        .ok_or(Error::invalid_datetime("time of day out of range"))?;
    Ok(Utc.from_utc_datetime(&datetime))
}

/// Reads up to nine fractional digits as nanoseconds; extra digits are ignored.
fn parse_nanos(fraction: &[u8]) -> Option<u32> {
    let mut nanos = 0_u32;
    let mut scale = 1_000_000_000_u32;
    for &byte in fraction.iter().take(9) {
        if !byte.is_ascii_digit() {
            return None;
        }
        scale /= 10;
        nanos += u32::from(byte - b'0') * scale;
    }
    Some(nanos)
}

fn two_digits(field: &str, start: usize) -> Option<u32> {
    match field.as_bytes().get(start..start + 2)? {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}

/// Parses `ddmm.mmmm` with `N`/`S`.
fn parse_latitude(value: &str, hemisphere: &str) -> Result<f64> {
    if value.is_empty() || hemisphere.is_empty() {
        return Err(Error::invalid_position("empty latitude fields"));
    }
    let degrees = parse_degrees_minutes(value)
        .ok_or(Error::invalid_position("invalid latitude format"))?;
    match hemisphere {
        "N" => Ok(degrees),
        "S" => Ok(-degrees),
        _ => Err(Error::invalid_position("invalid N/S indicator")),
    }
}

/// Parses `dddmm.mmmm` with `E`/`W`.
fn parse_longitude(value: &str, hemisphere: &str) -> Result<f64> {
    if value.is_empty() || hemisphere.is_empty() {
        return Err(Error::invalid_position("empty longitude fields"));
    }
    let degrees = parse_degrees_minutes(value)
        .ok_or(Error::invalid_position("invalid longitude format"))?;
    match hemisphere {
        "E" => Ok(degrees),
        "W" => Ok(-degrees),
        _ => Err(Error::invalid_position("invalid E/W indicator")),
    }
}

/// Splits at two digits before the decimal point: whole degrees, then decimal minutes.
fn parse_degrees_minutes(value: &str) -> Option<f64> {
    let dot = value.find('.')?;
    let split = dot.checked_sub(2).filter(|&split| split > 0)?;
    let (degrees, minutes) = value.split_at_checked(split)?;
    let degrees: f64 = degrees.parse().ok()?;
    let minutes: f64 = minutes.parse().ok()?;
    Some(degrees + minutes / 60.0)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const RMC_MUNICH: &str =
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
    const GGA_MUNICH: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_rmc() {
        let fix = parse(RMC_MUNICH, None).unwrap();
        assert!((fix.location().latitude() - 48.1173).abs() < 1e-9);
        assert!((fix.location().longitude() - 11.516_666_666_666_667).abs() < 1e-9);
        assert_eq!(
            fix.time(),
            Utc.with_ymd_and_hms(1994, 3, 23, 12, 35, 19).unwrap()
        );
        assert_eq!(fix.date(), date(1994, 3, 23));
    }

    #[test]
    fn test_rmc_ignores_supplied_date() {
        let fix = parse(RMC_MUNICH, Some(date(2024, 6, 21))).unwrap();
        assert_eq!(fix.date(), date(1994, 3, 23));
    }

    #[test]
    fn test_parse_gga_with_date() {
        let fix = parse(GGA_MUNICH, Some(date(2024, 6, 21))).unwrap();
        assert!((fix.location().latitude() - 48.1173).abs() < 1e-9);
        assert_eq!(
            fix.time(),
            Utc.with_ymd_and_hms(2024, 6, 21, 12, 35, 19).unwrap()
        );
    }

    #[test]
    fn test_gga_requires_date() {
        assert_eq!(
            parse(GGA_MUNICH, None),
            Err(Error::invalid_datetime(
                "GGA sentence requires a date parameter"
            ))
        );
    }

    #[test]
    fn test_southern_eastern_hemisphere_and_fraction() {
        let fix = parse(
            "$GNRMC,120000.50,A,3352.128,S,15112.558,E,0.0,0.0,211224,,,A*5F",
            None,
        )
        .unwrap();
        assert!((fix.location().latitude() + 33.8688).abs() < 1e-9);
        assert!((fix.location().longitude() - 151.2093).abs() < 1e-9);
        assert_eq!(fix.date(), date(2024, 12, 21));
        assert_eq!(fix.time().nanosecond(), 500_000_000);
    }

    #[test]
    fn test_fraction_truncated_to_nanoseconds() {
        let fix = parse(
            "$GPGGA,235959.123456789123,6919.929,N,08140.687,W,1,08,0.9,545.4,M,46.9,M,,*75",
            Some(date(2020, 6, 25)),
        )
        .unwrap();
        assert_eq!(fix.time().nanosecond(), 123_456_789);
        assert_eq!(fix.time().second(), 59);
        assert!((fix.location().longitude() + 81.678_116_666_666_67).abs() < 1e-9);
    }

    #[test]
    fn test_zero_coordinates() {
        let fix = parse(
            "$GPGGA,055900,0000.000,N,00000.000,E,1,08,0.9,545.4,M,46.9,M,,*41",
            Some(date(1970, 1, 1)),
        )
        .unwrap();
        assert_eq!(fix.location(), Location::new(0.0, 0.0));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        let fix = parse(
            "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230399,003.1,W*67",
            None,
        )
        .unwrap();
        assert_eq!(fix.date().year(), 1999);

        let fix = parse(
            "$GPRMC,154200,A,4339.00,N,07922.80,W,000.0,000.0,140100,000.0,W*7B",
            None,
        )
        .unwrap();
        assert_eq!(fix.date(), date(2000, 1, 14));
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(
            parse("GPRMC,123519*6A", None),
            Err(Error::invalid_nmea("missing $ prefix"))
        );
        assert_eq!(
            parse("$GPRMC,123519,A", None),
            Err(Error::invalid_nmea("missing or invalid checksum"))
        );
        assert_eq!(
            parse("$GPRMC,123519*6A", None),
            Err(Error::invalid_nmea("RMC sentence too short"))
        );
        assert_eq!(
            parse(
                "$GPRMC,123519,V,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*7D",
                None
            ),
            Err(Error::invalid_nmea("GPS fix status is not valid (A)"))
        );
    }

    #[test]
    fn test_checksum_errors() {
        let wrong = RMC_MUNICH.replace("*6A", "*6B");
        assert_eq!(
            parse(&wrong, None),
            Err(Error::InvalidChecksum {
                calculated: 0x6A,
                expected: Some(0x6B)
            })
        );

        let garbage = RMC_MUNICH.replace("*6A", "*ZZ");
        assert_eq!(
            parse(&garbage, None),
            Err(Error::InvalidChecksum {
                calculated: 0x6A,
                expected: None
            })
        );

        // Lowercase hex is accepted
        assert!(parse(&RMC_MUNICH.replace("*6A", "*6a"), None).is_ok());
    }

    #[test]
    fn test_unsupported_sentence() {
        assert_eq!(
            parse("$GPGSV,3,1,11,03,03,111,00*4A", None),
            Err(Error::UnsupportedSentence { kind: *b"GSV" })
        );
    }

    #[test]
    fn test_position_errors() {
        assert_eq!(
            parse(
                "$GPGGA,123519,4807.038,X,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*51",
                Some(date(2024, 6, 21))
            ),
            Err(Error::invalid_position("invalid N/S indicator"))
        );
        assert_eq!(
            parse(
                "$GPGGA,123519,,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*59",
                Some(date(2024, 6, 21))
            ),
            Err(Error::invalid_position("empty latitude fields"))
        );
        assert_eq!(parse_degrees_minutes("07.5"), None);
        assert_eq!(parse_degrees_minutes("4807"), None);
    }

    #[test]
    fn test_impossible_date() {
        assert_eq!(
            parse(
                "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,300294,003.1,W*69",
                None
            ),
            Err(Error::invalid_datetime("date does not exist"))
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let padded = format!("  {RMC_MUNICH}\r\n");
        assert_eq!(parse(&padded, None), parse(RMC_MUNICH, None));
    }

    #[test]
    fn test_sunrise_sunset_from_sentence() {
        // Toronto, 2000-01-14
        let sentence = "$GPRMC,154200,A,4339.00,N,07922.80,W,000.0,000.0,140100,000.0,W*7B";
        let (rise, set) = sunrise_sunset(sentence, None).unwrap();
        let expected = events::sunrise_sunset(Location::new(43.65, -79.38), date(2000, 1, 14))
            .unwrap();
        assert_eq!((rise, set), expected);
        assert_eq!(sunrise(sentence, None).unwrap(), rise);
        assert_eq!(sunset(sentence, None).unwrap(), set);
    }

    #[test]
    fn test_midnight_sun_from_sentence() {
        let sentence =
            "$GPGGA,235959.123456789123,6919.929,N,08140.687,W,1,08,0.9,545.4,M,46.9,M,,*75";
        assert_eq!(
            sunrise_sunset(sentence, Some(date(2020, 6, 25))),
            Err(Error::SunNeverSets)
        );
    }
}
