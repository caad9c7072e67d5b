#![cfg(feature = "chrono")]
//! Validate crossing times and solar positions against reference data.
//!
//! The reference files were produced by an independent implementation of the same model,
//! so agreement is expected to within floating-point and whole-second rounding.

use chrono::{DateTime, NaiveDate, Utc};
use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use sunrise_equation::{Crossings, Location, SUNRISE_SUNSET_ANGLE, events, position};

const MAX_TIME_DIFFERENCE_SECONDS: i64 = 2;
const ANGLE_TOLERANCE: f64 = 1e-5;

#[derive(Debug, PartialEq)]
enum ExpectedCrossing {
    At(DateTime<Utc>),
    AlwaysAbove,
    AlwaysBelow,
}

impl ExpectedCrossing {
    fn parse(value: &str) -> Result<Self, Box<dyn Error>> {
        Ok(match value {
            "above" => Self::AlwaysAbove,
            "below" => Self::AlwaysBelow,
            instant => Self::At(instant.parse()?),
        })
    }
}

#[derive(Debug)]
struct CrossingTestRecord {
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    morning: ExpectedCrossing,
    evening: ExpectedCrossing,
}

impl CrossingTestRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            date: record[0].parse()?,
            latitude: record[1].parse()?,
            longitude: record[2].parse()?,
            elevation: record[3].parse()?,
            morning: ExpectedCrossing::parse(&record[4])?,
            evening: ExpectedCrossing::parse(&record[5])?,
        })
    }

    fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

#[derive(Debug)]
struct PositionTestRecord {
    datetime: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    azimuth: f64,
}

impl PositionTestRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            datetime: record[0].parse()?,
            latitude: record[1].parse()?,
            longitude: record[2].parse()?,
            elevation: record[3].parse()?,
            azimuth: record[4].parse()?,
        })
    }
}

fn load_records<T>(
    path: &str,
    parse: fn(&csv::StringRecord) -> Result<T, Box<dyn Error>>,
) -> Result<Vec<T>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(parse(&result?)?);
    }
    Ok(records)
}

fn check_crossing(
    record: &CrossingTestRecord,
    label: &str,
    expected: &ExpectedCrossing,
    actual: Option<&DateTime<Utc>>,
    result: &Crossings<DateTime<Utc>>,
) -> Result<(), String> {
    match (expected, actual) {
        (ExpectedCrossing::At(expected), Some(actual)) => {
            let diff = (*actual - *expected).num_seconds();
            if diff.abs() > MAX_TIME_DIFFERENCE_SECONDS {
                return Err(format!(
                    "{record:?}: {label} expected {expected}, got {actual} ({diff}s)"
                ));
            }
        }
        (ExpectedCrossing::AlwaysAbove, None) if result.is_always_above() => {}
        (ExpectedCrossing::AlwaysBelow, None) if result.is_always_below() => {}
        _ => {
            return Err(format!(
                "{record:?}: {label} expected {expected:?}, got {result:?}"
            ));
        }
    }
    Ok(())
}

#[test]
fn test_elevation_crossings_reference() -> Result<(), Box<dyn Error>> {
    let records = load_records(
        "tests/data/time_of_elevation_reference.csv",
        CrossingTestRecord::from_csv_record,
    )?;
    assert!(records.len() > 300, "reference data missing");

    let mut failures = Vec::new();
    let mut polar_cases = 0;
    for record in &records {
        let result = events::elevation_crossings(record.location(), record.date, record.elevation)?;
        if !result.is_regular() {
            polar_cases += 1;
        }

        for (label, expected, actual) in [
            ("morning", &record.morning, result.morning()),
            ("evening", &record.evening, result.evening()),
        ] {
            if let Err(failure) = check_crossing(record, label, expected, actual, &result) {
                failures.push(failure);
            }
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} records failed:\n{}",
        failures.len(),
        records.len(),
        failures.join("\n")
    );
    assert!(polar_cases > 0, "reference data should cover polar outcomes");
    Ok(())
}

#[test]
fn test_sunrise_sunset_reference() -> Result<(), Box<dyn Error>> {
    let records = load_records(
        "tests/data/time_of_elevation_reference.csv",
        CrossingTestRecord::from_csv_record,
    )?;

    let mut checked = 0;
    for record in records
        .iter()
        .filter(|r| (r.elevation - SUNRISE_SUNSET_ANGLE).abs() < 1e-12)
    {
        let result = events::sunrise_sunset_crossings(record.location(), record.date)?;
        check_crossing(record, "sunrise", &record.morning, result.morning(), &result)?;
        check_crossing(record, "sunset", &record.evening, result.evening(), &result)?;
        checked += 1;
    }

    assert!(checked > 50, "only {checked} sunrise/sunset records");
    Ok(())
}

#[test]
fn test_solar_position_reference() -> Result<(), Box<dyn Error>> {
    let records = load_records(
        "tests/data/position_reference.csv",
        PositionTestRecord::from_csv_record,
    )?;
    assert!(!records.is_empty(), "reference data missing");

    for record in &records {
        let location = Location::new(record.latitude, record.longitude);
        let pos = position::solar_position(location, record.datetime);

        assert!(
            (pos.elevation() - record.elevation).abs() < ANGLE_TOLERANCE,
            "{record:?}: elevation {}",
            pos.elevation()
        );

        let mut azimuth_diff = (pos.azimuth() - record.azimuth).abs();
        if azimuth_diff > 180.0 {
            azimuth_diff = 360.0 - azimuth_diff;
        }
        assert!(
            azimuth_diff < ANGLE_TOLERANCE,
            "{record:?}: azimuth {}",
            pos.azimuth()
        );
    }
    Ok(())
}
