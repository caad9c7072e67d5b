//! # Sunrise Equation
//!
//! Sunrise, sunset, twilight, solar noon, and solar elevation/azimuth from the closed-form
//! sunrise equation.
//!
//! The model chains a handful of low-order series: Julian Day time, the sun's mean anomaly,
//! the equation of center, the ecliptic longitude, the equation of time (true solar transit),
//! and the solar declination. On top of that it solves the hour-angle equation for the
//! instants at which the sun crosses a given elevation. Accuracy is in the order of a minute
//! for event times and a fraction of a degree for angles, which is what sunrise/sunset-class
//! applications need; it is not an ephemeris.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! ## Features
//!
//! - Pure functions only: no state, no caching, safe to call from any thread
//! - Polar day and night as explicit outcomes ([`Crossings`], [`HourAngle`], [`Error`])
//! - `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Decoding of GPS positions from NMEA `GGA`/`RMC` sentences ([`nmea`])
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable the `NaiveDate`/`DateTime<Utc>` API and the NMEA decoder
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sunrise-equation = "0.1"
//!
//! # Minimal no_std (pure Julian Day API)
//! sunrise-equation = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sunrise_equation::{Error, Location, Twilight, events};
//! use chrono::NaiveDate;
//!
//! let toronto = Location::new(43.65, -79.38);
//! let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
//!
//! match events::sunrise_sunset(toronto, date) {
//!     Ok((sunrise, sunset)) => println!("Sunrise: {sunrise}, sunset: {sunset}"),
//!     Err(Error::SunNeverRises) => println!("Polar night"),
//!     Err(Error::SunNeverSets) => println!("Midnight sun"),
//!     Err(e) => panic!("{e}"),
//! }
//!
//! let dawn = events::dawn(toronto, date, Twilight::Nautical).unwrap();
//! let noon = events::solar_noon(toronto, date).unwrap();
//! println!("Nautical dawn: {dawn}, solar noon: {noon}");
//! # }
//! ```
//!
//! ### Solar Position (numeric API, no chrono)
//! ```rust
//! use sunrise_equation::{Location, position, time::JulianDay};
//!
//! let nyc = Location::new(40.7128, -74.0060);
//! let jd = JulianDay::from_utc(2022, 6, 21, 12, 0, 0.0).unwrap();
//!
//! let pos = position::solar_position_from_julian(nyc, jd);
//! println!("Elevation: {:.2}°", pos.elevation());
//! println!("Azimuth: {:.2}°", pos.azimuth());
//! ```
//!
//! ## Coordinate System
//!
//! - **Latitude**: positive north, **longitude**: positive east, both in degrees
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - All instants are UTC; dates are UTC calendar dates

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::events::SUNRISE_SUNSET_ANGLE;
pub use crate::types::{Crossings, HourAngle, Location, SolarPosition, Twilight};

// Computation modules
pub mod events;
pub mod orbit;
pub mod position;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
#[cfg(feature = "chrono")]
pub mod nmea;
pub mod time;
