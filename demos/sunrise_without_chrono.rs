//! Sunrise/sunset calculation without the chrono library.
//!
//! The Julian Day API works with `default-features = false` and in `no_std` builds.

use sunrise_equation::orbit::SolarDay;
use sunrise_equation::time::JulianDay;
use sunrise_equation::{Crossings, Location, events, position};

fn hours_utc(jd: JulianDay, date: JulianDay) -> f64 {
    // Date noon is 12:00 UTC; values outside 0..24 fall on a neighbouring day
    (jd.value() - date.value()) * 24.0 + 12.0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let san_francisco = Location::new(37.7749, -122.4194);
    let date = JulianDay::noon_of(2023, 6, 21)?;

    let solar = SolarDay::compute(san_francisco.longitude(), date);
    println!("San Francisco, June 21, 2023:");
    println!("  Declination: {:.4}°", solar.declination);
    println!("  Ecliptic longitude: {:.4}°", solar.ecliptic_longitude);
    println!();

    match events::sunrise_sunset_from_julian(san_francisco, date) {
        Crossings::Regular {
            morning,
            transit,
            evening,
        } => {
            println!("  Sunrise:  {:.4} hours UTC", hours_utc(morning, date));
            println!("  Transit:  {:.4} hours UTC", hours_utc(transit, date));
            println!("  Sunset:   {:.4} hours UTC", hours_utc(evening, date));
            println!("  Sunrise as Unix time: {}", morning.unix_seconds());
        }
        Crossings::AlwaysAbove { transit } => {
            println!("Polar day - sun never sets");
            println!("  Transit: {:.4} hours UTC", hours_utc(transit, date));
        }
        Crossings::AlwaysBelow { transit } => {
            println!("Polar night - sun never rises");
            println!("  Transit: {:.4} hours UTC", hours_utc(transit, date));
        }
    }

    // Custom elevation: the sun 10° above the horizon
    println!("\nSun at 10° elevation:");
    if let Some((morning, evening)) =
        events::crossings_from_julian(san_francisco, date, 10.0).into_pair()
    {
        println!("  Morning:  {:.4} hours UTC", hours_utc(morning, date));
        println!("  Evening:  {:.4} hours UTC", hours_utc(evening, date));
    }

    let instant = JulianDay::from_utc(2023, 6, 21, 20, 0, 0.0)?;
    let pos = position::solar_position_from_julian(san_francisco, instant);
    println!("\nAt 20:00 UTC:");
    println!("  Elevation: {:.3}°", pos.elevation());
    println!("  Azimuth: {:.3}°", pos.azimuth());

    Ok(())
}
