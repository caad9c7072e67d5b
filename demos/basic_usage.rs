//! Basic solar position and sunrise example.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use sunrise_equation::{Location, events, position};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Solar position using a FixedOffset timezone
    let datetime_fixed = "2000-01-01T12:00:00-05:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: Same moment in UTC
    let datetime_utc = Utc.with_ymd_and_hms(2000, 1, 1, 17, 0, 0).unwrap(); // 17:00 UTC = 12:00 EST
    let toronto = Location::try_new(43.65, -79.38)?;

    let position_fixed = position::solar_position(toronto, datetime_fixed);
    let position_utc = position::solar_position(toronto, datetime_utc);

    println!("Solar position for {toronto} on January 1, 2000 at noon Eastern Time:");
    println!("Using FixedOffset timezone:");
    println!("  Azimuth: {:.3}°", position_fixed.azimuth());
    println!("  Elevation: {:.3}°", position_fixed.elevation());
    println!("  Zenith angle: {:.3}°", position_fixed.zenith_angle());

    println!("\nUsing UTC timezone (same moment):");
    println!("  Azimuth: {:.3}°", position_utc.azimuth());
    println!("  Elevation: {:.3}°", position_utc.elevation());

    println!(
        "\nBoth calculations produce identical results: {}",
        position_fixed == position_utc
    );

    if position_fixed.is_sun_up() {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let (sunrise, sunset) = events::sunrise_sunset(toronto, date)?;
    println!("\nSunrise: {}", sunrise.format("%H:%M:%S UTC"));
    println!("Solar noon: {}", events::solar_noon(toronto, date)?.format("%H:%M:%S UTC"));
    println!("Sunset: {}", sunset.format("%H:%M:%S UTC"));

    Ok(())
}
