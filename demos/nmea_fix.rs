//! Sunrise and sun position for a GPS fix read from NMEA sentences.

use chrono::NaiveDate;
use sunrise_equation::{Error, events, nmea, position};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gga_date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let sentences = [
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
        "$GNRMC,120000.50,A,3352.128,S,15112.558,E,0.0,0.0,211224,,,A*5F",
        "$GPGGA,235959.123456789123,6919.929,N,08140.687,W,1,08,0.9,545.4,M,46.9,M,,*75",
        "$GPGSV,3,1,11,03,03,111,00*4A",
    ];

    for sentence in sentences {
        println!("{sentence}");
        let fix = match nmea::parse(sentence, Some(gga_date)) {
            Ok(fix) => fix,
            Err(e) => {
                println!("  rejected: {e}\n");
                continue;
            }
        };

        let pos = position::solar_position(fix.location(), fix.time());
        println!("  Position: {}", fix.location());
        println!("  Time: {}", fix.time());
        println!(
            "  Sun: elevation {:.2}°, azimuth {:.2}°",
            pos.elevation(),
            pos.azimuth()
        );

        match events::sunrise_sunset(fix.location(), fix.date()) {
            Ok((sunrise, sunset)) => {
                println!("  Sunrise: {}", sunrise.format("%H:%M:%S UTC"));
                println!("  Sunset: {}", sunset.format("%H:%M:%S UTC"));
            }
            Err(Error::SunNeverSets) => println!("  Midnight sun"),
            Err(Error::SunNeverRises) => println!("  Polar night"),
            Err(e) => return Err(e.into()),
        }
        println!();
    }

    Ok(())
}
