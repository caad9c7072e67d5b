//! Sunrise/sunset and twilight times across diverse global locations.

use chrono::{DateTime, NaiveDate, Utc};
use sunrise_equation::{Crossings, Location, SUNRISE_SUNSET_ANGLE, Twilight, events};

#[derive(Debug)]
struct City {
    name: &'static str,
    location: Location,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // From the high Arctic to the Antarctic coast
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            location: Location::new(78.22, 15.65),
        },
        City {
            name: "Anchorage, Alaska",
            location: Location::new(61.216667, -149.866667),
        },
        City {
            name: "Auckland, New Zealand",
            location: Location::new(-36.840556, 174.74),
        },
        City {
            name: "Singapore",
            location: Location::new(1.283333, 103.833333),
        },
        City {
            name: "McMurdo Station, Antarctica",
            location: Location::new(-77.85, 166.67),
        },
    ];

    // The winter solstice shows the most extreme variations
    let date = NaiveDate::from_ymd_opt(2023, 12, 21).unwrap();

    for city in &cities {
        println!("=== {} ===", city.name);
        println!("Coordinates: {}", city.location);
        println!("Date: December 21, 2023 (Winter Solstice)");
        println!(
            "Mean solar noon: {}",
            events::mean_solar_noon(city.location, date)?.format("%H:%M:%S UTC")
        );
        println!();

        let thresholds = [
            ("Sunrise/Sunset", SUNRISE_SUNSET_ANGLE),
            ("Civil Twilight", Twilight::Civil.elevation_angle()),
            ("Nautical Twilight", Twilight::Nautical.elevation_angle()),
            ("Astronomical Twilight", Twilight::Astronomical.elevation_angle()),
        ];
        for (label, elevation) in thresholds {
            let result = events::elevation_crossings(city.location, date, elevation)?;
            print_crossings(label, &result);
        }
    }

    Ok(())
}

fn print_crossings(label: &str, result: &Crossings<DateTime<Utc>>) {
    println!("{label}:");
    match result {
        Crossings::Regular {
            morning,
            transit,
            evening,
        } => {
            println!("  Begin: {}", morning.format("%Y-%m-%d %H:%M:%S UTC"));
            println!("  Transit: {}", transit.format("%H:%M:%S UTC"));
            println!("  End: {}", evening.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        Crossings::AlwaysAbove { transit } => {
            println!("  All day above this elevation");
            println!("  Transit: {}", transit.format("%H:%M:%S UTC"));
        }
        Crossings::AlwaysBelow { transit } => {
            println!("  All day below this elevation");
            println!("  Transit: {}", transit.format("%H:%M:%S UTC"));
        }
    }
    println!();
}
