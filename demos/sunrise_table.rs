//! Prints a month of sunrise, solar noon and sunset times.
//!
//! Demonstrates the chrono convenience API: the date supplies the
//! day-of-year, the caller decides the daylight-saving flag.

use chrono::NaiveDate;
use solar_clock::{Location, SolarClock, SunTimes};

fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Kassel, Germany - June is daylight-saving time in the UTC+1 zone
    let clock = SolarClock::new(Location::new(51.3, 9.5)?);
    let daylight_saving = true;

    println!("Kassel (51.3°N 9.5°E), June 2026, local civil time:");
    println!("{:<12} {:>7} {:>7} {:>7}", "date", "rise", "noon", "set");

    for day in 1..=30 {
        let date = NaiveDate::from_ymd_opt(2026, 6, day).expect("valid June date");

        match clock.sun_times_on(date, daylight_saving) {
            SunTimes::RegularDay {
                sunrise,
                noon,
                sunset,
            } => {
                println!(
                    "{:<12} {:>7} {:>7} {:>7}",
                    date,
                    format_hours(sunrise.hours()),
                    format_hours(noon.hours()),
                    format_hours(sunset.hours())
                );
            }
            SunTimes::AllDay { noon } => {
                println!(
                    "{:<12} midnight sun, noon {}",
                    date,
                    format_hours(noon.hours())
                );
            }
            SunTimes::AllNight { noon } => {
                println!(
                    "{:<12} polar night, noon {}",
                    date,
                    format_hours(noon.hours())
                );
            }
        }
    }

    Ok(())
}
