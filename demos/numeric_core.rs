//! Chrono-free usage of the numeric core, as on an embedded target.
//!
//! The surrounding application supplies the day-of-year and DST flag (here
//! hard-coded); only the pure pipeline runs. When using the raw API the NaN
//! convention for polar day/night must be handled by the caller.

use solar_clock::harmonic::{sunrise_hour, sunset_hour};
use solar_clock::{Location, SolarClock};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Free functions: no configuration object at all
    let rise = sunrise_hour(172.0, 50.0, 10.0, true);
    let set = sunset_hour(172.0, 50.0, 10.0, true);
    println!("50°N 10°E, day 172 (DST): rise {rise:.2}h, set {set:.2}h");

    // Configured calculator for repeated queries
    let clock = SolarClock::new(Location::new(78.0, 15.0)?);
    for day in [80.0, 172.0, 266.0, 355.0] {
        let rise = clock.sunrise(day, false);
        if rise.is_nan() {
            // Polar day or night: the formulas have no horizon crossing
            println!("78°N 15°E, day {day}: no sunrise");
        } else {
            println!("78°N 15°E, day {day}: rise {rise:.2}h");
        }
    }

    Ok(())
}
