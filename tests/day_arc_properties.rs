//! Property tests for the sunrise/sunset pipeline at a mid-latitude
//! reference location (50°N 10°E) and at polar latitudes.

use solar_clock::harmonic::{equation_of_time, solar_declination, sunrise_hour, sunset_hour};
use solar_clock::{Location, SolarClock};

fn reference_clock() -> SolarClock {
    SolarClock::new(Location::new(50.0, 10.0).unwrap())
}

#[test]
fn sunrise_precedes_sunset_every_day_at_mid_latitude() {
    let clock = reference_clock();

    for day in 1..=366 {
        let d = f64::from(day);
        let rise = clock.sunrise(d, false);
        let set = clock.sunset(d, false);
        assert!(
            rise < set,
            "day {day}: sunrise {rise} not before sunset {set}"
        );
    }
}

#[test]
fn declination_is_periodic() {
    // Period of the fitted harmonic: 2π / 0.0169060504029192 days
    let period = 2.0 * std::f64::consts::PI / 0.0169060504029192;

    for day in [1.0, 47.5, 80.0, 172.0, 300.0, 366.0] {
        let a = solar_declination(day);
        let b = solar_declination(day + period);
        assert!(
            (a - b).abs() < 1e-9,
            "declination not periodic at day {day}: {a} vs {b}"
        );
    }
}

#[test]
fn equation_of_time_stays_bounded() {
    // Sum of the two harmonic amplitudes
    let bound = 0.170869921174742 + 0.129890681040717;

    let mut day = -1000.0;
    while day <= 1000.0 {
        let eot = equation_of_time(day);
        assert!(eot.abs() <= bound, "day {day}: equation of time {eot}");
        day += 0.5;
    }

    // Over the real calendar the correction peaks near ±0.275 hours
    // (early November), well inside the amplitude bound
    for day in 1..=366 {
        assert!(equation_of_time(f64::from(day)).abs() < 0.28);
    }
}

#[test]
fn daylight_saving_shifts_both_times_by_one_hour() {
    let clock = reference_clock();

    for day in 1..=366 {
        let d = f64::from(day);
        let rise_shift = clock.sunrise(d, true) - clock.sunrise(d, false);
        let set_shift = clock.sunset(d, true) - clock.sunset(d, false);
        assert!((rise_shift - 1.0).abs() < 1e-12, "day {day}: {rise_shift}");
        assert!((set_shift - 1.0).abs() < 1e-12, "day {day}: {set_shift}");
    }
}

#[test]
fn fifteen_degrees_of_longitude_is_one_hour() {
    for day in [15.0, 80.0, 172.0, 266.0, 355.0] {
        let rise_west = sunrise_hour(day, 50.0, 10.0, false);
        let rise_east = sunrise_hour(day, 50.0, 25.0, false);
        let set_west = sunset_hour(day, 50.0, 10.0, false);
        let set_east = sunset_hour(day, 50.0, 25.0, false);

        assert!((rise_west - rise_east - 1.0).abs() < 1e-12);
        assert!((set_west - set_east - 1.0).abs() < 1e-12);
    }
}

#[test]
fn polar_latitudes_propagate_nan() {
    let svalbard = SolarClock::new(Location::new(80.0, 15.0).unwrap());

    // Midnight sun around the June solstice: NaN, never a panic
    assert!(svalbard.sunrise(172.0, true).is_nan());
    assert!(svalbard.sunset(172.0, true).is_nan());

    // Polar night around the December solstice
    assert!(svalbard.sunrise(355.0, false).is_nan());
    assert!(svalbard.sunset(355.0, false).is_nan());

    // Solar noon stays finite through both
    assert!(svalbard.solar_noon(172.0, true).is_finite());
    assert!(svalbard.solar_noon(355.0, false).is_finite());
}

#[test]
fn polar_conditions_are_classified() {
    let svalbard = SolarClock::new(Location::new(80.0, 15.0).unwrap());

    assert!(svalbard.sun_times(172.0, true).is_polar_day());
    assert!(svalbard.sun_times(355.0, false).is_polar_night());

    // The same location still has regular days near the equinoxes
    let equinox = svalbard.sun_times(80.0, false);
    assert!(equinox.is_regular_day());
    assert!(equinox.sunrise().unwrap().hours() < equinox.sunset().unwrap().hours());
}

#[test]
fn non_finite_day_of_year_propagates() {
    let clock = reference_clock();

    assert!(clock.sunrise(f64::NAN, false).is_nan());
    assert!(clock.sunrise(f64::INFINITY, false).is_nan());
    assert!(clock.sunset(f64::NEG_INFINITY, true).is_nan());
}

#[test]
fn southern_hemisphere_seasons_are_inverted() {
    let sydney_latitude = SolarClock::new(Location::new(-33.9, 10.0).unwrap());
    let reference = reference_clock();

    // June solstice: short day south, long day north
    let south_june = sydney_latitude.sunset(172.0, false) - sydney_latitude.sunrise(172.0, false);
    let north_june = reference.sunset(172.0, false) - reference.sunrise(172.0, false);
    assert!(south_june < 12.0);
    assert!(north_june > 12.0);
}
