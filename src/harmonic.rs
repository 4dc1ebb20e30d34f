//! Closed-form harmonic sunrise/sunset approximation.
//!
//! This follows the equation-of-time method published at
//! <https://www.astronomie.info/zeitgleichung/>: solar declination is modeled
//! as a single harmonic over the year, the equation of time as two harmonics,
//! and the half-day length via the spherical hour-angle formula. Accuracy is
//! on the order of a few minutes at mid-latitudes, which suits clock displays
//! and scheduling on small devices.
//!
//! The functions here are pure and perform no input validation. Any finite
//! day-of-year is accepted; the formulas are periodic and simply continue
//! outside the calendar range [1, 366]. Near the poles the hour-angle
//! arccosine leaves its domain during midnight-sun and polar-night periods
//! and the result is NaN - a deliberate carry-over of the formulas' IEEE-754
//! behavior. Use [`SolarClock::sun_times`](crate::SolarClock::sun_times) for
//! an explicit polar day/night classification.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{acos, cos, degrees_to_radians, sin, PI};

/// Amplitude of the declination harmonic (radians, ≈ 23.46° obliquity).
const DECLINATION_AMPLITUDE: f64 = 0.409526325277017;

/// Angular frequency of the declination harmonic (radians per day,
/// 2π / ≈371.7 days as fitted by the published approximation).
const DECLINATION_FREQUENCY: f64 = 0.0169060504029192;

/// Day-of-year phase offset of the declination harmonic (spring equinox).
const DECLINATION_PHASE_DAYS: f64 = 80.0856919827619;

/// Apparent horizon elevation at rise/set in radians: -50 arc minutes,
/// covering atmospheric refraction (~34') plus the solar disk radius (~16').
const HORIZON_ELEVATION_RAD: f64 = -(50.0 / 60.0) * (PI / 180.0);

/// Degrees of longitude per hour of solar time (one standard time zone).
const DEGREES_PER_HOUR: f64 = 15.0;

/// Civil base zone of the calculator: UTC+1 standard time.
const STANDARD_ZONE_OFFSET_HOURS: f64 = 1.0;

/// Civil zone during daylight saving: UTC+2.
const SUMMER_ZONE_OFFSET_HOURS: f64 = 2.0;

/// Computes the solar declination angle in radians for a day of the year.
///
/// Single-harmonic fit of the sun's declination: the constants encode the
/// orbital period and the spring-equinox phase. Periodic for all finite
/// inputs; NaN and infinities propagate.
///
/// # Example
/// ```
/// # use solar_clock::harmonic::solar_declination;
/// // Near the spring equinox the declination is close to zero
/// assert!(solar_declination(80.0).abs() < 0.01);
/// // Near the June solstice it approaches the axial tilt
/// assert!(solar_declination(172.0) > 0.40);
/// ```
#[must_use]
pub fn solar_declination(day_of_year: f64) -> f64 {
    DECLINATION_AMPLITUDE * sin(DECLINATION_FREQUENCY * (day_of_year - DECLINATION_PHASE_DAYS))
}

/// Computes the equation of time in hours for a day of the year.
///
/// Two-harmonic correction for the difference between apparent (sundial) and
/// mean (clock) solar time, caused by orbital eccentricity and axial tilt.
/// Bounded by the sum of the two amplitudes, about ±0.3 hours.
#[must_use]
pub fn equation_of_time(day_of_year: f64) -> f64 {
    -0.170869921174742 * sin(0.0336997028793971 * day_of_year + 0.465419984181394)
        - 0.129890681040717 * sin(0.0178674832556871 * day_of_year - 0.167936777524864)
}

/// Computes the hours between solar noon and sunrise (or sunset).
///
/// Spherical hour-angle formula evaluated at the apparent horizon. Returns
/// NaN when the arccosine argument leaves [-1, 1], which happens at high
/// latitudes during midnight-sun or polar-night periods.
///
/// `latitude` is in degrees, `declination` in radians as returned by
/// [`solar_declination`].
#[must_use]
pub fn half_day_length(declination: f64, latitude: f64) -> f64 {
    12.0 * acos(hour_angle_cos(declination, latitude)) / PI
}

/// The arccosine argument of the hour-angle formula.
///
/// Values below -1 mean the sun never reaches the horizon from above (polar
/// day); values above 1 mean it never reaches it from below (polar night).
pub(crate) fn hour_angle_cos(declination: f64, latitude: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    (sin(HORIZON_ELEVATION_RAD) - sin(phi) * sin(declination)) / (cos(phi) * cos(declination))
}

/// Solar time of sunrise: hours before noon plus the equation-of-time shift.
fn rising_solar_time(day_of_year: f64, latitude: f64) -> f64 {
    12.0 - half_day_length(solar_declination(day_of_year), latitude) - equation_of_time(day_of_year)
}

/// Solar time of sunset.
fn setting_solar_time(day_of_year: f64, latitude: f64) -> f64 {
    12.0 + half_day_length(solar_declination(day_of_year), latitude) - equation_of_time(day_of_year)
}

/// Civil zone offset in hours for the fixed UTC+1 base zone.
pub(crate) const fn zone_offset_hours(daylight_saving: bool) -> f64 {
    if daylight_saving {
        SUMMER_ZONE_OFFSET_HOURS
    } else {
        STANDARD_ZONE_OFFSET_HOURS
    }
}

/// Converts a solar-time hour to local civil time for the given longitude.
fn solar_to_civil(solar_hour: f64, longitude: f64, daylight_saving: bool) -> f64 {
    solar_hour - longitude / DEGREES_PER_HOUR + zone_offset_hours(daylight_saving)
}

/// Computes the local civil sunrise hour for a day of the year.
///
/// `latitude` and `longitude` are in degrees (north and east positive). The
/// result is a fractional hour-of-day in the fixed UTC+1 civil zone, shifted
/// one hour later when `daylight_saving` is set. NaN during polar day/night.
///
/// # Example
/// ```
/// # use solar_clock::harmonic::sunrise_hour;
/// // 50°N 10°E near the spring equinox, standard time
/// let rise = sunrise_hour(80.0, 50.0, 10.0, false);
/// assert!(rise > 6.0 && rise < 7.0);
/// ```
#[must_use]
pub fn sunrise_hour(day_of_year: f64, latitude: f64, longitude: f64, daylight_saving: bool) -> f64 {
    solar_to_civil(
        rising_solar_time(day_of_year, latitude),
        longitude,
        daylight_saving,
    )
}

/// Computes the local civil sunset hour for a day of the year.
///
/// Same conventions as [`sunrise_hour`].
#[must_use]
pub fn sunset_hour(day_of_year: f64, latitude: f64, longitude: f64, daylight_saving: bool) -> f64 {
    solar_to_civil(
        setting_solar_time(day_of_year, latitude),
        longitude,
        daylight_saving,
    )
}

/// Computes the local civil hour of solar noon for a day of the year.
///
/// Solar noon is the symmetric center between sunrise and sunset and stays
/// finite even during polar day/night, when the rise/set hours are NaN.
#[must_use]
pub fn solar_noon_hour(
    day_of_year: f64,
    longitude: f64,
    daylight_saving: bool,
) -> f64 {
    solar_to_civil(
        12.0 - equation_of_time(day_of_year),
        longitude,
        daylight_saving,
    )
}
