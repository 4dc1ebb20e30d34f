//! The configured sunrise/sunset calculator.

use crate::harmonic::{
    hour_angle_cos, solar_declination, solar_noon_hour, sunrise_hour, sunset_hour,
};
use crate::types::{ClockHours, Location, SunTimes};

#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Sunrise/sunset calculator for a fixed location.
///
/// Wraps the pure functions of the [`harmonic`](crate::harmonic) module with
/// an injected [`Location`], one calculator per observer. The calculator is
/// `Copy`, stateless and safe to share across threads.
///
/// The raw [`sunrise`](Self::sunrise) and [`sunset`](Self::sunset) methods
/// keep the source formulas' IEEE-754 behavior: during polar day or polar
/// night they return NaN. [`sun_times`](Self::sun_times) classifies those
/// cases explicitly instead.
///
/// # Example
/// ```
/// # use solar_clock::{Location, SolarClock};
/// let clock = SolarClock::new(Location::new(50.0, 10.0).unwrap());
///
/// // Day 172 (late June), daylight saving in effect
/// let rise = clock.sunrise(172.0, true);
/// let set = clock.sunset(172.0, true);
/// assert!(rise < set);
/// assert!(set - rise > 16.0); // long midsummer day at 50°N
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarClock {
    location: Location,
}

impl SolarClock {
    /// Creates a calculator for the given location.
    #[must_use]
    pub const fn new(location: Location) -> Self {
        Self { location }
    }

    /// Gets the configured location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Computes the local civil sunrise hour for a day of the year.
    ///
    /// Returns a fractional hour-of-day in the fixed UTC+1 civil zone
    /// (UTC+2 when `daylight_saving` is set). Returns NaN during polar day
    /// or polar night; callers using this raw API must check for NaN.
    #[must_use]
    pub fn sunrise(&self, day_of_year: f64, daylight_saving: bool) -> f64 {
        sunrise_hour(
            day_of_year,
            self.location.latitude(),
            self.location.longitude(),
            daylight_saving,
        )
    }

    /// Computes the local civil sunset hour for a day of the year.
    ///
    /// Same conventions as [`sunrise`](Self::sunrise).
    #[must_use]
    pub fn sunset(&self, day_of_year: f64, daylight_saving: bool) -> f64 {
        sunset_hour(
            day_of_year,
            self.location.latitude(),
            self.location.longitude(),
            daylight_saving,
        )
    }

    /// Computes the local civil hour of solar noon for a day of the year.
    ///
    /// Finite for every day, including polar day/night.
    #[must_use]
    pub fn solar_noon(&self, day_of_year: f64, daylight_saving: bool) -> f64 {
        solar_noon_hour(day_of_year, self.location.longitude(), daylight_saving)
    }

    /// Computes the day's sun times with explicit polar-day/night handling.
    ///
    /// The hour-angle cosine argument is classified before the arccosine is
    /// evaluated: below -1 the sun never drops to the horizon (polar day),
    /// above +1 it never climbs to it (polar night). Non-finite day-of-year
    /// inputs are reported as [`SunTimes::RegularDay`] with NaN hours, as
    /// in the raw API.
    ///
    /// # Example
    /// ```
    /// # use solar_clock::{Location, SolarClock};
    /// let svalbard = SolarClock::new(Location::new(78.0, 15.0).unwrap());
    /// assert!(svalbard.sun_times(172.0, true).is_polar_day());
    /// assert!(svalbard.sun_times(355.0, false).is_polar_night());
    /// ```
    #[must_use]
    pub fn sun_times(&self, day_of_year: f64, daylight_saving: bool) -> SunTimes {
        let noon = ClockHours::from_hours(self.solar_noon(day_of_year, daylight_saving));

        let declination = solar_declination(day_of_year);
        let cos_arg = hour_angle_cos(declination, self.location.latitude());
        if cos_arg < -1.0 {
            return SunTimes::AllDay { noon };
        }
        if cos_arg > 1.0 {
            return SunTimes::AllNight { noon };
        }

        SunTimes::RegularDay {
            sunrise: ClockHours::from_hours(self.sunrise(day_of_year, daylight_saving)),
            noon,
            sunset: ClockHours::from_hours(self.sunset(day_of_year, daylight_saving)),
        }
    }

    /// Computes the sunrise hour for a calendar date.
    ///
    /// Derives the day-of-year from the date; no timezone lookup is
    /// performed, the caller still decides the daylight-saving flag.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunrise_on(&self, date: chrono::NaiveDate, daylight_saving: bool) -> f64 {
        self.sunrise(f64::from(date.ordinal()), daylight_saving)
    }

    /// Computes the sunset hour for a calendar date.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunset_on(&self, date: chrono::NaiveDate, daylight_saving: bool) -> f64 {
        self.sunset(f64::from(date.ordinal()), daylight_saving)
    }

    /// Computes the day's sun times for a calendar date.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sun_times_on(&self, date: chrono::NaiveDate, daylight_saving: bool) -> SunTimes {
        self.sun_times(f64::from(date.ordinal()), daylight_saving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    fn mid_latitude_clock() -> SolarClock {
        SolarClock::new(Location::new(50.0, 10.0).unwrap())
    }

    #[test]
    fn test_raw_api_matches_free_functions() {
        let clock = mid_latitude_clock();
        assert_eq!(clock.sunrise(80.0, false), sunrise_hour(80.0, 50.0, 10.0, false));
        assert_eq!(clock.sunset(80.0, false), sunset_hour(80.0, 50.0, 10.0, false));
    }

    #[test]
    fn test_sun_times_regular_day() {
        let clock = mid_latitude_clock();
        let times = clock.sun_times(80.0, false);

        assert!(times.is_regular_day());
        let sunrise = times.sunrise().unwrap().hours();
        let sunset = times.sunset().unwrap().hours();
        assert_eq!(sunrise, clock.sunrise(80.0, false));
        assert_eq!(sunset, clock.sunset(80.0, false));
        assert!((times.noon().hours() - (sunrise + sunset) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_sun_times_polar_classification() {
        let svalbard = SolarClock::new(Location::new(78.0, 15.0).unwrap());

        let midsummer = svalbard.sun_times(172.0, true);
        assert!(midsummer.is_polar_day());
        assert!(midsummer.noon().hours().is_finite());

        let midwinter = svalbard.sun_times(355.0, false);
        assert!(midwinter.is_polar_night());
        assert!(midwinter.noon().hours().is_finite());
    }

    #[test]
    fn test_raw_api_nan_during_polar_day() {
        let svalbard = SolarClock::new(Location::new(78.0, 15.0).unwrap());
        assert!(svalbard.sunrise(172.0, true).is_nan());
        assert!(svalbard.sunset(172.0, true).is_nan());
        assert!(svalbard.solar_noon(172.0, true).is_finite());
    }

    #[test]
    fn test_non_finite_day_propagates() {
        let clock = mid_latitude_clock();
        assert!(clock.sunrise(f64::NAN, false).is_nan());
        assert!(clock.sunset(f64::INFINITY, false).is_nan());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_helpers_use_ordinal() {
        use chrono::NaiveDate;

        let clock = mid_latitude_clock();
        // March 21 of a non-leap year is day 80
        let date = NaiveDate::from_ymd_opt(2023, 3, 21).unwrap();
        assert_eq!(date.ordinal(), 80);

        assert_eq!(clock.sunrise_on(date, false), clock.sunrise(80.0, false));
        assert_eq!(clock.sunset_on(date, false), clock.sunset(80.0, false));
        assert_eq!(
            clock.sun_times_on(date, false),
            clock.sun_times(80.0, false)
        );
    }
}
