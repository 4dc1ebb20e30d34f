//! Core data types for sunrise/sunset calculations.

use crate::error::{check_latitude, check_longitude};
use crate::math::floor;
use crate::Result;

/// Observer location on Earth.
///
/// Replaces the compile-time location constants of typical embedded ports
/// with an explicit, validated configuration value: one `Location` per
/// observer, injected into [`SolarClock`](crate::SolarClock) at construction.
///
/// # Example
/// ```
/// # use solar_clock::Location;
/// let kassel = Location::new(51.3, 9.5).unwrap();
/// assert_eq!(kassel.latitude(), 51.3);
/// assert_eq!(kassel.longitude(), 9.5);
///
/// // The poles are rejected: no finite sunrise exists there
/// assert!(Location::new(90.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, north positive, strictly inside ±90
    latitude: f64,
    /// Longitude in degrees, east positive, within ±180
    longitude: f64,
}

impl Location {
    /// Creates a validated location from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` if latitude is not strictly between -90 and
    /// +90 degrees, or `InvalidLongitude` if longitude is outside ±180.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees (north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Fractional hour-of-day in local civil time.
///
/// Values are hours since local midnight for the calculation date. For
/// extreme longitudes the raw value can fall below 0.0 (previous day) or
/// reach 24.0 and beyond (next day); [`day_and_hours`](Self::day_and_hours)
/// normalizes such values.
///
/// # Example
/// ```
/// # use solar_clock::ClockHours;
/// let sunrise = ClockHours::from_hours(6.45);
/// assert_eq!(sunrise.hours(), 6.45);
///
/// let late = ClockHours::from_hours(24.5);
/// assert_eq!(late.day_and_hours(), (1, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockHours(f64);

impl ClockHours {
    /// Creates a `ClockHours` from hours since local midnight.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits the value into a whole-day offset and hours within that day.
    ///
    /// Returns `(day_offset, hours_in_day)` with `hours_in_day` in
    /// `0.0..24.0`. Non-finite values are returned unchanged with a zero
    /// day offset.
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let day_offset = floor(hours / 24.0);
        let mut in_day = hours - day_offset * 24.0;
        // Guard against rounding pushing the remainder to exactly 24.0
        if in_day >= 24.0 {
            in_day -= 24.0;
            return (day_offset as i32 + 1, in_day);
        }
        (day_offset as i32, in_day)
    }
}

/// Result of a day's sunrise/sunset calculation.
///
/// At high latitudes the sun may stay above or below the horizon for the
/// whole day; the underlying formulas then leave the arccosine domain. This
/// type reports those cases explicitly instead of the NaN the raw hour
/// functions produce. Solar noon is finite in every case and always carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunTimes {
    /// Regular day with distinct sunrise and sunset times
    RegularDay {
        /// Local civil time of sunrise
        sunrise: ClockHours,
        /// Local civil time of solar noon
        noon: ClockHours,
        /// Local civil time of sunset
        sunset: ClockHours,
    },
    /// Polar day - the sun stays above the horizon all day
    AllDay {
        /// Local civil time of solar noon (closest approach to zenith)
        noon: ClockHours,
    },
    /// Polar night - the sun stays below the horizon all day
    AllNight {
        /// Local civil time of solar noon (highest point, still below horizon)
        noon: ClockHours,
    },
}

impl SunTimes {
    /// Gets the solar noon time for any result variant.
    #[must_use]
    pub const fn noon(&self) -> ClockHours {
        match self {
            Self::RegularDay { noon, .. } | Self::AllDay { noon } | Self::AllNight { noon } => {
                *noon
            }
        }
    }

    /// Gets the sunrise time if this is a regular day.
    #[must_use]
    pub const fn sunrise(&self) -> Option<ClockHours> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(*sunrise)
        } else {
            None
        }
    }

    /// Gets the sunset time if this is a regular day.
    #[must_use]
    pub const fn sunset(&self) -> Option<ClockHours> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(*sunset)
        } else {
            None
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    #[must_use]
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }
}
