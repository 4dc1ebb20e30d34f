//! # Solar Clock
//!
//! Approximate sunrise and sunset clock times from closed-form harmonic formulas.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library computes local civil sunrise, sunset and solar noon times for
//! a fixed geographic location from a numeric day-of-year and a
//! daylight-saving flag. It implements the equation-of-time approximation
//! published at <https://www.astronomie.info/zeitgleichung/>: one harmonic
//! for solar declination, two for the equation of time, and the spherical
//! hour-angle formula for day length. Accuracy is a few minutes at
//! mid-latitudes - enough for clock displays and scheduling, with no
//! ephemeris tables and no allocation, which makes it a good fit for small
//! embedded targets.
//!
//! ## Features
//!
//! - `std` (default): use standard library math functions (usually faster than `libm`)
//! - `chrono` (default): enable the `NaiveDate` based convenience API
//! - `libm`: pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! solar-clock = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! solar-clock = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-clock = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Conventions
//!
//! - Day-of-year is a plain `f64` (1.0 = January 1). Values outside [1, 366]
//!   are accepted; the formulas are periodic.
//! - Results are fractional hours of local civil time in a fixed UTC+1 base
//!   zone, shifted one hour later when the daylight-saving flag is set.
//! - Latitude is north positive, longitude east positive, in degrees.
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_clock::{Location, SolarClock};
//!
//! let clock = SolarClock::new(Location::new(50.0, 10.0)?);
//!
//! // Day 80 of the year (late March), standard time
//! let sunrise = clock.sunrise(80.0, false);
//! let sunset = clock.sunset(80.0, false);
//! assert!(sunrise < sunset);
//!
//! println!("rise {sunrise:.2}h set {sunset:.2}h");
//! # Ok::<(), solar_clock::Error>(())
//! ```
//!
//! ### Polar day and night
//!
//! The raw [`SolarClock::sunrise`]/[`SolarClock::sunset`] methods keep the
//! source formulas' IEEE-754 behavior and return NaN when the sun never
//! crosses the horizon. [`SolarClock::sun_times`] reports those cases as
//! explicit variants instead:
//!
//! ```rust
//! use solar_clock::{Location, SolarClock, SunTimes};
//!
//! let svalbard = SolarClock::new(Location::new(78.0, 15.0)?);
//!
//! match svalbard.sun_times(172.0, true) {
//!     SunTimes::RegularDay { sunrise, noon, sunset } => {
//!         println!("rise {} noon {} set {}", sunrise.hours(), noon.hours(), sunset.hours());
//!     }
//!     SunTimes::AllDay { noon } => println!("midnight sun, noon at {}", noon.hours()),
//!     SunTimes::AllNight { noon } => println!("polar night, noon at {}", noon.hours()),
//! }
//! # Ok::<(), solar_clock::Error>(())
//! ```
//!
//! ## Known limitations
//!
//! - The harmonic fit trades accuracy for size; for sub-minute results use a
//!   full solar position algorithm instead.
//! - The civil base zone is fixed at UTC+1 (as in the original embedded
//!   formulation); there is no timezone database and no date parsing.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::clock::SolarClock;
pub use crate::error::{Error, Result};
pub use crate::types::{ClockHours, Location, SunTimes};

// Algorithm module
pub mod harmonic;

// Core modules
pub mod error;
pub mod types;

mod clock;

// Internal modules
mod math;
