//! # Sunrise/Sunset Library
//!
//! Deterministic sunrise and sunset times from the classic US Naval
//! Observatory algorithm, computed in fixed-precision decimal arithmetic.
//!
//! Every intermediate multiply and divide in the pipeline is rounded to four
//! fractional digits with round-half-to-even. That precision regime is part
//! of the output contract, not an implementation detail: the accumulated
//! rounding across the ~10 pipeline stages is what makes results agree with
//! published almanac tables and stay bit-identical across platforms, where a
//! naive floating-point rendition can drift by a minute near rounding
//! boundaries.
//!
//! ## Features
//!
//! - Four standard zeniths (astronomical 108°, nautical 102°, civil 96°,
//!   official 90.8333°) plus arbitrary elevation angles
//! - IANA time zone support via `chrono-tz`, including the daylight-saving
//!   correction, through the [`ZoneRules`] seam
//! - "No sunrise/sunset today" (polar day/night) is an ordinary `None`
//!   result, never an error
//! - Thread-safe: stateless, immutable data structures
//!
//! ## References
//!
//! - Almanac for Computers (1990), Nautical Almanac Office, United States
//!   Naval Observatory
//! - <https://edwilliams.org/sunrise_sunset_algorithm.htm>
//!
//! ## Quick Start
//!
//! ### Named zeniths for a fixed location
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use sunrise_sunset::{GeoCoordinate, SunriseSunsetCalculator};
//!
//! let calculator = SunriseSunsetCalculator::new(
//!     GeoCoordinate::new(dec!(40.7128), dec!(-74.0060)), // New York City
//!     chrono_tz::America::New_York,
//! );
//! let date = NaiveDate::from_ymd_opt(2020, 6, 21).unwrap();
//!
//! if let Some(sunrise) = calculator.official_sunrise(date) {
//!     println!("Sunrise: {}", sunrise.format("%H:%M"));
//! }
//! if let Some(sunset) = calculator.official_sunset_datetime(date) {
//!     println!("Sunset: {sunset}");
//! }
//! ```
//!
//! ### One-shot query at an arbitrary elevation angle
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use sunrise_sunset::sunrise_at;
//!
//! let date = NaiveDate::from_ymd_opt(2020, 6, 21).unwrap();
//! // Golden hour: sun 6° above the horizon.
//! let golden = sunrise_at(
//!     dec!(48.21),  // Vienna latitude
//!     dec!(16.37),  // Vienna longitude
//!     chrono_tz::Europe::Vienna,
//!     date,
//!     dec!(6),
//! );
//! assert!(golden.is_some());
//! ```
//!
//! ### Legacy string output
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use sunrise_sunset::{format_event_time, GeoCoordinate, SunriseSunsetCalculator};
//!
//! let calculator = SunriseSunsetCalculator::new(
//!     GeoCoordinate::new(dec!(78.0), dec!(15.0)), // Svalbard
//!     chrono_tz::Arctic::Longyearbyen,
//! );
//! let midsummer = NaiveDate::from_ymd_opt(2020, 6, 21).unwrap();
//!
//! // Polar day: the sun never sets, rendered as the legacy sentinel.
//! assert_eq!(format_event_time(calculator.official_sunset(midsummer)), "99:99");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
)]

// Public API exports
pub use crate::calculator::{
    format_event_time, sunrise_at, sunset_at, SunriseSunsetCalculator, NO_EVENT_SENTINEL,
};
pub use crate::error::{Error, Result};
pub use crate::types::{GeoCoordinate, SolarEvent, Zenith};
pub use crate::usno::SolarEventCalculator;
pub use crate::zone::ZoneRules;

// Core modules
pub mod calculator;
pub mod error;
pub mod types;
pub mod usno;
pub mod zone;

// Internal modules
mod math;
