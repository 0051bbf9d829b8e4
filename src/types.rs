//! Core value types for sunrise/sunset calculations.

use core::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Geographic position of the observer, in signed decimal degrees.
///
/// North latitude and east longitude are positive. The coordinate is
/// immutable after construction and is deliberately not range-checked:
/// callers validate geographic ranges before invoking the calculator.
///
/// # Example
/// ```
/// use rust_decimal_macros::dec;
/// use sunrise_sunset::GeoCoordinate;
///
/// let new_york = GeoCoordinate::new(dec!(40.7128), dec!(-74.0060));
/// assert_eq!(new_york.latitude(), dec!(40.7128));
/// assert_eq!(new_york.longitude(), dec!(-74.0060));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoCoordinate {
    latitude: Decimal,
    longitude: Decimal,
}

impl GeoCoordinate {
    /// Creates a coordinate from decimal degrees.
    #[must_use]
    pub const fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate from `f64` degrees.
    ///
    /// # Errors
    /// Returns [`Error::NonFiniteCoordinate`] if either value is NaN or
    /// infinite.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self> {
        let latitude =
            Decimal::from_f64(latitude).ok_or(Error::non_finite_coordinate(latitude))?;
        let longitude =
            Decimal::from_f64(longitude).ok_or(Error::non_finite_coordinate(longitude))?;
        Ok(Self::new(latitude, longitude))
    }

    /// Parses a coordinate from textual decimal degrees, e.g. `"40.7128"`.
    ///
    /// # Errors
    /// Returns [`Error::UnparseableCoordinate`] if either string is not a
    /// decimal number.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        let latitude = Decimal::from_str(latitude)
            .map_err(|_| Error::unparseable_coordinate(latitude))?;
        let longitude = Decimal::from_str(longitude)
            .map_err(|_| Error::unparseable_coordinate(longitude))?;
        Ok(Self::new(latitude, longitude))
    }

    /// Gets the latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> Decimal {
        self.latitude
    }

    /// Gets the longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> Decimal {
        self.longitude
    }
}

/// Solar zenith distance defining a sunrise/sunset variant, in degrees.
///
/// The zenith is the angular distance of the sun's center from directly
/// overhead at the moment of the event; values above 90° put the sun below
/// the horizon. Four named constants cover the standard twilight
/// definitions, and [`Zenith::from_elevation`] builds arbitrary angles.
///
/// # Example
/// ```
/// use rust_decimal_macros::dec;
/// use sunrise_sunset::Zenith;
///
/// assert_eq!(Zenith::CIVIL.degrees(), dec!(96));
/// // "Civil" is the sun 6 degrees below the horizon:
/// assert_eq!(Zenith::from_elevation(dec!(-6)), Zenith::CIVIL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zenith(Decimal);

impl Zenith {
    /// Astronomical sunrise/sunset: the sun is 18° below the horizon.
    pub const ASTRONOMICAL: Self = Self(dec!(108));

    /// Nautical sunrise/sunset: the sun is 12° below the horizon.
    pub const NAUTICAL: Self = Self(dec!(102));

    /// Civil sunrise/sunset (dawn/dusk): the sun is 6° below the horizon.
    pub const CIVIL: Self = Self(dec!(96));

    /// Official sunrise/sunset: the sun's upper limb touches the horizon,
    /// i.e. its center is 50 arc minutes (0.8333°) below it.
    pub const OFFICIAL: Self = Self(dec!(90.8333));

    /// Creates a zenith for an arbitrary sun elevation angle in degrees
    /// (negative below the horizon): `zenith = 90 − elevation`.
    #[must_use]
    pub fn from_elevation(elevation_degrees: Decimal) -> Self {
        Self(dec!(90) - elevation_degrees)
    }

    /// Gets the zenith distance in degrees.
    #[must_use]
    pub const fn degrees(&self) -> Decimal {
        self.0
    }
}

/// The solar event to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Morning crossing of the zenith angle.
    Sunrise,
    /// Evening crossing of the zenith angle.
    Sunset,
}

impl SolarEvent {
    /// Approximate local event hour used to index into the solar position
    /// model (6h for sunrise, 18h for sunset).
    pub(crate) fn longitude_hour_offset(self) -> Decimal {
        match self {
            Self::Sunrise => dec!(6),
            Self::Sunset => dec!(18),
        }
    }
}
