//! Convenience façade over the sunrise/sunset engine.
//!
//! [`SunriseSunsetCalculator`] binds one location and time zone and exposes
//! named operations for each standard zenith; the free functions at the
//! bottom cover one-shot queries at arbitrary elevation angles. The legacy
//! `"99:99"` sentinel from the original algorithm survives only in
//! [`format_event_time`], kept for output compatibility; the typed API is
//! `Option`-based throughout.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::types::{GeoCoordinate, SolarEvent, Zenith};
use crate::usno::SolarEventCalculator;
use crate::zone::ZoneRules;

/// Legacy stand-in for "the event does not occur on this date".
pub const NO_EVENT_SENTINEL: &str = "99:99";

/// Formats an event time as zero-padded 24-hour `"HH:MM"`, or the legacy
/// [`NO_EVENT_SENTINEL`] when the event does not occur.
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use sunrise_sunset::format_event_time;
///
/// let time = NaiveTime::from_hms_opt(5, 25, 0);
/// assert_eq!(format_event_time(time), "05:25");
/// assert_eq!(format_event_time(None), "99:99");
/// ```
#[must_use]
pub fn format_event_time(time: Option<NaiveTime>) -> String {
    use chrono::Timelike;

    time.map_or_else(
        || NO_EVENT_SENTINEL.to_string(),
        |t| format!("{:02}:{:02}", t.hour(), t.minute()),
    )
}

/// Sunrise/sunset calculator for a fixed location and time zone.
///
/// Wraps a [`SolarEventCalculator`] and names each of the four standard
/// zeniths. All operations are pure; the calculator can be reused for any
/// number of dates and shared across threads.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use sunrise_sunset::{GeoCoordinate, SunriseSunsetCalculator};
///
/// let calculator = SunriseSunsetCalculator::new(
///     GeoCoordinate::new(dec!(40.7128), dec!(-74.0060)),
///     chrono_tz::America::New_York,
/// );
/// let date = NaiveDate::from_ymd_opt(2020, 6, 21).unwrap();
///
/// // Civil dawn precedes official sunrise.
/// let dawn = calculator.civil_sunrise(date).unwrap();
/// let sunrise = calculator.official_sunrise(date).unwrap();
/// assert!(dawn < sunrise);
/// ```
#[derive(Debug, Clone)]
pub struct SunriseSunsetCalculator<Z> {
    calculator: SolarEventCalculator<Z>,
}

impl<Z: ZoneRules> SunriseSunsetCalculator<Z> {
    /// Creates a calculator bound to the given location and time zone.
    #[must_use]
    pub const fn new(location: GeoCoordinate, zone: Z) -> Self {
        Self {
            calculator: SolarEventCalculator::new(location, zone),
        }
    }

    /// Gets the location sunrise/sunset is computed for.
    #[must_use]
    pub const fn location(&self) -> GeoCoordinate {
        self.calculator.location()
    }

    /// Astronomical (108°) sunrise for the given date.
    #[must_use]
    pub fn astronomical_sunrise(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.calculator
            .event_time(Zenith::ASTRONOMICAL, date, SolarEvent::Sunrise)
    }

    /// Astronomical (108°) sunrise for the given date, as a timestamp.
    #[must_use]
    pub fn astronomical_sunrise_datetime(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.calculator
            .event_datetime(Zenith::ASTRONOMICAL, date, SolarEvent::Sunrise)
    }

    /// Astronomical (108°) sunset for the given date.
    #[must_use]
    pub fn astronomical_sunset(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.calculator
            .event_time(Zenith::ASTRONOMICAL, date, SolarEvent::Sunset)
    }

    /// Astronomical (108°) sunset for the given date, as a timestamp.
    #[must_use]
    pub fn astronomical_sunset_datetime(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.calculator
            .event_datetime(Zenith::ASTRONOMICAL, date, SolarEvent::Sunset)
    }

    /// Nautical (102°) sunrise for the given date.
    #[must_use]
    pub fn nautical_sunrise(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.calculator
            .event_time(Zenith::NAUTICAL, date, SolarEvent::Sunrise)
    }

    /// Nautical (102°) sunrise for the given date, as a timestamp.
    #[must_use]
    pub fn nautical_sunrise_datetime(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.calculator
            .event_datetime(Zenith::NAUTICAL, date, SolarEvent::Sunrise)
    }

    /// Nautical (102°) sunset for the given date.
    #[must_use]
    pub fn nautical_sunset(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.calculator
            .event_time(Zenith::NAUTICAL, date, SolarEvent::Sunset)
    }

    /// Nautical (102°) sunset for the given date, as a timestamp.
    #[must_use]
    pub fn nautical_sunset_datetime(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.calculator
            .event_datetime(Zenith::NAUTICAL, date, SolarEvent::Sunset)
    }

    /// Civil (96°) sunrise (dawn) for the given date.
    #[must_use]
    pub fn civil_sunrise(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.calculator
            .event_time(Zenith::CIVIL, date, SolarEvent::Sunrise)
    }

    /// Civil (96°) sunrise for the given date, as a timestamp.
    #[must_use]
    pub fn civil_sunrise_datetime(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.calculator
            .event_datetime(Zenith::CIVIL, date, SolarEvent::Sunrise)
    }

    /// Civil (96°) sunset (dusk) for the given date.
    #[must_use]
    pub fn civil_sunset(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.calculator
            .event_time(Zenith::CIVIL, date, SolarEvent::Sunset)
    }

    /// Civil (96°) sunset for the given date, as a timestamp.
    #[must_use]
    pub fn civil_sunset_datetime(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.calculator
            .event_datetime(Zenith::CIVIL, date, SolarEvent::Sunset)
    }

    /// Official (90.8333°) sunrise for the given date.
    #[must_use]
    pub fn official_sunrise(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.calculator
            .event_time(Zenith::OFFICIAL, date, SolarEvent::Sunrise)
    }

    /// Official (90.8333°) sunrise for the given date, as a timestamp.
    #[must_use]
    pub fn official_sunrise_datetime(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.calculator
            .event_datetime(Zenith::OFFICIAL, date, SolarEvent::Sunrise)
    }

    /// Official (90.8333°) sunset for the given date.
    #[must_use]
    pub fn official_sunset(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.calculator
            .event_time(Zenith::OFFICIAL, date, SolarEvent::Sunset)
    }

    /// Official (90.8333°) sunset for the given date, as a timestamp.
    #[must_use]
    pub fn official_sunset_datetime(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.calculator
            .event_datetime(Zenith::OFFICIAL, date, SolarEvent::Sunset)
    }
}

/// Computes sunrise for an arbitrary sun elevation angle, in one shot.
///
/// Degrees below the horizon are negative; for example, civil dawn
/// corresponds to an elevation of −6°.
#[must_use]
pub fn sunrise_at<Z: ZoneRules>(
    latitude: Decimal,
    longitude: Decimal,
    zone: Z,
    date: NaiveDate,
    elevation_degrees: Decimal,
) -> Option<DateTime<FixedOffset>> {
    SolarEventCalculator::new(GeoCoordinate::new(latitude, longitude), zone).event_datetime(
        Zenith::from_elevation(elevation_degrees),
        date,
        SolarEvent::Sunrise,
    )
}

/// Computes sunset for an arbitrary sun elevation angle, in one shot.
///
/// Degrees below the horizon are negative; for example, civil dusk
/// corresponds to an elevation of −6°.
#[must_use]
pub fn sunset_at<Z: ZoneRules>(
    latitude: Decimal,
    longitude: Decimal,
    zone: Z,
    date: NaiveDate,
    elevation_degrees: Decimal,
) -> Option<DateTime<FixedOffset>> {
    SolarEventCalculator::new(GeoCoordinate::new(latitude, longitude), zone).event_datetime(
        Zenith::from_elevation(elevation_degrees),
        date,
        SolarEvent::Sunset,
    )
}
