//! Sunrise/Sunset Algorithm implementation.
//!
//! Implements the classic US Naval Observatory sunrise/sunset formula in
//! fixed-precision decimal arithmetic. Every multiply and divide is rounded
//! to four fractional digits with round-half-to-even, so results agree with
//! published almanac tables and are bit-identical across platforms.
//!
//! Reference: Almanac for Computers (1990), Nautical Almanac Office,
//! United States Naval Observatory, as described in
//! <https://edwilliams.org/sunrise_sunset_algorithm.htm>

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::math::{
    acos, atan, cos, cos_of_asin, divide, multiply, scaled, sin, tan, to_degrees, to_radians,
};
use crate::types::{GeoCoordinate, SolarEvent, Zenith};
use crate::zone::ZoneRules;

const HOURS_PER_DAY: Decimal = dec!(24);
const DEGREES_PER_HOUR: Decimal = dec!(15);
const FULL_CIRCLE: Decimal = dec!(360);
const QUADRANT: Decimal = dec!(90);

/// Stateless sunrise/sunset engine bound to one coordinate and time zone.
///
/// Each query is a pure function of the date, zenith, and event kind: the
/// calculator holds no mutable state and never mutates its inputs, so one
/// instance can be shared freely across threads.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use sunrise_sunset::{GeoCoordinate, SolarEvent, SolarEventCalculator, Zenith};
///
/// let calculator = SolarEventCalculator::new(
///     GeoCoordinate::new(dec!(40.7128), dec!(-74.0060)),
///     chrono_tz::America::New_York,
/// );
/// let date = NaiveDate::from_ymd_opt(2020, 6, 21).unwrap();
///
/// let sunrise = calculator.event_time(Zenith::OFFICIAL, date, SolarEvent::Sunrise);
/// assert!(sunrise.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SolarEventCalculator<Z> {
    location: GeoCoordinate,
    zone: Z,
}

impl<Z: ZoneRules> SolarEventCalculator<Z> {
    /// Creates a calculator for the given location and time zone.
    #[must_use]
    pub const fn new(location: GeoCoordinate, zone: Z) -> Self {
        Self { location, zone }
    }

    /// Gets the location this calculator is bound to.
    #[must_use]
    pub const fn location(&self) -> GeoCoordinate {
        self.location
    }

    /// Computes the local clock time of the event, or `None` when the sun
    /// never reaches the requested zenith on that date (polar day/night).
    #[must_use]
    pub fn event_time(
        &self,
        zenith: Zenith,
        date: NaiveDate,
        event: SolarEvent,
    ) -> Option<NaiveTime> {
        let local_time = self.compute_event(zenith, date, event)?;
        let clock = split_clock_time(local_time);
        NaiveTime::from_hms_opt(clock.hour, clock.minute, 0)
    }

    /// Computes the event as a full timestamp on the given date, or `None`
    /// when the event does not occur.
    ///
    /// The result carries the offset the calculation actually applied (the
    /// zone's standard hours plus one hour when daylight saving is in
    /// effect). When the raw local mean time falls before midnight, the date
    /// component is the preceding day.
    #[must_use]
    pub fn event_datetime(
        &self,
        zenith: Zenith,
        date: NaiveDate,
        event: SolarEvent,
    ) -> Option<DateTime<FixedOffset>> {
        let local_time = self.compute_event(zenith, date, event)?;
        let clock = split_clock_time(local_time);
        let day = if clock.shifted_back {
            date.pred_opt()?
        } else {
            date
        };

        let offset_hours = self.zone.standard_offset_hours(date)
            + i64::from(self.zone.is_daylight_saving(date));
        let offset = FixedOffset::east_opt(i32::try_from(offset_hours).ok()? * 3600)?;
        let naive = day.and_hms_opt(clock.hour, clock.minute, 0)?;
        offset.from_local_datetime(&naive).single()
    }

    /// Runs the ten-stage pipeline, producing the local clock time in
    /// fractional hours, or `None` when the event does not occur.
    fn compute_event(
        &self,
        zenith: Zenith,
        date: NaiveDate,
        event: SolarEvent,
    ) -> Option<Decimal> {
        let longitude_hour = self.longitude_hour(date, event);
        let mean_anomaly = mean_anomaly(longitude_hour);
        let sun_true_long = sun_true_longitude(mean_anomaly);
        let cos_local_hour = self.cosine_sun_local_hour(sun_true_long, zenith);
        if cos_local_hour < dec!(-1) || cos_local_hour > Decimal::ONE {
            return None;
        }
        let sun_local_hour = sun_local_hour(cos_local_hour, event);
        let local_mean_time = local_mean_time(sun_true_long, longitude_hour, sun_local_hour);
        Some(self.local_time(local_mean_time, date))
    }

    /// Base longitude hour, lngHour in the algorithm: longitude / 15.
    fn base_longitude_hour(&self) -> Decimal {
        divide(self.location.longitude(), DEGREES_PER_HOUR)
    }

    /// Longitudinal time, t in the algorithm: day of year plus the
    /// approximate event hour corrected for longitude.
    fn longitude_hour(&self, date: NaiveDate, event: SolarEvent) -> Decimal {
        let dividend = event.longitude_hour_offset() - self.base_longitude_hour();
        let addend = divide(dividend, HOURS_PER_DAY);
        scaled(Decimal::from(date.ordinal()) + addend)
    }

    /// cos(H), the cosine of the sun's local hour angle at the requested
    /// zenith. Values outside [-1, 1] mean the event does not occur.
    fn cosine_sun_local_hour(&self, sun_true_long: Decimal, zenith: Zenith) -> Decimal {
        let sin_declination = sin_of_sun_declination(sun_true_long);
        let cos_declination = cos_of_asin(sin_declination);

        let cos_zenith = cos(to_radians(zenith.degrees()));
        let sin_latitude = sin(to_radians(self.location.latitude()));
        let cos_latitude = cos(to_radians(self.location.latitude()));

        let dividend = cos_zenith - sin_declination * sin_latitude;
        let divisor = cos_declination * cos_latitude;
        divide(dividend, divisor)
    }

    /// UTC conversion and zone correction: subtracts the base longitude
    /// hour, adds the zone's whole-hour standard offset, and adds one hour
    /// when daylight saving is in effect, re-wrapping past 24.
    fn local_time(&self, local_mean_time: Decimal, date: NaiveDate) -> Decimal {
        let utc_time = local_mean_time - self.base_longitude_hour();
        let offset = Decimal::from(self.zone.standard_offset_hours(date));
        let mut local_time = utc_time + offset;
        if self.zone.is_daylight_saving(date) {
            local_time += Decimal::ONE;
        }
        if local_time > HOURS_PER_DAY {
            local_time -= HOURS_PER_DAY;
        }
        local_time
    }
}

/// Mean anomaly of the sun, M: 0.9856·t − 3.289.
fn mean_anomaly(longitude_hour: Decimal) -> Decimal {
    scaled(multiply(dec!(0.9856), longitude_hour) - dec!(3.289))
}

/// True longitude of the sun, L, wrapped into [0, 360).
fn sun_true_longitude(mean_anomaly: Decimal) -> Decimal {
    let sin_mean_anomaly = sin(to_radians(mean_anomaly));
    let sin_double_mean_anomaly = sin(multiply(to_radians(mean_anomaly), dec!(2)));

    let first_part = mean_anomaly + multiply(sin_mean_anomaly, dec!(1.916));
    let second_part = multiply(sin_double_mean_anomaly, dec!(0.020)) + dec!(282.634);
    let mut true_longitude = first_part + second_part;
    if true_longitude > FULL_CIRCLE {
        true_longitude -= FULL_CIRCLE;
    }
    scaled(true_longitude)
}

/// Right ascension of the sun in hours, quadrant-adjusted to match L.
fn right_ascension(sun_true_long: Decimal) -> Decimal {
    let tan_l = tan(to_radians(sun_true_long));
    let inner = multiply(to_degrees(tan_l), dec!(0.91764));
    let mut right_ascension = scaled(to_degrees(atan(to_radians(inner))));
    if right_ascension < Decimal::ZERO {
        right_ascension += FULL_CIRCLE;
    } else if right_ascension > FULL_CIRCLE {
        right_ascension -= FULL_CIRCLE;
    }

    // Pull RA into the same 90° quadrant as L.
    let longitude_quadrant = (sun_true_long / QUADRANT).floor() * QUADRANT;
    let right_ascension_quadrant = (right_ascension / QUADRANT).floor() * QUADRANT;
    let augend = longitude_quadrant - right_ascension_quadrant;
    divide(right_ascension + augend, DEGREES_PER_HOUR)
}

/// sin(declination): 0.39782·sin(L).
fn sin_of_sun_declination(sun_true_long: Decimal) -> Decimal {
    scaled(sin(to_radians(sun_true_long)) * dec!(0.39782))
}

/// Local hour angle H in hours; mirrored through 360° for sunrise.
fn sun_local_hour(cosine_sun_local_hour: Decimal, event: SolarEvent) -> Decimal {
    let mut local_hour = to_degrees(acos(cosine_sun_local_hour));
    if event == SolarEvent::Sunrise {
        local_hour = FULL_CIRCLE - local_hour;
    }
    divide(local_hour, DEGREES_PER_HOUR)
}

/// Local mean time T: H + RA − 0.06571·t − 6.622, wrapped into [0, 24).
fn local_mean_time(
    sun_true_long: Decimal,
    longitude_hour: Decimal,
    sun_local_hour: Decimal,
) -> Decimal {
    let right_ascension = right_ascension(sun_true_long);
    let inner = longitude_hour * dec!(0.06571);
    let mut local_mean_time = sun_local_hour + right_ascension - inner - dec!(6.622);
    if local_mean_time < Decimal::ZERO {
        local_mean_time += HOURS_PER_DAY;
    } else if local_mean_time > HOURS_PER_DAY {
        local_mean_time -= HOURS_PER_DAY;
    }
    scaled(local_mean_time)
}

/// Clock fields derived from a fractional-hour local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockTime {
    hour: u32,
    minute: u32,
    /// The raw value was negative, so the timestamp form belongs to the
    /// previous calendar day.
    shifted_back: bool,
}

/// Splits fractional hours into clock fields. Minutes are rounded half to
/// even; a 60-minute result carries into the next hour, and hour 24 wraps
/// to 0.
fn split_clock_time(local_time: Decimal) -> ClockTime {
    let mut time = local_time;
    let shifted_back = time < Decimal::ZERO;
    if shifted_back {
        time += HOURS_PER_DAY;
    }

    let mut hour = time.trunc().to_u32().unwrap_or(0);
    let mut minute = (time.fract() * dec!(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_u32()
        .unwrap_or(0);
    if minute == 60 {
        minute = 0;
        hour += 1;
    }
    if hour == 24 {
        hour = 0;
    }

    ClockTime {
        hour,
        minute,
        shifted_back,
    }
}
