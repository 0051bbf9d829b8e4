//! Regression tests covering tricky sunrise/sunset edge cases.

use chrono::{Datelike, FixedOffset, NaiveDate, Timelike};
use rust_decimal_macros::dec;
use sunrise_sunset::{
    format_event_time, GeoCoordinate, SolarEvent, SolarEventCalculator, SunriseSunsetCalculator,
    Zenith,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn polar_day_and_night_yield_no_event() {
    // Longyearbyen, well above the Arctic Circle.
    let calculator = SunriseSunsetCalculator::new(
        GeoCoordinate::new(dec!(78.0), dec!(15.0)),
        chrono_tz::Arctic::Longyearbyen,
    );

    let midsummer = date(2020, 6, 21);
    assert_eq!(calculator.official_sunrise(midsummer), None);
    assert_eq!(calculator.official_sunset(midsummer), None);
    assert_eq!(calculator.official_sunset_datetime(midsummer), None);
    assert_eq!(format_event_time(calculator.official_sunset(midsummer)), "99:99");

    let midwinter = date(2020, 12, 21);
    assert_eq!(calculator.official_sunrise(midwinter), None);
    assert_eq!(calculator.official_sunset(midwinter), None);
}

#[test]
fn deep_zenith_vanishes_before_shallow_ones() {
    // London around the solstice: the sun never gets 18° below the horizon,
    // so astronomical twilight has no start or end, while nautical and
    // shallower events still occur.
    let calculator = SunriseSunsetCalculator::new(
        GeoCoordinate::new(dec!(51.5074), dec!(-0.1278)),
        chrono_tz::Europe::London,
    );
    let solstice = date(2020, 6, 21);

    assert_eq!(calculator.astronomical_sunrise(solstice), None);
    assert_eq!(calculator.astronomical_sunset(solstice), None);
    assert!(calculator.nautical_sunrise(solstice).is_some());
    assert!(calculator.civil_sunrise(solstice).is_some());
    assert!(calculator.official_sunrise(solstice).is_some());
}

#[test]
fn daylight_saving_adds_exactly_one_hour() {
    let location = GeoCoordinate::new(dec!(40.7128), dec!(-74.0060));
    let summer = date(2020, 6, 21);

    // Same location and standard offset, with and without DST rules.
    let with_dst = SolarEventCalculator::new(location, chrono_tz::America::New_York);
    let standard_only =
        SolarEventCalculator::new(location, FixedOffset::west_opt(5 * 3600).unwrap());

    let dst_sunrise = with_dst
        .event_time(Zenith::OFFICIAL, summer, SolarEvent::Sunrise)
        .unwrap();
    let std_sunrise = standard_only
        .event_time(Zenith::OFFICIAL, summer, SolarEvent::Sunrise)
        .unwrap();

    let dst_minutes = i64::from(dst_sunrise.hour()) * 60 + i64::from(dst_sunrise.minute());
    let std_minutes = i64::from(std_sunrise.hour()) * 60 + i64::from(std_sunrise.minute());
    assert_eq!((std_minutes + 60).rem_euclid(24 * 60), dst_minutes);
}

#[test]
fn winter_matches_plain_standard_offset() {
    let location = GeoCoordinate::new(dec!(40.7128), dec!(-74.0060));
    let winter = date(2020, 1, 21);

    let named_zone = SolarEventCalculator::new(location, chrono_tz::America::New_York);
    let fixed = SolarEventCalculator::new(location, FixedOffset::west_opt(5 * 3600).unwrap());

    assert_eq!(
        named_zone.event_time(Zenith::OFFICIAL, winter, SolarEvent::Sunrise),
        fixed.event_time(Zenith::OFFICIAL, winter, SolarEvent::Sunrise)
    );
    assert_eq!(
        named_zone.event_time(Zenith::OFFICIAL, winter, SolarEvent::Sunset),
        fixed.event_time(Zenith::OFFICIAL, winter, SolarEvent::Sunset)
    );
}

#[test]
fn negative_local_mean_time_shifts_timestamp_back_a_day() {
    // Far-eastern longitude evaluated against UTC: the sunrise falls before
    // UTC midnight, so the timestamp lands on the preceding calendar day
    // while the clock time simply wraps.
    let calculator = SolarEventCalculator::new(
        GeoCoordinate::new(dec!(0), dec!(179.0)),
        chrono::Utc,
    );
    let query_date = date(2020, 6, 21);

    let time = calculator
        .event_time(Zenith::OFFICIAL, query_date, SolarEvent::Sunrise)
        .unwrap();
    let timestamp = calculator
        .event_datetime(Zenith::OFFICIAL, query_date, SolarEvent::Sunrise)
        .unwrap();

    assert_eq!(timestamp.date_naive(), query_date.pred_opt().unwrap());
    assert_eq!(timestamp.hour(), time.hour());
    assert_eq!(timestamp.minute(), time.minute());
    assert!(time.hour() >= 12, "wrapped time should fall in the evening");
}

#[test]
fn timestamp_offset_reflects_applied_correction() {
    let location = GeoCoordinate::new(dec!(40.7128), dec!(-74.0060));
    let calculator = SolarEventCalculator::new(location, chrono_tz::America::New_York);

    // Summer: standard −5h plus the DST hour.
    let summer = calculator
        .event_datetime(Zenith::OFFICIAL, date(2020, 6, 21), SolarEvent::Sunrise)
        .unwrap();
    assert_eq!(summer.offset().local_minus_utc(), -4 * 3600);

    // Winter: standard offset only.
    let winter = calculator
        .event_datetime(Zenith::OFFICIAL, date(2020, 1, 21), SolarEvent::Sunrise)
        .unwrap();
    assert_eq!(winter.offset().local_minus_utc(), -5 * 3600);

    // The date component is preserved from the query.
    assert_eq!(summer.day(), 21);
    assert_eq!(summer.month(), 6);
}

#[test]
fn every_day_of_year_is_total() {
    // No date may panic or error for any zenith; absent events are None.
    let calculator = SunriseSunsetCalculator::new(
        GeoCoordinate::new(dec!(66.56), dec!(25.85)), // Rovaniemi, at the Arctic Circle
        chrono_tz::Europe::Helsinki,
    );

    let mut day = date(2020, 1, 1);
    for _ in 0..366 {
        let _ = calculator.astronomical_sunrise(day);
        let _ = calculator.nautical_sunrise(day);
        let _ = calculator.civil_sunset(day);
        let _ = calculator.official_sunset(day);
        let _ = calculator.official_sunrise_datetime(day);
        day = day.succ_opt().unwrap();
    }
}
