//! Time zone seam for the sunrise/sunset pipeline.
//!
//! The algorithm needs exactly two facts about a time zone on a given date:
//! its standard (non-DST) UTC offset in whole hours, and whether daylight
//! saving is in effect. [`ZoneRules`] captures that contract; named IANA
//! zones from `chrono-tz` implement it, as do fixed offsets and UTC.

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

/// Per-date UTC offset and daylight-saving information for a time zone.
///
/// The standard offset is truncated toward zero to whole hours, and the
/// daylight-saving correction is applied as a flat extra hour by the
/// calculator, matching the reference algorithm. Implement this trait to
/// supply custom offset rules.
pub trait ZoneRules {
    /// Standard (non-DST) UTC offset on the given date, in whole hours.
    fn standard_offset_hours(&self, date: NaiveDate) -> i64;

    /// Whether daylight saving time is in effect on the given date.
    fn is_daylight_saving(&self, date: NaiveDate) -> bool;
}

impl ZoneRules for Tz {
    fn standard_offset_hours(&self, date: NaiveDate) -> i64 {
        self.offset_from_utc_date(&date)
            .base_utc_offset()
            .num_hours()
    }

    fn is_daylight_saving(&self, date: NaiveDate) -> bool {
        !self.offset_from_utc_date(&date).dst_offset().is_zero()
    }
}

impl ZoneRules for FixedOffset {
    fn standard_offset_hours(&self, _date: NaiveDate) -> i64 {
        i64::from(self.local_minus_utc() / 3600)
    }

    fn is_daylight_saving(&self, _date: NaiveDate) -> bool {
        false
    }
}

impl ZoneRules for Utc {
    fn standard_offset_hours(&self, _date: NaiveDate) -> i64 {
        0
    }

    fn is_daylight_saving(&self, _date: NaiveDate) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;
    use chrono_tz::Asia::Kathmandu;
    use chrono_tz::Australia::Lord_Howe;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_named_zone_standard_offset_ignores_dst() {
        // New York standard offset stays -5 whether or not DST is in effect.
        assert_eq!(New_York.standard_offset_hours(date(2020, 6, 21)), -5);
        assert_eq!(New_York.standard_offset_hours(date(2020, 1, 21)), -5);
    }

    #[test]
    fn test_named_zone_dst_predicate() {
        assert!(New_York.is_daylight_saving(date(2020, 6, 21)));
        assert!(!New_York.is_daylight_saving(date(2020, 1, 21)));
    }

    #[test]
    fn test_fractional_offsets_truncate_toward_zero() {
        // Kathmandu is UTC+5:45, Lord Howe UTC+10:30 standard.
        assert_eq!(Kathmandu.standard_offset_hours(date(2020, 6, 21)), 5);
        assert_eq!(Lord_Howe.standard_offset_hours(date(2020, 1, 21)), 10);
    }

    #[test]
    fn test_fixed_offset_and_utc() {
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(minus_five.standard_offset_hours(date(2020, 6, 21)), -5);
        assert!(!minus_five.is_daylight_saving(date(2020, 6, 21)));

        assert_eq!(Utc.standard_offset_hours(date(2020, 6, 21)), 0);
        assert!(!Utc.is_daylight_saving(date(2020, 6, 21)));
    }
}
