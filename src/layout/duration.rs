//! Whole-unit duration math shared by the header, bar, and line geometry.
//!
//! All counts are signed and truncate toward zero, consistent with calendar
//! arithmetic: "months between" respects calendar month boundaries rather
//! than fixed 30-day blocks.

use chrono::{Datelike, Duration, Months, NaiveDateTime};

use crate::model::{TimeUnit, TimelineRange};

/// Signed number of whole `unit`s from `a` to `b`.
pub fn units_between(a: NaiveDateTime, b: NaiveDateTime, unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Minutes => (b - a).num_minutes(),
        TimeUnit::Hours => (b - a).num_hours(),
        TimeUnit::Days => (b - a).num_days(),
        TimeUnit::Weeks => (b - a).num_weeks(),
        TimeUnit::Months => months_between(a, b),
    }
}

/// Step `t` by `n` whole units, saturating at `t` when the result would
/// leave chrono's representable date range. Month steps clamp the day of
/// month the way calendar libraries do (Jan 31 + 1 month = Feb 28/29).
pub fn add_units(t: NaiveDateTime, n: i64, unit: TimeUnit) -> NaiveDateTime {
    checked_add_units(t, n, unit).unwrap_or(t)
}

/// Checked variant of [`add_units`]: `None` when the result would leave the
/// representable date range. Loops that step toward an open end must use
/// this one, since the saturating variant stops advancing at the ceiling.
pub fn checked_add_units(t: NaiveDateTime, n: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    match unit {
        TimeUnit::Minutes => t.checked_add_signed(Duration::try_minutes(n)?),
        TimeUnit::Hours => t.checked_add_signed(Duration::try_hours(n)?),
        TimeUnit::Days => t.checked_add_signed(Duration::try_days(n)?),
        TimeUnit::Weeks => t.checked_add_signed(Duration::try_weeks(n)?),
        TimeUnit::Months => {
            if n >= 0 {
                t.checked_add_months(Months::new(u32::try_from(n).ok()?))
            } else {
                t.checked_sub_months(Months::new(u32::try_from(-n).ok()?))
            }
        }
    }
}

/// Total timeline duration in whole units.
///
/// Zero for a degenerate range; every position/width computation divides by
/// this, so callers validate the range first rather than relying on a
/// special case here.
pub fn total_duration(range: &TimelineRange, unit: TimeUnit) -> i64 {
    units_between(range.start, range.end, unit)
}

/// Whole calendar months from `a` to `b`: the largest `n` such that
/// `a + n months` does not pass `b`.
fn months_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    if b < a {
        return -months_between(b, a);
    }
    let mut n = i64::from(b.year() - a.year()) * 12 + i64::from(b.month()) - i64::from(a.month());
    while n > 0 && add_units(a, n, TimeUnit::Months) > b {
        n -= 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn hours_and_minutes_truncate() {
        let a = dt(2024, 1, 1, 0, 0);
        assert_eq!(units_between(a, dt(2024, 1, 2, 0, 0), TimeUnit::Hours), 24);
        assert_eq!(units_between(a, dt(2024, 1, 1, 1, 59), TimeUnit::Hours), 1);
        assert_eq!(
            units_between(a, dt(2024, 1, 1, 1, 12), TimeUnit::Minutes),
            72
        );
    }

    #[test]
    fn counts_are_signed() {
        let a = dt(2024, 1, 1, 6, 0);
        let b = dt(2024, 1, 1, 0, 0);
        assert_eq!(units_between(a, b, TimeUnit::Hours), -6);
    }

    #[test]
    fn weeks_are_whole_seven_day_blocks() {
        let a = dt(2024, 1, 1, 0, 0);
        assert_eq!(units_between(a, dt(2024, 1, 14, 0, 0), TimeUnit::Weeks), 1);
        assert_eq!(units_between(a, dt(2024, 1, 15, 0, 0), TimeUnit::Weeks), 2);
    }

    #[test]
    fn months_respect_calendar_boundaries() {
        let a = dt(2024, 1, 15, 0, 0);
        assert_eq!(units_between(a, dt(2024, 3, 14, 0, 0), TimeUnit::Months), 1);
        assert_eq!(units_between(a, dt(2024, 3, 15, 0, 0), TimeUnit::Months), 2);
        assert_eq!(
            units_between(dt(2024, 3, 15, 0, 0), a, TimeUnit::Months),
            -2
        );
    }

    #[test]
    fn month_steps_clamp_day_of_month() {
        let jan31 = dt(2024, 1, 31, 12, 0);
        assert_eq!(add_units(jan31, 1, TimeUnit::Months), dt(2024, 2, 29, 12, 0));
        assert_eq!(add_units(jan31, 2, TimeUnit::Months), dt(2024, 3, 31, 12, 0));
    }

    #[test]
    fn checked_steps_fail_past_the_date_ceiling() {
        let near_max = NaiveDateTime::MAX - Duration::days(1);
        assert_eq!(checked_add_units(near_max, 2, TimeUnit::Days), None);
        assert_eq!(checked_add_units(near_max, 1, TimeUnit::Months), None);
        // The saturating variant stays put instead of wrapping.
        assert_eq!(add_units(near_max, 1, TimeUnit::Months), near_max);
    }

    #[test]
    fn total_duration_matches_units_between() {
        let range = TimelineRange::new(dt(2024, 1, 1, 0, 0), dt(2024, 1, 2, 0, 0));
        assert_eq!(total_duration(&range, TimeUnit::Hours), 24);
        assert_eq!(total_duration(&range, TimeUnit::Days), 1);
    }
}
