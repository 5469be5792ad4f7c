//! Percentage geometry for bars and line series.
//!
//! Positions and widths are percentages of the total timeline width, in the
//! same unit as the header's time scale. Mixing units between the header
//! and geometry silently produces wrong percentages, so both always come
//! from one `TimeScale`. Values are deliberately not clamped to [0, 100]:
//! out-of-range results signal a task outside the declared range, which the
//! presentation layer may clip visually.

use chrono::NaiveDateTime;

use crate::layout::duration::{total_duration, units_between};
use crate::model::{TimeUnit, TimelineRange};

/// Left offset and width as percentages of total timeline width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub left_pct: f64,
    pub width_pct: f64,
}

/// Left-offset percentage of `t` within `range`.
///
/// Precondition: `range` is non-degenerate; a zero total duration yields
/// NaN/infinite values here rather than an error.
pub fn position(t: NaiveDateTime, range: &TimelineRange, unit: TimeUnit) -> f64 {
    units_between(range.start, t, unit) as f64 / total_duration(range, unit) as f64 * 100.0
}

/// Width percentage of the span `start..end` within `range`.
pub fn span(
    start: NaiveDateTime,
    end: NaiveDateTime,
    range: &TimelineRange,
    unit: TimeUnit,
) -> f64 {
    units_between(start, end, unit) as f64 / total_duration(range, unit) as f64 * 100.0
}

/// Geometry for a bar task.
pub fn bar_geometry(
    start: NaiveDateTime,
    end: NaiveDateTime,
    range: &TimelineRange,
    unit: TimeUnit,
) -> Geometry {
    Geometry {
        left_pct: position(start, range, unit),
        width_pct: span(start, end, range, unit),
    }
}

/// Geometry for a line series, anchored on the first and last timestamp in
/// input order (not min/max — order in the input matters).
pub fn series_geometry(dates: &[NaiveDateTime], range: &TimelineRange, unit: TimeUnit) -> Geometry {
    match (dates.first(), dates.last()) {
        (Some(&first), Some(&last)) => Geometry {
            left_pct: position(first, range, unit),
            width_pct: span(first, last, range, unit),
        },
        _ => Geometry::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn day_range() -> TimelineRange {
        TimelineRange::new(dt(1, 0), dt(2, 0))
    }

    #[test]
    fn quarter_day_task_sits_at_25_percent() {
        let range = day_range();
        let geo = bar_geometry(dt(1, 6), dt(1, 12), &range, TimeUnit::Hours);
        assert_eq!(geo.left_pct, 25.0);
        assert_eq!(geo.width_pct, 25.0);
    }

    #[test]
    fn in_range_tasks_stay_within_bounds() {
        let range = day_range();
        let cases = [
            (dt(1, 0), dt(2, 0)),
            (dt(1, 3), dt(1, 9)),
            (dt(1, 23), dt(2, 0)),
        ];
        for (start, end) in cases {
            let geo = bar_geometry(start, end, &range, TimeUnit::Hours);
            assert!(geo.left_pct >= 0.0 && geo.left_pct <= 100.0);
            assert!(geo.left_pct + geo.width_pct <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        let range = day_range();
        let before = position(dt(1, 0) - chrono::Duration::hours(6), &range, TimeUnit::Hours);
        assert_eq!(before, -25.0);
        let after = position(dt(2, 12), &range, TimeUnit::Hours);
        assert_eq!(after, 150.0);
    }

    #[test]
    fn series_uses_first_and_last_in_input_order() {
        let range = day_range();
        // Descending dates produce a negative width, passed through as-is.
        let geo = series_geometry(&[dt(1, 12), dt(1, 6)], &range, TimeUnit::Hours);
        assert_eq!(geo.left_pct, 50.0);
        assert_eq!(geo.width_pct, -25.0);
    }
}
