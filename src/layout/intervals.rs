//! Header column generation.
//!
//! The header is an ordered sequence of column boundaries stepped from the
//! range start. Column width adapts to the container but never drops below
//! a minimum; any excess over the container width is what makes the
//! timeline horizontally scrollable.

use chrono::NaiveDateTime;

use crate::layout::duration::checked_add_units;
use crate::model::{TimeScale, TimelineRange};

/// Narrowest a header column may get and still be readable.
pub const MIN_COLUMN_WIDTH: f32 = 100.0;

/// One header column: its boundary instant and the formatted label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub boundary: NaiveDateTime,
    pub label: String,
}

/// Generate the ordered header columns for `range` at the given scale.
///
/// Starting at `range.start`, each step adds `scale.value` units and emits
/// a column while the running boundary passes the inclusive `<= range.end`
/// test. When the range is not an exact multiple of the step, the trailing
/// partial step is not emitted and that remainder of the range stays
/// unlabeled. This is documented behavior, not a bug.
pub fn generate(range: &TimelineRange, scale: &TimeScale) -> Vec<Interval> {
    let mut intervals = Vec::new();
    if scale.value == 0 {
        return intervals;
    }
    let step = i64::from(scale.value);
    for i in 1.. {
        // Step from the range start each time so month clamping never
        // drifts across iterations. A step past chrono's date ceiling ends
        // the header; the saturating add would stop advancing and spin.
        let Some(boundary) = checked_add_units(range.start, i * step, scale.unit) else {
            break;
        };
        if boundary > range.end {
            break;
        }
        intervals.push(Interval {
            boundary,
            label: boundary.format(&scale.format).to_string(),
        });
    }
    intervals
}

/// Column width for the generated intervals: an even share of the container
/// but never narrower than `min_width`.
pub fn column_width(container_width: f32, interval_count: usize, min_width: f32) -> f32 {
    if interval_count == 0 {
        return min_width;
    }
    (container_width / interval_count as f32).max(min_width)
}

/// Total rendered width of the header and timeline body. May exceed the
/// container width; the excess is the scrollable region.
pub fn total_width(column_width: f32, interval_count: usize) -> f32 {
    column_width * interval_count as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeUnit;
    use chrono::NaiveDate;

    fn dt(d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn full_day_of_hours_yields_24_columns() {
        let range = TimelineRange::new(dt(1, 0, 0), dt(2, 0, 0));
        let scale = TimeScale::new(TimeUnit::Hours, 1, "%H:%M");
        let intervals = generate(&range, &scale);
        assert_eq!(intervals.len(), 24);
        assert_eq!(intervals[0].label, "01:00");
        // The boundary landing exactly on the range end is included.
        assert_eq!(intervals[23].boundary, range.end);
    }

    #[test]
    fn trailing_partial_step_is_dropped() {
        // 72 minutes at 15-minute steps: the 12-minute remainder past 15:00
        // gets no column.
        let range = TimelineRange::new(dt(1, 14, 0), dt(1, 15, 12));
        let scale = TimeScale::new(TimeUnit::Minutes, 15, "%H:%M");
        let labels: Vec<_> = generate(&range, &scale)
            .into_iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(labels, ["14:15", "14:30", "14:45", "15:00"]);
    }

    #[test]
    fn zero_step_produces_no_columns() {
        let range = TimelineRange::new(dt(1, 0, 0), dt(2, 0, 0));
        let scale = TimeScale::new(TimeUnit::Hours, 0, "%H:%M");
        assert!(generate(&range, &scale).is_empty());
    }

    #[test]
    fn range_at_the_date_ceiling_terminates() {
        // Month steps from here overflow chrono's range before passing the
        // end, so the generator must stop at the ceiling rather than loop.
        let end = NaiveDateTime::MAX;
        let range = TimelineRange::new(end - chrono::Duration::days(40), end);
        let scale = TimeScale::new(TimeUnit::Months, 1, "%Y-%m");
        let intervals = generate(&range, &scale);
        assert_eq!(intervals.len(), 1);
        assert!(intervals[0].boundary <= range.end);
    }

    #[test]
    fn column_width_is_an_even_share_until_the_minimum_bites() {
        assert_eq!(column_width(2400.0, 24, 100.0), 100.0);
        assert_eq!(column_width(4800.0, 24, 100.0), 200.0);
        // 24 columns at min width no longer fit in 1200px.
        assert_eq!(column_width(1200.0, 24, 100.0), 100.0);
    }

    #[test]
    fn total_width_covers_the_container_or_overflows_it() {
        let container = 1200.0;
        let count = 24;
        let min = 100.0;
        let w = column_width(container, count, min);
        let total = total_width(w, count);
        assert_eq!(total, w * count as f32);
        // min-width clamp engaged, so the timeline overflows and scrolls.
        assert!(count as f32 * min > container);
        assert!(total >= container);
    }
}
