use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::GanttError;

/// Calendar unit used for header intervals and all duration math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

/// Controls the granularity and labelling of the timeline header.
///
/// `value` is the step size in `unit`s between two header columns and
/// `format` is a chrono strftime string applied to each column boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeScale {
    pub unit: TimeUnit,
    pub value: u32,
    pub format: String,
}

impl TimeScale {
    pub fn new(unit: TimeUnit, value: u32, format: impl Into<String>) -> Self {
        Self {
            unit,
            value,
            format: format.into(),
        }
    }

    /// A zero step would never advance past the range start.
    pub fn validate(&self) -> Result<(), GanttError> {
        if self.value == 0 {
            return Err(GanttError::InvalidStep);
        }
        Ok(())
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(TimeUnit::Hours, 1, "%H:%M")
    }
}

/// The start/end instants bounding the whole visualization.
///
/// Geometry is only meaningful when `end > start`; the duration helpers in
/// `layout` do not guard against a zero total duration themselves, so
/// callers go through [`TimelineRange::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimelineRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn validate(&self) -> Result<(), GanttError> {
        if self.end <= self.start {
            return Err(GanttError::DegenerateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}
