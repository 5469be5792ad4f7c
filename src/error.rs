use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors that abort a projection pass.
///
/// Nothing here is fatal to the process; the worst outcome is an empty
/// timeline for the frame in which the error occurred.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GanttError {
    /// The timeline range does not satisfy `end > start`. All geometry would
    /// divide by a zero total duration, so the projector refuses up front.
    #[error("degenerate timeline range: start {start} is not before end {end}")]
    DegenerateRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// The time scale step must be a positive number of units.
    #[error("time scale step must be positive")]
    InvalidStep,
}

/// Non-fatal per-row diagnostics collected during projection.
///
/// A row with an issue is emitted as a skip marker so the remaining rows
/// keep their slots; siblings and descendants are unaffected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    #[error("row `{id}`: series has {dates} dates but {values} values")]
    SeriesLengthMismatch {
        id: String,
        dates: usize,
        values: usize,
    },

    #[error("row `{id}`: line series is empty")]
    EmptySeries { id: String },

    #[error("row `{id}`: bar row is missing a start or end time")]
    MissingSpan { id: String },
}

impl RowIssue {
    /// The id of the row this diagnostic refers to.
    pub fn row_id(&self) -> &str {
        match self {
            RowIssue::SeriesLengthMismatch { id, .. } => id,
            RowIssue::EmptySeries { id } => id,
            RowIssue::MissingSpan { id } => id,
        }
    }
}
