//! An embeddable Gantt timeline widget for egui.
//!
//! The crate splits into a pure layout/state engine and a thin egui
//! presentation layer on top of it:
//!
//! - [`layout`] — duration math, header interval generation, and
//!   percentage geometry for bars and line series.
//! - [`state`] — expand/collapse state with the visible-row projection,
//!   and scroll synchronization between the two panels.
//! - [`render`] — the projector that turns a task tree plus configuration
//!   into renderable row descriptors.
//! - [`ui`] — the egui widget consuming those descriptors.
//!
//! The engine never mutates task data; the tree is supplied wholesale each
//! render pass and expansion state is kept in a flat map keyed by row id.

pub mod app;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod state;
pub mod ui;

pub use error::{GanttError, RowIssue};
pub use model::{DisplayKind, TaskNode, TimeScale, TimeUnit, TimelineRange};
pub use render::{project, ColorMapping, ProjectorConfig, RowDescriptor, RowShape, TimelineFrame};
pub use state::{HierarchyStore, RowToggle, ScrollSync};
pub use ui::{GanttOutput, GanttView};
