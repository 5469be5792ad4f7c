pub mod gantt_view;
pub mod header;
pub mod label_panel;
pub mod theme;
pub mod timeline_panel;

pub use gantt_view::{GanttOutput, GanttView};
