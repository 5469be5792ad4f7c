pub mod hierarchy;
pub mod scroll;

pub use hierarchy::{HierarchyStore, RowToggle, VisibleRow};
pub use scroll::{Panel, ScrollOffset, ScrollSync, ScrollWrite};
