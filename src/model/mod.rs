pub mod color;
pub mod task;
pub mod timeline;

pub use task::{DisplayKind, TaskNode};
pub use timeline::{TimeScale, TimeUnit, TimelineRange};
