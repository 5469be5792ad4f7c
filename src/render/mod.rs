pub mod projector;

pub use projector::{
    project, BarFade, ColorMapping, LinePoint, ProjectorConfig, RowDescriptor, RowShape,
    TimelineFrame,
};
