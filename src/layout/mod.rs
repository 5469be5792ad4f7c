pub mod duration;
pub mod geometry;
pub mod intervals;

pub use geometry::Geometry;
pub use intervals::Interval;
