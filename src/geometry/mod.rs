pub mod bounds;
pub mod segment;

pub use bounds::BoundingBox;
pub use segment::{point_on_segment, ray_crossing, segments_intersect};
