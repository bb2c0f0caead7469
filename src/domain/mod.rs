pub mod point;
pub mod unit;
pub mod zone;

pub use point::GeoPoint;
pub use unit::LinearUnit;
pub use zone::{ZoneNode, ZonePolygon};
