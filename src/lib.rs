//! databridge-geo - Resolve state-plane projections for incident coordinates
//! and convert points between geographic, projected and Web Mercator systems

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod resolve;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::{ProjectionDefinition, ZoneCatalog};
pub use domain::{GeoPoint, LinearUnit, ZoneNode, ZonePolygon};
pub use error::{GeoError, Result};
pub use geometry::BoundingBox;
pub use projection::{CoordinateConverter, TransformContext};
pub use resolve::{AutoProjection, ResolvedProjection};
