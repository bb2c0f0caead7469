//! Coordinate transforms through PROJ.
//!
//! Every `Proj` here comes from `Proj::new_known_crs`, which normalises axis
//! order: geographic systems take and return (lon, lat) in degrees, projected
//! systems (x, y) in their own linear unit.

pub mod context;
pub mod converter;

pub use context::TransformContext;
pub use converter::CoordinateConverter;

use proj::Proj;

use crate::domain::GeoPoint;
use crate::error::{GeoError, Result};

/// WGS84 geographic (lon, lat in degrees)
pub const WGS84: &str = "EPSG:4326";

/// Spherical Web Mercator, R = 6378137 m
pub const WEB_MERCATOR: &str = "EPSG:3857";

pub(crate) fn pipeline(from: &str, to: &str) -> Result<Proj> {
    Proj::new_known_crs(from, to, None).map_err(|e| GeoError::UnsupportedProjection(e.to_string()))
}

/// Run one coordinate through a pipeline; non-finite output is a failure
pub(crate) fn convert(proj: &Proj, x: f64, y: f64) -> Result<(f64, f64)> {
    let (tx, ty) = proj
        .convert((x, y))
        .map_err(|e| GeoError::TransformFailure(format!("({x}, {y}): {e}")))?;
    if tx.is_finite() && ty.is_finite() {
        Ok((tx, ty))
    } else {
        Err(GeoError::TransformFailure(format!(
            "({x}, {y}) produced a non-finite result"
        )))
    }
}

/// Geographic output of a pipeline as a validated point
pub(crate) fn to_point(lon: f64, lat: f64) -> Result<GeoPoint> {
    GeoPoint::new(lat, lon).map_err(|e| GeoError::TransformFailure(e.to_string()))
}
