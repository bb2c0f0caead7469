use std::sync::Arc;

use proj::Proj;

use super::{WEB_MERCATOR, WGS84, convert, pipeline, to_point};
use crate::domain::GeoPoint;
use crate::error::Result;

/// The WGS84 <-> Web Mercator pipelines every converter shares
///
/// Built once up front and handed to converters by `Arc`; tests build their own.
pub struct TransformContext {
    to_web_mercator: Proj,
    from_web_mercator: Proj,
}

impl TransformContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            to_web_mercator: pipeline(WGS84, WEB_MERCATOR)?,
            from_web_mercator: pipeline(WEB_MERCATOR, WGS84)?,
        })
    }

    pub fn shared() -> Result<Arc<Self>> {
        Self::new().map(Arc::new)
    }

    pub fn geo_to_web_mercator(&self, point: GeoPoint) -> Result<(f64, f64)> {
        self.lon_lat_to_web_mercator(point.longitude(), point.latitude())
    }

    pub fn web_mercator_to_geo(&self, x: f64, y: f64) -> Result<GeoPoint> {
        let (lon, lat) = self.web_mercator_to_lon_lat(x, y)?;
        to_point(lon, lat)
    }

    /// Unrounded variants for converters chaining through WGS84
    pub(crate) fn lon_lat_to_web_mercator(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        convert(&self.to_web_mercator, lon, lat)
    }

    pub(crate) fn web_mercator_to_lon_lat(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        convert(&self.from_web_mercator, x, y)
    }
}
