use std::sync::Arc;

use proj::Proj;
use tracing::{debug, warn};

use super::{TransformContext, WEB_MERCATOR, WGS84, convert, pipeline, to_point};
use crate::catalog::ProjectionDefinition;
use crate::domain::GeoPoint;
use crate::error::Result;

/// Converts between one native coordinate system, WGS84 and Web Mercator
pub struct CoordinateConverter {
    definition: String,
    unit: Option<String>,
    to_native: Proj,
    to_wgs84: Proj,
    context: Arc<TransformContext>,
}

impl CoordinateConverter {
    /// Build a converter for any definition PROJ accepts (WKT, `EPSG:n`, PROJ strings)
    pub fn new(definition: &str, context: Arc<TransformContext>) -> Result<Self> {
        let definition = definition.trim();
        let unit = ProjectionDefinition::parse(definition)
            .ok()
            .map(|d| d.unit)
            .filter(|u| !u.is_empty());

        Ok(Self {
            definition: definition.to_string(),
            unit,
            to_native: pipeline(WGS84, definition)?,
            to_wgs84: pipeline(definition, WGS84)?,
            context,
        })
    }

    /// Build a converter for a WKT coordinate system.
    ///
    /// WKT that PROJ rejects but that mentions `web_mercator` is taken as Web
    /// Mercator; legacy data carries ESRI strings of that kind.
    pub fn from_wkt(wkt: &str, context: Arc<TransformContext>) -> Result<Self> {
        let converter = match Self::new(wkt, context.clone()) {
            Ok(converter) => converter,
            Err(e) if wkt.to_lowercase().contains("web_mercator") => {
                warn!(error = %e, "unusable WKT names web_mercator, using {WEB_MERCATOR}");
                let mut converter = Self::new(WEB_MERCATOR, context)?;
                converter.unit = Some("metre".to_string());
                converter
            }
            Err(e) => return Err(e),
        };
        debug!(unit = ?converter.unit, "coordinate converter ready");
        Ok(converter)
    }

    /// The definition the pipelines were built from
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Linear unit named by the WKT's top-level `UNIT`, when there is one
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn context(&self) -> &Arc<TransformContext> {
        &self.context
    }

    /// Geographic point to native coordinates
    pub fn to_xy(&self, point: GeoPoint) -> Result<(f64, f64)> {
        convert(&self.to_native, point.longitude(), point.latitude())
    }

    /// Native coordinates to a geographic point
    pub fn to_geo(&self, x: f64, y: f64) -> Result<GeoPoint> {
        let (lon, lat) = convert(&self.to_wgs84, x, y)?;
        to_point(lon, lat)
    }

    /// Native coordinates to Web Mercator metres
    pub fn to_web_mercator(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let (lon, lat) = convert(&self.to_wgs84, x, y)?;
        self.context.lon_lat_to_web_mercator(lon, lat)
    }

    /// Web Mercator metres to native coordinates
    pub fn from_web_mercator(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let (lon, lat) = self.context.web_mercator_to_lon_lat(x, y)?;
        convert(&self.to_native, lon, lat)
    }
}
