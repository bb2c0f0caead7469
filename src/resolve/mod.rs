pub mod matcher;
pub mod zone;

pub use matcher::match_projection;
pub use zone::{CoordinateClass, classify_coordinate, resolve_zone, zone_contains};

use std::sync::Arc;

use tracing::debug;

use crate::catalog::ZoneCatalog;
use crate::domain::{GeoPoint, LinearUnit};
use crate::error::{GeoError, Result};

/// Outcome of a successful lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProjection {
    pub zone: String,
    pub srid: Option<u32>,
    pub unit: LinearUnit,
    pub wkt: String,
}

/// Picks the projection for a raw coordinate from a shared catalog
#[derive(Debug, Clone)]
pub struct AutoProjection {
    catalog: Arc<ZoneCatalog>,
}

impl AutoProjection {
    pub fn new(catalog: Arc<ZoneCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    /// Find the zone containing (lat, lon) and the catalog WKT for it in `unit`.
    ///
    /// The unit is checked before anything else, then the input must look like
    /// a US latitude/longitude; projected input is refused.
    pub fn resolve(&self, lat: f64, lon: f64, unit: &str) -> Result<ResolvedProjection> {
        let unit: LinearUnit = unit.parse()?;

        if classify_coordinate(lat, lon) == CoordinateClass::ProjectedOther {
            return Err(GeoError::StatePlaneNotSupported { lat, lon });
        }
        let point = GeoPoint::new(lat, lon)?;

        let zone = resolve_zone(point, self.catalog.zones())?;
        let projection = match_projection(&zone.id, unit, self.catalog.projections())?;
        debug!(zone = %zone.id, srid = ?projection.srid, %unit, "projection resolved");

        Ok(ResolvedProjection {
            zone: zone.id.clone(),
            srid: projection.srid,
            unit,
            wkt: projection.wkt.clone(),
        })
    }

    /// Just the WKT of `resolve`
    pub fn get_projection(&self, lat: f64, lon: f64, unit: &str) -> Result<String> {
        self.resolve(lat, lon, unit).map(|r| r.wkt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse_srid_catalog, parse_zone_collection};
    use crate::fixtures::{TEXAS_CENTRAL_FTUS, ZONES_GEOJSON, srid_catalog};
    use crate::projection::{CoordinateConverter, TransformContext};

    fn auto() -> AutoProjection {
        let catalog = ZoneCatalog::new(
            parse_zone_collection(ZONES_GEOJSON).unwrap(),
            parse_srid_catalog(&srid_catalog()),
        );
        AutoProjection::new(Arc::new(catalog))
    }

    #[test]
    fn test_resolves_texas_central() {
        let resolved = auto().resolve(30.5, -97.8, "us survey foot").unwrap();
        assert_eq!(resolved.zone, "Texas Central");
        assert_eq!(resolved.srid, Some(2277));
        assert_eq!(resolved.wkt, TEXAS_CENTRAL_FTUS);
    }

    #[test]
    fn test_unit_selects_definition() {
        let wkt = auto().get_projection(30.5, -97.8, "Metre").unwrap();
        assert!(wkt.contains("AUTHORITY[\"EPSG\",\"32139\"]]"));
    }

    #[test]
    fn test_unsupported_unit_fails_before_lookup() {
        // Even a projected coordinate reports the unit first
        let err = auto().resolve(10_070_000.0, 3_110_000.0, "yards").unwrap_err();
        assert!(matches!(err, GeoError::UnsupportedUnit(_)));

        let empty = AutoProjection::new(Arc::new(ZoneCatalog::empty()));
        assert!(matches!(
            empty.resolve(30.5, -97.8, "yards"),
            Err(GeoError::UnsupportedUnit(_))
        ));
    }

    #[test]
    fn test_state_plane_input_is_refused() {
        let err = auto()
            .resolve(10_070_000.0, 3_110_000.0, "us survey foot")
            .unwrap_err();
        assert!(matches!(err, GeoError::StatePlaneNotSupported { .. }));
    }

    #[test]
    fn test_out_of_range_latitude() {
        // Passes the classification heuristic but is not a latitude
        let err = auto().resolve(95.0, -97.8, "metre").unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_outside_all_zones() {
        let err = auto().resolve(40.7, -74.0, "us survey foot").unwrap_err();
        assert!(matches!(err, GeoError::ZoneNotFound { .. }));
    }

    #[test]
    fn test_empty_catalog_is_zone_not_found() {
        let empty = AutoProjection::new(Arc::new(ZoneCatalog::empty()));
        assert!(matches!(
            empty.resolve(30.5, -97.8, "metre"),
            Err(GeoError::ZoneNotFound { .. })
        ));
    }

    #[test]
    fn test_shared_border_goes_to_first_zone() {
        let resolved = auto().resolve(32.0, -97.0, "us survey foot").unwrap();
        assert_eq!(resolved.zone, "Texas Central");
    }

    #[test]
    fn test_zone_without_projection() {
        let catalog = ZoneCatalog::new(parse_zone_collection(ZONES_GEOJSON).unwrap(), Vec::new());
        let err = AutoProjection::new(Arc::new(catalog))
            .resolve(30.5, -97.8, "foot")
            .unwrap_err();
        assert!(matches!(err, GeoError::ProjectionNotFound { .. }));
    }

    #[test]
    fn test_resolved_wkt_drives_converter() {
        let wkt = auto().get_projection(30.5, -97.8, "us survey foot").unwrap();
        let context = TransformContext::shared().unwrap();
        let converter = CoordinateConverter::from_wkt(&wkt, context).unwrap();
        let p = GeoPoint::new(30.5, -97.8).unwrap();
        let (x, y) = converter.to_xy(p).unwrap();
        let back = converter.to_geo(x, y).unwrap();
        assert!((back.latitude() - 30.5).abs() < 1e-4);
        assert!((back.longitude() + 97.8).abs() < 1e-4);
    }
}
