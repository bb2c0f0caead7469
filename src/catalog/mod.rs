pub mod features;
pub mod srid;
pub mod wkt;

pub use features::{parse_zone_collection, point_to_feature, zone_to_feature, zones_to_feature_collection};
pub use srid::{ProjectionDefinition, parse_srid_catalog};
pub use wkt::{WktNode, WktValue};

use std::path::Path;

use tracing::{debug, error};

use crate::domain::ZonePolygon;
use crate::error::{GeoError, Result};

/// Zone boundaries and SRID definitions, loaded once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct ZoneCatalog {
    zones: Vec<ZonePolygon>,
    projections: Vec<ProjectionDefinition>,
}

impl ZoneCatalog {
    pub fn new(zones: Vec<ZonePolygon>, projections: Vec<ProjectionDefinition>) -> Self {
        Self { zones, projections }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Read the zone GeoJSON and the SRID catalog from disk
    pub fn load(zone_path: &Path, srid_path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(zone_path).map_err(|e| GeoError::catalog(zone_path, e))?;
        let zones = parse_zone_collection(&text).map_err(|e| GeoError::catalog(zone_path, e))?;

        let text =
            std::fs::read_to_string(srid_path).map_err(|e| GeoError::catalog(srid_path, e))?;
        let projections = parse_srid_catalog(&text);

        debug!(
            zones = zones.len(),
            projections = projections.len(),
            "zone catalog loaded"
        );
        Ok(Self::new(zones, projections))
    }

    /// Like `load`, but a failure is logged and yields an empty catalog, which
    /// resolves every point to `ZoneNotFound`
    pub fn load_or_empty(zone_path: &Path, srid_path: &Path) -> Self {
        Self::load(zone_path, srid_path).unwrap_or_else(|e| {
            error!(error = %e, "zone catalog unavailable, continuing with an empty catalog");
            Self::empty()
        })
    }

    pub fn zones(&self) -> &[ZonePolygon] {
        &self.zones
    }

    pub fn projections(&self) -> &[ProjectionDefinition] {
        &self.projections
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty() && self.projections.is_empty()
    }

    /// All polygons carrying the zone name, case-insensitively
    pub fn zones_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ZonePolygon> + 'a {
        self.zones
            .iter()
            .filter(move |z| z.id.eq_ignore_ascii_case(name))
    }

    pub fn projection_by_srid(&self, srid: u32) -> Option<&ProjectionDefinition> {
        self.projections.iter().find(|p| p.srid == Some(srid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ZONES_GEOJSON, srid_catalog};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let zones = dir.path().join("zones.geojson");
        let srids = dir.path().join("srids.txt");
        fs::write(&zones, ZONES_GEOJSON).unwrap();
        fs::write(&srids, srid_catalog()).unwrap();

        let catalog = ZoneCatalog::load(&zones, &srids).unwrap();
        assert_eq!(catalog.zones().len(), 2);
        assert_eq!(catalog.projections().len(), 3);
        assert_eq!(catalog.zones_named("texas central").count(), 1);
        assert!(catalog.projection_by_srid(32139).is_some());
        assert!(catalog.projection_by_srid(4326).is_none());
    }

    #[test]
    fn test_missing_file_is_a_load_failure() {
        let dir = tempdir().unwrap();
        let srids = dir.path().join("srids.txt");
        fs::write(&srids, srid_catalog()).unwrap();

        let err = ZoneCatalog::load(&dir.path().join("missing.geojson"), &srids).unwrap_err();
        assert!(matches!(err, GeoError::CatalogLoadFailure { .. }));
    }

    #[test]
    fn test_bad_geojson_is_a_load_failure() {
        let dir = tempdir().unwrap();
        let zones = dir.path().join("zones.geojson");
        let srids = dir.path().join("srids.txt");
        fs::write(&zones, "not json").unwrap();
        fs::write(&srids, srid_catalog()).unwrap();

        assert!(ZoneCatalog::load(&zones, &srids).is_err());
    }

    #[test]
    fn test_load_or_empty_swallows_failure() {
        let dir = tempdir().unwrap();
        let catalog = ZoneCatalog::load_or_empty(
            &dir.path().join("a.geojson"),
            &dir.path().join("b.txt"),
        );
        assert!(catalog.is_empty());
    }
}
