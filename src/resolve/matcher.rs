use crate::catalog::ProjectionDefinition;
use crate::domain::LinearUnit;
use crate::error::{GeoError, Result};

/// First definition in the requested unit whose WKT mentions the zone name.
///
/// Both comparisons ignore case. There is no ranking: when a zone name is a
/// substring of several definitions, catalog order decides.
pub fn match_projection<'a>(
    zone_name: &str,
    unit: LinearUnit,
    projections: &'a [ProjectionDefinition],
) -> Result<&'a ProjectionDefinition> {
    let needle = zone_name.to_lowercase();

    projections
        .iter()
        .filter(|p| unit.matches(&p.unit))
        .find(|p| p.wkt.to_lowercase().contains(&needle))
        .ok_or_else(|| GeoError::ProjectionNotFound {
            zone: zone_name.to_string(),
            unit: unit.name().to_string(),
        })
}
