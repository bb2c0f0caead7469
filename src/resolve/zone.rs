use tracing::debug;

use crate::domain::{GeoPoint, ZonePolygon};
use crate::error::{GeoError, Result};
use crate::geometry::{point_on_segment, ray_crossing};

/// How a raw (lat, lon) pair looks before any zone lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateClass {
    /// Plausibly a US latitude/longitude
    Geographic,
    /// Anything else, most often state-plane easting/northing
    ProjectedOther,
}

/// Rough check for "looks like a US lat/lon": western longitude, latitude
/// under 100, and |lon + lat| under 200. Not geodetically rigorous.
pub fn classify_coordinate(lat: f64, lon: f64) -> CoordinateClass {
    if lon < 0.0 && lat < 100.0 && (lon + lat).abs() < 200.0 {
        CoordinateClass::Geographic
    } else {
        CoordinateClass::ProjectedOther
    }
}

/// Even-odd containment with an eastward ray. Points on an edge or vertex
/// count as inside.
pub fn zone_contains(zone: &ZonePolygon, point: GeoPoint) -> bool {
    if !zone.is_valid() || !zone.bounds().contains(point.latitude(), point.longitude()) {
        return false;
    }

    let p = (point.latitude(), point.longitude());
    let mut crossings = 0usize;

    for (a, b) in zone.edges() {
        let a = (a.latitude, a.longitude);
        let b = (b.latitude, b.longitude);

        if point_on_segment(p, a, b) {
            return true;
        }
        if ray_crossing(p, a, b).is_some() {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}

/// First zone in catalog order containing the point
pub fn resolve_zone(point: GeoPoint, zones: &[ZonePolygon]) -> Result<&ZonePolygon> {
    let mut candidates = 0;
    for zone in zones {
        if !zone.bounds().contains(point.latitude(), point.longitude()) {
            continue;
        }
        candidates += 1;
        if zone_contains(zone, point) {
            debug!(zone = %zone.id, %point, candidates, "point resolved to zone");
            return Ok(zone);
        }
    }

    debug!(%point, candidates, "no zone contains point");
    Err(GeoError::ZoneNotFound {
        lat: point.latitude(),
        lon: point.longitude(),
    })
}
