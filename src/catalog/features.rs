//! Zone boundaries in and out of GeoJSON.
//!
//! Positions are `[longitude, latitude]`, as GeoJSON requires; zones keep
//! (lat, lon) internally.

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Position, Value};
use tracing::warn;

use crate::domain::{GeoPoint, ZonePolygon};

pub const ZONE_NAME_PROPERTY: &str = "ZONENAME";

fn ring_to_zone(name: &str, ring: &[Position]) -> ZonePolygon {
    let points: Vec<(f64, f64)> = ring
        .iter()
        .filter_map(|position| match position.as_slice() {
            [lon, lat, ..] => Some((*lat, *lon)),
            _ => None,
        })
        .collect();
    ZonePolygon::from_points(name, &points)
}

/// Parse a FeatureCollection into zones.
///
/// A MultiPolygon yields one zone per member polygon, a Polygon yields one;
/// only outer rings are used. Features without a `ZONENAME` or with another
/// geometry type are skipped.
pub fn parse_zone_collection(text: &str) -> Result<Vec<ZonePolygon>, geojson::Error> {
    let features = match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            warn!("zone source is a bare geometry without {ZONE_NAME_PROPERTY}, ignoring");
            Vec::new()
        }
    };

    let mut zones = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        let Some(name) = feature
            .property(ZONE_NAME_PROPERTY)
            .and_then(serde_json::Value::as_str)
        else {
            warn!(feature = index, "zone feature has no {ZONE_NAME_PROPERTY}, skipping");
            continue;
        };

        let Some(geometry) = &feature.geometry else {
            continue;
        };

        let outer_rings: Vec<&Vec<Position>> = match &geometry.value {
            Value::Polygon(rings) => rings.iter().take(1).collect(),
            Value::MultiPolygon(polygons) => polygons.iter().filter_map(|p| p.first()).collect(),
            _ => {
                warn!(zone = name, "unsupported zone geometry, skipping");
                continue;
            }
        };

        for ring in outer_rings {
            let zone = ring_to_zone(name, ring);
            if zone.is_valid() {
                zones.push(zone);
            } else {
                warn!(zone = name, nodes = zone.nodes().len(), "degenerate zone ring, skipping");
            }
        }
    }

    Ok(zones)
}

/// Exterior ring as `[lon, lat]` positions, closed by `geo::Polygon`
fn closed_ring(zone: &ZonePolygon) -> Vec<Position> {
    zone.to_polygon()
        .exterior()
        .coords()
        .map(|c| vec![c.x, c.y])
        .collect()
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// A zone as a Polygon feature with its name under `ZONENAME`
pub fn zone_to_feature(zone: &ZonePolygon) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(ZONE_NAME_PROPERTY.to_string(), zone.id.clone().into());
    feature(Value::Polygon(vec![closed_ring(zone)]), properties)
}

pub fn zones_to_feature_collection<'a>(
    zones: impl IntoIterator<Item = &'a ZonePolygon>,
) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: zones.into_iter().map(zone_to_feature).collect(),
        foreign_members: None,
    }
}

pub fn point_to_feature(point: GeoPoint, properties: JsonObject) -> Feature {
    feature(
        Value::Point(vec![point.longitude(), point.latitude()]),
        properties,
    )
}
