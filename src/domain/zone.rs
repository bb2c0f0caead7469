use crate::geometry::BoundingBox;

/// A vertex of a zone ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneNode {
    pub id: usize,
    pub latitude: f64,
    pub longitude: f64,
}

/// A named zone boundary (typically a state-plane zone)
///
/// The ring is stored open: the closing edge from the last node back to the
/// first is implied, and a repeated closing vertex from the source data is
/// dropped when nodes are pushed.
#[derive(Debug, Clone)]
pub struct ZonePolygon {
    pub id: String,
    nodes: Vec<ZoneNode>,
    bounds: BoundingBox,
}

impl ZonePolygon {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nodes: Vec::new(),
            bounds: BoundingBox::empty(),
        }
    }

    /// Build a zone from (lat, lon) pairs
    pub fn from_points(id: impl Into<String>, points: &[(f64, f64)]) -> Self {
        let mut zone = Self::new(id);
        for &(lat, lon) in points {
            zone.push_node(lat, lon);
        }
        zone
    }

    /// Append a vertex and grow the bounding box to cover it
    pub fn push_node(&mut self, latitude: f64, longitude: f64) {
        if let Some(first) = self.nodes.first()
            && self.nodes.len() > 2
            && first.latitude == latitude
            && first.longitude == longitude
        {
            return;
        }

        self.nodes.push(ZoneNode {
            id: self.nodes.len(),
            latitude,
            longitude,
        });
        self.bounds.extend_bounds(latitude, longitude);
    }

    pub fn nodes(&self) -> &[ZoneNode] {
        &self.nodes
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Every edge of the ring, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (&ZoneNode, &ZoneNode)> {
        let n = self.nodes.len();
        (0..n).map(move |i| (&self.nodes[i], &self.nodes[(i + 1) % n]))
    }

    pub fn is_valid(&self) -> bool {
        self.nodes.len() >= 3
    }

    pub fn to_polygon(&self) -> geo::Polygon<f64> {
        let ring: geo::LineString<f64> = self
            .nodes
            .iter()
            .map(|n| geo::coord! { x: n.longitude, y: n.latitude })
            .collect();
        // Polygon::new closes the ring
        geo::Polygon::new(ring, Vec::new())
    }
}
