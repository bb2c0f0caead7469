use super::segment::segments_intersect;

/// Axis-aligned bounding box in degrees
///
/// Starts empty (min = +inf, max = -inf) so the first `extend_bounds` call
/// defines the initial box; from then on it only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self {
            min_lat: f64::INFINITY,
            min_lon: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            max_lon: f64::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_lat > self.max_lat || self.min_lon > self.max_lon
    }

    /// Grow the box to include the point
    pub fn extend_bounds(&mut self, lat: f64, lon: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
    }

    /// Inclusive containment, so points on a zone boundary survive the
    /// bounding-box prefilter
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    /// The four edges as ((lat, lon), (lat, lon)) pairs: south, east, north, west
    pub fn edges(&self) -> [((f64, f64), (f64, f64)); 4] {
        let sw = (self.min_lat, self.min_lon);
        let se = (self.min_lat, self.max_lon);
        let ne = (self.max_lat, self.max_lon);
        let nw = (self.max_lat, self.min_lon);
        [(sw, se), (se, ne), (ne, nw), (nw, sw)]
    }

    /// Whether the segment a-b crosses or touches any edge of the box.
    ///
    /// A segment lying entirely inside the box touches no edge and returns false.
    pub fn intersects_segment(&self, a: (f64, f64), b: (f64, f64)) -> bool {
        if self.is_empty() {
            return false;
        }
        self.edges()
            .iter()
            .any(|&(p, q)| segments_intersect(a, b, p, q))
    }

    /// (lat, lon) of the box centre, none while empty
    pub fn center(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        Some((
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        ))
    }
}
