/// Tolerance for collinearity and on-segment checks, in degrees
pub const EPSILON: f64 = 1e-12;

/// Signed area of the triangle (a, b, c), positive when counter-clockwise.
/// Points are (lat, lon); only the sign and zero-ness matter here.
fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.1 - a.1) * (c.0 - a.0) - (b.0 - a.0) * (c.1 - a.1)
}

fn within_extent(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> bool {
    p.0 >= a.0.min(b.0) - EPSILON
        && p.0 <= a.0.max(b.0) + EPSILON
        && p.1 >= a.1.min(b.1) - EPSILON
        && p.1 <= a.1.max(b.1) + EPSILON
}

/// Whether `p` lies on the closed segment a-b
pub fn point_on_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> bool {
    orientation(a, b, p).abs() <= EPSILON && within_extent(p, a, b)
}

/// Whether the closed segments p1-p2 and q1-q2 share at least one point
pub fn segments_intersect(p1: (f64, f64), p2: (f64, f64), q1: (f64, f64), q2: (f64, f64)) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > EPSILON && d2 < -EPSILON) || (d1 < -EPSILON && d2 > EPSILON))
        && ((d3 > EPSILON && d4 < -EPSILON) || (d3 < -EPSILON && d4 > EPSILON))
    {
        return true;
    }

    // Touching or collinear cases
    point_on_segment(p1, q1, q2)
        || point_on_segment(p2, q1, q2)
        || point_on_segment(q1, p1, p2)
        || point_on_segment(q2, p1, p2)
}

/// Longitude at which the eastward ray from `point` crosses edge a-b, if it does.
///
/// The edge counts as crossed when exactly one endpoint lies strictly north of
/// the ray, so a vertex shared by two edges is counted once. Horizontal edges
/// never cross and vertical edges are answered without the slope formula.
pub fn ray_crossing(point: (f64, f64), a: (f64, f64), b: (f64, f64)) -> Option<f64> {
    let (lat, lon) = point;

    if a.0 == b.0 {
        return None;
    }
    if (a.0 > lat) == (b.0 > lat) {
        return None;
    }

    let crossing = if a.1 == b.1 {
        a.1
    } else {
        a.1 + (lat - a.0) * (b.1 - a.1) / (b.0 - a.0)
    };

    (crossing > lon).then_some(crossing)
}
