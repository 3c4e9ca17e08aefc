//! Geometry kernel
//!
//! Angles follow the engine convention: `0` points along +y, angles grow
//! clockwise, and a direction `d` decomposes as `(sin d, cos d)`.
//! Every helper accepts any real angle and never produces NaN for
//! axis-aligned or zero-length input.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::vec2::{Point, Vec2};

/// Tolerance for colinearity and parametric range checks
pub const EPSILON: f64 = 1e-9;

/// Wrap any angle into `[0, 2π)`. Non-finite input maps to `0`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Direction of the displacement `(x, y)`.
///
/// Quadrant-aware (`atan2(x, y)`), so `(1, 0)` gives `π/2` and `(0, -1)`
/// gives `π`. The zero vector has direction `0`.
#[inline]
pub fn direction_of(x: f64, y: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    normalize_angle(x.atan2(y))
}

#[inline]
pub fn magnitude(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    magnitude(a.x - b.x, a.y - b.y)
}

/// Direction of `a - b`. Note the operand order: the heading points from
/// `b` toward `a`.
#[inline]
pub fn heading_between(a: Point, b: Point) -> f64 {
    direction_of(a.x - b.x, a.y - b.y)
}

#[inline]
pub fn vector_x(magnitude: f64, direction: f64) -> f64 {
    magnitude * direction.sin()
}

#[inline]
pub fn vector_y(magnitude: f64, direction: f64) -> f64 {
    magnitude * direction.cos()
}

/// Split a magnitude/direction pair into its x/y components
#[inline]
pub fn decompose(magnitude: f64, direction: f64) -> Vec2 {
    Vec2::new(vector_x(magnitude, direction), vector_y(magnitude, direction))
}

/// Unit vector for a direction
#[inline]
pub fn unit(direction: f64) -> Vec2 {
    decompose(1.0, direction)
}

/// Rotate a local offset by `heading` (clockwise-positive)
#[inline]
pub fn rotate(offset: Vec2, heading: f64) -> Vec2 {
    if heading == 0.0 {
        return offset;
    }
    let (sin, cos) = heading.sin_cos();
    Vec2::new(offset.x * cos + offset.y * sin, -offset.x * sin + offset.y * cos)
}

/// Closest point to `p` on segment `a..b` (projection clamped to the segment)
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < EPSILON * EPSILON {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

/// Turn direction of the triple `p -> q -> r` (sign of the cross product)
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let cross = (q - p).cross(r - p);
    if cross.abs() < EPSILON {
        Orientation::Colinear
    } else if cross > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// `q` lies within the bounding box of `p..r` (only meaningful for colinear triples)
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) + EPSILON
        && q.x >= p.x.min(r.x) - EPSILON
        && q.y <= p.y.max(r.y) + EPSILON
        && q.y >= p.y.min(r.y) - EPSILON
}

/// Segment/segment test by orientation, with the colinear-overlap fallback.
/// Touching endpoints count as an intersection.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Colinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Colinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Colinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Colinear && on_segment(p2, q1, q2))
}

/// Where a travelling segment `p1..q1` first meets segment `p2..q2`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentCrossing {
    /// Fraction of `p1..q1` travelled at the meeting point
    pub t: f64,
    pub point: Point,
}

/// First meeting point of `p1..q1` with `p2..q2`, measured from `p1`.
///
/// Colinear overlaps return the overlap endpoint nearest to `p1`.
pub fn segment_intersection(p1: Point, q1: Point, p2: Point, q2: Point) -> Option<SegmentCrossing> {
    let r = q1 - p1;
    let s = q2 - p2;
    let denom = r.cross(s);
    let offset = p2 - p1;

    if denom.abs() < EPSILON {
        let r_len_sq = r.length_squared();
        if offset.cross(r).abs() >= EPSILON || r_len_sq < EPSILON * EPSILON {
            return None;
        }
        let t0 = offset.dot(r) / r_len_sq;
        let t1 = (q2 - p1).dot(r) / r_len_sq;
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        if lo > hi + EPSILON {
            return None;
        }
        return Some(SegmentCrossing { t: lo, point: p1 + r * lo });
    }

    let t = offset.cross(s) / denom;
    let u = offset.cross(r) / denom;
    if t < -EPSILON || t > 1.0 + EPSILON || u < -EPSILON || u > 1.0 + EPSILON {
        return None;
    }
    let t = t.clamp(0.0, 1.0);
    Some(SegmentCrossing { t, point: p1 + r * t })
}

/// Edges of a closed vertex ring, last vertex joined back to the first
pub fn polygon_edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Ray-cast parity test against a horizontal ray to the polygon's extreme x.
///
/// Boundary behaviour is inherited from the segment test: a point on an edge
/// facing the ray's far end (e.g. the right edge of an axis-aligned square)
/// reports inside, a point on the opposite edge reports outside, and a ray
/// that passes exactly through a shared vertex counts both edges.
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let extreme_x = vertices.iter().fold(point.x, |acc, v| acc.max(v.x)) + 1.0;
    let ray_end = Point::new(extreme_x, point.y);
    let crossings = polygon_edges(vertices)
        .filter(|(a, b)| segments_intersect(point, ray_end, *a, *b))
        .count();
    crossings % 2 == 1
}

/// Nearest polygon edge to a point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeProximity {
    pub index: usize,
    pub start: Point,
    pub end: Point,
    pub closest: Point,
    pub distance: f64,
}

impl EdgeProximity {
    /// Tangent direction of the edge
    pub fn angle(&self) -> f64 {
        heading_between(self.end, self.start)
    }
}

pub fn nearest_edge(point: Point, vertices: &[Point]) -> Option<EdgeProximity> {
    let mut best: Option<EdgeProximity> = None;
    for (index, (start, end)) in polygon_edges(vertices).enumerate() {
        let closest = closest_point_on_segment(point, start, end);
        let d = distance(point, closest);
        if best.map_or(true, |b| d < b.distance) {
            best = Some(EdgeProximity { index, start, end, closest, distance: d });
        }
    }
    best
}

/// Circle overlaps polygon: centre inside, or nearest edge closer than the radius
pub fn circle_intersects_polygon(center: Point, radius: f64, vertices: &[Point]) -> bool {
    if point_in_polygon(center, vertices) {
        return true;
    }
    nearest_edge(center, vertices).map_or(false, |e| e.distance < radius)
}

/// Polygon overlap: crossing edges, or one polygon holding the other
pub fn polygons_overlap(a: &[Point], b: &[Point]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    for (p1, q1) in polygon_edges(a) {
        for (p2, q2) in polygon_edges(b) {
            if segments_intersect(p1, q1, p2, q2) {
                return true;
            }
        }
    }
    point_in_polygon(a[0], b) || point_in_polygon(b[0], a)
}

/// Shoelace area; the sign gives the winding
pub fn signed_area(vertices: &[Point]) -> f64 {
    polygon_edges(vertices).map(|(a, b)| a.cross(b)).sum::<f64>() * 0.5
}

/// Unit normal of edge `a -> b` pointing away from the polygon interior
pub fn outward_normal(a: Point, b: Point, winding: f64) -> Vec2 {
    let edge = b - a;
    let n = Vec2::new(edge.y, -edge.x).normalize();
    if winding >= 0.0 {
        n
    } else {
        -n
    }
}

/// Segment/circle intersection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleHit {
    pub point: Point,
    /// Distance from the segment start
    pub distance: f64,
    /// Direction of the circle's tangent at the hit
    pub tangent_angle: f64,
}

/// Intersections of segment `a..b` with a circle, nearest to `a` first.
///
/// Solves the line/circle quadratic in `x` for general lines and in `y`
/// for vertical (steeper than diagonal) lines, then keeps the roots that lie
/// on the segment. Returns 0, 1 or 2 hits.
pub fn segment_circle_intersections(a: Point, b: Point, center: Point, radius: f64) -> Vec<CircleHit> {
    let d = b - a;
    let len_sq = d.length_squared();
    if len_sq < EPSILON * EPSILON || radius <= 0.0 {
        return Vec::new();
    }

    let vertical = d.x.abs() < d.y.abs();
    // Swap axes for steep lines so the slope stays bounded.
    let (ax, ay, bx, by, cx, cy) = if vertical {
        (a.y, a.x, b.y, b.x, center.y, center.x)
    } else {
        (a.x, a.y, b.x, b.y, center.x, center.y)
    };

    let slope = (by - ay) / (bx - ax);
    let intercept = ay - slope * ax;
    let qa = 1.0 + slope * slope;
    let qb = 2.0 * (slope * (intercept - cy) - cx);
    let qc = cx * cx + (intercept - cy) * (intercept - cy) - radius * radius;
    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return Vec::new();
    }

    let root = disc.sqrt();
    let mut primaries = vec![(-qb - root) / (2.0 * qa)];
    if root > EPSILON {
        primaries.push((-qb + root) / (2.0 * qa));
    }

    let mut hits: Vec<CircleHit> = primaries
        .into_iter()
        .map(|u| {
            let v = slope * u + intercept;
            if vertical {
                Point::new(v, u)
            } else {
                Point::new(u, v)
            }
        })
        .filter(|p| {
            let t = (*p - a).dot(d) / len_sq;
            (-EPSILON..=1.0 + EPSILON).contains(&t)
        })
        .map(|point| CircleHit {
            point,
            distance: distance(point, a),
            tangent_angle: normalize_angle(heading_between(point, center) + FRAC_PI_2),
        })
        .collect();

    hits.sort_by(|l, r| l.distance.total_cmp(&r.distance));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn direction_of_axis_aligned_vectors() {
        assert_eq!(direction_of(0.0, 1.0), 0.0);
        assert!((direction_of(1.0, 0.0) - FRAC_PI_2).abs() < 1e-12);
        assert!((direction_of(0.0, -1.0) - PI).abs() < 1e-12);
        assert!((direction_of(-1.0, 0.0) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert_eq!(direction_of(0.0, 0.0), 0.0);
    }

    #[test]
    fn heading_between_points_from_second_to_first() {
        let h = heading_between(Point::new(5.0, 0.0), Point::zero());
        assert!((h - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn normalize_angle_handles_any_real() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-9);
        assert_eq!(normalize_angle(f64::NAN), 0.0);
    }

    #[test]
    fn rotate_up_vector_follows_heading() {
        let r = rotate(Vec2::new(0.0, 1.0), FRAC_PI_2);
        assert!((r.x - 1.0).abs() < 1e-12);
        assert!(r.y.abs() < 1e-12);
    }

    #[test]
    fn closest_point_clamps_to_segment_ends() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(Point::new(-5.0, 3.0), a, b), a);
        assert_eq!(closest_point_on_segment(Point::new(4.0, 3.0), a, b), Point::new(4.0, 0.0));
        assert_eq!(closest_point_on_segment(Point::new(15.0, -2.0), a, b), b);
    }

    #[test]
    fn crossing_and_colinear_segments_intersect() {
        let o = Point::zero();
        assert!(segments_intersect(o, Point::new(10.0, 10.0), Point::new(0.0, 10.0), Point::new(10.0, 0.0)));
        assert!(segments_intersect(o, Point::new(10.0, 0.0), Point::new(5.0, 0.0), Point::new(15.0, 0.0)));
        assert!(!segments_intersect(o, Point::new(10.0, 0.0), Point::new(11.0, 0.0), Point::new(15.0, 0.0)));
        assert!(!segments_intersect(o, Point::new(10.0, 0.0), Point::new(0.0, 1.0), Point::new(10.0, 1.0)));
    }

    #[test]
    fn segment_intersection_reports_travel_fraction() {
        let hit = segment_intersection(
            Point::new(0.0, 5.0),
            Point::new(20.0, 5.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        )
        .expect("segments cross");
        assert!((hit.t - 0.5).abs() < 1e-12);
        assert_eq!(hit.point, Point::new(10.0, 5.0));
    }

    #[test]
    fn colinear_overlap_returns_nearest_overlap_point() {
        let hit = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(12.0, 0.0),
            Point::new(4.0, 0.0),
        )
        .expect("segments overlap");
        assert!((hit.t - 0.4).abs() < 1e-12);
    }

    #[test]
    fn point_in_square() {
        let sq = square();
        assert!(point_in_polygon(Point::new(5.0, 5.0), &sq));
        assert!(!point_in_polygon(Point::new(15.0, 5.0), &sq));
        assert!(!point_in_polygon(Point::new(-1.0, 5.0), &sq));
    }

    #[test]
    fn point_on_square_edges_is_documented_boundary_case() {
        let sq = square();
        // Edge facing the ray end counts once; the opposite edge counts twice.
        assert!(point_in_polygon(Point::new(10.0, 5.0), &sq));
        assert!(!point_in_polygon(Point::new(0.0, 5.0), &sq));
    }

    #[test]
    fn circle_overlaps_polygon_by_edge_distance_or_containment() {
        let sq = square();
        assert!(circle_intersects_polygon(Point::new(14.0, 5.0), 5.0, &sq));
        assert!(!circle_intersects_polygon(Point::new(16.0, 5.0), 5.0, &sq));
        assert!(circle_intersects_polygon(Point::new(5.0, 5.0), 1.0, &sq));
    }

    #[test]
    fn overlapping_and_nested_polygons() {
        let sq = square();
        let shifted: Vec<Point> = sq.iter().map(|p| *p + Vec2::new(5.0, 5.0)).collect();
        let inner: Vec<Point> = sq.iter().map(|p| *p * 0.2 + Vec2::new(4.0, 4.0)).collect();
        let far: Vec<Point> = sq.iter().map(|p| *p + Vec2::new(50.0, 0.0)).collect();
        assert!(polygons_overlap(&sq, &shifted));
        assert!(polygons_overlap(&sq, &inner));
        assert!(!polygons_overlap(&sq, &far));
    }

    #[test]
    fn outward_normal_respects_winding() {
        let sq = square();
        let winding = signed_area(&sq);
        // Bottom edge (y = 0) faces -y.
        let n = outward_normal(sq[0], sq[1], winding);
        assert!((n.y + 1.0).abs() < 1e-12);

        let reversed: Vec<Point> = sq.iter().rev().copied().collect();
        let winding = signed_area(&reversed);
        assert!(winding < 0.0);
        // First edge of the reversed ring is the top edge, facing +y.
        let n = outward_normal(reversed[0], reversed[1], winding);
        assert!((n.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn segment_circle_general_line_hits_sorted() {
        let hits = segment_circle_intersections(
            Point::new(-20.0, 0.0),
            Point::new(20.0, 0.0),
            Point::zero(),
            5.0,
        );
        assert_eq!(hits.len(), 2);
        assert!((hits[0].point.x + 5.0).abs() < 1e-9);
        assert!((hits[1].point.x - 5.0).abs() < 1e-9);
        assert!(hits[0].distance < hits[1].distance);
        // Tangent at (-5, 0) runs along the y axis.
        assert!((hits[0].tangent_angle.cos().abs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn segment_circle_vertical_line() {
        let hits = segment_circle_intersections(
            Point::new(3.0, 20.0),
            Point::new(3.0, -20.0),
            Point::zero(),
            5.0,
        );
        assert_eq!(hits.len(), 2);
        assert!((hits[0].point.y - 4.0).abs() < 1e-9);
        assert!((hits[1].point.y + 4.0).abs() < 1e-9);
    }

    #[test]
    fn segment_circle_short_segment_misses() {
        let hits = segment_circle_intersections(
            Point::new(-20.0, 0.0),
            Point::new(-10.0, 0.0),
            Point::zero(),
            5.0,
        );
        assert!(hits.is_empty());
    }
}
