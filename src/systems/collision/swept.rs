//! Swept path outlines used to catch tunneling

use crate::core::{Point, Vec2};

/// Rectangle covered by a circle's diameter over `movement`.
///
/// Together with the start and end circles this is the full capsule.
pub fn circle_path(start: Point, radius: f64, movement: Vec2) -> Vec<Point> {
    let side = movement.normalize().perpendicular() * radius;
    let end = start + movement;
    vec![start + side, end + side, end - side, start - side]
}

/// Parallelogram traced by the polygon's extreme left and right vertices
/// relative to the direction of travel.
pub fn polygon_path(vertices: &[Point], movement: Vec2) -> Vec<Point> {
    let Some(&first) = vertices.first() else {
        return Vec::new();
    };
    let side = movement.normalize().perpendicular();
    let (mut left, mut right) = (first, first);
    for &v in vertices {
        if side.dot(v) > side.dot(left) {
            left = v;
        }
        if side.dot(v) < side.dot(right) {
            right = v;
        }
    }
    vec![left, left + movement, right + movement, right]
}
