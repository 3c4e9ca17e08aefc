//! World-edge tests. Only HARD edges report; WRAP and open edges are left
//! to the move step.

use std::f64::consts::FRAC_PI_2;

use crate::core::geometry::{normalize_angle, EPSILON};
use crate::core::Point;
use crate::domain::{Body, Boundary, WorldConfig};

use super::{back_off, CollisionKind, Contact};

/// Tangent of the left/right walls
const VERTICAL_WALL: f64 = 0.0;
/// Tangent of the top/bottom walls
const HORIZONTAL_WALL: f64 = FRAC_PI_2;

/// Clamp the circle's end position to the crossed walls
pub fn circle_edge(mover: &Body, config: &WorldConfig) -> Option<Contact> {
    let radius = mover.shape().radius()?;
    let movement = mover.momentum().vector();
    let end = mover.position() + movement;
    let edges = &config.boundaries;

    let mut stop = end;
    let mut impact = end;
    let mut vertical = false;
    let mut horizontal = false;

    if edges.left == Boundary::Hard && movement.x <= 0.0 && end.x < radius {
        stop.x = radius;
        impact.x = 0.0;
        vertical = true;
    } else if edges.right == Boundary::Hard && movement.x >= 0.0 && end.x > config.width - radius {
        stop.x = config.width - radius;
        impact.x = config.width;
        vertical = true;
    }

    if edges.top == Boundary::Hard && movement.y <= 0.0 && end.y < radius {
        stop.y = radius;
        impact.y = 0.0;
        horizontal = true;
    } else if edges.bottom == Boundary::Hard && movement.y >= 0.0 && end.y > config.height - radius {
        stop.y = config.height - radius;
        impact.y = config.height;
        horizontal = true;
    }

    if vertical && !horizontal {
        impact.y = stop.y;
    } else if horizontal && !vertical {
        impact.x = stop.x;
    }

    let wall_angle = match (vertical, horizontal) {
        (false, false) => return None,
        (true, false) => VERTICAL_WALL,
        (false, true) => HORIZONTAL_WALL,
        (true, true) => normalize_angle(mover.momentum().direction + FRAC_PI_2),
    };

    Some(Contact { kind: CollisionKind::Edge, impact_point: impact, stop_point: stop, wall_angle: Some(wall_angle) })
}

/// A candidate wall crossing, as a fraction of the move
#[derive(Clone, Copy, Debug)]
struct Crossing {
    fraction: f64,
    impact: Point,
    wall_angle: f64,
}

/// Find the first polygon vertex to cross a HARD wall and back-solve along
/// the momentum line to where it touches.
pub fn polygon_edge(mover: &Body, config: &WorldConfig) -> Option<Contact> {
    let movement = mover.momentum().vector();
    let length = movement.length();
    if length < EPSILON {
        return None;
    }
    let vertices = mover.vertices();
    let edges = &config.boundaries;
    let mut crossings: Vec<Crossing> = Vec::with_capacity(2);

    // Similar triangles: the fraction of the move needed to reach the wall on
    // one axis fixes the offset travelled on the other.
    let mut vertical_wall = |leading: Point, wall_x: f64| {
        let fraction = ((wall_x - leading.x) / movement.x).clamp(0.0, 1.0);
        crossings.push(Crossing {
            fraction,
            impact: Point::new(wall_x, leading.y + movement.y * fraction),
            wall_angle: VERTICAL_WALL,
        });
    };
    if edges.left == Boundary::Hard && movement.x < 0.0 {
        let leading = extreme(&vertices, |a, b| a.x < b.x)?;
        if leading.x + movement.x < 0.0 {
            vertical_wall(leading, 0.0);
        }
    } else if edges.right == Boundary::Hard && movement.x > 0.0 {
        let leading = extreme(&vertices, |a, b| a.x > b.x)?;
        if leading.x + movement.x > config.width {
            vertical_wall(leading, config.width);
        }
    }

    let mut horizontal_wall = |leading: Point, wall_y: f64| {
        let fraction = ((wall_y - leading.y) / movement.y).clamp(0.0, 1.0);
        crossings.push(Crossing {
            fraction,
            impact: Point::new(leading.x + movement.x * fraction, wall_y),
            wall_angle: HORIZONTAL_WALL,
        });
    };
    if edges.top == Boundary::Hard && movement.y < 0.0 {
        let leading = extreme(&vertices, |a, b| a.y < b.y)?;
        if leading.y + movement.y < 0.0 {
            horizontal_wall(leading, 0.0);
        }
    } else if edges.bottom == Boundary::Hard && movement.y > 0.0 {
        let leading = extreme(&vertices, |a, b| a.y > b.y)?;
        if leading.y + movement.y > config.height {
            horizontal_wall(leading, config.height);
        }
    }

    let first = crossings.iter().copied().min_by(|a, b| a.fraction.total_cmp(&b.fraction))?;
    let corner = crossings.len() == 2 && (crossings[0].fraction - crossings[1].fraction).abs() < EPSILON;
    let wall_angle = if corner {
        normalize_angle(mover.momentum().direction + FRAC_PI_2)
    } else {
        first.wall_angle
    };

    Some(Contact {
        kind: CollisionKind::Edge,
        impact_point: first.impact,
        stop_point: back_off(mover.position(), movement * (1.0 / length), first.fraction * length),
        wall_angle: Some(wall_angle),
    })
}

fn extreme(vertices: &[Point], better: impl Fn(&Point, &Point) -> bool) -> Option<Point> {
    vertices.iter().copied().reduce(|best, v| if better(&v, &best) { v } else { best })
}
