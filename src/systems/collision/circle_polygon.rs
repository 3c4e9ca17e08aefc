//! Circle against polygon, in both orderings.
//!
//! Only the circle-approaching-polygon sweep is solved directly. A polygon
//! approaching a circle is solved as its mirror: the circle travels along the
//! reversed momentum toward the un-moved polygon, and the resulting offsets
//! are translated back onto the polygon's real path.

use crate::core::geometry::{
    circle_intersects_polygon, heading_between, nearest_edge, outward_normal, point_in_polygon,
    polygon_edges, polygons_overlap, segment_circle_intersections, segment_intersection, signed_area,
    EPSILON,
};
use crate::core::{Point, Vec2};
use crate::domain::Body;

use super::swept::{circle_path, polygon_path};
use super::{back_off, CollisionKind, Contact, CONTACT_SKIN};

/// First touch of a swept circle against a polygon
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Sweep {
    /// Distance the circle centre covers before touching
    pub travel: f64,
    pub impact: Point,
    pub wall_angle: f64,
}

/// Earliest contact of a circle moving by `movement` with a static polygon.
///
/// Edges are tested as segments pushed out by the radius along their outward
/// normal (only edges facing the motion); corners as circles of the same
/// radius around each vertex.
pub(crate) fn sweep_circle(start: Point, radius: f64, movement: Vec2, vertices: &[Point]) -> Option<Sweep> {
    let length = movement.length();
    if length < EPSILON || vertices.len() < 3 {
        return None;
    }
    let dir = movement * (1.0 / length);
    let end = start + movement;
    let winding = signed_area(vertices);

    let mut best: Option<Sweep> = None;
    let mut consider = |candidate: Sweep| {
        if best.map_or(true, |b| candidate.travel < b.travel) {
            best = Some(candidate);
        }
    };

    for (a, b) in polygon_edges(vertices) {
        let normal = outward_normal(a, b, winding);
        if dir.dot(normal) >= 0.0 {
            continue;
        }
        let shift = normal * radius;
        if let Some(hit) = segment_intersection(start, end, a + shift, b + shift) {
            consider(Sweep {
                travel: hit.t * length,
                impact: hit.point - shift,
                wall_angle: heading_between(b, a),
            });
        }
    }

    for &corner in vertices {
        if let Some(hit) = segment_circle_intersections(start, end, corner, radius).first() {
            consider(Sweep {
                travel: hit.distance,
                impact: corner,
                wall_angle: hit.tangent_angle,
            });
        }
    }

    best
}

pub(super) fn circle_into_polygon(mover: &Body, target: &Body) -> Option<Contact> {
    let radius = mover.shape().radius()?;
    let vertices = target.vertices();
    let start = mover.position();

    if circle_intersects_polygon(start, radius, &vertices) {
        let edge = nearest_edge(start, &vertices)?;
        let normal = if point_in_polygon(start, &vertices) {
            (edge.closest - start).normalize()
        } else {
            (start - edge.closest).normalize()
        };
        return Some(Contact {
            kind: CollisionKind::StartInside,
            impact_point: edge.closest,
            stop_point: edge.closest + normal * (radius + CONTACT_SKIN),
            wall_angle: Some(edge.angle()),
        });
    }

    let movement = mover.momentum().vector();
    if movement.length() < EPSILON {
        return None;
    }
    let kind = if circle_intersects_polygon(start + movement, radius, &vertices) {
        CollisionKind::EndInside
    } else if polygons_overlap(&circle_path(start, radius, movement), &vertices) {
        CollisionKind::PassedThrough
    } else {
        return None;
    };

    let Some(sweep) = sweep_circle(start, radius, movement, &vertices) else {
        log::warn!("circle {} overlaps polygon {} along its path but no contact was found", mover.id, target.id);
        return Some(stay(kind, start));
    };
    Some(Contact {
        kind,
        impact_point: sweep.impact,
        stop_point: back_off(start, movement.normalize(), sweep.travel),
        wall_angle: Some(sweep.wall_angle),
    })
}

pub(super) fn polygon_into_circle(mover: &Body, target: &Body) -> Option<Contact> {
    let radius = target.shape().radius()?;
    let vertices = mover.vertices();
    let centre = target.position();
    let start = mover.position();

    if circle_intersects_polygon(centre, radius, &vertices) {
        let edge = nearest_edge(centre, &vertices)?;
        let shift = if point_in_polygon(centre, &vertices) {
            (centre - edge.closest).normalize() * (edge.distance + radius + CONTACT_SKIN)
        } else {
            (edge.closest - centre).normalize() * (radius - edge.distance + CONTACT_SKIN)
        };
        return Some(Contact {
            kind: CollisionKind::StartInside,
            impact_point: edge.closest,
            stop_point: start + shift,
            wall_angle: Some(edge.angle()),
        });
    }

    let movement = mover.momentum().vector();
    if movement.length() < EPSILON {
        return None;
    }
    let kind = if circle_intersects_polygon(centre, radius, &mover.vertices_at(start + movement)) {
        CollisionKind::EndInside
    } else if circle_intersects_polygon(centre, radius, &polygon_path(&vertices, movement)) {
        CollisionKind::PassedThrough
    } else {
        return None;
    };

    let Some(sweep) = sweep_circle(centre, radius, -movement, &vertices) else {
        log::warn!("polygon {} overlaps circle {} along its path but no contact was found", mover.id, target.id);
        return Some(stay(kind, start));
    };
    let dir = movement.normalize();
    Some(Contact {
        kind,
        impact_point: sweep.impact + dir * sweep.travel,
        stop_point: back_off(start, dir, sweep.travel),
        wall_angle: Some(sweep.wall_angle),
    })
}

fn stay(kind: CollisionKind, at: Point) -> Contact {
    Contact { kind, impact_point: at, stop_point: at, wall_angle: None }
}
