use std::f64::consts::FRAC_PI_2;

use crate::core::geometry::{
    direction_of, heading_between, normalize_angle, polygon_edges, polygons_overlap, segment_intersection, EPSILON,
};
use crate::core::{Point, Vec2};
use crate::domain::Body;

use super::swept::polygon_path;
use super::{CollisionKind, Contact, CONTACT_SKIN};

/// Earliest feature contact between two polygons
#[derive(Clone, Copy, Debug)]
struct FeatureHit {
    travel: f64,
    impact: Point,
    /// Mover centre minus the contact point, fixed for the whole move
    offset: Vec2,
    wall_angle: f64,
}

pub(super) fn detect(mover: &Body, target: &Body) -> Option<Contact> {
    let vertices = mover.vertices();
    let others = target.vertices();
    let start = mover.position();

    if polygons_overlap(&vertices, &others) {
        // Bounding-circle separation: coarse for concave or elongated shapes.
        let normal = (start - target.position()).normalize();
        return Some(Contact {
            kind: CollisionKind::StartInside,
            impact_point: target.position() + normal * target.size(),
            stop_point: target.position() + normal * (mover.size() + target.size() + CONTACT_SKIN),
            wall_angle: Some(normalize_angle(direction_of(normal.x, normal.y) + FRAC_PI_2)),
        });
    }

    let movement = mover.momentum().vector();
    let length = movement.length();
    if length < EPSILON {
        return None;
    }
    let kind = if polygons_overlap(&mover.vertices_at(start + movement), &others) {
        CollisionKind::EndInside
    } else if polygons_overlap(&polygon_path(&vertices, movement), &others) {
        CollisionKind::PassedThrough
    } else {
        return None;
    };

    let Some(hit) = first_contact(start, &vertices, &others, movement) else {
        log::warn!("polygon {} overlaps polygon {} along its path but no crossing was found", mover.id, target.id);
        return Some(Contact { kind, impact_point: start, stop_point: start, wall_angle: None });
    };

    let dir = movement * (1.0 / length);
    let contact_centre = hit.impact + hit.offset;
    Some(Contact {
        kind,
        impact_point: hit.impact,
        stop_point: contact_centre - dir * CONTACT_SKIN.min(hit.travel),
        wall_angle: Some(hit.wall_angle),
    })
}

/// Nearest crossing over both candidate sets: mover corners running into
/// target edges, and target corners run into by mover edges (the target
/// corner is walked backwards by the movement instead).
fn first_contact(centre: Point, mover: &[Point], target: &[Point], movement: Vec2) -> Option<FeatureHit> {
    let length = movement.length();
    let mut best: Option<FeatureHit> = None;
    let mut consider = |candidate: FeatureHit| {
        if best.map_or(true, |b| candidate.travel < b.travel) {
            best = Some(candidate);
        }
    };

    for &corner in mover {
        for (a, b) in polygon_edges(target) {
            if let Some(hit) = segment_intersection(corner, corner + movement, a, b) {
                consider(FeatureHit {
                    travel: hit.t * length,
                    impact: hit.point,
                    offset: centre - corner,
                    wall_angle: heading_between(b, a),
                });
            }
        }
    }

    for &corner in target {
        for (a, b) in polygon_edges(mover) {
            if let Some(hit) = segment_intersection(corner, corner - movement, a, b) {
                consider(FeatureHit {
                    travel: hit.t * length,
                    impact: corner,
                    offset: centre - hit.point,
                    wall_angle: heading_between(b, a),
                });
            }
        }
    }

    best
}
