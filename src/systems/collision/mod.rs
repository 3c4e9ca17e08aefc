//! Collision detection
//!
//! Every test here is a pure function of the bodies' current state and
//! momentum. Body pairs are dispatched on the ordered pair of shape kinds;
//! world edges get their own per-kind test.

mod circle_circle;
mod circle_polygon;
mod polygon_polygon;

pub mod edges;
pub mod swept;

use crate::core::geometry::{circle_intersects_polygon, polygons_overlap};
use crate::core::{Point, Vec2};
use crate::domain::{Body, ShapeKind, ShapePair, WorldConfig};

use super::context::is_same_body;

/// Gap left between a stopped body and whatever it hit
pub const CONTACT_SKIN: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    /// Already overlapping before the move
    StartInside,
    /// The full move would end overlapping
    EndInside,
    /// Neither end overlaps but the swept path does (tunneling)
    PassedThrough,
    /// Crossed a HARD world boundary
    Edge,
}

/// Geometric outcome of a narrow-phase test, before bodies are attached
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub kind: CollisionKind,
    pub impact_point: Point,
    pub stop_point: Point,
    pub wall_angle: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionReport {
    pub kind: CollisionKind,
    pub impact_point: Point,
    pub stop_point: Point,
    /// Tangent of the struck surface; `None` lets the resolver derive it
    pub wall_angle: Option<f64>,
    pub item1: u32,
    /// `None` for edge collisions
    pub item2: Option<u32>,
    /// Mover's mass times momentum magnitude, `0` if inert
    pub force: f64,
    pub force2: f64,
}

impl CollisionReport {
    pub fn between(contact: Contact, mover: &Body, target: &Body) -> Self {
        Self {
            kind: contact.kind,
            impact_point: contact.impact_point,
            stop_point: contact.stop_point,
            wall_angle: contact.wall_angle,
            item1: mover.id,
            item2: Some(target.id),
            force: mover.impact_force(),
            force2: target.impact_force(),
        }
    }

    pub fn edge(contact: Contact, mover: &Body) -> Self {
        Self {
            kind: CollisionKind::Edge,
            impact_point: contact.impact_point,
            stop_point: contact.stop_point,
            wall_angle: contact.wall_angle,
            item1: mover.id,
            item2: None,
            force: mover.impact_force(),
            force2: 0.0,
        }
    }

    pub fn is_edge(&self) -> bool {
        self.kind == CollisionKind::Edge
    }

    /// Distance from `from` to the stop point
    pub fn travel(&self, from: Point) -> f64 {
        from.distance(self.stop_point)
    }
}

pub type PairDetector = fn(&Body, &Body) -> Option<Contact>;

/// Narrow-phase test for an ordered shape pair.
///
/// `None` means the pair has no test and never collides.
pub fn detector_for(pair: ShapePair) -> Option<PairDetector> {
    match (pair.mover, pair.target) {
        (ShapeKind::Circle, ShapeKind::Circle) => Some(circle_circle::detect),
        (ShapeKind::Circle, ShapeKind::Polygon) => Some(circle_polygon::circle_into_polygon),
        (ShapeKind::Polygon, ShapeKind::Circle) => Some(circle_polygon::polygon_into_circle),
        (ShapeKind::Polygon, ShapeKind::Polygon) => Some(polygon_polygon::detect),
    }
}

/// Test `mover`'s planned move (its full momentum) against `target`
pub fn detect_collision(mover: &Body, target: &Body) -> Option<CollisionReport> {
    if mover.is_immobile() || is_same_body(mover, target) {
        return None;
    }
    let detect = detector_for(mover.shape().pair(target.shape()))?;
    detect(mover, target).map(|contact| CollisionReport::between(contact, mover, target))
}

/// Test `mover`'s planned move against the world's HARD edges
pub fn detect_edge_collision(mover: &Body, config: &WorldConfig) -> Option<CollisionReport> {
    if mover.is_immobile() {
        return None;
    }
    let contact = match mover.kind() {
        ShapeKind::Circle => edges::circle_edge(mover, config),
        ShapeKind::Polygon => edges::polygon_edge(mover, config),
    }?;
    Some(CollisionReport::edge(contact, mover))
}

/// Would `body` placed at `position` overlap `other` where it stands?
pub fn overlaps_at(body: &Body, position: Point, other: &Body) -> bool {
    match (body.shape().radius(), other.shape().radius()) {
        (Some(r1), Some(r2)) => position.distance(other.position()) < r1 + r2,
        (Some(r1), None) => circle_intersects_polygon(position, r1, &other.vertices()),
        (None, Some(r2)) => circle_intersects_polygon(other.position(), r2, &body.vertices_at(position)),
        (None, None) => polygons_overlap(&body.vertices_at(position), &other.vertices()),
    }
}

/// Point `travel` along `dir` from `start`, pulled back by the contact skin
pub(crate) fn back_off(start: Point, dir: Vec2, travel: f64) -> Point {
    start + dir * (travel - CONTACT_SKIN).max(0.0)
}
