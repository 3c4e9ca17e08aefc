//! Candidate moves
//!
//! Nothing here touches a live body: each function returns the kinematic
//! state the body would have, and the world commits it later.

use crate::core::geometry::normalize_angle;
use crate::core::Point;
use crate::domain::{Body, Boundary, Force, Kinematics, WorldConfig};

use super::collision::overlaps_at;
use super::context::WorldContext;

/// Where `body` ends up after moving for `time_remaining` of a tick
pub fn plan_move(body: &Body, ctx: &WorldContext, time_remaining: f64) -> Kinematics {
    let mut next = body.kinematics();
    if body.is_immobile() {
        next.momentum = Force::zero();
        return next;
    }

    let start = body.position();
    let mut position = start + body.momentum().vector() * time_remaining;
    if runs_into_immobile(body, position, ctx) {
        position = start;
    }

    let (position, momentum) = confine(body, position, body.momentum(), ctx.config);
    next.position = position;
    next.momentum = momentum;
    if body.heading_follows_direction() && !momentum.is_zero() {
        next.heading = normalize_angle(momentum.direction);
    }
    next
}

/// Apply each edge's boundary policy to a candidate position.
///
/// HARD edges push the body's bounding box back inside and drop the outward
/// momentum component; WRAP edges carry the centre to the opposite side.
pub fn confine(body: &Body, position: Point, momentum: Force, config: &WorldConfig) -> (Point, Force) {
    let edges = &config.boundaries;
    let mut position = position;
    let (mut vx, mut vy) = (momentum.vector_x(), momentum.vector_y());
    let mut clamped = false;

    let bounds = body.bounding_box_at(position);
    if edges.left == Boundary::Hard && bounds.min().x < 0.0 {
        position.x -= bounds.min().x;
        if vx < 0.0 {
            vx = 0.0;
            clamped = true;
        }
    } else if edges.right == Boundary::Hard && bounds.max().x > config.width {
        position.x -= bounds.max().x - config.width;
        if vx > 0.0 {
            vx = 0.0;
            clamped = true;
        }
    }
    if edges.top == Boundary::Hard && bounds.min().y < 0.0 {
        position.y -= bounds.min().y;
        if vy < 0.0 {
            vy = 0.0;
            clamped = true;
        }
    } else if edges.bottom == Boundary::Hard && bounds.max().y > config.height {
        position.y -= bounds.max().y - config.height;
        if vy > 0.0 {
            vy = 0.0;
            clamped = true;
        }
    }

    if (edges.left == Boundary::Wrap && position.x < 0.0)
        || (edges.right == Boundary::Wrap && position.x >= config.width)
    {
        position.x = wrap(position.x, config.width);
    }
    if (edges.top == Boundary::Wrap && position.y < 0.0)
        || (edges.bottom == Boundary::Wrap && position.y >= config.height)
    {
        position.y = wrap(position.y, config.height);
    }

    let momentum = if clamped { Force::from_vector(vx, vy) } else { momentum };
    (position, momentum)
}

/// `value` modulo `extent`, always in `[0, extent)`
fn wrap(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // Tiny negatives round up to `extent` itself.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Moving to `position` would newly overlap an immobile body
fn runs_into_immobile(body: &Body, position: Point, ctx: &WorldContext) -> bool {
    ctx.others(body)
        .filter(|other| other.is_immobile())
        .any(|other| overlaps_at(body, position, other) && !overlaps_at(body, body.position(), other))
}
