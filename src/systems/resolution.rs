//! Collision response
//!
//! Only the mover (`item1`) is repositioned and deflected; whatever it hit is
//! treated as fixed. How much speed survives the bounce is delegated to an
//! [`ImpulseLaw`] so a symmetric exchange can be slotted in later.

use std::f64::consts::FRAC_PI_2;

use crate::core::geometry::{heading_between, nearest_edge, normalize_angle, unit};
use crate::domain::{Body, Force, Kinematics, ShapeKind};

use super::collision::{CollisionKind, CollisionReport};

/// Outgoing speed of the mover after a body collision
pub trait ImpulseLaw: Send + Sync {
    fn outgoing_magnitude(&self, report: &CollisionReport, mover: &Body, target: Option<&Body>) -> f64;
}

/// Default law: the mover rebounds with the mass-weighted share of both
/// sides' impact forces, scaled by the product of elasticities. Fixed
/// targets return the mover's own speed times elasticity.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoverRebound;

impl ImpulseLaw for MoverRebound {
    fn outgoing_magnitude(&self, report: &CollisionReport, mover: &Body, target: Option<&Body>) -> f64 {
        let speed = mover.momentum().magnitude.abs();
        let Some(target) = target else {
            return speed * mover.elasticity();
        };
        let elasticity = mover.elasticity() * target.elasticity();
        let (m1, m2) = (mover.mass(), target.mass());
        if target.is_immobile() || m1 <= 0.0 || m2 <= 0.0 {
            return speed * elasticity;
        }
        (report.force / m1 + report.force2 / m2) * (m2 / (m1 + m2)) * elasticity
    }
}

/// Mirror `direction` about the line running along `wall_angle`
pub fn reflect(direction: f64, wall_angle: f64) -> f64 {
    normalize_angle(2.0 * wall_angle - direction)
}

/// Surface tangent at the impact when the detector left it open
pub fn implied_wall_angle(report: &CollisionReport, mover: &Body, target: Option<&Body>) -> f64 {
    match target {
        Some(t) if t.kind() == ShapeKind::Circle => {
            normalize_angle(heading_between(report.impact_point, t.position()) + FRAC_PI_2)
        }
        Some(t) => nearest_edge(report.impact_point, &t.vertices())
            .map(|edge| edge.angle())
            .unwrap_or_else(|| normalize_angle(mover.momentum().direction + FRAC_PI_2)),
        None => normalize_angle(mover.momentum().direction + FRAC_PI_2),
    }
}

/// New kinematic state for the mover of `report`
pub fn handle_collision(
    report: &CollisionReport,
    mover: &Body,
    target: Option<&Body>,
    law: &dyn ImpulseLaw,
) -> Kinematics {
    let wall = report
        .wall_angle
        .unwrap_or_else(|| implied_wall_angle(report, mover, target));
    let momentum = mover.momentum();

    let outgoing = if report.kind == CollisionKind::Edge {
        Force::new(momentum.magnitude.abs() * mover.elasticity(), reflect(momentum.direction, wall))
    } else {
        let magnitude = law.outgoing_magnitude(report, mover, target);
        let direction = if separating(report, momentum, wall) {
            momentum.direction
        } else {
            reflect(momentum.direction, wall)
        };
        Force::new(magnitude, direction)
    };

    let mut heading = mover.heading();
    if mover.heading_follows_direction() && !outgoing.is_zero() {
        heading = normalize_angle(outgoing.direction);
    }

    log::trace!("body {} {:?} at {:?}, wall {:.3}", report.item1, report.kind, report.impact_point, wall);
    Kinematics { position: report.stop_point, heading, momentum: outgoing }
}

/// Momentum already points away from the struck surface
fn separating(report: &CollisionReport, momentum: Force, wall: f64) -> bool {
    let away = report.stop_point - report.impact_point;
    let mut normal = unit(wall).perpendicular();
    if normal.dot(away) < 0.0 {
        normal = -normal;
    }
    momentum.vector().dot(normal) > 0.0
}
