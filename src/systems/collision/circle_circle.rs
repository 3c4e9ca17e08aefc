use crate::core::geometry::EPSILON;
use crate::domain::Body;

use super::{back_off, CollisionKind, Contact, CONTACT_SKIN};

/// Moving circle against a stationary circle.
///
/// Projects the target centre onto the line of travel, then backs up from
/// the closest approach by the leg of the right triangle whose hypotenuse is
/// the combined radius.
pub(super) fn detect(mover: &Body, target: &Body) -> Option<Contact> {
    let r1 = mover.shape().radius()?;
    let r2 = target.shape().radius()?;
    let reach = r1 + r2;
    let start = mover.position();
    let centre = target.position();

    if start.distance(centre) < reach {
        let normal = (start - centre).normalize();
        return Some(Contact {
            kind: CollisionKind::StartInside,
            impact_point: centre + normal * r2,
            stop_point: centre + normal * (reach + CONTACT_SKIN),
            wall_angle: None,
        });
    }

    let movement = mover.momentum().vector();
    let length = movement.length();
    if length < EPSILON {
        return None;
    }
    let dir = movement * (1.0 / length);

    let along = (centre - start).dot(dir);
    let closest = start + dir * along;
    let miss = closest.distance(centre);
    if miss >= reach {
        return None;
    }

    let travel = along - (reach * reach - miss * miss).sqrt();
    if travel < 0.0 || travel >= length {
        return None;
    }

    let contact_centre = start + dir * travel;
    let kind = if (start + movement).distance(centre) < reach {
        CollisionKind::EndInside
    } else {
        CollisionKind::PassedThrough
    };

    Some(Contact {
        kind,
        impact_point: centre + (contact_centre - centre) * (r2 / reach),
        stop_point: back_off(start, dir, travel),
        wall_angle: None,
    })
}
