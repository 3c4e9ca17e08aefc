use crate::core::Point;
use crate::domain::Kinematics;
use crate::systems::collision::{detect_collision, detect_edge_collision, CollisionKind, CollisionReport};
use crate::systems::kinematics::{confine, plan_move};
use crate::systems::resolution::handle_collision;

use super::{TickStats, WorldCore};

/// Move bodies in list order. Each mover sees the positions already
/// committed by earlier movers this tick.
pub(super) fn move_bodies(world: &mut WorldCore, stats: &mut TickStats) {
    world.last_collisions.clear();
    for index in 0..world.bodies.len() {
        if world.bodies[index].is_immobile() {
            continue;
        }
        let (next, report) = plan_body(world, index, stats);
        if let Some(report) = report {
            if report.is_edge() {
                stats.edge_collisions += 1;
            } else {
                stats.body_collisions += 1;
            }
            world.last_collisions.push(report);
        }
        world.bodies[index].apply(next);
    }
}

/// Candidate state for one body plus the collision that shaped it, if any
fn plan_body(world: &WorldCore, index: usize, stats: &mut TickStats) -> (Kinematics, Option<CollisionReport>) {
    let ctx = world.context();
    let mover = &world.bodies[index];
    let start = mover.position();
    let swept = mover.bounding_box().union(&mover.bounding_box_at(start + mover.momentum().vector()));

    let mut earliest = detect_edge_collision(mover, &world.config);
    for target in world.bodies.iter().filter(|b| b.id != mover.id) {
        if !swept.overlaps(&target.bounding_box()) {
            stats.pairs_pruned += 1;
            continue;
        }
        stats.pair_tests += 1;
        if let Some(report) = detect_collision(mover, target) {
            if sooner(&report, earliest.as_ref(), start) {
                earliest = Some(report);
            }
        }
    }

    match earliest {
        Some(report) => {
            let target = report.item2.and_then(|id| world.bodies.iter().find(|b| b.id == id));
            let mut next = handle_collision(&report, mover, target, world.impulse_law.as_ref());
            let (position, momentum) = confine(mover, next.position, next.momentum, &world.config);
            next.position = position;
            next.momentum = momentum;
            (next, Some(report))
        }
        None => (plan_move(mover, &ctx, 1.0), None),
    }
}

/// Start-overlaps win outright; otherwise the shorter travel does
fn sooner(candidate: &CollisionReport, current: Option<&CollisionReport>, start: Point) -> bool {
    let Some(current) = current else {
        return true;
    };
    let inside = |r: &CollisionReport| r.kind == CollisionKind::StartInside;
    match (inside(candidate), inside(current)) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate.travel(start) < current.travel(start),
    }
}
