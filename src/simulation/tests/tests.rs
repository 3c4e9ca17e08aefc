use std::cell::RefCell;
use std::f64::consts::{FRAC_PI_2, PI};
use std::rc::Rc;

use super::*;
use crate::core::{Point, Vec2};
use crate::domain::{AreaEffect, Boundary};
use crate::systems::CollisionKind;

fn open_world() -> WorldCore {
    let mut world = WorldCore::new(1000.0, 1000.0).unwrap();
    world.set_boundaries(Boundaries::uniform(Boundary::Open));
    world
}

fn block(x: f64, y: f64, half_w: f64, half_h: f64) -> Body {
    Body::polygon(
        x,
        y,
        vec![
            Vec2::new(-half_w, -half_h),
            Vec2::new(half_w, -half_h),
            Vec2::new(half_w, half_h),
            Vec2::new(-half_w, half_h),
        ],
        1.0,
    )
    .unwrap()
}

#[test]
fn ids_are_assigned_in_order() {
    let mut world = open_world();
    let a = world.enter_world(Body::circle(10.0, 10.0, 1.0, 1.0).unwrap());
    let b = world.enter_world(Body::circle(20.0, 10.0, 1.0, 1.0).unwrap());
    assert_eq!((a, b), (1, 2));
    assert_eq!(world.body(b).unwrap().id(), Some(2));
    assert!(world.body(0).is_none());
}

#[test]
fn closing_circles_meet_by_tick_five() {
    let mut world = open_world();
    let a = world.enter_world(Body::circle(400.0, 500.0, 10.0, 1.0).unwrap().with_momentum(Force::new(10.0, FRAC_PI_2)));
    let b = world.enter_world(
        Body::circle(500.0, 500.0, 10.0, 1.0).unwrap().with_momentum(Force::new(10.0, 3.0 * FRAC_PI_2)),
    );

    let mut met = None;
    for tick in 1..=5 {
        world.tick();
        if let Some(report) = world.last_collisions().iter().find(|r| !r.is_edge()) {
            assert!(matches!(report.kind, CollisionKind::EndInside | CollisionKind::PassedThrough));
            met = Some(tick);
            break;
        }
    }
    assert!(met.is_some(), "no collision within five ticks");

    let gap = world.body(a).unwrap().position().distance(world.body(b).unwrap().position());
    assert!((gap - 20.0).abs() < 0.01, "gap {gap}");
}

#[test]
fn fast_circle_does_not_tunnel_through_block() {
    let mut world = open_world();
    let ball = world.enter_world(Body::circle(100.0, 500.0, 10.0, 1.0).unwrap().with_momentum(Force::new(50.0, FRAC_PI_2)));
    world.enter_world(block(170.0, 500.0, 10.0, 10.0).with_immobile(true));

    world.tick();
    world.tick();

    let body = world.body(ball).unwrap();
    assert!(body.position().x < 160.0);
    assert!(body.momentum().vector_x() < 0.0, "ball should be heading back");
    assert_eq!(world.last_collisions()[0].kind, CollisionKind::PassedThrough);
}

#[test]
fn wrap_edges_carry_body_across() {
    let mut world = WorldCore::new(200.0, 200.0).unwrap();
    world.set_boundaries(Boundaries::uniform(Boundary::Wrap));
    let id = world.enter_world(
        Body::circle(195.0, 80.0, 2.0, 1.0)
            .unwrap()
            .with_heading(0.7)
            .with_momentum(Force::new(5.0, FRAC_PI_2)),
    );
    world.tick();
    let body = world.body(id).unwrap();
    assert!(body.position().x.abs() < 1e-9);
    assert!((body.position().y - 80.0).abs() < 1e-9);
    assert_eq!(body.heading(), 0.7);
}

#[test]
fn hard_floor_bounces_falling_ball() {
    let mut world = WorldCore::new(200.0, 200.0).unwrap();
    let id = world.enter_world(Body::circle(100.0, 185.0, 10.0, 1.0).unwrap().with_momentum(Force::new(10.0, 0.0)));
    world.tick();
    let body = world.body(id).unwrap();
    assert!((body.position().y - 190.0).abs() < 1e-9);
    assert!(body.momentum().vector_y() < 0.0);
    assert_eq!(world.last_tick_stats().edge_collisions, 1);
}

#[test]
fn immobile_bodies_never_move() {
    let mut world = WorldCore::new(200.0, 200.0).unwrap();
    world.set_gravity(Some(Force::new(1.0, 0.0)));
    let id = world.enter_world(block(100.0, 100.0, 5.0, 5.0).with_immobile(true));
    for _ in 0..3 {
        world.tick();
    }
    let body = world.body(id).unwrap();
    assert_eq!(body.position(), Point::new(100.0, 100.0));
    assert!(body.momentum().is_zero());
}

#[test]
fn removal_is_deferred_to_next_tick() {
    let mut world = open_world();
    let id = world.enter_world(Body::circle(10.0, 10.0, 1.0, 1.0).unwrap());
    world.leave_world(id).unwrap();
    assert_eq!(world.body_count(), 1);
    assert!(world.is_pending_removal(id));
    world.tick();
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.last_tick_stats().bodies_removed, 1);
    assert!(matches!(world.leave_world(id), Err(EngineError::UnknownBody { id: 1 })));
}

#[test]
fn detached_body_can_join_another_world() {
    let mut first = open_world();
    let mut second = open_world();
    let id = first.enter_world(Body::circle(10.0, 10.0, 1.0, 1.0).unwrap());
    let body = first.detach_body(id).unwrap();
    assert_eq!(body.id(), None);
    assert_eq!(first.body_count(), 0);
    let new_id = second.enter_world(body);
    assert_eq!(second.body(new_id).unwrap().position(), Point::new(10.0, 10.0));
}

#[test]
fn removal_area_consumes_bodies() {
    let mut world = open_world();
    world.add_area(Area::new(0.0, 0.0, 50.0, 50.0, AreaEffect::Remove));
    let doomed = world.enter_world(Body::circle(10.0, 10.0, 1.0, 1.0).unwrap());
    let safe = world.enter_world(Body::circle(100.0, 100.0, 1.0, 1.0).unwrap());
    world.tick();
    assert!(world.is_pending_removal(doomed));
    world.tick();
    assert!(world.body(doomed).is_none());
    assert!(world.body(safe).is_some());
}

#[test]
fn force_area_pushes_bodies_inside() {
    let mut world = open_world();
    world.add_area(Area::new(0.0, 0.0, 100.0, 100.0, AreaEffect::Force(Force::new(1000.0, FRAC_PI_2))));
    let id = world.enter_world(Body::circle(50.0, 50.0, 1.0, 1.0).unwrap());
    world.tick();
    assert!(world.body(id).unwrap().position().x > 50.0);
}

#[test]
fn light_body_floats_up_through_fluid() {
    let mut world = WorldCore::new(100.0, 100.0).unwrap();
    world.set_gravity(Some(Force::new(0.1, 0.0)));
    world.add_fluid(Fluid::new(5000.0, 5.0).unwrap());
    assert!((world.fluids()[0].fill_level(world.width()) - 50.0).abs() < 1e-12);
    let id = world.enter_world(Body::circle(50.0, 80.0, 2.0, 1.0).unwrap());
    world.tick();
    assert!(world.body(id).unwrap().position().y < 80.0);
}

#[test]
fn tick_listener_sees_every_tick() {
    let mut world = open_world();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    world.subscribe(move |stats| sink.borrow_mut().push(stats.tick));
    world.enter_world(Body::circle(10.0, 10.0, 1.0, 1.0).unwrap());
    world.tick();
    world.tick();
    assert_eq!(*seen.borrow(), vec![1, 2]);
    assert_eq!(world.last_tick_stats().body_count, 1);
}

#[test]
fn distant_pairs_are_pruned() {
    let mut world = open_world();
    world.enter_world(Body::circle(10.0, 10.0, 1.0, 1.0).unwrap().with_momentum(Force::new(1.0, PI)));
    world.enter_world(Body::circle(900.0, 900.0, 1.0, 1.0).unwrap());
    world.tick();
    let stats = world.last_tick_stats();
    assert_eq!(stats.pair_tests, 0);
    assert_eq!(stats.pairs_pruned, 2);
}

#[test]
fn earliest_contact_wins() {
    let mut world = open_world();
    let id = world.enter_world(Body::circle(100.0, 500.0, 5.0, 1.0).unwrap().with_momentum(Force::new(100.0, FRAC_PI_2)));
    let near = world.enter_world(block(140.0, 500.0, 5.0, 20.0).with_immobile(true));
    world.enter_world(block(170.0, 500.0, 5.0, 20.0).with_immobile(true));
    world.tick();
    assert_eq!(world.last_collisions()[0].item2, Some(near));
    assert!((world.body(id).unwrap().position().x - 130.0).abs() < 0.01);
}

#[test]
fn invalid_configuration_is_rejected() {
    assert!(WorldCore::new(0.0, 100.0).is_err());
    assert!(WorldCore::from_config_json("{ not json").is_err());
    let world = WorldCore::from_config_json(r#"{"width": 300, "boundaries": {"left": "wrap"}}"#).unwrap();
    assert_eq!(world.width(), 300.0);
    assert_eq!(world.config().boundaries.left, Boundary::Wrap);
    assert_eq!(world.config().boundaries.right, Boundary::Hard);
}
