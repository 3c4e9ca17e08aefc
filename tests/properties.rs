//! Property-based tests for force algebra and contact geometry.

use std::f64::consts::TAU;

use kinetica_engine::core::geometry::{vector_x, vector_y};
use kinetica_engine::systems::collision::detect_collision;
use kinetica_engine::{Body, CollisionKind, Force};
use proptest::prelude::*;

fn arb_force() -> impl Strategy<Value = Force> {
    (0.0..1_000.0f64, -20.0..20.0f64).prop_map(|(m, d)| Force::new(m, d))
}

fn angle_gap(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    diff.min(TAU - diff)
}

proptest! {
    #[test]
    fn combine_adds_components(f1 in arb_force(), f2 in arb_force()) {
        let sum = Force::combine(&[f1, f2]);
        prop_assert!((sum.vector_x() - (f1.vector_x() + f2.vector_x())).abs() < 1e-6);
        prop_assert!((sum.vector_y() - (f1.vector_y() + f2.vector_y())).abs() < 1e-6);
    }

    #[test]
    fn from_vector_round_trips(m in 1e-3..1_000.0f64, d in -20.0..20.0f64) {
        let f = Force::from_vector(vector_x(m, d), vector_y(m, d));
        prop_assert!((f.magnitude - m).abs() < 1e-9 * m.max(1.0));
        prop_assert!(angle_gap(f.direction, d) < 1e-9);
        prop_assert!((0.0..TAU).contains(&f.direction));
    }

    #[test]
    fn circle_stop_point_never_penetrates(
        r1 in 1.0..20.0f64,
        r2 in 1.0..20.0f64,
        tx in -200.0..200.0f64,
        ty in -200.0..200.0f64,
        speed in 0.0..300.0f64,
        heading in 0.0..TAU,
    ) {
        let mover = Body::circle(0.0, 0.0, r1, 1.0).unwrap().with_momentum(Force::new(speed, heading));
        let target = Body::circle(tx, ty, r2, 1.0).unwrap();
        if let Some(report) = detect_collision(&mover, &target) {
            let gap = report.stop_point.distance(target.position());
            prop_assert!(gap >= r1 + r2 - 1e-6, "stopped {gap} from target, reach {}", r1 + r2);
            if report.kind != CollisionKind::StartInside {
                prop_assert!(report.stop_point.distance(mover.position()) <= speed + 1e-9);
            }
        }
    }
}
