use kinetica_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(640.0, 480.0).unwrap();
    world.set_gravity(0.2, 0.0);
    world.add_fluid(640.0 * 60.0, 2.0).unwrap();
    for i in 0..12 {
        let x = 40.0 + 50.0 * i as f64;
        world.spawn_circle(x, 100.0, 8.0, 1.0).unwrap();
        world.spawn_polygon(x + 20.0, 200.0, vec![-6.0, -6.0, 6.0, -6.0, 6.0, 6.0, -6.0, 6.0], 1.5).unwrap();
    }
    for _ in 0..200 {
        world.step();
    }
    let stats = world.tick_stats();
    assert_eq!(stats.tick(), 200);
    assert_eq!(stats.body_count(), 24);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.forces_ms() >= 0.0 && stats.collisions_ms() >= 0.0);
    assert_eq!(stats.pair_tests() + stats.pairs_pruned(), 24 * 23);

    let snapshot = world.snapshot();
    assert_eq!(snapshot.len(), 24 * 3);
    for xy in snapshot.chunks_exact(3) {
        assert!(xy[0] >= 0.0 && xy[0] <= 640.0, "x out of bounds: {}", xy[0]);
        assert!(xy[1] >= 0.0 && xy[1] <= 480.0, "y out of bounds: {}", xy[1]);
    }
    assert_eq!(world.fluid_fill_level(0), Some(60.0));
}
