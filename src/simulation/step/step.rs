use super::{bodies, environment, step_collisions, step_forces};
use super::{PerfTimer, TickStats, WorldCore};

/// One atomic tick: flush removals, integrate momenta, move and collide
/// bodies one at a time, then publish telemetry.
pub(super) fn step(world: &mut WorldCore) {
    let mut timer = PerfTimer::start();
    let mut stats = TickStats::default();

    stats.bodies_removed = bodies::flush_removals(world);
    timer.lap();

    step_forces::update_momenta(world);
    stats.forces_ms = timer.lap();

    step_collisions::move_bodies(world, &mut stats);
    stats.collisions_ms = timer.lap();

    environment::mark_removal_areas(world);

    world.tick += 1;
    stats.tick = world.tick;
    stats.body_count = world.bodies.len() as u32;
    stats.step_ms = timer.total_ms();
    world.tick_stats = stats;

    for listener in world.listeners.iter_mut() {
        listener(&stats);
    }
}
