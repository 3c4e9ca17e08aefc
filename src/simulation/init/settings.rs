use crate::core::EngineError;
use crate::domain::{Boundaries, Force};
use crate::systems::ImpulseLaw;

use super::tick_stats::TickStats;
use super::WorldCore;

pub(super) fn set_gravity(world: &mut WorldCore, gravity: Option<Force>) {
    world.config.gravity = gravity;
}

pub(super) fn set_medium_density(world: &mut WorldCore, density: f64) -> Result<(), EngineError> {
    if !(density.is_finite() && density >= 0.0) {
        return Err(EngineError::config(format!("medium density must be non-negative, got {density}")));
    }
    world.config.medium_density = density;
    Ok(())
}

pub(super) fn set_boundaries(world: &mut WorldCore, boundaries: Boundaries) {
    world.config.boundaries = boundaries;
}

pub(super) fn set_bodies_attract(world: &mut WorldCore, attract: bool, mass_threshold: f64) -> Result<(), EngineError> {
    if !(mass_threshold.is_finite() && mass_threshold >= 0.0) {
        return Err(EngineError::config(format!("gravity mass threshold must be non-negative, got {mass_threshold}")));
    }
    world.config.bodies_attract = attract;
    world.config.gravity_mass_threshold = mass_threshold;
    Ok(())
}

pub(super) fn set_impulse_law(world: &mut WorldCore, law: Box<dyn ImpulseLaw>) {
    world.impulse_law = law;
}

pub(super) fn subscribe(world: &mut WorldCore, listener: Box<dyn FnMut(&TickStats)>) {
    world.listeners.push(listener);
}

pub(super) fn last_tick_stats(world: &WorldCore) -> TickStats {
    world.tick_stats
}
