use crate::core::EngineError;
use crate::domain::WorldConfig;
use crate::systems::MoverRebound;

use super::tick_stats::TickStats;
use super::WorldCore;

pub(super) fn create_world_core(config: WorldConfig) -> Result<WorldCore, EngineError> {
    config.validate()?;
    log::debug!("world {}x{} created", config.width, config.height);
    Ok(WorldCore {
        config,
        bodies: Vec::with_capacity(64),
        fluids: Vec::new(),
        fluid_bands: Vec::new(),
        areas: Vec::new(),
        pending_removal: Vec::new(),
        next_id: 1,
        impulse_law: Box::new(MoverRebound),
        listeners: Vec::new(),
        last_collisions: Vec::new(),
        tick_stats: TickStats::default(),
        tick: 0,
    })
}

pub(super) fn create_world_core_from_json(json: &str) -> Result<WorldCore, EngineError> {
    create_world_core(WorldConfig::from_json(json)?)
}
