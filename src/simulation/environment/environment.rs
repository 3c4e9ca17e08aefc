use crate::domain::{fluid_bands, Area, AreaEffect, Fluid};

use super::WorldCore;

pub(super) fn add_fluid(world: &mut WorldCore, fluid: Fluid) {
    world.fluids.push(fluid);
    rebuild_fluid_bands(world);
}

pub(super) fn add_area(world: &mut WorldCore, area: Area) {
    world.areas.push(area);
}

/// Fluids settle in insertion order; any change restacks every band
pub(super) fn rebuild_fluid_bands(world: &mut WorldCore) {
    world.fluid_bands = fluid_bands(&world.fluids, world.config.width, world.config.height);
}

/// Queue every body whose centre sits in a removal area
pub(super) fn mark_removal_areas(world: &mut WorldCore) {
    for area in world.areas.iter().filter(|a| a.effect == AreaEffect::Remove) {
        for body in world.bodies.iter().filter(|b| area.contains(b.position())) {
            if !world.pending_removal.contains(&body.id) {
                world.pending_removal.push(body.id);
            }
        }
    }
}
