use crate::core::EngineError;
use crate::domain::Body;

use super::WorldCore;

/// Register a standalone body; returns its world id
pub(super) fn enter_world(world: &mut WorldCore, mut body: Body) -> u32 {
    let id = world.next_id;
    world.next_id = world.next_id.wrapping_add(1).max(1);
    body.id = id;
    world.bodies.push(body);
    log::debug!("body {id} entered world ({} bodies)", world.bodies.len());
    id
}

/// Mark a body for removal at the start of the next tick
pub(super) fn leave_world(world: &mut WorldCore, id: u32) -> Result<(), EngineError> {
    if index_of(world, id).is_none() {
        return Err(EngineError::UnknownBody { id });
    }
    if !world.pending_removal.contains(&id) {
        world.pending_removal.push(id);
    }
    Ok(())
}

/// Take a body out immediately, e.g. to hand it to another world
pub(super) fn detach_body(world: &mut WorldCore, id: u32) -> Option<Body> {
    let index = index_of(world, id)?;
    let mut body = world.bodies.remove(index);
    world.pending_removal.retain(|pending| *pending != id);
    body.id = 0;
    log::debug!("body {id} detached");
    Some(body)
}

/// Compact the body list. The only place bodies disappear during a run.
pub(super) fn flush_removals(world: &mut WorldCore) -> u32 {
    if world.pending_removal.is_empty() {
        return 0;
    }
    let pending = std::mem::take(&mut world.pending_removal);
    let before = world.bodies.len();
    world.bodies.retain(|body| !pending.contains(&body.id));
    let removed = (before - world.bodies.len()) as u32;
    log::debug!("flushed {removed} pending removals");
    removed
}

pub(super) fn index_of(world: &WorldCore, id: u32) -> Option<usize> {
    if id == 0 {
        return None;
    }
    world.bodies.iter().position(|body| body.id == id)
}

pub(super) fn body_mut(world: &mut WorldCore, id: u32) -> Result<&mut Body, EngineError> {
    let index = index_of(world, id).ok_or(EngineError::UnknownBody { id })?;
    Ok(&mut world.bodies[index])
}
