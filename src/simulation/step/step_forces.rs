#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::Force;
use crate::systems::forces::next_momentum;
use crate::systems::WorldContext;

use super::WorldCore;

/// Compute every body's next momentum against the same snapshot, then commit
pub(super) fn update_momenta(world: &mut WorldCore) {
    let momenta = {
        let ctx = world.context();
        compute_momenta(&ctx)
    };
    for (body, momentum) in world.bodies.iter_mut().zip(momenta) {
        body.set_momentum(momentum);
    }
}

#[cfg(feature = "parallel")]
fn compute_momenta(ctx: &WorldContext) -> Vec<Force> {
    // Indexed collect keeps body order.
    ctx.bodies.par_iter().map(|body| next_momentum(body, ctx)).collect()
}

#[cfg(not(feature = "parallel"))]
fn compute_momenta(ctx: &WorldContext) -> Vec<Force> {
    ctx.bodies.iter().map(|body| next_momentum(body, ctx)).collect()
}
