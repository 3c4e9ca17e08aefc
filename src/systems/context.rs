use crate::domain::{Area, Body, FluidBand, WorldConfig};

/// Read-only view of the world handed to per-body computations.
///
/// Replaces a body -> world back-reference: bodies never point at their world,
/// the world lends this view while it computes forces and moves.
#[derive(Clone, Copy)]
pub struct WorldContext<'a> {
    pub config: &'a WorldConfig,
    pub bodies: &'a [Body],
    pub fluids: &'a [FluidBand],
    pub areas: &'a [Area],
}

impl<'a> WorldContext<'a> {
    pub fn new(config: &'a WorldConfig, bodies: &'a [Body], fluids: &'a [FluidBand], areas: &'a [Area]) -> Self {
        Self { config, bodies, fluids, areas }
    }

    /// Context with no other bodies, fluids or areas
    pub fn empty(config: &'a WorldConfig) -> Self {
        Self { config, bodies: &[], fluids: &[], areas: &[] }
    }

    /// Every body except `body` itself, in world order
    pub fn others<'b>(&'b self, body: &'b Body) -> impl Iterator<Item = &'a Body> + 'b {
        self.bodies.iter().filter(move |other| !is_same_body(other, body))
    }
}

/// Identity by address, or by world id once assigned
pub(crate) fn is_same_body(a: &Body, b: &Body) -> bool {
    std::ptr::eq(a, b) || (a.id != 0 && a.id == b.id)
}
