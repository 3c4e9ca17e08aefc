//! World - owns bodies, fluids and areas and advances them tick by tick
//!
//! The world is an index-addressed arena: bodies live in one `Vec` in
//! insertion order and are referred to by id. Per-body computations get a
//! read-only [`WorldContext`] instead of a back-reference.
//!
//! Tick pipeline (see `step/step.rs`):
//! - flush bodies queued for removal
//! - accumulate forces and update every momentum (parallel with `parallel`)
//! - move bodies one by one, resolving the earliest wall or body contact
//! - queue bodies inside removal areas, publish [`TickStats`]

use crate::core::EngineError;
use crate::domain::{Area, Body, Boundaries, Fluid, FluidBand, Force, WorldConfig};
use crate::systems::{CollisionReport, ImpulseLaw, WorldContext};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/tick_stats.rs"]
mod tick_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "bodies/bodies.rs"]
mod bodies;
#[path = "environment/environment.rs"]
mod environment;
#[path = "step/step_forces.rs"]
mod step_forces;
#[path = "step/step_collisions.rs"]
mod step_collisions;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::World;
pub use tick_stats::TickStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    config: WorldConfig,
    bodies: Vec<Body>,
    fluids: Vec<Fluid>,
    /// Vertical extents derived from `fluids`, restacked on change
    fluid_bands: Vec<FluidBand>,
    areas: Vec<Area>,

    /// Ids queued by `leave_world` or removal areas
    pending_removal: Vec<u32>,
    next_id: u32,

    impulse_law: Box<dyn ImpulseLaw>,
    listeners: Vec<Box<dyn FnMut(&TickStats)>>,

    // State
    last_collisions: Vec<CollisionReport>,
    tick_stats: TickStats,
    tick: u64,
}

impl WorldCore {
    /// Create an empty world with default settings
    pub fn new(width: f64, height: f64) -> Result<Self, EngineError> {
        init::create_world_core(WorldConfig::new(width, height))
    }

    pub fn with_config(config: WorldConfig) -> Result<Self, EngineError> {
        init::create_world_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        init::create_world_core_from_json(json)
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn width(&self) -> f64 {
        self.config.width
    }

    pub fn height(&self) -> f64 {
        self.config.height
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    // === Settings ===

    pub fn set_gravity(&mut self, gravity: Option<Force>) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_medium_density(&mut self, density: f64) -> Result<(), EngineError> {
        settings::set_medium_density(self, density)
    }

    pub fn set_boundaries(&mut self, boundaries: Boundaries) {
        settings::set_boundaries(self, boundaries);
    }

    pub fn set_bodies_attract(&mut self, attract: bool, mass_threshold: f64) -> Result<(), EngineError> {
        settings::set_bodies_attract(self, attract, mass_threshold)
    }

    /// Replace how outgoing speed is computed after body collisions
    pub fn set_impulse_law(&mut self, law: Box<dyn ImpulseLaw>) {
        settings::set_impulse_law(self, law);
    }

    // === Bodies ===

    /// Add a body; returns its id
    pub fn enter_world(&mut self, body: Body) -> u32 {
        bodies::enter_world(self, body)
    }

    /// Queue a body for removal. It stays in the world until the next tick starts.
    pub fn leave_world(&mut self, id: u32) -> Result<(), EngineError> {
        bodies::leave_world(self, id)
    }

    /// Remove a body right away and hand it back with its id cleared
    pub fn detach_body(&mut self, id: u32) -> Option<Body> {
        bodies::detach_body(self, id)
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        bodies::index_of(self, id).map(|i| &self.bodies[i])
    }

    pub fn body_mut(&mut self, id: u32) -> Result<&mut Body, EngineError> {
        bodies::body_mut(self, id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_pending_removal(&self, id: u32) -> bool {
        self.pending_removal.contains(&id)
    }

    // === Environment ===

    pub fn add_fluid(&mut self, fluid: Fluid) {
        environment::add_fluid(self, fluid);
    }

    pub fn fluids(&self) -> &[Fluid] {
        &self.fluids
    }

    pub fn fluid_bands(&self) -> &[FluidBand] {
        &self.fluid_bands
    }

    pub fn add_area(&mut self, area: Area) {
        environment::add_area(self, area);
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    // === Ticking ===

    /// Advance the world by one tick
    pub fn tick(&mut self) {
        step::step(self);
    }

    /// Collisions resolved during the last tick, in resolution order
    pub fn last_collisions(&self) -> &[CollisionReport] {
        &self.last_collisions
    }

    pub fn last_tick_stats(&self) -> TickStats {
        settings::last_tick_stats(self)
    }

    /// Call `listener` once after every completed tick
    pub fn subscribe(&mut self, listener: impl FnMut(&TickStats) + 'static) {
        settings::subscribe(self, Box::new(listener));
    }

    pub fn context(&self) -> WorldContext<'_> {
        WorldContext::new(&self.config, &self.bodies, &self.fluid_bands, &self.areas)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
