use wasm_bindgen::prelude::*;

/// Per-tick diagnostics handed to telemetry consumers
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickStats {
    pub(crate) tick: u64,
    pub(crate) step_ms: f64,
    pub(crate) forces_ms: f64,
    pub(crate) collisions_ms: f64,
    /// Narrow-phase pair tests actually run
    pub(crate) pair_tests: u32,
    /// Pairs skipped by the swept bounding-box test
    pub(crate) pairs_pruned: u32,
    pub(crate) body_collisions: u32,
    pub(crate) edge_collisions: u32,
    pub(crate) bodies_removed: u32,
    pub(crate) body_count: u32,
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.tick }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn collisions_ms(&self) -> f64 { self.collisions_ms }
    #[wasm_bindgen(getter)]
    pub fn pair_tests(&self) -> u32 { self.pair_tests }
    #[wasm_bindgen(getter)]
    pub fn pairs_pruned(&self) -> u32 { self.pairs_pruned }
    #[wasm_bindgen(getter)]
    pub fn body_collisions(&self) -> u32 { self.body_collisions }
    #[wasm_bindgen(getter)]
    pub fn edge_collisions(&self) -> u32 { self.edge_collisions }
    #[wasm_bindgen(getter)]
    pub fn bodies_removed(&self) -> u32 { self.bodies_removed }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}
