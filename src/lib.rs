//! Kinetica Engine - continuous-collision 2D rigid bodies in WASM
//!
//! Architecture:
//! - core/        - vector math, geometry kernel, errors
//! - domain/      - bodies, shapes, forces, fluids, areas, configuration
//! - systems/     - force integration, moves, collision detection/response
//! - simulation/  - the world and its tick pipeline, JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub mod world {
    pub use crate::simulation::*;
}

use wasm_bindgen::prelude::*;

// Thread pool initialisation for the browser build
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, console logging, banner
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // A second init keeps the logger already installed.
    let _ = console_log::init_with_level(log::Level::Info);

    web_sys::console::log_1(&"Kinetica engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, Point, Vec2};
pub use domain::{Area, AreaEffect, Body, Boundaries, Boundary, Fluid, Force, Shape, ShapeKind, WorldConfig};
pub use simulation::{TickStats, World, WorldCore};
pub use systems::{CollisionKind, CollisionReport, ImpulseLaw, MoverRebound};
