use wasm_bindgen::prelude::*;

use crate::core::{EngineError, Vec2};
use crate::domain::{Area, AreaEffect, Body, Fluid, Force};

use super::tick_stats::TickStats;
use super::WorldCore;

fn js_error(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<World, JsValue> {
        let core = WorldCore::new(width, height).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.core.tick_count() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    // === Settings ===

    pub fn set_gravity(&mut self, magnitude: f64, direction: f64) {
        self.core.set_gravity(Some(Force::new(magnitude, direction)));
    }

    pub fn clear_gravity(&mut self) {
        self.core.set_gravity(None);
    }

    pub fn set_medium_density(&mut self, density: f64) -> Result<(), JsValue> {
        self.core.set_medium_density(density).map_err(js_error)
    }

    // === Bodies ===

    /// Spawn a circle; returns the body id
    pub fn spawn_circle(&mut self, x: f64, y: f64, radius: f64, density: f64) -> Result<u32, JsValue> {
        let body = Body::circle(x, y, radius, density).map_err(js_error)?;
        Ok(self.core.enter_world(body))
    }

    /// Spawn a polygon from flat `[dx0, dy0, dx1, dy1, ...]` vertex offsets
    pub fn spawn_polygon(&mut self, x: f64, y: f64, offsets: Vec<f64>, density: f64) -> Result<u32, JsValue> {
        if offsets.len() % 2 != 0 {
            return Err(js_error(EngineError::shape("vertex offsets must come in x, y pairs")));
        }
        let offsets = offsets.chunks_exact(2).map(|p| Vec2::new(p[0], p[1])).collect();
        let body = Body::polygon(x, y, offsets, density).map_err(js_error)?;
        Ok(self.core.enter_world(body))
    }

    pub fn set_momentum(&mut self, id: u32, magnitude: f64, direction: f64) -> Result<(), JsValue> {
        let body = self.core.body_mut(id).map_err(js_error)?;
        body.set_momentum(Force::new(magnitude, direction));
        Ok(())
    }

    pub fn set_immobile(&mut self, id: u32, immobile: bool) -> Result<(), JsValue> {
        self.core.body_mut(id).map_err(js_error)?.set_immobile(immobile);
        Ok(())
    }

    pub fn set_elasticity(&mut self, id: u32, elasticity: f64) -> Result<(), JsValue> {
        self.core.body_mut(id).map_err(js_error)?.set_elasticity(elasticity);
        Ok(())
    }

    /// Queue a body for removal at the start of the next step
    pub fn remove_body(&mut self, id: u32) -> Result<(), JsValue> {
        self.core.leave_world(id).map_err(js_error)
    }

    pub fn body_x(&self, id: u32) -> Option<f64> {
        self.core.body(id).map(|b| b.position().x)
    }

    pub fn body_y(&self, id: u32) -> Option<f64> {
        self.core.body(id).map(|b| b.position().y)
    }

    pub fn body_heading(&self, id: u32) -> Option<f64> {
        self.core.body(id).map(|b| b.heading())
    }

    pub fn body_speed(&self, id: u32) -> Option<f64> {
        self.core.body(id).map(|b| b.momentum().magnitude)
    }

    pub fn body_direction(&self, id: u32) -> Option<f64> {
        self.core.body(id).map(|b| b.momentum().direction)
    }

    /// Flat `[x, y, heading]` triples in body order, for renderers
    pub fn snapshot(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.core.body_count() * 3);
        for body in self.core.bodies() {
            let p = body.position();
            out.extend_from_slice(&[p.x, p.y, body.heading()]);
        }
        out
    }

    /// Body ids in the same order as `snapshot`
    pub fn body_ids(&self) -> Vec<u32> {
        self.core.bodies().iter().filter_map(Body::id).collect()
    }

    // === Environment ===

    pub fn add_fluid(&mut self, volume: f64, density: f64) -> Result<(), JsValue> {
        self.core.add_fluid(Fluid::new(volume, density).map_err(js_error)?);
        Ok(())
    }

    pub fn fluid_fill_level(&self, index: usize) -> Option<f64> {
        self.core.fluids().get(index).map(|f| f.fill_level(self.core.width()))
    }

    pub fn add_force_area(&mut self, x: f64, y: f64, width: f64, height: f64, magnitude: f64, direction: f64) {
        let effect = AreaEffect::Force(Force::new(magnitude, direction));
        self.core.add_area(Area::new(x, y, width, height, effect));
    }

    pub fn add_removal_area(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.core.add_area(Area::new(x, y, width, height, AreaEffect::Remove));
    }

    // === Ticking ===

    pub fn step(&mut self) {
        self.core.tick();
    }

    pub fn tick_stats(&self) -> TickStats {
        self.core.last_tick_stats()
    }

    /// Call `listener(stats)` after every step
    pub fn set_tick_listener(&mut self, listener: js_sys::Function) {
        self.core.subscribe(move |stats| {
            if let Err(e) = listener.call1(&JsValue::NULL, &JsValue::from(*stats)) {
                log::warn!("tick listener threw: {e:?}");
            }
        });
    }
}
