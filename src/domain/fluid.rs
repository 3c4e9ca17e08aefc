//! Fluids - layered volumes settling at the floor (`y = height`)

use crate::core::EngineError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fluid {
    pub volume: f64,
    pub density: f64,
}

impl Fluid {
    pub fn new(volume: f64, density: f64) -> Result<Self, EngineError> {
        if !(volume.is_finite() && volume >= 0.0) {
            return Err(EngineError::config(format!("fluid volume must be non-negative, got {volume}")));
        }
        if !(density.is_finite() && density >= 0.0) {
            return Err(EngineError::config(format!("fluid density must be non-negative, got {density}")));
        }
        Ok(Self { volume, density })
    }

    /// Depth of the layer when spread across the whole world width
    pub fn fill_level(&self, world_width: f64) -> f64 {
        if world_width <= 0.0 {
            return 0.0;
        }
        self.volume / world_width
    }
}

/// Vertical extent occupied by one fluid, `surface <= floor`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidBand {
    pub surface: f64,
    pub floor: f64,
    pub density: f64,
}

impl FluidBand {
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.surface && y <= self.floor
    }

    /// Portion of the vertical span `[top, bottom]` inside this band
    pub fn overlap(&self, top: f64, bottom: f64) -> f64 {
        (bottom.min(self.floor) - top.max(self.surface)).max(0.0)
    }
}

/// Stack fluids from the floor upward in insertion order
pub fn fluid_bands(fluids: &[Fluid], world_width: f64, world_height: f64) -> Vec<FluidBand> {
    let mut floor = world_height;
    fluids
        .iter()
        .map(|f| {
            let surface = floor - f.fill_level(world_width);
            let band = FluidBand { surface, floor, density: f.density };
            floor = surface;
            band
        })
        .collect()
}
