//! Force - magnitude/direction value type
//!
//! Components follow the engine angle convention:
//! `vector_x = magnitude·sin(direction)`, `vector_y = magnitude·cos(direction)`.

use serde::{Deserialize, Serialize};

use crate::core::geometry::{self, direction_of, magnitude, normalize_angle};
use crate::core::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub magnitude: f64,
    /// Radians, `0` = +y, clockwise-positive
    pub direction: f64,
}

impl Force {
    pub const fn new(magnitude: f64, direction: f64) -> Self {
        Self { magnitude, direction }
    }

    pub const fn zero() -> Self {
        Self { magnitude: 0.0, direction: 0.0 }
    }

    /// Canonical magnitude/direction of a displacement
    pub fn from_vector(x: f64, y: f64) -> Self {
        Self {
            magnitude: magnitude(x, y),
            direction: direction_of(x, y),
        }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self::from_vector(v.x, v.y)
    }

    #[inline]
    pub fn vector_x(&self) -> f64 {
        geometry::vector_x(self.magnitude, self.direction)
    }

    #[inline]
    pub fn vector_y(&self) -> f64 {
        geometry::vector_y(self.magnitude, self.direction)
    }

    #[inline]
    pub fn vector(&self) -> Vec2 {
        Vec2::new(self.vector_x(), self.vector_y())
    }

    /// Vector sum of `forces`, accumulated in slice order.
    ///
    /// This is the only place superposition happens; keeping the order fixed
    /// keeps floating-point results reproducible between runs.
    pub fn combine(forces: &[Force]) -> Force {
        let (x, y) = forces
            .iter()
            .fold((0.0, 0.0), |(x, y), f| (x + f.vector_x(), y + f.vector_y()));
        Force::from_vector(x, y)
    }

    /// Same magnitude, opposite direction
    pub fn reversed(&self) -> Force {
        Force::new(self.magnitude, normalize_angle(self.direction + std::f64::consts::PI))
    }

    pub fn scaled(&self, factor: f64) -> Force {
        Force::new(self.magnitude * factor, self.direction)
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }
}
