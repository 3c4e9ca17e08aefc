use std::f64::consts::PI;

use crate::core::{Aabb, EngineError, Point, Vec2};

use super::force::Force;
use super::shape::{Shape, ShapeKind};

/// Candidate kinematic state of a body.
///
/// Produced by pure planning functions and committed to the live body only
/// once the tick pipeline has settled on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    pub position: Point,
    pub heading: f64,
    pub momentum: Force,
}

/// Rigid body - moves as a single unit, never rotates on its own
#[derive(Clone, Debug)]
pub struct Body {
    /// World-assigned id, `0` while standalone
    pub(crate) id: u32,

    // === Kinematic State ===
    position: Point,
    heading: f64,
    /// Per-tick displacement (velocity-like despite the name)
    momentum: Force,

    // === Shape Definition ===
    shape: Shape,

    // === Material properties ===
    density: f64,
    /// Bounciness in `[0, 1]`
    elasticity: f64,
    immobile: bool,
    /// Snap heading to the momentum direction after every move
    heading_follows_direction: bool,
}

impl Body {
    pub fn new(position: Point, shape: Shape, density: f64) -> Result<Self, EngineError> {
        if !(density.is_finite() && density > 0.0) {
            return Err(EngineError::body(format!("density must be positive, got {density}")));
        }
        if !position.is_finite() {
            return Err(EngineError::body("position must be finite"));
        }
        Ok(Self {
            id: 0,
            position,
            heading: 0.0,
            momentum: Force::zero(),
            shape,
            density,
            elasticity: 1.0,
            immobile: false,
            heading_follows_direction: false,
        })
    }

    /// Create a circular body centred on `(x, y)`
    pub fn circle(x: f64, y: f64, radius: f64, density: f64) -> Result<Self, EngineError> {
        Self::new(Point::new(x, y), Shape::circle(radius)?, density)
    }

    /// Create a polygonal body from vertex offsets relative to `(x, y)`
    pub fn polygon(x: f64, y: f64, offsets: Vec<Vec2>, density: f64) -> Result<Self, EngineError> {
        Self::new(Point::new(x, y), Shape::polygon(offsets)?, density)
    }

    pub fn with_momentum(mut self, momentum: Force) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f64) -> Self {
        self.set_elasticity(elasticity);
        self
    }

    pub fn with_immobile(mut self, immobile: bool) -> Self {
        self.set_immobile(immobile);
        self
    }

    pub fn with_heading_follows_direction(mut self, follows: bool) -> Self {
        self.heading_follows_direction = follows;
        self
    }

    /// World id, `None` while the body is not part of a world
    pub fn id(&self) -> Option<u32> {
        (self.id != 0).then_some(self.id)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn momentum(&self) -> Force {
        self.momentum
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    pub fn is_immobile(&self) -> bool {
        self.immobile
    }

    pub fn heading_follows_direction(&self) -> bool {
        self.heading_follows_direction
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    pub fn set_momentum(&mut self, momentum: Force) {
        self.momentum = if self.immobile { Force::zero() } else { momentum };
    }

    /// Set elasticity (clamped to `[0, 1]`)
    pub fn set_elasticity(&mut self, elasticity: f64) {
        self.elasticity = if elasticity.is_nan() { 0.0 } else { elasticity.clamp(0.0, 1.0) };
    }

    pub fn set_immobile(&mut self, immobile: bool) {
        self.immobile = immobile;
        if immobile {
            self.momentum = Force::zero();
        }
    }

    /// Characteristic size used for volume: radius or bounding radius
    pub fn size(&self) -> f64 {
        self.shape.size()
    }

    /// Spherical volume `(4/3)·π·size³`, whatever the actual shape
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.size().powi(3)
    }

    pub fn mass(&self) -> f64 {
        self.density * self.volume()
    }

    /// No momentum to contribute to a collision
    pub fn is_inert(&self) -> bool {
        self.immobile || self.momentum.magnitude == 0.0
    }

    /// Mass times momentum magnitude, `0` when inert
    pub fn impact_force(&self) -> f64 {
        if self.is_inert() {
            0.0
        } else {
            self.mass() * self.momentum.magnitude.abs()
        }
    }

    pub fn vertices(&self) -> Vec<Point> {
        self.shape.vertices(self.position, self.heading)
    }

    pub fn vertices_at(&self, position: Point) -> Vec<Point> {
        self.shape.vertices(position, self.heading)
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.shape.contains_point(self.position, self.heading, point)
    }

    pub fn bounding_box(&self) -> Aabb {
        self.shape.bounding_box(self.position, self.heading)
    }

    pub fn bounding_box_at(&self, position: Point) -> Aabb {
        self.shape.bounding_box(position, self.heading)
    }

    /// Independent copy, momentum included
    pub fn duplicate(&self) -> Body {
        self.clone()
    }

    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            position: self.position,
            heading: self.heading,
            momentum: self.momentum,
        }
    }

    /// Commit a planned state. Immobile bodies keep zero momentum.
    pub fn apply(&mut self, next: Kinematics) {
        self.position = next.position;
        self.heading = next.heading;
        self.set_momentum(next.momentum);
    }
}
