//! Shape strategies: circle and polygon behaviour plus the pair dispatch key

use crate::core::geometry::{point_in_polygon, rotate};
use crate::core::{Aabb, EngineError, Point, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Polygon,
}

/// Ordered shape-kind pair keying collision dispatch (mover first)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapePair {
    pub mover: ShapeKind,
    pub target: ShapeKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    /// Closed vertex ring as offsets from the body position
    Polygon { offsets: Vec<Vec2> },
}

impl Shape {
    pub fn circle(radius: f64) -> Result<Self, EngineError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(EngineError::shape(format!("circle radius must be positive, got {radius}")));
        }
        Ok(Shape::Circle { radius })
    }

    pub fn polygon(offsets: Vec<Vec2>) -> Result<Self, EngineError> {
        if offsets.len() < 3 {
            return Err(EngineError::shape(format!(
                "polygon needs at least 3 vertices, got {}",
                offsets.len()
            )));
        }
        if offsets.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::shape("polygon vertices must be finite"));
        }
        if offsets.iter().all(|v| v.length_squared() == 0.0) {
            return Err(EngineError::shape("polygon vertices must not all sit on the centre"));
        }
        Ok(Shape::Polygon { offsets })
    }

    /// Axis-aligned rectangle centred on the body position
    pub fn rectangle(width: f64, height: f64) -> Result<Self, EngineError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(EngineError::shape(format!("rectangle extents must be positive, got {width}x{height}")));
        }
        let hw = width / 2.0;
        let hh = height / 2.0;
        Shape::polygon(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    pub fn pair(&self, target: &Shape) -> ShapePair {
        ShapePair { mover: self.kind(), target: target.kind() }
    }

    /// Characteristic size: radius, or the farthest vertex from the centre
    pub fn size(&self) -> f64 {
        match self {
            Shape::Circle { radius } => *radius,
            Shape::Polygon { offsets } => offsets.iter().map(Vec2::length).fold(0.0, f64::max),
        }
    }

    pub fn radius(&self) -> Option<f64> {
        match self {
            Shape::Circle { radius } => Some(*radius),
            Shape::Polygon { .. } => None,
        }
    }

    /// World-space vertex ring; empty for circles
    pub fn vertices(&self, position: Point, heading: f64) -> Vec<Point> {
        match self {
            Shape::Circle { .. } => Vec::new(),
            Shape::Polygon { offsets } => offsets.iter().map(|o| position + rotate(*o, heading)).collect(),
        }
    }

    pub fn contains_point(&self, position: Point, heading: f64, point: Point) -> bool {
        match self {
            Shape::Circle { radius } => position.distance(point) < *radius,
            Shape::Polygon { .. } => point_in_polygon(point, &self.vertices(position, heading)),
        }
    }

    pub fn bounding_box(&self, position: Point, heading: f64) -> Aabb {
        match self {
            Shape::Circle { radius } => Aabb::from_center_half_extent(position, *radius),
            Shape::Polygon { .. } => Aabb::from_points(&self.vertices(position, heading))
                .unwrap_or_else(|| Aabb::from_center_half_extent(position, 0.0)),
        }
    }
}
