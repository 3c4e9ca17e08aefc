use super::vec2::{Point, Vec2};

/// Axis-aligned bounding box in world coordinates.
///
/// `min` components never exceed their `max` counterparts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Point,
    max: Point,
}

impl Aabb {
    /// Box spanning two arbitrary corners
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[must_use]
    pub fn from_center_half_extent(center: Point, half: f64) -> Self {
        let he = Vec2::new(half, half);
        Self { min: center - he, max: center + he }
    }

    /// Smallest box holding every point; `None` for an empty set
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().skip(1).fold(Self { min: first, max: first }, |acc, p| Self {
            min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        }))
    }

    #[must_use]
    pub fn min(&self) -> Point {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Point {
        self.max
    }

    /// Inclusive on faces so touching boxes still pair up
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}
