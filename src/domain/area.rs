//! Areas - rectangular regions that act on bodies whose centre is inside

use crate::core::{Aabb, Point};

use super::force::Force;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AreaEffect {
    /// Extra force on every mobile body inside (divided by mass like gravity)
    Force(Force),
    /// Bodies inside are scheduled for removal at the end of the tick
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    pub bounds: Aabb,
    pub effect: AreaEffect,
}

impl Area {
    pub fn new(x: f64, y: f64, width: f64, height: f64, effect: AreaEffect) -> Self {
        Self {
            bounds: Aabb::from_corners(Point::new(x, y), Point::new(x + width, y + height)),
            effect,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }
}
