//! Geometric primitives

use crate::point::Point;

/// A circle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Signed distance from `point` to the circle's edge
    ///
    /// Negative inside, zero on the edge, positive outside.
    pub fn distance_to_edge(&self, point: Point) -> f32 {
        point.distance(self.center) - self.radius
    }
}
