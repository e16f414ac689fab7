//! Surface coordinate conventions
//!
//! The vertex stage and a material have to agree on what range `uv` covers.
//! Each material declares its [`UvSpace`]; anything producing fragments for
//! that material maps quad coordinates through it.

use lumen_paint::Point;

/// Range covered by `uv` across a material's quad
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UvSpace {
    /// [0, 1] x [0, 1], origin at the top-left corner
    #[default]
    Unit,
    /// [-1, 1] x [-1, 1], origin at the quad center; the unit circle is
    /// inscribed in the quad
    Centered,
}

impl UvSpace {
    /// Map a [0, 1] quad coordinate into this space
    pub fn from_unit(self, p: Point) -> Point {
        match self {
            UvSpace::Unit => p,
            UvSpace::Centered => p * 2.0 - Point::ONE,
        }
    }

    /// Map a coordinate in this space back to [0, 1]
    pub fn to_unit(self, uv: Point) -> Point {
        match self {
            UvSpace::Unit => uv,
            UvSpace::Centered => (uv + Point::ONE) / 2.0,
        }
    }

    /// Lower and upper bound of each axis
    pub const fn bounds(self) -> (f32, f32) {
        match self {
            UvSpace::Unit => (0.0, 1.0),
            UvSpace::Centered => (-1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_mapping() {
        let s = UvSpace::Centered;
        assert_eq!(s.from_unit(Point::new(0.5, 0.5)), Point::ZERO);
        assert_eq!(s.from_unit(Point::ZERO), Point::new(-1.0, -1.0));
        assert_eq!(s.to_unit(Point::new(1.0, -1.0)), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_unit_is_identity() {
        let p = Point::new(0.25, 0.75);
        assert_eq!(UvSpace::Unit.from_unit(p), p);
        assert_eq!(UvSpace::Unit.to_unit(p), p);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(UvSpace::Unit.bounds(), (0.0, 1.0));
        assert_eq!(UvSpace::Centered.bounds(), (-1.0, 1.0));
    }
}
