//! Round mask material
//!
//! Fills the disk inscribed in the quad with a hard edge and discards every
//! fragment outside it. Inside the disk the color is derived from the
//! coordinate itself: `(u, v, 0, 1)` with `uv` remapped to [0, 1].

use lumen_paint::{Color, Point};
use serde::{Deserialize, Serialize};

use crate::coords::UvSpace;
use crate::fragment::{FragmentInput, FragmentOutput};

/// Squared radius of the visible disk in [`UvSpace::Centered`] coordinates
///
/// Fragments with `dot(uv, uv)` above this are discarded; the effective
/// radius is `sqrt(0.95)`, about 0.9747.
pub const DISK_SQUARED_RADIUS: f32 = 0.95;

/// Coordinate space the round mask expects from the vertex stage
pub const ROUND_UV_SPACE: UvSpace = UvSpace::Centered;

/// Uniform block bound for a round mask draw
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundMaterialParams {
    /// Bound with the material but not read by [`shade_round`]; kept so the
    /// uniform layout matches the pipeline and so a soft-edged variant can
    /// combine it with [`crate::distance_color`].
    pub color: Color,
}

impl RoundMaterialParams {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Shade one fragment of a round mask quad
pub fn shade_round(input: &FragmentInput, _params: &RoundMaterialParams) -> FragmentOutput {
    let uv = input.uv;
    if uv.dot(uv) > DISK_SQUARED_RADIUS {
        return FragmentOutput::Discard;
    }

    let Point { x, y } = ROUND_UV_SPACE.to_unit(uv);
    FragmentOutput::Color(Color::new(x, y, 0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shade(x: f32, y: f32) -> FragmentOutput {
        shade_round(
            &FragmentInput::at(Point::new(x, y)),
            &RoundMaterialParams::new(Color::PURPLE),
        )
    }

    #[test]
    fn test_center_is_half_gray_green() {
        assert_eq!(
            shade(0.0, 0.0),
            FragmentOutput::Color(Color::new(0.5, 0.5, 0.0, 1.0))
        );
    }

    #[test]
    fn test_unit_distance_is_discarded() {
        assert!(shade(1.0, 0.0).is_discard());
        assert!(shade(0.0, -1.0).is_discard());
        assert!(shade(1.0, 1.0).is_discard());
    }

    #[test]
    fn test_inside_point() {
        let c = shade(0.9, 0.2).color().expect("0.85 is inside the disk");
        assert!((c.r - 0.95).abs() < 1e-6);
        assert!((c.g - 0.6).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // On (or within rounding of) the edge: only a strictly larger r discards
        let uv = Point::new(0.75f32.sqrt(), 0.2f32.sqrt());
        let r = uv.dot(uv);
        let out = shade(uv.x, uv.y);
        assert_eq!(out.is_discard(), r > DISK_SQUARED_RADIUS);
    }

    #[test]
    fn test_bound_color_does_not_change_output() {
        let input = FragmentInput::at(Point::new(-0.3, 0.4));
        let a = shade_round(&input, &RoundMaterialParams::new(Color::RED));
        let b = shade_round(&input, &RoundMaterialParams::new(Color::TRANSPARENT));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tint_is_ignored() {
        let params = RoundMaterialParams::default();
        let input = FragmentInput::at(Point::new(0.1, 0.1));
        assert_eq!(
            shade_round(&input, &params),
            shade_round(&input.with_tint(Color::BLUE), &params)
        );
    }
}
