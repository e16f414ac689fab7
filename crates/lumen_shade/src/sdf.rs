//! Distance-field helpers for soft-edged masks
//!
//! Not used by the current materials; available for material variants that
//! want an anti-aliased edge instead of the round mask's hard discard.

use lumen_paint::{Circle, Color, Point};

/// Alpha for a fragment at `distance_to_edge` from a shape boundary
///
/// 1.0 on or inside the edge, falling off linearly to 0.0 one unit outside.
pub fn edge_alpha(distance_to_edge: f32) -> f32 {
    1.0 - distance_to_edge.clamp(0.0, 1.0)
}

/// `color` with its alpha replaced by the soft-edge falloff of a disk
pub fn distance_color(p: Point, center: Point, radius: f32, color: Color) -> Color {
    let distance = Circle::new(center, radius).distance_to_edge(p);
    color.with_alpha(edge_alpha(distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_alpha_falloff() {
        assert_eq!(edge_alpha(-3.0), 1.0);
        assert_eq!(edge_alpha(0.0), 1.0);
        assert_eq!(edge_alpha(0.25), 0.75);
        assert_eq!(edge_alpha(1.0), 0.0);
        assert_eq!(edge_alpha(7.5), 0.0);
    }

    #[test]
    fn test_distance_color_keeps_rgb() {
        let base = Color::new(0.1, 0.2, 0.3, 0.9);
        let c = distance_color(Point::new(10.5, 0.0), Point::ZERO, 10.0, base);
        assert_eq!((c.r, c.g, c.b), (0.1, 0.2, 0.3));
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_distance_color_on_edge_and_outside() {
        let center = Point::new(4.0, 4.0);
        let on_edge = distance_color(Point::new(4.0, 6.0), center, 2.0, Color::PURPLE);
        assert_eq!(on_edge.a, 1.0);
        let outside = distance_color(Point::new(4.0, 7.0), center, 2.0, Color::PURPLE);
        assert_eq!(outside.a, 0.0);
        let inside = distance_color(center, center, 2.0, Color::PURPLE);
        assert_eq!(inside.a, 1.0);
    }
}
