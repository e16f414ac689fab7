//! Color types and utilities

use std::ops::{Add, Mul, Sub};

/// RGBA color with f32 components
///
/// Components are nominally in 0.0 to 1.0 but are never clamped: shading
/// math (for example gradient extrapolation) may legitimately leave that range.
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
    pub const PURPLE: Color = Color {
        r: 0.5,
        g: 0.0,
        b: 0.5,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation `self + (other - self) * t`
    ///
    /// `t` is not clamped, so values outside [0, 1] extrapolate past the
    /// endpoints (same as WGSL `mix`).
    pub fn lerp(self, other: Color, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Source-over blend of `self` onto an opaque or translucent `dst`
    pub fn over(self, dst: Color) -> Self {
        let a = self.a + dst.a * (1.0 - self.a);
        if a <= 0.0 {
            return Color::TRANSPARENT;
        }
        let blend = |s: f32, d: f32| (s * self.a + d * dst.a * (1.0 - self.a)) / a;
        Self {
            r: blend(self.r, dst.r),
            g: blend(self.g, dst.g),
            b: blend(self.b, dst.b),
            a,
        }
    }

    /// Convert to u8 array [r, g, b, a], saturating out-of-range components
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Color::from_array(c)
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Color::BLUE;
        let b = Color::RED;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::new(0.5, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_lerp_does_not_clamp() {
        let c = Color::BLACK.lerp(Color::WHITE, 2.0);
        assert_eq!(c, Color::new(2.0, 2.0, 2.0, 1.0));
    }

    #[test]
    fn test_over() {
        assert_eq!(Color::RED.over(Color::BLUE), Color::RED);
        assert_eq!(Color::TRANSPARENT.over(Color::BLUE), Color::BLUE);
        let half = Color::WHITE.with_alpha(0.5).over(Color::BLACK);
        assert!((half.r - 0.5).abs() < 1e-6);
        assert_eq!(half.a, 1.0);
    }

    #[test]
    fn test_to_rgba8_saturates() {
        assert_eq!(Color::new(1.5, -0.2, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }
}
