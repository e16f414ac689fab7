//! Per-fragment input and output records

use lumen_paint::{Color, Point};

/// Interpolated values handed to a fragment shading function
///
/// Produced by the vertex stage and the rasterizer. Shading functions read it
/// by reference and never modify it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FragmentInput {
    /// Surface coordinate; its range is fixed by the material's [`crate::UvSpace`]
    pub uv: Point,
    /// Vertex color carried through from the vertex stage (not read by the
    /// current materials)
    pub tint: Color,
    /// Clip-space position, consumed by the rasterizer
    pub clip_position: [f32; 4],
}

impl FragmentInput {
    pub const fn new(uv: Point, tint: Color, clip_position: [f32; 4]) -> Self {
        Self {
            uv,
            tint,
            clip_position,
        }
    }

    /// Fragment at `uv` with a white tint and a zero clip position
    pub const fn at(uv: Point) -> Self {
        Self::new(uv, Color::WHITE, [0.0, 0.0, 0.0, 1.0])
    }

    pub fn with_tint(self, tint: Color) -> Self {
        Self { tint, ..self }
    }
}

/// Result of shading one fragment
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FragmentOutput {
    /// Color written to the target at location 0
    Color(Color),
    /// No color or depth is written for this fragment
    Discard,
}

impl FragmentOutput {
    pub fn is_discard(&self) -> bool {
        matches!(self, FragmentOutput::Discard)
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            FragmentOutput::Color(c) => Some(*c),
            FragmentOutput::Discard => None,
        }
    }
}

impl From<Color> for FragmentOutput {
    fn from(c: Color) -> Self {
        FragmentOutput::Color(c)
    }
}
