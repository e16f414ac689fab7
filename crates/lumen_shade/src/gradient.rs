//! Two-color linear gradient material

use lumen_paint::Color;
use serde::{Deserialize, Serialize};

use crate::coords::UvSpace;
use crate::fragment::{FragmentInput, FragmentOutput};

/// Coordinate space the gradient expects from the vertex stage
pub const GRADIENT_UV_SPACE: UvSpace = UvSpace::Unit;

/// Uniform block bound for a gradient draw
///
/// Field order is part of the GPU layout: `color_start` then `color_end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GradientMaterialParams {
    /// Color at `uv.x == 0`
    pub color_start: Color,
    /// Color at `uv.x == 1`
    pub color_end: Color,
}

impl GradientMaterialParams {
    pub const fn new(color_start: Color, color_end: Color) -> Self {
        Self {
            color_start,
            color_end,
        }
    }
}

/// Shade one fragment of a gradient quad
///
/// Blends all four components by `uv.x` without clamping; coordinates outside
/// [0, 1] extrapolate past the endpoint colors. Never discards.
pub fn shade_gradient(input: &FragmentInput, params: &GradientMaterialParams) -> FragmentOutput {
    FragmentOutput::Color(params.color_start.lerp(params.color_end, input.uv.x))
}
