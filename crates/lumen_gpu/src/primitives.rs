//! GPU-ready uniform and vertex layouts
//!
//! All structures use `#[repr(C)]` and implement `bytemuck::Pod` so they can
//! be copied straight into buffers. Field order matches the WGSL structs in
//! [`crate::shaders`] and must not change.

use lumen_paint::Color;
use lumen_shade::{GradientMaterialParams, Material, MaterialKind, RoundMaterialParams, UvSpace};

/// Round material uniform (matches shader `RoundMaterial`)
///
/// Memory layout:
/// - color: `vec4<f32>` (16 bytes)
///   Total: 16 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RoundUniforms {
    pub color: [f32; 4],
}

/// Gradient material uniform (matches shader `GradientMaterial`)
///
/// Memory layout:
/// - color_start: `vec4<f32>` (16 bytes)
/// - color_end: `vec4<f32>`   (16 bytes)
///   Total: 32 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GradientUniforms {
    pub color_start: [f32; 4],
    pub color_end: [f32; 4],
}

impl From<&RoundMaterialParams> for RoundUniforms {
    fn from(params: &RoundMaterialParams) -> Self {
        Self {
            color: params.color.to_array(),
        }
    }
}

impl From<&GradientMaterialParams> for GradientUniforms {
    fn from(params: &GradientMaterialParams) -> Self {
        Self {
            color_start: params.color_start.to_array(),
            color_end: params.color_end.to_array(),
        }
    }
}

/// Uniform block contents for whichever material is bound
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialUniforms {
    Round(RoundUniforms),
    Gradient(GradientUniforms),
}

impl MaterialUniforms {
    pub fn from_material(material: &Material) -> Self {
        match material {
            Material::Round(params) => MaterialUniforms::Round(params.into()),
            Material::Gradient(params) => MaterialUniforms::Gradient(params.into()),
        }
    }

    pub fn kind(&self) -> MaterialKind {
        match self {
            MaterialUniforms::Round(_) => MaterialKind::Round,
            MaterialUniforms::Gradient(_) => MaterialKind::Gradient,
        }
    }

    /// Bytes to upload into the material's uniform buffer
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            MaterialUniforms::Round(u) => bytemuck::bytes_of(u),
            MaterialUniforms::Gradient(u) => bytemuck::bytes_of(u),
        }
    }

    /// Uniform block size for a material kind
    pub const fn size(kind: MaterialKind) -> u64 {
        match kind {
            MaterialKind::Round => std::mem::size_of::<RoundUniforms>() as u64,
            MaterialKind::Gradient => std::mem::size_of::<GradientUniforms>() as u64,
        }
    }
}

/// A UI quad vertex (matches `UI_VERTEX_SHADER` inputs)
///
/// Memory layout:
/// - position: `vec3<f32>` (12 bytes) @location(0)
/// - uv: `vec2<f32>`       (8 bytes)  @location(1)
/// - color: `vec4<f32>`    (16 bytes) @location(2)
///   Total: 36 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

/// Two triangles covering `bounds` (x, y, width, height)
///
/// Corner `uv`s span the bounds of `space`, so a round material quad gets
/// [-1, 1] and a gradient quad gets [0, 1].
pub fn quad_vertices(bounds: [f32; 4], z: f32, space: UvSpace, tint: Color) -> [UiVertex; 6] {
    let [x, y, w, h] = bounds;
    let (lo, hi) = space.bounds();
    let color = tint.to_array();
    let corner = |px: f32, py: f32, u: f32, v: f32| UiVertex {
        position: [px, py, z],
        uv: [u, v],
        color,
    };

    // 0--1
    // |\ |
    // | \|
    // 3--2
    let v0 = corner(x, y, lo, lo);
    let v1 = corner(x + w, y, hi, lo);
    let v2 = corner(x + w, y + h, hi, hi);
    let v3 = corner(x, y + h, lo, hi);
    [v0, v1, v2, v0, v2, v3]
}
