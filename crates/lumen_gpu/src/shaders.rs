//! WGSL programs for the UI materials
//!
//! - `UI_VERTEX_SHADER`: shared vertex stage (position, uv, color)
//! - `ROUND_MATERIAL_SHADER`: hard-edged disk, discards outside
//! - `GRADIENT_MATERIAL_SHADER`: two-color blend along uv.x
//!
//! The fragment programs mirror `lumen_shade::shade_round` and
//! `lumen_shade::shade_gradient` line for line. Change both together.

use lumen_shade::MaterialKind;

/// Vertex stage paired with every material
///
/// View uniform at group 0, vertex attributes match [`crate::UiVertex`].
pub const UI_VERTEX_SHADER: &str = r#"
struct View {
    view_proj: mat4x4<f32>,
}

@group(0) @binding(0) var<uniform> view: View;

struct VertexOutput {
    @location(0) uv: vec2<f32>,
    @location(1) color: vec4<f32>,
    @builtin(position) position: vec4<f32>,
}

@vertex
fn vertex(
    @location(0) vertex_position: vec3<f32>,
    @location(1) vertex_uv: vec2<f32>,
    @location(2) vertex_color: vec4<f32>,
) -> VertexOutput {
    var out: VertexOutput;
    out.uv = vertex_uv;
    out.position = view.view_proj * vec4<f32>(vertex_position, 1.0);
    out.color = vertex_color;
    return out;
}
"#;

/// Round mask material
///
/// Expects `uv` in [-1, 1]. `material.color` and `distance_color` are bound
/// and compiled in but do not feed the output.
pub const ROUND_MATERIAL_SHADER: &str = r#"
struct VertexOutput {
    @location(0) uv: vec2<f32>,
    @location(1) color: vec4<f32>,
    @builtin(position) position: vec4<f32>,
}

struct RoundMaterial {
    color: vec4<f32>,
}

@group(2) @binding(0) var<uniform> material: RoundMaterial;

// Squared radius of the visible disk
const DISK_SQUARED_RADIUS: f32 = 0.95;

// Soft edge: alpha falls from 1 to 0 over one unit outside the disk
fn distance_color(p: vec2<f32>, center: vec2<f32>, radius: f32, color: vec4<f32>) -> vec4<f32> {
    let distance_to_edge = length(p - center) - radius;
    let alpha = 1.0 - clamp(distance_to_edge, 0.0, 1.0);
    return vec4<f32>(color.rgb, alpha);
}

@fragment
fn fragment(in: VertexOutput) -> @location(0) vec4<f32> {
    let r = dot(in.uv, in.uv);
    if r > DISK_SQUARED_RADIUS {
        discard;
    }
    let normalized = (in.uv + vec2<f32>(1.0, 1.0)) / 2.0;
    return vec4<f32>(normalized.x, normalized.y, 0.0, 1.0);
}
"#;

/// Gradient material
///
/// Expects `uv` in [0, 1]; the blend factor is not clamped.
pub const GRADIENT_MATERIAL_SHADER: &str = r#"
struct VertexOutput {
    @location(0) uv: vec2<f32>,
    @location(1) color: vec4<f32>,
    @builtin(position) position: vec4<f32>,
}

struct GradientMaterial {
    color_start: vec4<f32>,
    color_end: vec4<f32>,
}

@group(2) @binding(0) var<uniform> material: GradientMaterial;

@fragment
fn fragment(in: VertexOutput) -> @location(0) vec4<f32> {
    return mix(material.color_start, material.color_end, vec4<f32>(in.uv.x));
}
"#;

/// Fragment program for a material kind
pub const fn material_shader(kind: MaterialKind) -> &'static str {
    match kind {
        MaterialKind::Round => ROUND_MATERIAL_SHADER,
        MaterialKind::Gradient => GRADIENT_MATERIAL_SHADER,
    }
}

/// Debug label for a material's shader module
pub const fn material_shader_label(kind: MaterialKind) -> &'static str {
    match kind {
        MaterialKind::Round => "Round Material Shader",
        MaterialKind::Gradient => "Gradient Material Shader",
    }
}

/// Create the wgpu shader module for a material's fragment program
pub fn create_material_shader_module(
    device: &wgpu::Device,
    kind: MaterialKind,
) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(material_shader_label(kind)),
        source: wgpu::ShaderSource::Wgsl(material_shader(kind).into()),
    })
}

/// Create the wgpu shader module for the shared vertex stage
pub fn create_vertex_shader_module(device: &wgpu::Device) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("UI Vertex Shader"),
        source: wgpu::ShaderSource::Wgsl(UI_VERTEX_SHADER.into()),
    })
}
