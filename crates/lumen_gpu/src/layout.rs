//! Binding contract between the UI pipeline and material shaders
//!
//! Group layout of every material pipeline:
//! - group 0: view uniform (vertex + fragment)
//! - group 1: node image and sampler (unused by the current materials)
//! - group 2: material uniform at binding 0 (fragment)
//!
//! Fragment output goes to color target 0 with alpha blending.

use lumen_shade::MaterialKind;

use crate::primitives::{MaterialUniforms, UiVertex};

pub const VIEW_GROUP: u32 = 0;
pub const IMAGE_GROUP: u32 = 1;
pub const MATERIAL_GROUP: u32 = 2;
pub const MATERIAL_BINDING: u32 = 0;
pub const COLOR_TARGET_LOCATION: u32 = 0;

pub const VERTEX_ENTRY_POINT: &str = "vertex";
pub const FRAGMENT_ENTRY_POINT: &str = "fragment";

static UI_VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
    // position: vec3<f32>
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    // uv: vec2<f32>
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 12,
        shader_location: 1,
    },
    // color: vec4<f32>
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 20,
        shader_location: 2,
    },
];

/// Vertex buffer layout for [`UiVertex`]
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<UiVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &UI_VERTEX_ATTRIBUTES,
    }
}

/// Layout entry for the material uniform at (group 2, binding 0)
pub fn material_layout_entry(kind: MaterialKind) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: MATERIAL_BINDING,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(MaterialUniforms::size(kind)),
        },
        count: None,
    }
}

/// Layout entry for the view uniform at (group 0, binding 0)
pub fn view_layout_entry() -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: true,
            // mat4x4<f32>
            min_binding_size: wgpu::BufferSize::new(64),
        },
        count: None,
    }
}

/// Color target at location 0, alpha blended
pub fn color_target(format: wgpu::TextureFormat) -> wgpu::ColorTargetState {
    wgpu::ColorTargetState {
        format,
        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
        write_mask: wgpu::ColorWrites::ALL,
    }
}

/// Debug label for a material's bind group layout
pub const fn material_layout_label(kind: MaterialKind) -> &'static str {
    match kind {
        MaterialKind::Round => "Round Material Bind Group Layout",
        MaterialKind::Gradient => "Gradient Material Bind Group Layout",
    }
}

pub fn create_material_bind_group_layout(
    device: &wgpu::Device,
    kind: MaterialKind,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(material_layout_label(kind)),
        entries: &[material_layout_entry(kind)],
    })
}

/// Bind a material uniform buffer to a layout from
/// [`create_material_bind_group_layout`]
pub fn create_material_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniforms: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Material Bind Group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: MATERIAL_BINDING,
            resource: uniforms.as_entire_binding(),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_covers_ui_vertex() {
        let layout = vertex_buffer_layout();
        assert_eq!(layout.array_stride, 36);
        let last = layout.attributes.last().expect("three attributes");
        assert_eq!(last.offset + last.format.size(), layout.array_stride);
        let locations: Vec<u32> = layout.attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![0, 1, 2]);
    }

    #[test]
    fn test_material_entry_is_fragment_uniform() {
        let entry = material_layout_entry(MaterialKind::Gradient);
        assert_eq!(entry.binding, MATERIAL_BINDING);
        assert_eq!(entry.visibility, wgpu::ShaderStages::FRAGMENT);
        match entry.ty {
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                min_binding_size,
                ..
            } => assert_eq!(min_binding_size.map(|s| s.get()), Some(32)),
            other => panic!("unexpected binding type {other:?}"),
        }
    }

    #[test]
    fn test_view_entry_is_visible_to_both_stages() {
        let entry = view_layout_entry();
        assert!(entry.visibility.contains(wgpu::ShaderStages::VERTEX));
        assert!(entry.visibility.contains(wgpu::ShaderStages::FRAGMENT));
    }

    #[test]
    fn test_color_target_blends() {
        let target = color_target(wgpu::TextureFormat::Rgba8UnormSrgb);
        assert_eq!(target.blend, Some(wgpu::BlendState::ALPHA_BLENDING));
        assert_eq!(target.write_mask, wgpu::ColorWrites::ALL);
    }
}
