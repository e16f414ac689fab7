//! Shader checks with naga
//!
//! Parses and validates the WGSL, then checks it against the binding contract
//! in [`crate::layout`] so a mismatch shows up before pipeline creation.

use lumen_shade::MaterialKind;
use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::error::{Result, ShaderError};
use crate::layout::{
    COLOR_TARGET_LOCATION, FRAGMENT_ENTRY_POINT, MATERIAL_BINDING, MATERIAL_GROUP,
    VERTEX_ENTRY_POINT, VIEW_GROUP,
};
use crate::primitives::MaterialUniforms;
use crate::shaders::{material_shader, material_shader_label, UI_VERTEX_SHADER};

/// What a validated shader module exposes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderReport {
    pub name: &'static str,
    pub entry_point: &'static str,
    /// (group, binding) of the checked uniform
    pub uniform_binding: (u32, u32),
    /// Byte size of the uniform struct as naga lays it out
    pub uniform_size: u64,
    /// Whether the entry point can discard
    pub discards: bool,
}

/// Parse and validate a WGSL module
pub fn validate_wgsl(name: &'static str, source: &str) -> Result<naga::Module> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Parse {
        name,
        message: e.emit_to_string(source),
    })?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| ShaderError::Validation {
            name,
            message: e.emit_to_string(source),
        })?;

    Ok(module)
}

/// Check a material's fragment program against the binding contract
pub fn validate_material_shader(kind: MaterialKind) -> Result<ShaderReport> {
    let name = material_shader_label(kind);
    let module = validate_wgsl(name, material_shader(kind))?;

    let entry = find_entry_point(&module, naga::ShaderStage::Fragment, FRAGMENT_ENTRY_POINT)
        .ok_or(ShaderError::MissingEntryPoint {
            name,
            stage: "fragment",
            entry: FRAGMENT_ENTRY_POINT,
        })?;

    let writes_target = matches!(
        entry.function.result.as_ref().and_then(|r| r.binding.as_ref()),
        Some(naga::Binding::Location { location, .. }) if *location == COLOR_TARGET_LOCATION
    );
    if !writes_target {
        return Err(ShaderError::OutputLocation {
            name,
            expected: COLOR_TARGET_LOCATION,
        });
    }

    let uniform_size = uniform_size_at(&module, MATERIAL_GROUP, MATERIAL_BINDING).ok_or(
        ShaderError::MissingBinding {
            name,
            group: MATERIAL_GROUP,
            binding: MATERIAL_BINDING,
        },
    )?;

    let expected = MaterialUniforms::size(kind);
    if uniform_size != expected {
        return Err(ShaderError::UniformSize {
            name,
            expected,
            actual: uniform_size,
        });
    }

    let report = ShaderReport {
        name,
        entry_point: FRAGMENT_ENTRY_POINT,
        uniform_binding: (MATERIAL_GROUP, MATERIAL_BINDING),
        uniform_size,
        discards: block_discards(&entry.function.body),
    };
    tracing::debug!("validated {}: {:?}", name, report);
    Ok(report)
}

/// Check the shared vertex stage
pub fn validate_vertex_shader() -> Result<ShaderReport> {
    let name = "UI Vertex Shader";
    let module = validate_wgsl(name, UI_VERTEX_SHADER)?;

    let entry = find_entry_point(&module, naga::ShaderStage::Vertex, VERTEX_ENTRY_POINT).ok_or(
        ShaderError::MissingEntryPoint {
            name,
            stage: "vertex",
            entry: VERTEX_ENTRY_POINT,
        },
    )?;

    let uniform_size =
        uniform_size_at(&module, VIEW_GROUP, 0).ok_or(ShaderError::MissingBinding {
            name,
            group: VIEW_GROUP,
            binding: 0,
        })?;

    let report = ShaderReport {
        name,
        entry_point: VERTEX_ENTRY_POINT,
        uniform_binding: (VIEW_GROUP, 0),
        uniform_size,
        discards: block_discards(&entry.function.body),
    };
    tracing::debug!("validated {}: {:?}", name, report);
    Ok(report)
}

fn find_entry_point<'a>(
    module: &'a naga::Module,
    stage: naga::ShaderStage,
    name: &str,
) -> Option<&'a naga::EntryPoint> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.stage == stage && ep.name == name)
}

/// Size of the uniform global bound at (group, binding), if any
fn uniform_size_at(module: &naga::Module, group: u32, binding: u32) -> Option<u64> {
    module
        .global_variables
        .iter()
        .map(|(_, var)| var)
        .find(|var| {
            var.space == naga::AddressSpace::Uniform
                && var
                    .binding
                    .as_ref()
                    .is_some_and(|b| b.group == group && b.binding == binding)
        })
        .map(|var| module.types[var.ty].inner.size(module.to_ctx()) as u64)
}

fn block_discards(block: &naga::Block) -> bool {
    block.iter().any(|statement| match statement {
        naga::Statement::Kill => true,
        naga::Statement::Block(inner) => block_discards(inner),
        naga::Statement::If { accept, reject, .. } => {
            block_discards(accept) || block_discards(reject)
        }
        naga::Statement::Switch { cases, .. } => cases.iter().any(|c| block_discards(&c.body)),
        naga::Statement::Loop {
            body, continuing, ..
        } => block_discards(body) || block_discards(continuing),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_wgsl_reports_parse_error() {
        let err = validate_wgsl("broken", "fn fragment( {").unwrap_err();
        assert!(matches!(err, ShaderError::Parse { name: "broken", .. }));
    }

    #[test]
    fn test_invalid_module_reports_validation_error() {
        // Returns a vec4 from a function declared to return f32
        let source = "fn f() -> f32 { return vec4<f32>(1.0); }";
        let err = validate_wgsl("mismatch", source).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::Parse { .. } | ShaderError::Validation { .. }
        ));
    }

    #[test]
    fn test_missing_binding_is_detected() {
        let source = r#"
            struct M { color: vec4<f32> }
            @group(1) @binding(0) var<uniform> material: M;
            @fragment
            fn fragment() -> @location(0) vec4<f32> { return material.color; }
        "#;
        let module = validate_wgsl("moved", source).expect("valid wgsl");
        assert_eq!(uniform_size_at(&module, MATERIAL_GROUP, MATERIAL_BINDING), None);
        assert_eq!(uniform_size_at(&module, 1, 0), Some(16));
    }
}
