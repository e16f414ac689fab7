//! Shader and binding errors
//!
//! Everything here is detected when a pipeline is built, never while shading.

use thiserror::Error;

/// Shader module problems found by naga or by the binding contract checks
#[derive(Error, Debug)]
pub enum ShaderError {
    /// WGSL failed to parse
    #[error("Failed to parse {name}:\n{message}")]
    Parse { name: &'static str, message: String },

    /// Parsed module is not valid
    #[error("{name} failed validation:\n{message}")]
    Validation { name: &'static str, message: String },

    /// Expected entry point is absent or has the wrong stage
    #[error("{name} has no {stage} entry point named {entry:?}")]
    MissingEntryPoint {
        name: &'static str,
        stage: &'static str,
        entry: &'static str,
    },

    /// No uniform bound at the expected slot
    #[error("{name} does not bind a uniform at group {group}, binding {binding}")]
    MissingBinding {
        name: &'static str,
        group: u32,
        binding: u32,
    },

    /// Uniform struct size differs from the CPU-side layout
    #[error("{name} uniform is {actual} bytes, expected {expected}")]
    UniformSize {
        name: &'static str,
        expected: u64,
        actual: u64,
    },

    /// Fragment output is not written to the expected color target
    #[error("{name} fragment output is not at location {expected}")]
    OutputLocation { name: &'static str, expected: u32 },
}

/// Result type for shader checks
pub type Result<T> = std::result::Result<T, ShaderError>;
