//! Lumen GPU side
//!
//! The WGSL programs for the round mask and gradient materials, the
//! `bytemuck` uniform layouts they read, and the bind group / vertex layout
//! contract shared with the UI pipeline. Shaders are checked with naga.

pub mod error;
pub mod layout;
pub mod primitives;
pub mod shaders;
pub mod validate;

pub use error::{Result, ShaderError};
pub use primitives::{GradientUniforms, MaterialUniforms, RoundUniforms, UiVertex};
pub use validate::{validate_material_shader, validate_vertex_shader, validate_wgsl, ShaderReport};
