//! Lumen paint types
//!
//! Plain value types shared by the CPU shading functions and the GPU uniform
//! layouts.
//!
//! # Features
//!
//! - Linear RGBA colors with component-wise arithmetic
//! - 2D points with the vector operations shaders use (`dot`, `length`)
//! - Circles with a distance-to-edge query for signed-distance style masks

pub mod color;
pub mod point;
pub mod primitives;

pub use color::Color;
pub use point::Point;
pub use primitives::*;
