//! Lumen Shading Stage
//!
//! Per-fragment shading for two UI material kinds:
//!
//! - **Round mask**: a hard-edged disk; fragments outside it are discarded
//! - **Gradient**: a two-color linear blend along the horizontal axis
//!
//! Every shading function is a pure function of a [`FragmentInput`] and the
//! material's bound parameters. A fragment either produces a color or is
//! discarded; discard is a value ([`FragmentOutput::Discard`]), not an error.
//!
//! # Example
//!
//! ```rust
//! use lumen_paint::{Color, Point};
//! use lumen_shade::{FragmentInput, FragmentOutput, Material, RoundMaterialParams};
//!
//! let round = Material::Round(RoundMaterialParams::new(Color::PURPLE));
//!
//! let center = round.shade(&FragmentInput::at(Point::ZERO));
//! assert_eq!(center, FragmentOutput::Color(Color::new(0.5, 0.5, 0.0, 1.0)));
//!
//! let corner = round.shade(&FragmentInput::at(Point::new(1.0, 1.0)));
//! assert!(corner.is_discard());
//! ```

pub mod coords;
pub mod error;
pub mod fragment;
pub mod gradient;
pub mod material;
pub mod raster;
pub mod round;
pub mod sdf;

pub use coords::UvSpace;
pub use error::ParseMaterialError;
pub use fragment::{FragmentInput, FragmentOutput};
pub use gradient::{shade_gradient, GradientMaterialParams};
pub use material::{Material, MaterialKind};
pub use raster::{shade_quad, QuadStats};
pub use round::{shade_round, RoundMaterialParams, DISK_SQUARED_RADIUS};
pub use sdf::{distance_color, edge_alpha};
