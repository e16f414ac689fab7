//! Shading stage error types

use thiserror::Error;

/// Failure to parse a material kind name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMaterialError {
    /// Name is not one of the known material kinds
    #[error("Unknown material kind: {0:?} (expected \"round\" or \"gradient\")")]
    UnknownKind(String),
}
