//! Material selection
//!
//! The pipeline binds exactly one material per draw. [`Material`] is the
//! closed set of kinds; each variant owns its parameters and its shading
//! function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coords::UvSpace;
use crate::error::ParseMaterialError;
use crate::fragment::{FragmentInput, FragmentOutput};
use crate::gradient::{shade_gradient, GradientMaterialParams, GRADIENT_UV_SPACE};
use crate::round::{shade_round, RoundMaterialParams, ROUND_UV_SPACE};

/// Material kinds (stable names used in config files and logs)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Round,
    Gradient,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 2] = [MaterialKind::Round, MaterialKind::Gradient];

    pub const fn name(self) -> &'static str {
        match self {
            MaterialKind::Round => "round",
            MaterialKind::Gradient => "gradient",
        }
    }

    pub const fn uv_space(self) -> UvSpace {
        match self {
            MaterialKind::Round => ROUND_UV_SPACE,
            MaterialKind::Gradient => GRADIENT_UV_SPACE,
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MaterialKind {
    type Err = ParseMaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round" => Ok(MaterialKind::Round),
            "gradient" => Ok(MaterialKind::Gradient),
            _ => Err(ParseMaterialError::UnknownKind(s.to_string())),
        }
    }
}

/// A bound material: kind plus its uniform parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Material {
    Round(RoundMaterialParams),
    Gradient(GradientMaterialParams),
}

impl Material {
    pub const fn kind(&self) -> MaterialKind {
        match self {
            Material::Round(_) => MaterialKind::Round,
            Material::Gradient(_) => MaterialKind::Gradient,
        }
    }

    pub const fn uv_space(&self) -> UvSpace {
        self.kind().uv_space()
    }

    /// Shade one fragment with this material
    pub fn shade(&self, input: &FragmentInput) -> FragmentOutput {
        match self {
            Material::Round(params) => shade_round(input, params),
            Material::Gradient(params) => shade_gradient(input, params),
        }
    }
}

impl From<RoundMaterialParams> for Material {
    fn from(params: RoundMaterialParams) -> Self {
        Material::Round(params)
    }
}

impl From<GradientMaterialParams> for Material {
    fn from(params: GradientMaterialParams) -> Self {
        Material::Gradient(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_paint::{Color, Point};

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let round = RoundMaterialParams::new(Color::PURPLE);
        let gradient = GradientMaterialParams::new(Color::BLUE, Color::RED);
        let input = FragmentInput::at(Point::new(0.3, -0.2));

        assert_eq!(
            Material::from(round).shade(&input),
            shade_round(&input, &round)
        );
        assert_eq!(
            Material::from(gradient).shade(&input),
            shade_gradient(&input, &gradient)
        );
    }

    #[test]
    fn test_kind_and_space() {
        let round = Material::Round(RoundMaterialParams::default());
        let gradient = Material::Gradient(GradientMaterialParams::default());
        assert_eq!(round.kind(), MaterialKind::Round);
        assert_eq!(round.uv_space(), UvSpace::Centered);
        assert_eq!(gradient.kind(), MaterialKind::Gradient);
        assert_eq!(gradient.uv_space(), UvSpace::Unit);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shading_types_are_send_sync() {
        assert_send_sync::<Material>();
        assert_send_sync::<MaterialKind>();
        assert_send_sync::<RoundMaterialParams>();
        assert_send_sync::<GradientMaterialParams>();
        assert_send_sync::<FragmentInput>();
        assert_send_sync::<FragmentOutput>();
        assert_send_sync::<crate::QuadStats>();
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in MaterialKind::ALL {
            assert_eq!(kind.name().parse::<MaterialKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(" Gradient ".parse::<MaterialKind>(), Ok(MaterialKind::Gradient));
        assert_eq!(
            "square".parse::<MaterialKind>(),
            Err(ParseMaterialError::UnknownKind("square".to_string()))
        );
    }
}
