//! Lumen configuration file handling

use anyhow::{Context, Result};
use lumen_paint::Color;
use lumen_shade::{GradientMaterialParams, Material, RoundMaterialParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "lumen.toml";

/// Largest preview image edge, in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

/// Top-level Lumen configuration (lumen.toml)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LumenConfig {
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Material swatches, laid out left to right
    #[serde(default = "default_swatches", rename = "swatch")]
    pub swatches: Vec<SwatchConfig>,
}

/// Preview image settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Output PNG path
    #[serde(default = "default_output")]
    pub output: String,
    /// Clear color behind the swatches
    #[serde(default = "default_background")]
    pub background: Color,
    /// Gap around and between swatches, in pixels
    #[serde(default = "default_padding")]
    pub padding: u32,
}

fn default_output() -> String {
    "lumen-preview.png".to_string()
}

fn default_background() -> Color {
    Color::rgb(0.15, 0.15, 0.15)
}

fn default_padding() -> u32 {
    10
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            background: default_background(),
            padding: default_padding(),
        }
    }
}

/// One material quad in the preview
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SwatchConfig {
    pub material: Material,
    /// Vertex color handed to the fragment stage
    #[serde(default = "default_tint")]
    pub tint: Color,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_tint() -> Color {
    Color::WHITE
}

fn default_width() -> u32 {
    150
}

fn default_height() -> u32 {
    65
}

impl SwatchConfig {
    pub fn new(material: Material) -> Self {
        Self {
            material,
            tint: default_tint(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Blue-to-red gradient button next to a purple round button
fn default_swatches() -> Vec<SwatchConfig> {
    vec![
        SwatchConfig::new(Material::Gradient(GradientMaterialParams::new(
            Color::BLUE,
            Color::RED,
        ))),
        SwatchConfig::new(Material::Round(RoundMaterialParams::new(Color::PURPLE))),
    ]
}

impl Default for LumenConfig {
    fn default() -> Self {
        Self {
            preview: PreviewConfig::default(),
            swatches: default_swatches(),
        }
    }
}

impl LumenConfig {
    /// Path of the config file for a directory or file argument
    pub fn resolve_path(path: &Path) -> PathBuf {
        if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE_NAME)
        }
    }

    /// Load configuration from a directory (looks for lumen.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = Self::resolve_path(path);

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `lumen init` to create one.",
                CONFIG_FILE_NAME,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        tracing::debug!(
            "loaded {} with {} swatches",
            config_path.display(),
            config.swatches.len()
        );
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.image_size()?;
        Ok(config)
    }

    /// Size of the preview image: swatches left to right, `padding` around
    /// and between them
    pub fn image_size(&self) -> Result<(u32, u32)> {
        let padding = self.preview.padding;
        let mut width = padding;
        let mut tallest = 0;
        for swatch in &self.swatches {
            width = width
                .checked_add(swatch.width)
                .and_then(|w| w.checked_add(padding))
                .context("Preview width overflows")?;
            tallest = tallest.max(swatch.height);
        }
        let height = padding
            .checked_mul(2)
            .and_then(|p| p.checked_add(tallest))
            .context("Preview height overflows")?;

        if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
            anyhow::bail!(
                "Preview image would be {}x{}, larger than the {}x{} limit",
                width,
                height,
                MAX_IMAGE_DIMENSION,
                MAX_IMAGE_DIMENSION
            );
        }
        Ok((width, height))
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_shade::MaterialKind;

    #[test]
    fn test_default_round_trips() {
        let config = LumenConfig::default();
        let text = config.to_toml().expect("serialize");
        assert!(text.contains("[[swatch]]"));
        assert_eq!(LumenConfig::from_toml(&text).expect("parse"), config);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = LumenConfig::from_toml("").expect("parse empty");
        assert_eq!(config, LumenConfig::default());
        let kinds: Vec<MaterialKind> = config.swatches.iter().map(|s| s.material.kind()).collect();
        assert_eq!(kinds, vec![MaterialKind::Gradient, MaterialKind::Round]);
    }

    #[test]
    fn test_partial_swatch() {
        let text = r#"
            [preview]
            padding = 4

            [[swatch]]
            width = 32
            height = 32
            material = { kind = "round", color = { r = 1.0, g = 1.0, b = 0.0, a = 1.0 } }
        "#;
        let config = LumenConfig::from_toml(text).expect("parse");
        assert_eq!(config.preview.padding, 4);
        assert_eq!(config.preview.output, "lumen-preview.png");
        assert_eq!(config.swatches.len(), 1);
        assert_eq!(config.swatches[0].tint, Color::WHITE);
        assert_eq!(
            config.swatches[0].material,
            Material::Round(RoundMaterialParams::new(Color::rgb(1.0, 1.0, 0.0)))
        );
    }

    #[test]
    fn test_unknown_material_kind_is_rejected() {
        let text = r#"
            [[swatch]]
            material = { kind = "square" }
        "#;
        assert!(LumenConfig::from_toml(text).is_err());
    }

    #[test]
    fn test_default_image_size() {
        assert_eq!(LumenConfig::default().image_size().expect("size"), (330, 85));
    }

    #[test]
    fn test_oversized_swatch_is_rejected() {
        let text = r#"
            [[swatch]]
            width = 4294967290
            material = { kind = "round" }
        "#;
        let err = LumenConfig::from_toml(text).unwrap_err();
        assert!(err.to_string().contains("overflows"));

        let text = r#"
            [[swatch]]
            width = 20000
            material = { kind = "round" }
        "#;
        let err = LumenConfig::from_toml(text).unwrap_err();
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn test_huge_padding_is_rejected() {
        let mut config = LumenConfig::default();
        config.preview.padding = u32::MAX / 2 + 1;
        assert!(config.image_size().is_err());
    }

    #[test]
    fn test_missing_config_points_at_init() {
        let dir = std::env::temp_dir().join(format!("lumen-missing-{}", std::process::id()));
        let err = LumenConfig::load_from_dir(&dir).unwrap_err();
        assert!(err.to_string().contains("lumen init"));
    }
}
