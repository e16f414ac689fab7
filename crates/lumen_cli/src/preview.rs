//! CPU preview of material swatches
//!
//! Each swatch is shaded with the same functions the GPU programs mirror, then
//! alpha-blended over the background. Discarded fragments leave the
//! background untouched.

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use lumen_paint::Color;
use lumen_shade::{shade_quad, FragmentOutput, MaterialKind, QuadStats};
use std::path::Path;

use crate::config::{LumenConfig, SwatchConfig};

/// Per-swatch result of a preview render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchSummary {
    pub kind: MaterialKind,
    /// Top-left corner of the swatch in the image
    pub origin: (u32, u32),
    pub stats: QuadStats,
}

/// Render every swatch into one image
pub fn render(config: &LumenConfig) -> Result<(RgbaImage, Vec<SwatchSummary>)> {
    let (width, height) = config.image_size()?;
    let padding = config.preview.padding;

    let background = config.preview.background;
    let mut image = RgbaImage::from_pixel(width, height, Rgba(background.to_rgba8()));
    let mut summaries = Vec::with_capacity(config.swatches.len());

    let mut x = padding;
    for swatch in &config.swatches {
        let origin = (x, padding);
        let stats = draw_swatch(&mut image, swatch, origin, background);
        summaries.push(SwatchSummary {
            kind: swatch.material.kind(),
            origin,
            stats,
        });
        x += swatch.width + padding;
    }

    Ok((image, summaries))
}

fn draw_swatch(
    image: &mut RgbaImage,
    swatch: &SwatchConfig,
    origin: (u32, u32),
    background: Color,
) -> QuadStats {
    let outputs = shade_quad(&swatch.material, swatch.width, swatch.height, swatch.tint);

    let mut stats = QuadStats::default();
    for (i, output) in outputs.iter().enumerate() {
        stats.record(output);
        if let FragmentOutput::Color(color) = output {
            let px = origin.0 + i as u32 % swatch.width;
            let py = origin.1 + i as u32 / swatch.width;
            image.put_pixel(px, py, Rgba(color.over(background).to_rgba8()));
        }
    }

    stats
}

/// Render and write the preview PNG
pub fn write_preview(config: &LumenConfig, output: &Path) -> Result<Vec<SwatchSummary>> {
    let (image, summaries) = render(config)?;
    image
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "wrote {}x{} preview to {}",
        image.width(),
        image.height(),
        output.display()
    );
    Ok(summaries)
}
