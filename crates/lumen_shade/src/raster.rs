//! CPU evaluation of a material over a whole quad
//!
//! Stands in for the rasterizer when previewing or testing: one fragment per
//! pixel center, `uv` mapped through the material's [`crate::UvSpace`].
//! Fragments are shaded independently of each other.

use lumen_paint::{Color, Point};

use crate::fragment::{FragmentInput, FragmentOutput};
use crate::material::Material;

/// Counts of shaded and discarded fragments in a quad
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuadStats {
    pub shaded: usize,
    pub discarded: usize,
}

impl QuadStats {
    pub fn from_outputs(outputs: &[FragmentOutput]) -> Self {
        outputs.iter().fold(Self::default(), |mut stats, output| {
            stats.record(output);
            stats
        })
    }

    /// Count one fragment result
    pub fn record(&mut self, output: &FragmentOutput) {
        if output.is_discard() {
            self.discarded += 1;
        } else {
            self.shaded += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.shaded + self.discarded
    }
}

/// Fragment input for pixel `(x, y)` of a `width x height` quad
pub fn fragment_at(
    material: &Material,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    tint: Color,
) -> FragmentInput {
    let unit = Point::new(
        (x as f32 + 0.5) / width as f32,
        (y as f32 + 0.5) / height as f32,
    );
    let uv = material.uv_space().from_unit(unit);
    // Quad-local NDC, y up
    let clip_position = [unit.x * 2.0 - 1.0, 1.0 - unit.y * 2.0, 0.0, 1.0];
    FragmentInput::new(uv, tint, clip_position)
}

/// Shade every pixel center of a `width x height` quad, row-major
pub fn shade_quad(material: &Material, width: u32, height: u32, tint: Color) -> Vec<FragmentOutput> {
    let mut outputs = Vec::with_capacity(width as usize * height as usize);
    let mut stats = QuadStats::default();
    for y in 0..height {
        for x in 0..width {
            let input = fragment_at(material, x, y, width, height, tint);
            let output = material.shade(&input);
            stats.record(&output);
            outputs.push(output);
        }
    }

    tracing::debug!(
        "shaded {} quad {}x{}: {} written, {} discarded",
        material.kind(),
        width,
        height,
        stats.shaded,
        stats.discarded
    );

    outputs
}
