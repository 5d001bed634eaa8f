//! Fixed-light shading and color quantization.

use crate::{Color, HitInfo};
use folio_math::{Vec3, Vec3Ext};

/// Shading configuration.
///
/// A single directional light with an ambient floor:
/// `albedo * (ambient + diffuse * max(0, n . l))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingConfig {
    /// Constant term added regardless of orientation
    pub ambient: f32,
    /// Weight of the clamped cosine term
    pub diffuse: f32,
    /// Unit direction towards the light
    pub light_direction: Vec3,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            ambient: 0.3,
            diffuse: 0.7,
            light_direction: Vec3::ONE.normalize_guarded(),
        }
    }
}

impl ShadingConfig {
    /// Shade a resolved hit.
    pub fn shade(&self, hit: &HitInfo) -> Color {
        let intensity = hit.normal.dot(self.light_direction).max(0.0);
        hit.material.albedo * (self.ambient + self.diffuse * intensity)
    }
}

/// Convert a float color to 8-bit RGB.
///
/// Each channel is `floor(min(1, c) * 255)`. Negative channels saturate to 0.
#[inline]
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (c.min(1.0) * 255.0) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}
