//! Flat surface materials.

use folio_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values conceptually 0-1, not clamped)
pub type Color = Vec3;

/// Flat material carried by every shape.
///
/// Only `albedo` feeds shading. `roughness`, `metallic` and `emission` are
/// stored so scene files round-trip, but the tracer ignores them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base reflected color
    pub albedo: Color,
    /// Surface roughness (0=smooth, 1=rough)
    pub roughness: f32,
    /// Metallic factor (0=dielectric, 1=metal)
    pub metallic: f32,
    /// Light emission strength
    pub emission: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Color::new(0.8, 0.8, 0.8),
            roughness: 0.5,
            metallic: 0.0,
            emission: 0.0,
        }
    }
}

impl Material {
    /// Create a material with the given albedo and default scalars.
    pub fn new(albedo: Color) -> Self {
        Self {
            albedo,
            ..Default::default()
        }
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    pub fn with_emission(mut self, emission: f32) -> Self {
        self.emission = emission;
        self
    }

    /// Check if this material is emissive.
    pub fn is_emissive(&self) -> bool {
        self.emission > 0.0
    }
}
