//! Serializable scene descriptions.
//!
//! A description is plain data: the background, one pinhole camera and a
//! flat list of shapes. The tracer builds its runtime scene from it.
//!
//! ```json
//! {
//!   "background": [0.1, 0.1, 0.15],
//!   "camera": { "position": [0, 0, 0], "target": [0, 0, -1], "fov": 60, "width": 800, "height": 600 },
//!   "shapes": [
//!     { "sphere": { "center": [0, 0, -5], "radius": 1, "material": { "albedo": [0.2, 0.2, 0.8] } } }
//!   ]
//! }
//! ```

use folio_math::{Vec3, Vec3Ext, NORMALIZE_EPSILON};
use serde::{Deserialize, Serialize};

use crate::loader::{LoadError, LoadResult};
use crate::material::{Color, Material};

/// Background used when a description does not name one.
pub const DEFAULT_BACKGROUND: Color = Color::new(0.1, 0.1, 0.15);

/// Pinhole camera parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    /// Eye position
    pub position: Vec3,
    /// Look-at point
    pub target: Vec3,
    /// Approximate up direction
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            fov: 60.0,
            width: 800,
            height: 600,
        }
    }
}

impl CameraDescription {
    /// Check the camera can produce a well-defined basis and pixel grid.
    pub fn validate(&self) -> LoadResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LoadError::InvalidCamera(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(LoadError::InvalidCamera(format!(
                "fov must be in (0, 180) degrees, got {}",
                self.fov
            )));
        }

        let forward = (self.target - self.position).normalize_guarded();
        if forward == Vec3::ZERO {
            return Err(LoadError::InvalidCamera(
                "target coincides with position".to_string(),
            ));
        }

        if forward.cross(self.up.normalize_guarded()).length() <= NORMALIZE_EPSILON {
            return Err(LoadError::InvalidCamera(
                "up vector is zero or parallel to the view direction".to_string(),
            ));
        }

        Ok(())
    }
}

/// A sphere and its material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,
    #[serde(default)]
    pub material: Material,
}

/// A shape entry, tagged by primitive kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeDescription {
    Sphere(SphereDescription),
}

impl ShapeDescription {
    /// Convenience constructor for a sphere entry.
    pub fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        ShapeDescription::Sphere(SphereDescription {
            center,
            radius,
            material,
        })
    }

    /// Get the material of this shape.
    pub fn material(&self) -> &Material {
        match self {
            ShapeDescription::Sphere(sphere) => &sphere.material,
        }
    }

    fn check(&self) -> Result<(), String> {
        match self {
            ShapeDescription::Sphere(sphere) => {
                if !sphere.center.is_finite() {
                    return Err(format!("sphere center is not finite: {:?}", sphere.center));
                }
                if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                    return Err(format!("sphere radius must be positive, got {}", sphere.radius));
                }
                Ok(())
            }
        }
    }
}

/// A complete renderable scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Color returned for rays that hit nothing
    pub background: Color,
    /// The single camera
    pub camera: CameraDescription,
    /// Shapes in insertion order
    pub shapes: Vec<ShapeDescription>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            camera: CameraDescription::default(),
            shapes: Vec::new(),
        }
    }
}

impl SceneDescription {
    /// The four-sphere showcase scene: red, blue and green spheres in a row
    /// five units ahead, and a gold sphere below and in front of them.
    pub fn demo() -> Self {
        let red = Material::new(Color::new(0.8, 0.2, 0.2)).with_roughness(0.3);
        let blue = Material::new(Color::new(0.2, 0.2, 0.8))
            .with_roughness(0.5)
            .with_metallic(0.2);
        let green = Material::new(Color::new(0.2, 0.8, 0.2)).with_roughness(0.7);
        let gold = Material::new(Color::new(0.8, 0.7, 0.2))
            .with_roughness(0.1)
            .with_metallic(0.9);

        Self {
            background: DEFAULT_BACKGROUND,
            camera: CameraDescription::default(),
            shapes: vec![
                ShapeDescription::sphere(Vec3::new(-2.0, 0.0, -5.0), 1.0, red),
                ShapeDescription::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, blue),
                ShapeDescription::sphere(Vec3::new(2.0, 0.0, -5.0), 1.0, green),
                ShapeDescription::sphere(Vec3::new(0.0, -2.0, -3.0), 0.8, gold),
            ],
        }
    }

    /// Validate the camera and every shape.
    ///
    /// An empty shape list is fine; it renders as pure background.
    pub fn validate(&self) -> LoadResult<()> {
        self.camera.validate()?;

        for (index, shape) in self.shapes.iter().enumerate() {
            shape
                .check()
                .map_err(|message| LoadError::InvalidShape { index, message })?;
        }

        Ok(())
    }

    /// Get shape count.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}
