//! Flat list of shapes plus a background color.

use crate::{
    hit::{HitInfo, Intersect},
    Color, Material, Ray, Shape, Sphere,
};
use folio_core::SceneDescription;
use folio_math::Vec3;

/// The traceable world.
///
/// Built once by adding shapes, then queried read-only while rendering.
/// There is no acceleration structure: every query tests every shape.
#[derive(Debug, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
    background: Color,
}

impl Scene {
    /// Create an empty scene with the given background color.
    pub fn new(background: Color) -> Self {
        Self {
            shapes: Vec::new(),
            background,
        }
    }

    /// Build a scene from a description, keeping shape order.
    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::new(description.background);
        for shape in &description.shapes {
            scene.add_shape(shape.into());
        }
        log::debug!("Built scene with {} shapes", scene.shape_count());
        scene
    }

    /// Add a shape. Insertion order breaks distance ties.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Add a sphere.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: Material) {
        self.add_shape(Shape::Sphere(Sphere::new(center, radius, material)));
    }

    /// Find the nearest hit along the ray, or `None` if nothing was struck.
    ///
    /// On exactly equal distances the earlier shape wins.
    pub fn trace_ray(&self, ray: &Ray) -> Option<HitInfo> {
        let mut closest: Option<HitInfo> = None;
        let mut closest_t = f32::MAX;

        for shape in &self.shapes {
            if let Some(hit) = shape.intersect(ray) {
                if hit.t < closest_t {
                    closest_t = hit.t;
                    closest = Some(hit);
                }
            }
        }

        closest
    }

    /// Get the background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Get the number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(folio_core::description::DEFAULT_BACKGROUND)
    }
}
