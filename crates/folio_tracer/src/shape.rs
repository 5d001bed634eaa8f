//! Closed set of traceable primitives.

use crate::{
    hit::{HitInfo, Intersect},
    Material, Ray, Sphere,
};
use folio_core::ShapeDescription;
use folio_math::Vec3;

/// A primitive owned by a [`Scene`](crate::Scene).
///
/// Dispatch is a `match` over the variants; each variant carries its own
/// geometry and material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    /// Get the material of this shape.
    pub fn material(&self) -> &Material {
        match self {
            Shape::Sphere(sphere) => sphere.material(),
        }
    }
}

impl Intersect for Shape {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<HitInfo> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
        }
    }

    #[inline]
    fn surface_normal(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.surface_normal(point),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<&ShapeDescription> for Shape {
    fn from(description: &ShapeDescription) -> Self {
        match description {
            ShapeDescription::Sphere(s) => Shape::Sphere(Sphere::new(s.center, s.radius, s.material)),
        }
    }
}
