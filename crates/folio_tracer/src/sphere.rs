//! Sphere primitive for ray tracing.

use crate::{
    hit::{HitInfo, Intersect, HIT_EPSILON},
    Material, Ray,
};
use folio_math::{Vec3, Vec3Ext};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<HitInfo> {
        // Solve |O + tD - C|^2 = r^2
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        // Degenerate ray, no defined direction to march along
        if a == 0.0 {
            return None;
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);

        // Near root unless it is behind the epsilon, then the far root.
        // The far root is only accepted if it also clears the epsilon.
        let t = if t1 > HIT_EPSILON { t1 } else { t2 };
        if t < HIT_EPSILON {
            return None;
        }

        let point = ray.at(t);
        Some(HitInfo {
            t,
            point,
            normal: self.surface_normal(point),
            material: self.material,
        })
    }

    fn surface_normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_guarded()
    }
}
