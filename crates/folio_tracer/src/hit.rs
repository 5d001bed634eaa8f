//! Intersection results and the `Intersect` capability.

use crate::{Material, Ray};
use folio_math::Vec3;

/// Minimum accepted distance along a ray.
///
/// Roots at or below this are discarded to avoid self-intersection at the
/// ray origin.
pub const HIT_EPSILON: f32 = 0.001;

/// Record of a ray-shape intersection.
///
/// Created fresh per query. A miss is represented by `None` at the call
/// site rather than by a flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInfo {
    /// Distance along the ray
    pub t: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Outward surface normal at the hit point
    pub normal: Vec3,
    /// Copy of the material that was hit
    pub material: Material,
}

/// Trait for geometry that can be tested against rays.
pub trait Intersect {
    /// Intersect the ray with this object.
    ///
    /// Returns the hit with `t > HIT_EPSILON`, or `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<HitInfo>;

    /// Outward unit normal at a point on the surface.
    fn surface_normal(&self, point: Vec3) -> Vec3;
}
