use crate::{Vec3, Vec3Ext};

/// A half-line in 3D space.
///
/// The direction is normalized on construction, so callers never need to
/// pre-normalize. A near-zero direction degenerates to [`Vec3::ZERO`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_guarded(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the (unit or zero) direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// True when the direction collapsed to zero at construction.
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO
    }
}
