//! Guarded vector helpers on top of glam.
//!
//! glam covers componentwise arithmetic, dot, cross and length. The one
//! operation the tracer needs with different semantics is normalization:
//! anything at or below [`NORMALIZE_EPSILON`] in length collapses to the
//! zero vector instead of blowing up.

use glam::Vec3;

/// Lengths at or below this are treated as having no direction.
pub const NORMALIZE_EPSILON: f32 = 1e-4;

/// Extension methods for [`Vec3`].
pub trait Vec3Ext {
    /// Unit vector in the same direction, or [`Vec3::ZERO`] when the length
    /// is `<= NORMALIZE_EPSILON`.
    ///
    /// Callers must treat a zero result as "undefined direction".
    fn normalize_guarded(self) -> Vec3;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn normalize_guarded(self) -> Vec3 {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            self / len
        } else {
            Vec3::ZERO
        }
    }
}
