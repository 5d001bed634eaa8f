// Re-export glam for convenience
pub use glam::*;

// Folio math types
mod ray;
mod vector;
pub use ray::Ray;
pub use vector::{Vec3Ext, NORMALIZE_EPSILON};
