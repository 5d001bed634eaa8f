//! Folio Tracer - single-bounce CPU ray tracing.
//!
//! A pinhole camera shoots one ray per pixel into a flat list of shapes.
//! The nearest hit is shaded with a fixed ambient + Lambertian term; misses
//! take the scene background.

mod camera;
mod engine;
mod hit;
mod scene;
mod shading;
mod shape;
mod sphere;

pub use camera::Camera;
pub use engine::{ImageBuffer, RayTracingEngine, RenderError};
pub use hit::{HitInfo, Intersect, HIT_EPSILON};
pub use scene::Scene;
pub use shading::{color_to_rgb8, ShadingConfig};
pub use shape::Shape;
pub use sphere::Sphere;

/// Re-export the data model from folio_core
pub use folio_core::{Color, Material};
/// Re-export Vec3 and Ray from folio_math
pub use folio_math::{Ray, Vec3, Vec3Ext};
