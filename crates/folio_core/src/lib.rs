//! Folio Core - Scene data model and JSON scene loading.
//!
//! This crate provides:
//!
//! - **Materials**: `Material` and the `Color` alias
//! - **Scene descriptions**: `SceneDescription`, `CameraDescription`, `ShapeDescription`
//! - **Loading**: JSON parsing with validation
//!
//! # Example
//!
//! ```ignore
//! use folio_core::load_scene;
//!
//! let description = load_scene("scene.json")?;
//! println!("Loaded {} shapes", description.shapes.len());
//! ```

pub mod description;
pub mod loader;
pub mod material;

// Re-export commonly used types
pub use description::{CameraDescription, SceneDescription, ShapeDescription, SphereDescription};
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use material::{Color, Material};
