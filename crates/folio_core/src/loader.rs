//! JSON scene loading.
//!
//! Every entry point validates the description before handing it back, so
//! callers never see a scene whose camera basis or shapes are degenerate.

use std::path::Path;

use thiserror::Error;

use crate::description::SceneDescription;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid shape {index}: {message}")]
    InvalidShape { index: usize, message: String },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a JSON scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(text: &str) -> LoadResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(text)?;

    if let Err(e) = description.validate() {
        log::warn!("Rejected scene: {}", e);
        return Err(e);
    }

    log::debug!(
        "Parsed scene with {} shapes, camera {}x{}",
        description.shape_count(),
        description.camera.width,
        description.camera.height
    );

    Ok(description)
}
