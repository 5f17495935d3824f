//! Scene file loading.
//!
//! Scene files are JSON documents matching [`SceneDescription`].

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&source)?;

    log::info!(
        "Loaded scene {}: {} primitives, {} lights",
        path.display(),
        scene.primitives.len(),
        scene.lights.len()
    );

    Ok(scene)
}

/// Parse a scene description from a JSON string.
pub fn load_scene_from_str(source: &str) -> LoadResult<SceneDescription> {
    Ok(serde_json::from_str(source)?)
}
