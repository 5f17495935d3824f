//! Lumen Core - scene descriptions and textures.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `PrimitiveDescription`,
//!   `LightDescription`, `CameraDescription`
//! - **Scene files**: JSON loading via `load_scene`
//! - **Textures**: decoding and caching via `TextureCache`
//!
//! Nothing here knows how to intersect a ray; `lum_renderer` turns a
//! description into renderable geometry.
//!
//! # Example
//!
//! ```ignore
//! use lum_core::{load_scene, TextureCache};
//!
//! let description = load_scene("scenes/default.json")?;
//! let mut textures = TextureCache::with_base_dir("scenes");
//! textures.load_scene_textures(&description)?;
//! println!("Loaded {} primitives, {} lights",
//!     description.primitives.len(),
//!     description.lights.len());
//! ```

pub mod loader;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{CameraDescription, LightDescription, PrimitiveDescription, SceneDescription};
pub use texture::{Texture, TextureCache, TextureError, TextureResult};

/// Color type alias (RGB values typically 0-1)
pub type Color = lum_math::Vec3;
