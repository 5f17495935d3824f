//! Error types for scene construction and image persistence.

use std::path::PathBuf;

use lum_math::Vec3;
use thiserror::Error;

/// Rejected geometry or render parameters.
///
/// Everything that would otherwise turn into NaN or infinity inside the
/// render loop is caught here, before any pixel is traced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("Position must be finite, got {0}")]
    NonFinitePosition(Vec3),

    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Plane extents must be positive and finite, got {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },

    #[error("Plane normal must be unit length, got length {0}")]
    NonUnitNormal(f32),

    #[error("Light intensity must be positive and finite, got {0}")]
    InvalidLightIntensity(f32),

    #[error("View plane must have positive width and height, got {width}x{height}")]
    InvalidViewPlane { width: f32, height: f32 },

    #[error("Image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Specular power must be non-negative and finite, got {0}")]
    InvalidShininess(f32),

    #[error("Ambient factor must be non-negative and finite, got {0}")]
    InvalidAmbient(f32),

    #[error("Texture {0} was not loaded")]
    MissingTexture(String),
}

/// Failure to write a rendered image.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create output directory for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
