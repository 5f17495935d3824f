//! Lumen Renderer - CPU Whitted ray tracing
//!
//! One primary ray per pixel, nearest hit by linear scan, and direct
//! illumination from point lights with Lambert + Blinn-Phong shading and
//! hard shadows.

mod bucket;
mod camera;
mod error;
mod light;
mod output;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{Camera, ViewPlane};
pub use error::{ConstructionError, PersistenceError};
pub use light::Light;
pub use output::save_png;
pub use plane::Plane;
pub use primitive::{Hit, Primitive};
pub use renderer::{color_to_rgb8, render, ImageBuffer, RenderConfig, RenderContext};
pub use scene::{NearestHit, Scene};
pub use shading::{ShadingContext, AMBIENT_FACTOR, SHADOW_EPSILON};
pub use sphere::Sphere;

/// Re-export math and color types
pub use lum_core::{Color, Texture};
pub use lum_math::{Interval, Ray, Vec2, Vec3};
