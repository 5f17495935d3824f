// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Normalize `v`, falling back to `+Z` when it has zero or non-finite length.
///
/// Keeps degenerate geometry from leaking NaN into shading results.
#[inline]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(Vec3::Z)
}
