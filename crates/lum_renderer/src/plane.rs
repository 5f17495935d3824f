//! Bounded plane primitive.
//!
//! The plane is infinite for the intersection test and then clipped to an
//! axis-aligned rectangle: `width` along world X and `height` along world Z,
//! both centred on `position`.

use std::sync::Arc;

use crate::light::check_position;
use crate::{primitive::Hit, Color, ConstructionError, Ray, Texture};
use lum_math::{Interval, Vec3};

/// Tolerance on `|normal| - 1` accepted at construction.
const UNIT_TOLERANCE: f32 = 1e-4;

/// Number of texture repeats across each plane extent.
pub const TEXTURE_TILES: f32 = 10.0;

/// A rectangle lying in a plane.
#[derive(Debug, Clone)]
pub struct Plane {
    position: Vec3,
    normal: Vec3,
    width: f32,
    height: f32,
    diffuse: Color,
    texture: Option<Arc<Texture>>,
}

impl Plane {
    /// Create a new plane. `normal` must already be unit length.
    pub fn new(
        position: Vec3,
        normal: Vec3,
        width: f32,
        height: f32,
        diffuse: Color,
    ) -> Result<Self, ConstructionError> {
        check_position(position)?;
        let length = normal.length();
        if !((length - 1.0).abs() <= UNIT_TOLERANCE) {
            return Err(ConstructionError::NonUnitNormal(length));
        }
        let valid = |e: f32| e.is_finite() && e > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(ConstructionError::InvalidExtent { width, height });
        }
        Ok(Self {
            position,
            normal,
            width,
            height,
            diffuse,
            texture: None,
        })
    }

    /// Bind a texture, used where the plane faces straight up.
    pub fn with_texture(mut self, texture: Arc<Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    pub fn texture(&self) -> Option<&Arc<Texture>> {
        self.texture.as_ref()
    }

    /// Intersect the ray with the plane's rectangle.
    ///
    /// Misses when the ray runs parallel to the plane, when the plane lies
    /// behind the ray, or when the hit falls on or outside the rectangle's
    /// edges.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() <= f32::EPSILON {
            return None;
        }

        let dist = (self.position - ray.origin()).dot(self.normal) / denom;
        if !(dist > 0.0) {
            return None;
        }

        let point = ray.at(dist);
        let x_range = Interval::centered(self.position.x, self.width);
        let z_range = Interval::centered(self.position.z, self.height);
        if !(x_range.surrounds(point.x) && z_range.surrounds(point.z)) {
            return None;
        }

        Some(Hit {
            point,
            normal: self.normal,
        })
    }

    /// Colour of the surface at `hit`.
    ///
    /// Texture lookup applies only when a texture is bound and the hit
    /// normal is exactly +Y; everything else gets the flat diffuse colour.
    pub fn surface_color(&self, hit: &Hit) -> Color {
        match &self.texture {
            Some(texture) if hit.normal == Vec3::Y => {
                let min_x = self.position.x - self.width / 2.0;
                let min_z = self.position.z - self.height / 2.0;
                let u = (hit.point.x - min_x) / self.width * TEXTURE_TILES;
                let v = (hit.point.z - min_z) / self.height * TEXTURE_TILES;
                texture.texel_at_uv(u, v)
            }
            _ => self.diffuse,
        }
    }
}
