//! Camera for ray generation.
//!
//! The camera shoots rays from its position through a rectangle (the view
//! plane) that sits at a fixed depth along Z. Normalized image coordinates
//! `(u, v)` in `[0, 1]` map affinely onto that rectangle, `(0, 0)` at its
//! lower-left corner.

use lum_core::CameraDescription;
use lum_math::{safe_normalize, Vec2, Vec3};

use crate::{ConstructionError, Ray};

/// Rectangle in world space that primary rays pass through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    min: Vec2,
    max: Vec2,
    z: f32,
}

impl ViewPlane {
    /// Create a view plane spanning `min..max` in X/Y at depth `z`.
    pub fn new(min: Vec2, max: Vec2, z: f32) -> Result<Self, ConstructionError> {
        let size = max - min;
        if !(size.x > 0.0 && size.y > 0.0 && size.is_finite() && z.is_finite()) {
            return Err(ConstructionError::InvalidViewPlane {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self { min, max, z })
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Centre of the rectangle in world space.
    pub fn center(&self) -> Vec3 {
        self.to_world(0.5, 0.5)
    }

    /// Convert normalized `(u, v)` to a world-space point on the plane.
    pub fn to_world(&self, u: f32, v: f32) -> Vec3 {
        Vec3::new(
            u * self.width() + self.min.x,
            v * self.height() + self.min.y,
            self.z,
        )
    }
}

impl Default for ViewPlane {
    fn default() -> Self {
        Self {
            min: Vec2::new(-3.0, -2.0),
            max: Vec2::new(3.0, 2.0),
            z: 5.0,
        }
    }
}

/// Camera for generating primary rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    aim: Vec3,
    view: ViewPlane,
}

impl Camera {
    /// Create a camera at `position` looking through `view`.
    pub fn new(position: Vec3, view: ViewPlane) -> Self {
        Self {
            position,
            aim: safe_normalize(view.center() - position),
            view,
        }
    }

    /// Build a camera from its scene-file description.
    pub fn from_description(description: &CameraDescription) -> Result<Self, ConstructionError> {
        let view = ViewPlane::new(
            Vec2::from_array(description.view_min),
            Vec2::from_array(description.view_max),
            description.view_z,
        )?;
        Ok(Self::new(Vec3::from_array(description.position), view))
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit direction from the camera to the centre of the view plane.
    pub fn aim(&self) -> Vec3 {
        self.aim
    }

    pub fn view(&self) -> &ViewPlane {
        &self.view
    }

    /// Ray from the camera through view-plane coordinates `(u, v)`.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::towards(self.position, self.view.to_world(u, v))
    }

    /// Normalized coordinates of the centre of pixel `(i, j)`.
    ///
    /// `j` counts up from the bottom of the view plane.
    #[inline]
    pub fn pixel_uv(i: u32, j: u32, width: u32, height: u32) -> (f32, f32) {
        (
            (i as f32 + 0.5) / width as f32,
            (j as f32 + 0.5) / height as f32,
        )
    }

    /// Primary ray through the centre of pixel `(i, j)`.
    pub fn ray_for_pixel(&self, i: u32, j: u32, width: u32, height: u32) -> Ray {
        let (u, v) = Self::pixel_uv(i, j, width, height);
        self.get_ray(u, v)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 10.0), ViewPlane::default())
    }
}
