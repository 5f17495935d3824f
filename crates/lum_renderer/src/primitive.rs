//! Primitive dispatch and intersection records.

use crate::{Color, Plane, Ray, Sphere};
use lum_math::Vec3;

/// Where a ray met a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
}

/// Every kind of surface the renderer can trace.
///
/// The set is closed, so a plain enum with one `match` per operation
/// stands in for a trait object.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Test the ray against this primitive.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Plane(plane) => plane.intersect(ray),
        }
    }

    /// Flat diffuse colour of the primitive.
    pub fn diffuse(&self) -> Color {
        match self {
            Primitive::Sphere(sphere) => sphere.diffuse(),
            Primitive::Plane(plane) => plane.diffuse(),
        }
    }

    /// Diffuse colour at a specific hit, including texture lookup.
    pub fn surface_color(&self, hit: &Hit) -> Color {
        match self {
            Primitive::Sphere(sphere) => sphere.diffuse(),
            Primitive::Plane(plane) => plane.surface_color(hit),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_variant() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Color::new(1.0, 0.0, 0.0)).unwrap();
        let plane = Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            4.0,
            4.0,
            Color::new(0.0, 1.0, 0.0),
        )
        .unwrap();

        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let sphere_hit = Primitive::from(sphere.clone()).intersect(&ray);
        let plane_hit = Primitive::from(plane.clone()).intersect(&ray);

        assert_eq!(sphere_hit, sphere.intersect(&ray));
        assert_eq!(plane_hit, plane.intersect(&ray));
        assert!((sphere_hit.unwrap().point.y - 1.0).abs() < 1e-5);
        assert_eq!(plane_hit.unwrap().point, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_colors() {
        let sphere = Primitive::from(Sphere::new(Vec3::ZERO, 1.0, Color::X).unwrap());
        let hit = Hit {
            point: Vec3::Y,
            normal: Vec3::Y,
        };
        assert_eq!(sphere.diffuse(), Color::X);
        assert_eq!(sphere.surface_color(&hit), Color::X);
    }
}
