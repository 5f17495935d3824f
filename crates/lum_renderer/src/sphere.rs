//! Sphere primitive for ray tracing.

use crate::light::check_position;
use crate::{primitive::Hit, Color, ConstructionError, Ray};
use lum_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    diffuse: Color,
}

impl Sphere {
    /// Create a new sphere. The center must be finite and the radius
    /// positive and finite.
    pub fn new(center: Vec3, radius: f32, diffuse: Color) -> Result<Self, ConstructionError> {
        check_position(center)?;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConstructionError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            diffuse,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    /// Intersect the ray with the sphere.
    ///
    /// Returns the nearest intersection at a non-negative ray parameter;
    /// a ray starting inside the sphere reports the exit point.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return None;
        }
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !Interval::FORWARD.contains(root) {
            root = (h + sqrtd) / a;
            if !Interval::FORWARD.contains(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let normal = (point - self.center) / self.radius;
        Some(Hit {
            point,
            normal: lum_math::safe_normalize(normal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Color::new(1.0, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = red_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).expect("ray should hit");
        assert!((hit.point - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-5);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = red_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());

        // Sphere entirely behind the ray origin
        let behind = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.intersect(&behind).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = red_sphere(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray).expect("inside ray should exit");
        assert!((hit.point - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
        assert!((hit.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_hit_lies_on_surface() {
        let sphere = red_sphere(Vec3::new(1.0, -2.0, 3.0), 1.75);
        let origin = Vec3::new(-4.0, 5.0, 12.0);

        // Aim a fan of rays at points around the centre
        for i in 0..8 {
            for j in 0..8 {
                let offset = Vec3::new(i as f32 * 0.25 - 1.0, j as f32 * 0.25 - 1.0, 0.0);
                let ray = Ray::towards(origin, sphere.center() + offset);
                if let Some(hit) = sphere.intersect(&ray) {
                    let r = (hit.point - sphere.center()).length();
                    assert!((r - sphere.radius()).abs() < 1e-4, "r={}", r);
                    assert!((hit.normal.length() - 1.0).abs() < 1e-5);
                    let expected = (hit.point - sphere.center()).normalize();
                    assert!((hit.normal - expected).length() < 1e-5);
                    // Outward normal faces the incoming ray
                    assert!(hit.normal.dot(ray.direction()) <= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_invalid_radius() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                Sphere::new(Vec3::ZERO, radius, Color::ONE),
                Err(ConstructionError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn test_non_finite_center() {
        let center = Vec3::new(0.0, f32::NEG_INFINITY, 0.0);
        assert!(matches!(
            Sphere::new(center, 1.0, Color::ONE),
            Err(ConstructionError::NonFinitePosition(_))
        ));
    }
}
