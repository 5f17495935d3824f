//! Direct illumination: ambient + Lambert + Blinn-Phong with hard shadows.

use lum_math::{safe_normalize, Vec3};

use crate::{Color, Light, Ray, Scene};

/// Fraction of the diffuse colour that is always present.
pub const AMBIENT_FACTOR: f32 = 0.25;

/// Offset along the normal for shadow probe origins, to avoid hitting the
/// surface being shaded.
pub const SHADOW_EPSILON: f32 = 1e-4;

/// Read-only view of everything shading needs.
///
/// Built per render and shared by every pixel; all accumulation happens in
/// locals of [`ShadingContext::shade`].
#[derive(Debug, Clone, Copy)]
pub struct ShadingContext<'a> {
    /// Occluders for shadow probes
    pub scene: &'a Scene,
    pub lights: &'a [Light],
    /// Camera position, for the specular half-vector
    pub eye: Vec3,
    pub ambient: f32,
}

impl<'a> ShadingContext<'a> {
    /// Shade a surface point.
    ///
    /// Starts from `ambient * diffuse`, then adds for every light that the
    /// shadow probe reaches unobstructed:
    ///
    /// - diffuse: `diffuse * I/d² * max(0, n·l)`
    /// - specular: `specular * I/d² * max(0, n·h)^shininess`, `h = normalize(v + l)`
    ///
    /// No clamping happens here; colour channels may exceed 1.
    pub fn shade(
        &self,
        point: Vec3,
        normal: Vec3,
        diffuse: Color,
        specular: Color,
        shininess: f32,
    ) -> Color {
        let n = safe_normalize(normal);
        let view_dir = safe_normalize(self.eye - point);
        let mut color = diffuse * self.ambient;

        for light in self.lights {
            let to_light = light.position - point;
            let distance_sq = to_light.length_squared();
            // A light sitting on the surface has no defined direction
            if distance_sq <= f32::EPSILON {
                continue;
            }

            let light_dir = safe_normalize(to_light);
            if self.scene.is_occluded(&shadow_probe(point, n, light_dir)) {
                continue;
            }

            let falloff = light.intensity / distance_sq;

            let lambert = n.dot(light_dir).max(0.0);
            color += diffuse * falloff * lambert;

            let half = safe_normalize(view_dir + light_dir);
            let blinn = n.dot(half).max(0.0).powf(shininess);
            color += specular * falloff * blinn;
        }

        color
    }
}

/// Shadow probe from just above `point` towards a light.
#[inline]
pub(crate) fn shadow_probe(point: Vec3, unit_normal: Vec3, light_dir: Vec3) -> Ray {
    Ray::new(point + SHADOW_EPSILON * unit_normal, light_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    const RED: Color = Color::new(0.5, 0.0, 0.0);

    fn overhead_light() -> Vec<Light> {
        vec![Light::new(Vec3::new(0.0, 10.0, 0.0), 100.0).unwrap()]
    }

    fn context<'a>(scene: &'a Scene, lights: &'a [Light]) -> ShadingContext<'a> {
        ShadingContext {
            scene,
            lights,
            eye: Vec3::new(0.0, 10.0, 0.0),
            ambient: AMBIENT_FACTOR,
        }
    }

    fn assert_close(a: Color, b: Color) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_no_lights_is_ambient_only() {
        let scene = Scene::new();
        let ctx = context(&scene, &[]);

        let color = ctx.shade(Vec3::ZERO, Vec3::Y, RED, Color::ONE, 40.0);
        assert_eq!(color, RED * AMBIENT_FACTOR);
    }

    #[test]
    fn test_head_on_light() {
        // I/d² = 100/100, n·l = 1, n·h = 1
        let scene = Scene::new();
        let lights = overhead_light();
        let ctx = context(&scene, &lights);

        let color = ctx.shade(Vec3::ZERO, Vec3::Y, RED, Color::ONE, 40.0);
        assert_close(color, Color::new(0.125 + 0.5 + 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_lit_is_brighter_than_ambient() {
        let scene = Scene::new();
        let lights = vec![Light::new(Vec3::new(3.0, 4.0, 2.0), 100.0).unwrap()];
        let ctx = context(&scene, &lights);

        let color = ctx.shade(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), RED, Color::ZERO, 40.0);
        assert!(color.x > (RED * AMBIENT_FACTOR).x);
    }

    #[test]
    fn test_light_behind_surface_adds_nothing() {
        let scene = Scene::new();
        let lights = vec![Light::new(Vec3::new(0.0, -10.0, 0.0), 100.0).unwrap()];
        let ctx = ShadingContext {
            eye: Vec3::new(0.0, -10.0, 0.0),
            ..context(&scene, &lights)
        };

        let color = ctx.shade(Vec3::ZERO, Vec3::Y, RED, Color::ONE, 40.0);
        assert_eq!(color, RED * AMBIENT_FACTOR);
    }

    #[test]
    fn test_occluded_point_gets_only_ambient() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0, Color::ONE).unwrap());
        let lights = overhead_light();
        let ctx = context(&scene, &lights);

        let color = ctx.shade(Vec3::ZERO, Vec3::Y, RED, Color::ONE, 40.0);
        assert_eq!(color, RED * AMBIENT_FACTOR);
    }

    #[test]
    fn test_occluder_past_the_light_still_shadows() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 50.0, 0.0), 1.0, Color::ONE).unwrap());
        let lights = overhead_light();
        let ctx = context(&scene, &lights);

        let color = ctx.shade(Vec3::ZERO, Vec3::Y, RED, Color::ONE, 40.0);
        assert_eq!(color, RED * AMBIENT_FACTOR);
    }

    #[test]
    fn test_specular_falls_off_with_power() {
        let scene = Scene::new();
        let lights = overhead_light();
        let ctx = ShadingContext {
            eye: Vec3::new(10.0, 10.0, 0.0),
            ..context(&scene, &lights)
        };

        let soft = ctx.shade(Vec3::ZERO, Vec3::Y, Color::ZERO, Color::ONE, 1.0);
        let sharp = ctx.shade(Vec3::ZERO, Vec3::Y, Color::ZERO, Color::ONE, 100.0);
        assert!(soft.x > sharp.x);
        assert!(sharp.x > 0.0);
    }

    #[test]
    fn test_degenerate_inputs_stay_finite() {
        let scene = Scene::new();
        let lights = vec![Light::new(Vec3::ZERO, 100.0).unwrap()];
        let ctx = ShadingContext {
            eye: Vec3::ZERO,
            ..context(&scene, &lights)
        };

        let color = ctx.shade(Vec3::ZERO, Vec3::ZERO, RED, Color::ONE, 0.0);
        assert!(color.is_finite());
    }

    #[test]
    fn test_shadow_probe_offset() {
        let probe = shadow_probe(Vec3::ZERO, Vec3::Y, Vec3::Y);
        assert_eq!(probe.origin(), Vec3::new(0.0, SHADOW_EPSILON, 0.0));
        assert_eq!(probe.direction(), Vec3::Y);
    }
}
