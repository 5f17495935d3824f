//! Renderable scene: primitives and lights.

use lum_core::{PrimitiveDescription, SceneDescription, TextureCache};
use lum_math::Vec3;

use crate::{Color, ConstructionError, Hit, Light, Plane, Primitive, Ray, Sphere};

/// Closest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestHit {
    /// Index of the primitive in [`Scene::primitives`]
    pub index: usize,
    pub hit: Hit,
    /// Euclidean distance from the ray origin to the hit point
    pub distance: f32,
}

/// Owns every primitive and light for the lifetime of a render.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive and return its index.
    pub fn add(&mut self, primitive: impl Into<Primitive>) -> usize {
        self.primitives.push(primitive.into());
        self.primitives.len() - 1
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn primitive(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Find the closest primitive hit by `ray`.
    ///
    /// Every primitive is tested. On an exact distance tie the primitive
    /// that comes first keeps the hit.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<NearestHit> {
        let mut nearest: Option<NearestHit> = None;

        for (index, primitive) in self.primitives.iter().enumerate() {
            let Some(hit) = primitive.intersect(ray) else {
                continue;
            };
            let distance = hit.point.distance(ray.origin());
            if nearest.map_or(true, |n| n.distance > distance) {
                nearest = Some(NearestHit {
                    index,
                    hit,
                    distance,
                });
            }
        }

        nearest
    }

    /// True if any primitive intersects `ray`, at any distance.
    pub fn is_occluded(&self, ray: &Ray) -> bool {
        self.primitives.iter().any(|p| p.intersect(ray).is_some())
    }

    /// Build a scene from a description.
    ///
    /// Every texture the description references must already be in
    /// `textures`.
    pub fn from_description(
        description: &SceneDescription,
        textures: &TextureCache,
    ) -> Result<Self, ConstructionError> {
        let mut scene = Scene::new();

        for primitive in &description.primitives {
            match primitive {
                PrimitiveDescription::Sphere {
                    center,
                    radius,
                    color,
                } => {
                    let sphere = Sphere::new(
                        Vec3::from_array(*center),
                        *radius,
                        Color::from_array(*color),
                    )?;
                    scene.add(sphere);
                }
                PrimitiveDescription::Plane {
                    position,
                    normal,
                    width,
                    height,
                    color,
                    texture,
                } => {
                    let mut plane = Plane::new(
                        Vec3::from_array(*position),
                        Vec3::from_array(*normal),
                        *width,
                        *height,
                        Color::from_array(*color),
                    )?;
                    if let Some(path) = texture {
                        let texture = textures
                            .get(path)
                            .ok_or_else(|| ConstructionError::MissingTexture(path.clone()))?;
                        plane = plane.with_texture(texture);
                    }
                    scene.add(plane);
                }
            }
        }

        for light in &description.lights {
            scene.add_light(Light::new(Vec3::from_array(light.position), light.intensity)?);
        }

        Ok(scene)
    }
}
