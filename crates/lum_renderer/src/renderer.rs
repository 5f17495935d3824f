//! Core ray tracing renderer.
//!
//! Implements single-sample Whitted-style tracing:
//! - One primary ray through each pixel centre
//! - Nearest hit by linear scan over the scene
//! - Direct lighting with hard shadows, no secondary bounces

use std::time::Instant;

use lum_math::Interval;

use crate::light::check_intensity;
use crate::{Camera, Color, ConstructionError, Light, Ray, Scene, ShadingContext, AMBIENT_FACTOR};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Fraction of the diffuse colour used as ambient light
    pub ambient: f32,
    /// Intensity given to every light for this render
    pub light_intensity: f32,
    /// Blinn-Phong shininess exponent
    pub specular_power: f32,
    /// Specular reflectance shared by all surfaces
    pub specular_color: Color,
    /// Color for pixels whose ray hits nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            ambient: AMBIENT_FACTOR,
            light_intensity: 100.0,
            specular_power: 40.0,
            specular_color: Color::ONE,
            background: Color::ZERO,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the global light intensity and specular power.
    pub fn with_lighting(mut self, light_intensity: f32, specular_power: f32) -> Self {
        self.light_intensity = light_intensity;
        self.specular_power = specular_power;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Reject settings that cannot produce a well-defined image.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        // Pixel indices are computed in u32 by the bucket renderer
        if self.width == 0 || self.height == 0 || self.width.checked_mul(self.height).is_none() {
            return Err(ConstructionError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        check_intensity(self.light_intensity)?;
        if !(self.specular_power.is_finite() && self.specular_power >= 0.0) {
            return Err(ConstructionError::InvalidShininess(self.specular_power));
        }
        if !(self.ambient.is_finite() && self.ambient >= 0.0) {
            return Err(ConstructionError::InvalidAmbient(self.ambient));
        }
        Ok(())
    }
}

/// Clamp a color to [0, 1] and convert to 8-bit RGB.
///
/// No transfer curve is applied; values are written as computed.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let channel = |c: f32| (255.0 * Interval::UNIT.clamp(c)) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Simple image buffer for storing render output.
///
/// Row 0 is the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (column, row).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (column, row).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Everything a single render reads, frozen for its duration.
///
/// Lights are copied out of the scene with their intensity replaced by
/// [`RenderConfig::light_intensity`]; the scene itself is never modified.
pub struct RenderContext<'a> {
    scene: &'a Scene,
    camera: &'a Camera,
    config: &'a RenderConfig,
    lights: Vec<Light>,
}

impl<'a> RenderContext<'a> {
    /// Validate the configuration and snapshot the lights.
    pub fn new(
        scene: &'a Scene,
        camera: &'a Camera,
        config: &'a RenderConfig,
    ) -> Result<Self, ConstructionError> {
        config.validate()?;
        let lights = scene
            .lights()
            .iter()
            .map(|light| light.with_intensity(config.light_intensity))
            .collect();

        Ok(Self {
            scene,
            camera,
            config,
            lights,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Lights as they are shaded in this render.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    fn shading(&self) -> ShadingContext<'_> {
        ShadingContext {
            scene: self.scene,
            lights: &self.lights,
            eye: self.camera.position(),
            ambient: self.config.ambient,
        }
    }

    /// Compute the color seen along a primary ray.
    pub fn trace(&self, ray: &Ray) -> Color {
        let Some(nearest) = self.scene.nearest_hit(ray) else {
            return self.config.background;
        };

        let diffuse = self.scene.primitives()[nearest.index].surface_color(&nearest.hit);
        self.shading().shade(
            nearest.hit.point,
            nearest.hit.normal,
            diffuse,
            self.config.specular_color,
            self.config.specular_power,
        )
    }

    /// Render the pixel at image column `x`, row `y` (row 0 at the top).
    pub fn render_pixel(&self, x: u32, y: u32) -> Color {
        let (width, height) = (self.config.width, self.config.height);
        // View-plane rows count up from the bottom
        let j = height - 1 - y;
        let ray = self.camera.ray_for_pixel(x, j, width, height);
        self.trace(&ray)
    }
}

/// Render the entire scene to an image buffer.
///
/// This is the single-threaded reference loop; see
/// [`render_buckets`](crate::render_buckets) for the parallel version.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) -> Result<ImageBuffer, ConstructionError> {
    let context = RenderContext::new(scene, camera, config)?;
    log::info!(
        "Rendering {}x{}: {} primitives, {} lights",
        config.width,
        config.height,
        scene.primitives().len(),
        context.lights().len()
    );

    let start = Instant::now();
    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            image.set(x, y, context.render_pixel(x, y));
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
