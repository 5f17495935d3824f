//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Every pixel depends only on the read-only
//! render context, so the result matches [`render`](crate::render) exactly.

use std::time::Instant;

use rayon::prelude::*;

use crate::{Camera, Color, ConstructionError, ImageBuffer, RenderConfig, RenderContext, Scene};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted in spiral order from center.
///
/// Buckets closer to the center come first so the middle of the frame
/// finishes early.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f32 + b.width as f32 / 2.0;
        let by = b.y as f32 + b.height as f32 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| {
        distance(a)
            .partial_cmp(&distance(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Render a single bucket.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, context: &RenderContext<'_>) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = context.render_pixel(bucket.x + local_x, bucket.y + local_y);
            pixels.push(color);
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy this bucket's pixels into `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let b = &self.bucket;
        for (i, color) in self.pixels.iter().enumerate() {
            let local_x = i as u32 % b.width;
            let local_y = i as u32 / b.width;
            image.set(b.x + local_x, b.y + local_y, *color);
        }
    }
}

/// Render the entire scene in parallel, one bucket per task.
pub fn render_buckets(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    bucket_size: u32,
) -> Result<ImageBuffer, ConstructionError> {
    let context = RenderContext::new(scene, camera, config)?;
    let buckets = generate_buckets(config.width, config.height, bucket_size);

    log::info!(
        "Rendering {}x{} in {} buckets on {} threads: {} primitives, {} lights",
        config.width,
        config.height,
        buckets.len(),
        rayon::current_num_threads(),
        scene.primitives().len(),
        context.lights().len()
    );

    let start = Instant::now();
    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, &context);
            log::debug!(
                "Bucket {} ({}, {}) {}x{} done",
                bucket.index,
                bucket.x,
                bucket.y,
                bucket.width,
                bucket.height
            );
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
