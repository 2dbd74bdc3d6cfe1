//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Every pixel is traced exactly as in
//! [`Scene::render`], so the output matches the sequential renderer.

use std::time::Instant;

use rayon::prelude::*;

use crate::{Camera, Color, ImageBuffer, Scene};

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
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Split an image into buckets, ordered from the image center outward.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by the distance of their centers from the image center.
///
/// The sort is stable, so equally distant buckets stay in raster order.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f64 + b.width as f64 / 2.0;
        let by = b.y as f64 + b.height as f64 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
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
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let coords = (0..self.bucket.height)
            .flat_map(|ly| (0..self.bucket.width).map(move |lx| (lx, ly)));
        for ((lx, ly), color) in coords.zip(&self.pixels) {
            image.set(self.bucket.x + lx, self.bucket.y + ly, *color);
        }
    }
}

/// Render a single bucket. Pixels come back in row-major order.
pub fn render_bucket(scene: &Scene, camera: &Camera, bucket: Bucket) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = scene.render_pixel(camera, bucket.x + local_x, bucket.y + local_y);
            pixels.push(color);
        }
    }

    BucketResult::new(bucket, pixels)
}

/// Render the scene at its configured resolution on the rayon pool.
pub fn render_parallel(scene: &Scene) -> ImageBuffer {
    render_parallel_with_bucket_size(scene, DEFAULT_BUCKET_SIZE)
}

/// Render the scene on the rayon pool using square buckets of `bucket_size`.
pub fn render_parallel_with_bucket_size(scene: &Scene, bucket_size: u32) -> ImageBuffer {
    let config = scene.config();
    let camera = scene.camera(config.width, config.height);
    let buckets = generate_buckets(config.width, config.height, bucket_size);
    let start = Instant::now();

    log::debug!(
        "Rendering {} buckets on {} threads",
        buckets.len(),
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(scene, &camera, *bucket))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!(
        "Rendered {}x{} @ {} spp in {:?} ({} buckets)",
        config.width,
        config.height,
        camera.samples_per_pixel(),
        start.elapsed(),
        results.len()
    );

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Plane, PointLight, RenderConfig, Sphere};
    use lux_math::Vec3;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);
    }

    #[test]
    fn test_spiral_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9);

        let first = &buckets[0];
        assert_eq!((first.x, first.y), (64, 64));

        for (i, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.index, i);
        }
    }

    #[test]
    fn test_empty_image_has_no_buckets() {
        assert!(generate_buckets(0, 10, 16).is_empty());
        assert!(generate_buckets(10, 0, 16).is_empty());
    }

    #[test]
    fn test_write_into_places_pixels() {
        let bucket = Bucket::new(2, 1, 2, 2, 0);
        let pixels = vec![
            Color::splat(0.25),
            Color::splat(0.5),
            Color::splat(0.75),
            Color::WHITE,
        ];
        let mut image = ImageBuffer::new(5, 4);
        BucketResult::new(bucket, pixels).write_into(&mut image);

        // Row-major, 5 pixels per row
        assert_eq!(image.pixels[5 + 2], Color::splat(0.25));
        assert_eq!(image.pixels[5 + 3], Color::splat(0.5));
        assert_eq!(image.pixels[10 + 2], Color::splat(0.75));
        assert_eq!(image.pixels[10 + 3], Color::WHITE);
        assert_eq!(image.pixels[0], Color::BLACK);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = RenderConfig::default().with_resolution(37, 23).with_aa(2);
        let mut scene = Scene::new(config);
        scene.add_entity(Sphere::new(
            Vec3::new(-0.5, 0.0, 4.0),
            1.0,
            Material::refractive(Color::WHITE, 1.5),
        ));
        scene.add_entity(Sphere::new(
            Vec3::new(1.0, 0.2, 5.0),
            0.8,
            Material::reflective(Color::WHITE),
        ));
        scene.add_entity(Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Material::diffuse(Color::new(0.8, 0.7, 0.6)),
        ));
        scene.add_point_light(PointLight::new(Vec3::new(2.0, 4.0, 1.0), Color::WHITE));

        let sequential = scene.render();
        let parallel = render_parallel_with_bucket_size(&scene, 8);

        assert_eq!(parallel, sequential);
    }
}
