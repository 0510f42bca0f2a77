//! Image renderer.
//!
//! Casts one ray through the centre of every pixel, shades it with
//! [`trace_ray`] and clamps the result. Pixels are independent, so buckets
//! of pixels are traced in parallel with rayon and stitched together once
//! every bucket is done.

use std::path::Path;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{trace_ray, write_image, Scene, TracerResult};
use phong_math::{clamp_color, color_to_rgb8, Color};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of mirror bounces (0 disables reflection)
    pub reflect_levels: u32,
    /// Whether shadow rays are cast toward each light
    pub has_shadow: bool,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            reflect_levels: 2,
            has_shadow: true,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Render a single pixel: sample its centre, trace, clamp.
pub fn render_pixel(scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = scene.camera.get_ray(x as f64 + 0.5, y as f64 + 0.5);
    clamp_color(trace_ray(&ray, scene, config.reflect_levels, config.has_shadow))
}

/// Simple image buffer for storing render output.
///
/// Row 0 is the top of the image.
#[derive(Debug, Clone)]
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
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let mut colors = result.pixels.iter();

        for y in bucket.y..bucket.y + bucket.height {
            for x in bucket.x..bucket.x + bucket.width {
                if let Some(color) = colors.next() {
                    self.set(x, y, *color);
                }
            }
        }
    }

    /// Convert to packed 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Timing and size of a finished render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStats {
    /// Elapsed wall-clock time
    pub wall_time: Duration,
    /// Sum of the time every worker spent tracing its buckets
    pub cpu_time: Duration,
    pub buckets: usize,
    pub pixels: u64,
}

/// A rendered image and its statistics.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: ImageBuffer,
    pub stats: RenderStats,
}

/// Render the entire scene to an image buffer.
///
/// Buckets run in parallel on the rayon thread pool; the scene is only
/// read.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderOutput {
    let width = scene.camera.image_width();
    let height = scene.camera.image_height();
    let buckets = generate_buckets(width, height, config.bucket_size);

    log::debug!(
        "Tracing {} buckets of up to {}px on {} threads",
        buckets.len(),
        config.bucket_size,
        rayon::current_num_threads()
    );

    let start = Instant::now();
    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, config))
        .collect();
    let wall_time = start.elapsed();

    let mut image = ImageBuffer::new(width, height);
    let mut cpu_time = Duration::ZERO;
    for result in &results {
        image.write_bucket(result);
        cpu_time += result.elapsed;
    }

    RenderOutput {
        image,
        stats: RenderStats {
            wall_time,
            cpu_time,
            buckets: results.len(),
            pixels: width as u64 * height as u64,
        },
    }
}

/// Render `scene` and write the image to `path`.
///
/// Logs the CPU and wall-clock time taken. Fails if the scene does not
/// validate or the image cannot be written; the error names the path.
pub fn render_image(
    path: impl AsRef<Path>,
    scene: &Scene,
    config: &RenderConfig,
) -> TracerResult<RenderStats> {
    let path = path.as_ref();
    scene.validate()?;

    log::info!(
        "Rendering {}x{}: {} surfaces, {} lights, reflect_levels={}, shadows={}",
        scene.camera.image_width(),
        scene.camera.image_height(),
        scene.surface_count(),
        scene.light_count(),
        config.reflect_levels,
        config.has_shadow
    );

    let output = render(scene, config);
    let stats = output.stats;

    log::info!("CPU time taken = {:.3}sec", stats.cpu_time.as_secs_f64());
    log::info!("Real time taken = {:.3}sec", stats.wall_time.as_secs_f64());

    write_image(&output.image, path)?;
    log::info!("Saved {}", path.display());

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Material, Plane, PointLight, ViewPlane};
    use phong_math::Vec3;

    fn overexposed_scene() -> Scene {
        let camera = Camera::new(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            ViewPlane::from_aspect(8, 6, 1.0),
            8,
            6,
        );
        let mut scene = Scene::new(camera);
        let white = scene.add_material(Material::new(Color::ONE));
        scene.add_surface(Plane::new(0.0, 1.0, 0.0, 0.0, white));
        scene.add_light(PointLight::new(Vec3::new(0.0, 10.0, 0.0), Color::splat(5.0)));
        scene
    }

    #[test]
    fn test_render_pixel_is_clamped() {
        let scene = overexposed_scene();
        let color = render_pixel(&scene, 4, 3, &RenderConfig::default());
        assert_eq!(color, Color::ONE);
    }

    #[test]
    fn test_render_fills_every_pixel() {
        let scene = overexposed_scene();
        let config = RenderConfig {
            bucket_size: 3,
            ..Default::default()
        };

        let output = render(&scene, &config);
        assert_eq!(output.image.pixels.len(), 48);
        assert_eq!(output.stats.pixels, 48);
        assert_eq!(output.stats.buckets, 6);
        assert!(output.image.pixels.iter().all(|c| *c == Color::ONE));
    }

    #[test]
    fn test_parallel_matches_per_pixel() {
        let mut scene = overexposed_scene();
        scene.lights[0].intensity = Color::splat(0.3);
        let config = RenderConfig {
            bucket_size: 5,
            ..Default::default()
        };

        let output = render(&scene, &config);
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(output.image.get(x, y), render_pixel(&scene, x, y, &config));
            }
        }
    }

    #[test]
    fn test_image_buffer_rgb8() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(1, 0, Color::new(1.0, 0.5, 0.0));

        assert_eq!(image.to_rgb8(), vec![0, 0, 0, 255, 128, 0]);
    }
}
