//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a fixed bounce limit
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction and 8-bit quantization
//! - Row-parallel frame rendering with one RNG stream per row

use crate::{
    error::RenderError,
    random::{gen_f32, row_rng},
    Camera, Color, Framebuffer, Hittable,
};
use lumen_math::{Interval, Ray};
use rand::RngCore;
use rayon::prelude::*;
use std::time::Instant;

/// Lower bound of every scene query; keeps bounced rays from re-hitting
/// the surface they start on.
pub const T_MIN: f32 = 0.001;

/// Bounce depth at which a path is cut off and contributes black.
pub const MAX_DEPTH: u32 = 50;

const WHITE: Color = Color::new(1.0, 1.0, 1.0);
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Run seed; each row derives its own stream from it
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            samples_per_pixel: 10,
            max_depth: MAX_DEPTH,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Set resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set samples per pixel.
    pub fn with_samples(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self
    }

    /// Set run seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples per pixel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// `depth` counts bounces taken so far, starting at 0. A surface hit at
/// `depth >= max_depth` contributes black without consulting the material,
/// so a path evaluates this function at most `max_depth + 1` times.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    if depth < max_depth {
        if let Some(result) = rec.material.scatter(ray, &rec, rng) {
            return result.attenuation * ray_color(&result.scattered, world, depth + 1, max_depth, rng);
        }
    }

    // Absorbed, or out of bounces
    Color::ZERO
}

/// Background: vertical blend from white at the horizon to sky blue overhead.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * WHITE + t * SKY_BLUE
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    linear.sqrt()
}

/// Convert a gamma-encoded channel in [0, 1] to 8 bits.
///
/// Values outside [0, 1] are clamped first so rounding noise can never wrap
/// past 255. NaN maps to 0.
#[inline]
pub fn quantize(channel: f32) -> u8 {
    (255.99 * Interval::new(0.0, 1.0).clamp(channel)) as u8
}

/// Convert an averaged linear color to an 8-bit RGB triplet.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        quantize(linear_to_gamma(color.x)),
        quantize(linear_to_gamma(color.y)),
        quantize(linear_to_gamma(color.z)),
    ]
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` are pixel coordinates with `j = 0` at the bottom of the image.
/// Returns the averaged linear color.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (i as f32 + gen_f32(rng)) / config.width as f32;
        let v = (j as f32 + gen_f32(rng)) / config.height as f32;
        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(&ray, world, 0, config.max_depth, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Render one output row (0 = top of the image) into `pixels`.
pub fn render_row(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    row: usize,
    pixels: &mut [[u8; 3]],
) {
    let mut rng = row_rng(config.seed, row);
    // Output rows run top-down, image-plane rows bottom-up
    let j = config.height - 1 - row as u32;

    for (i, pixel) in pixels.iter_mut().enumerate() {
        let color = render_pixel(camera, world, i as u32, j, config, &mut rng);
        *pixel = color_to_rgb(color);
    }
}

/// Render the entire scene, distributing rows across the rayon thread pool.
///
/// Rows are handed out one at a time so expensive rows (glass, horizon)
/// balance across workers. The result does not depend on the number of
/// threads.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> Result<Framebuffer, RenderError> {
    config.validate()?;

    let mut image = Framebuffer::new(config.width, config.height);
    log::info!(
        "Rendering {}x{} @ {} spp on {} threads",
        config.width,
        config.height,
        config.samples_per_pixel,
        rayon::current_num_threads()
    );

    let start = Instant::now();
    image
        .pixels
        .par_chunks_mut(config.width as usize)
        .with_max_len(1)
        .enumerate()
        .for_each(|(row, pixels)| render_row(camera, world, config, row, pixels));
    log::info!("Rendered in {:.3}s", start.elapsed().as_secs_f64());

    Ok(image)
}

/// Single-threaded equivalent of [`render`].
pub fn render_serial(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> Result<Framebuffer, RenderError> {
    config.validate()?;

    let mut image = Framebuffer::new(config.width, config.height);
    for (row, pixels) in image.rows_mut().enumerate() {
        render_row(camera, world, config, row, pixels);
    }

    Ok(image)
}
