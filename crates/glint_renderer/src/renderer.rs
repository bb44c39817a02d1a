//! Sampling driver.
//!
//! Maps pixels to primary rays, averages one or more traced samples per
//! pixel and applies the optional gamma post-process.
//! Each pixel draws from its own seeded random stream, so a pixel's value
//! does not depend on the order pixels are rendered in.

use std::time::Instant;

use glint_core::{DirectionalLight, Scene, SceneSetup};
use glint_math::{Interval, PinholeCamera};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bucket::DEFAULT_BUCKET_SIZE;
use crate::integrator::{trace, TraceConfig, DEFAULT_GLASS_IOR, DEFAULT_MAX_DEPTH};
use crate::shading::{Color, Lighting};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Jitter samples inside the pixel instead of using its centre
    pub jitter: bool,
    /// Gamma applied to the whole image before export; `None` keeps it linear
    pub gamma: Option<f32>,
    /// Add the ambient floor on lit diffuse points as well as shadowed ones
    pub ambient_always_added: bool,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    pub glass_ior: f32,
    /// Base seed for the per-pixel random streams
    pub seed: u64,
    /// Tile edge length for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl RenderConfig {
    /// One centred sample per pixel, gamma 2.2, ambient on lit points.
    pub fn classic() -> Self {
        Self {
            width: 512,
            height: 512,
            samples_per_pixel: 1,
            jitter: false,
            gamma: Some(2.2),
            ambient_always_added: true,
            max_depth: DEFAULT_MAX_DEPTH,
            glass_ior: DEFAULT_GLASS_IOR,
            seed: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }

    /// Sixteen jittered samples per pixel, linear output, ambient in shadow only.
    pub fn supersampled() -> Self {
        Self {
            samples_per_pixel: 16,
            jitter: true,
            gamma: None,
            ambient_always_added: false,
            ..Self::classic()
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Build the per-path settings for a given light.
    pub fn trace_config(&self, light: DirectionalLight, ambient: Color) -> TraceConfig {
        TraceConfig {
            lighting: Lighting::new(light, ambient, self.ambient_always_added),
            max_depth: self.max_depth,
            glass_ior: self.glass_ior,
        }
    }
}

/// Everything needed to render a frame, borrowed for the duration of the render.
#[derive(Debug, Clone, Copy)]
pub struct RenderJob<'a> {
    pub scene: &'a Scene,
    pub camera: &'a PinholeCamera,
    pub trace: TraceConfig,
    pub config: &'a RenderConfig,
}

impl<'a> RenderJob<'a> {
    /// Create a job from a built scene.
    pub fn new(setup: &'a SceneSetup, config: &'a RenderConfig) -> Self {
        Self {
            scene: &setup.scene,
            camera: &setup.camera,
            trace: config.trace_config(setup.light, setup.ambient),
            config,
        }
    }
}

/// Simple image buffer for storing linear render output.
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
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Raise every channel to `1 / gamma`.
    pub fn gamma_correct(&mut self, gamma: f32) {
        let exponent = 1.0 / gamma;
        for color in &mut self.pixels {
            *color = color.max(Color::ZERO).powf(exponent);
        }
    }

    /// Convert to packed 8-bit RGB.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Quantize a colour: clamp each channel to [0, 1], then scale to 0-255.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (255.0 * Interval::UNIT.clamp(c)) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Image-plane coordinates of a point inside pixel (x, y).
///
/// `dx`, `dy` are offsets in [0, 1) from the pixel's top-left corner. The
/// aspect ratio is folded into `u`; row 0 is the top of the image.
pub fn image_plane_coords(x: u32, y: u32, dx: f32, dy: f32, width: u32, height: u32) -> (f32, f32) {
    let (w, h) = (width as f32, height as f32);
    let u = (2.0 * (x as f32 + dx) - w) / h;
    let v = (h - 2.0 * (y as f32 + dy)) / h;
    (u, v)
}

/// Seeded random stream for one pixel.
pub fn pixel_rng(seed: u64, x: u32, y: u32) -> StdRng {
    let index = (u64::from(y) << 32) | u64::from(x);
    StdRng::seed_from_u64(seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(job: &RenderJob<'_>, x: u32, y: u32, rng: &mut dyn RngCore) -> Color {
    let config = job.config;
    let samples = config.samples_per_pixel.max(1);
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let (dx, dy) = if config.jitter {
            (rng.gen::<f32>(), rng.gen::<f32>())
        } else {
            (0.5, 0.5)
        };
        let (u, v) = image_plane_coords(x, y, dx, dy, config.width, config.height);
        let ray = job.camera.sample_ray(u, v);
        pixel_color += trace(&ray, job.scene, &job.trace);
    }

    // Average the samples
    pixel_color / samples as f32
}

/// Render pixel (x, y) with its own random stream.
pub fn render_pixel_seeded(job: &RenderJob<'_>, x: u32, y: u32) -> Color {
    let mut rng = pixel_rng(job.config.seed, x, y);
    render_pixel(job, x, y, &mut rng)
}

/// Apply the configured post-process to a finished image.
pub fn post_process(image: &mut ImageBuffer, config: &RenderConfig) {
    if let Some(gamma) = config.gamma {
        image.gamma_correct(gamma);
    }
}

/// Render the entire scene to an image buffer.
///
/// This is the single-threaded reference path; see
/// [`render_parallel`](crate::bucket::render_parallel) for the bucketed one.
pub fn render(job: &RenderJob<'_>) -> ImageBuffer {
    let config = job.config;
    log::info!(
        "Rendering {}x{} @ {} spp (jitter: {}, gamma: {:?})",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.jitter,
        config.gamma
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(config.width, config.height);
    for y in 0..config.height {
        for x in 0..config.width {
            image.set_pixel(x, y, render_pixel_seeded(job, x, y));
        }
    }
    post_process(&mut image, config);

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
