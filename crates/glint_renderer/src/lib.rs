//! Glint Renderer - CPU Whitted-style ray tracing
//!
//! Follows mirror and glass bounces from each primary ray and shades the
//! diffuse surface it lands on with a single shadow-tested directional light.

mod shading;
mod integrator;
mod renderer;
mod bucket;
mod output;

pub use shading::{reflect, refract, refract_or_reflect, shade_diffuse, Color, Lighting};
pub use integrator::{
    trace, trace_path, Termination, TraceConfig, TraceOutcome, AIR_IOR, DEFAULT_GLASS_IOR,
    DEFAULT_MAX_DEPTH,
};
pub use renderer::{
    color_to_rgb8, image_plane_coords, pixel_rng, post_process, render, render_pixel,
    render_pixel_seeded, ImageBuffer, RenderConfig, RenderJob,
};
pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use output::{save, save_png, save_ppm, write_ppm, OutputError, OutputResult};

/// Re-export common types from the other Glint crates
pub use glint_core::{DirectionalLight, IntersectInfo, MaterialKind, Scene, SceneSetup, Sphere};
pub use glint_math::{PinholeCamera, Ray, Vec3};
