// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
mod interval;
mod camera;

pub use ray::Ray;
pub use interval::Interval;
pub use camera::PinholeCamera;
