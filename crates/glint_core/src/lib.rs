//! Glint Core - Scene types for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Sphere`, `MaterialKind`, `Scene`, `IntersectInfo`, `DirectionalLight`
//! - **Descriptions**: JSON scene files and the built-in presets
//!
//! # Example
//!
//! ```ignore
//! use glint_core::SceneDescription;
//!
//! let setup = SceneDescription::load("scene.json")?.build()?;
//! println!("Loaded {} spheres", setup.scene.len());
//! ```

pub mod description;
pub mod light;
pub mod material;
pub mod presets;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use description::{
    CameraDescription, LightDescription, SceneDescription, SceneError, SceneResult, SceneSetup,
    SphereDescription,
};
pub use light::DirectionalLight;
pub use material::MaterialKind;
pub use scene::{IntersectInfo, Scene, SphereId};
pub use sphere::{Sphere, HIT_EPSILON};
