//! Serializable scene descriptions and the loader that turns them into a [`Scene`].
//!
//! Descriptions are JSON documents of the form
//!
//! ```json
//! {
//!   "camera": { "position": [4, 1, 7], "look_at": [0, 0, 0] },
//!   "light": { "direction": [0.5, 1, 0.5], "ambient": [0.1, 0.1, 0.1] },
//!   "spheres": [
//!     { "center": [0, -1001, 0], "radius": 1000, "albedo": [0.9, 0.9, 0.9], "material": "diffuse" }
//!   ]
//! }
//! ```
//!
//! Every field has a default, so partial documents are accepted.

use std::path::Path;

use glint_math::{PinholeCamera, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::light::DirectionalLight;
use crate::material::MaterialKind;
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Errors that can occur while loading or building a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Degenerate {0} vector")]
    DegenerateVector(&'static str),
}

/// Result type for scene loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Camera placement.
///
/// `look_at` wins over `direction` when both are given; with neither the
/// camera looks down -Z.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub position: Vec3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub look_at: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Vec3>,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            look_at: None,
            direction: None,
        }
    }
}

impl CameraDescription {
    /// Build the pinhole camera, rejecting views parallel to world up.
    pub fn build(&self) -> SceneResult<PinholeCamera> {
        let forward = match (self.look_at, self.direction) {
            (Some(target), direction) => {
                if direction.is_some() {
                    log::warn!("Camera has both look_at and direction; using look_at");
                }
                target - self.position
            }
            (None, Some(direction)) => direction,
            (None, None) => Vec3::NEG_Z,
        };

        let forward = forward
            .try_normalize()
            .ok_or(SceneError::DegenerateVector("camera direction"))?;
        if forward.cross(Vec3::Y).length_squared() < 1e-12 {
            return Err(SceneError::DegenerateVector("camera direction"));
        }

        Ok(PinholeCamera::new(self.position, forward))
    }
}

/// The single directional light and the ambient floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightDescription {
    /// Direction from the scene toward the light (need not be normalized)
    pub direction: Vec3,
    pub ambient: Vec3,
}

impl Default for LightDescription {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.5, 1.0, 0.5),
            ambient: Vec3::splat(0.1),
        }
    }
}

/// One sphere entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,
    #[serde(default = "default_albedo")]
    pub albedo: Vec3,
    #[serde(default)]
    pub material: MaterialKind,
}

fn default_albedo() -> Vec3 {
    Vec3::splat(0.5)
}

impl SphereDescription {
    pub fn new(center: Vec3, radius: f32, albedo: Vec3, material: MaterialKind) -> Self {
        Self {
            center,
            radius,
            albedo,
            material,
        }
    }

    fn validate(&self, index: usize) -> SceneResult<Sphere> {
        let invalid = |reason: &str| SceneError::InvalidSphere {
            index,
            reason: reason.to_string(),
        };

        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid("radius must be positive and finite"));
        }
        if !self.center.is_finite() {
            return Err(invalid("center must be finite"));
        }
        if !self.albedo.is_finite() {
            return Err(invalid("albedo must be finite"));
        }

        Ok(Sphere::new(self.center, self.radius, self.albedo, self.material))
    }
}

/// A complete scene: camera, light and spheres.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    pub light: LightDescription,
    pub spheres: Vec<SphereDescription>,
}

/// Everything a renderer needs, validated and ready to trace.
#[derive(Debug, Clone)]
pub struct SceneSetup {
    pub scene: Scene,
    pub camera: PinholeCamera,
    pub light: DirectionalLight,
    pub ambient: Vec3,
}

impl SceneDescription {
    /// Parse a description from JSON text.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let description = Self::from_json_str(&text)?;
        log::info!(
            "Loaded scene description with {} spheres from {}",
            description.spheres.len(),
            path.display()
        );
        Ok(description)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the description and build the scene, camera and light.
    pub fn build(&self) -> SceneResult<SceneSetup> {
        let mut scene = Scene::new();
        for (index, sphere) in self.spheres.iter().enumerate() {
            let sphere = sphere.validate(index)?;
            log::debug!(
                "Sphere {}: center={:?} radius={} material={:?}",
                index,
                sphere.center,
                sphere.radius,
                sphere.material
            );
            scene.add_sphere(sphere);
        }

        if scene.is_empty() {
            log::warn!("Scene has no spheres; every pixel will be black");
        }

        let camera = self.camera.build()?;
        let light = DirectionalLight::new(self.light.direction)
            .ok_or(SceneError::DegenerateVector("light direction"))?;

        Ok(SceneSetup {
            scene,
            camera,
            light,
            ambient: self.light.ambient,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_description() {
        let json = r#"{
            "camera": { "position": [4, 1, 7], "look_at": [0, 0, 0] },
            "light": { "direction": [0, 2, 0], "ambient": [0.2, 0.2, 0.2] },
            "spheres": [
                { "center": [0, -1001, 0], "radius": 1000, "albedo": [0.9, 0.9, 0.9] },
                { "center": [0, 0, 0], "radius": 1, "material": "glass" }
            ]
        }"#;

        let description = SceneDescription::from_json_str(json).unwrap();
        assert_eq!(description.spheres.len(), 2);
        assert_eq!(description.spheres[0].material, MaterialKind::Diffuse);
        assert_eq!(description.spheres[1].material, MaterialKind::Glass);
        assert_eq!(description.spheres[1].albedo, Vec3::splat(0.5));

        let setup = description.build().unwrap();
        assert_eq!(setup.scene.len(), 2);
        assert_eq!(setup.light.direction(), Vec3::Y);
        assert_eq!(setup.ambient, Vec3::splat(0.2));
        assert_eq!(setup.camera.position, Vec3::new(4.0, 1.0, 7.0));
    }

    #[test]
    fn test_partial_description_uses_defaults() {
        let description = SceneDescription::from_json_str("{}").unwrap();

        assert_eq!(description, SceneDescription::default());
        assert_eq!(description.light.ambient, Vec3::splat(0.1));

        let setup = description.build().unwrap();
        assert!(setup.scene.is_empty());
        assert_eq!(setup.camera.forward, Vec3::NEG_Z);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let json = r#"{ "spheres": [
            { "center": [0, 0, 0], "radius": 1 },
            { "center": [0, 0, 0], "radius": -2 }
        ] }"#;

        let err = SceneDescription::from_json_str(json)
            .unwrap()
            .build()
            .unwrap_err();
        match err {
            SceneError::InvalidSphere { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_degenerate_vectors_rejected() {
        let mut description = SceneDescription::default();
        description.light.direction = Vec3::ZERO;
        assert!(matches!(
            description.build(),
            Err(SceneError::DegenerateVector("light direction"))
        ));

        let mut description = SceneDescription::default();
        description.camera.direction = Some(Vec3::NEG_Y);
        assert!(matches!(
            description.build(),
            Err(SceneError::DegenerateVector("camera direction"))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SceneDescription::from_json_str("{ \"spheres\": 3 }").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let description = crate::presets::classic();
        let path = std::env::temp_dir().join(format!("glint_scene_{}.json", std::process::id()));
        std::fs::write(&path, description.to_json_string().unwrap()).unwrap();

        let loaded = SceneDescription::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, description);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SceneDescription::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
