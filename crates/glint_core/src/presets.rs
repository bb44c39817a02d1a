//! Built-in scenes.
//!
//! Both share the same ground, light and three coloured diffuse spheres and
//! differ in camera placement and in which specular spheres they add.

use glint_math::Vec3;

use crate::description::{CameraDescription, LightDescription, SceneDescription, SphereDescription};
use crate::material::MaterialKind;

fn ground() -> SphereDescription {
    SphereDescription::new(
        Vec3::new(0.0, -1001.0, 0.0),
        1000.0,
        Vec3::splat(0.9),
        MaterialKind::Diffuse,
    )
}

/// Camera at (4, 1, 7) looking at the origin, with a mirror and a glass sphere.
pub fn classic() -> SceneDescription {
    SceneDescription {
        camera: CameraDescription {
            position: Vec3::new(4.0, 1.0, 7.0),
            look_at: Some(Vec3::ZERO),
            direction: None,
        },
        light: LightDescription::default(),
        spheres: vec![
            ground(),
            SphereDescription::new(
                Vec3::new(-2.0, 0.0, 1.0),
                1.0,
                Vec3::new(0.8, 0.2, 0.2),
                MaterialKind::Diffuse,
            ),
            SphereDescription::new(Vec3::ZERO, 1.0, Vec3::new(0.2, 0.8, 0.2), MaterialKind::Diffuse),
            SphereDescription::new(
                Vec3::new(2.0, 0.0, -1.0),
                1.0,
                Vec3::new(0.2, 0.2, 0.8),
                MaterialKind::Diffuse,
            ),
            SphereDescription::new(Vec3::new(-2.0, 3.0, 1.0), 1.0, Vec3::ONE, MaterialKind::Mirror),
            SphereDescription::new(Vec3::new(3.0, 1.0, 2.0), 1.0, Vec3::ONE, MaterialKind::Glass),
        ],
    }
}

/// Camera at (0, 0, 5) looking down -Z, with a single mirror sphere.
pub fn supersampled() -> SceneDescription {
    SceneDescription {
        camera: CameraDescription {
            position: Vec3::new(0.0, 0.0, 5.0),
            look_at: None,
            direction: Some(Vec3::NEG_Z),
        },
        light: LightDescription::default(),
        spheres: vec![
            ground(),
            SphereDescription::new(
                Vec3::new(-1.0, 0.0, 1.0),
                1.0,
                Vec3::new(0.8, 0.2, 0.2),
                MaterialKind::Diffuse,
            ),
            SphereDescription::new(Vec3::ZERO, 1.0, Vec3::new(0.2, 0.8, 0.2), MaterialKind::Diffuse),
            SphereDescription::new(
                Vec3::new(1.0, 0.0, -1.0),
                1.0,
                Vec3::new(0.2, 0.2, 0.8),
                MaterialKind::Diffuse,
            ),
            SphereDescription::new(Vec3::new(-2.0, 2.0, 1.0), 1.0, Vec3::ONE, MaterialKind::Mirror),
        ],
    }
}
