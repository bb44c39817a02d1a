//! Whitted-style bounce loop.
//!
//! A path follows mirror and glass surfaces until it escapes, reaches a
//! diffuse surface, or runs out of depth. Specular hits contribute no colour
//! and nothing is attenuated along the way: the colour of a path is the
//! direct lighting at its diffuse hit, or black.

use glint_core::{MaterialKind, Scene};
use glint_math::Ray;

use crate::shading::{reflect, refract_or_reflect, shade_diffuse, Color, Lighting};

/// Reference bounce limit.
pub const DEFAULT_MAX_DEPTH: u32 = 100;

/// Index of refraction of glass spheres.
pub const DEFAULT_GLASS_IOR: f32 = 1.5;

/// Index of refraction of the medium between spheres.
pub const AIR_IOR: f32 = 1.0;

/// Settings for a single traced path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceConfig {
    pub lighting: Lighting,
    /// Maximum number of scene queries along a path
    pub max_depth: u32,
    pub glass_ior: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            lighting: Lighting::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            glass_ior: DEFAULT_GLASS_IOR,
        }
    }
}

/// Why a path stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The ray left the scene
    Escaped,
    /// The ray reached a diffuse surface and was shaded
    Diffuse,
    /// `max_depth` queries were spent on specular bounces
    DepthExhausted,
}

/// Colour of a path plus how it ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceOutcome {
    pub color: Color,
    /// Specular bounces taken before termination
    pub bounces: u32,
    pub termination: Termination,
}

/// Trace a primary ray and return its colour.
pub fn trace(ray: &Ray, scene: &Scene, config: &TraceConfig) -> Color {
    trace_path(ray, scene, config).color
}

/// Trace a primary ray, reporting how the path ended.
///
/// A diffuse hit ends the path. The ray is not redirected at a diffuse
/// surface, so any further iteration would hit the same point again and
/// shade it to the same colour.
pub fn trace_path(ray: &Ray, scene: &Scene, config: &TraceConfig) -> TraceOutcome {
    let mut current = *ray;
    let mut color = Color::ZERO;

    for depth in 0..config.max_depth {
        let Some(info) = scene.intersect(&current) else {
            return TraceOutcome {
                color,
                bounces: depth,
                termination: Termination::Escaped,
            };
        };

        let v = -current.direction();
        match scene.sphere(info.sphere).material {
            MaterialKind::Mirror => {
                current = Ray::new(info.position, reflect(v, info.normal));
            }
            MaterialKind::Glass => {
                let direction = refract_or_reflect(v, info.normal, AIR_IOR, config.glass_ior);
                current = Ray::new(info.position, direction);
            }
            MaterialKind::Diffuse => {
                // Overwrites, never accumulates
                color = shade_diffuse(scene, &info, &config.lighting);
                return TraceOutcome {
                    color,
                    bounces: depth,
                    termination: Termination::Diffuse,
                };
            }
        }
    }

    TraceOutcome {
        color,
        bounces: config.max_depth,
        termination: Termination::DepthExhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{DirectionalLight, Sphere};
    use glint_math::Vec3;

    const EPS: f32 = 1e-5;

    fn config(light: Vec3, ambient_always_added: bool) -> TraceConfig {
        TraceConfig {
            lighting: Lighting::new(
                DirectionalLight::new(light).unwrap(),
                Color::splat(0.1),
                ambient_always_added,
            ),
            ..TraceConfig::default()
        }
    }

    fn diffuse(center: Vec3, radius: f32, albedo: Color) -> Sphere {
        Sphere::new(center, radius, albedo, MaterialKind::Diffuse)
    }

    #[test]
    fn test_miss_is_black() {
        let mut scene = Scene::new();
        scene.add_sphere(diffuse(Vec3::ZERO, 1.0, Color::ONE));

        let ray = Ray::new(Vec3::new(0.0, 5.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let outcome = trace_path(&ray, &scene, &config(Vec3::Y, true));

        assert_eq!(outcome.color, Color::ZERO);
        assert_eq!(outcome.termination, Termination::Escaped);
        assert_eq!(outcome.bounces, 0);
        assert_eq!(trace(&ray, &scene, &config(Vec3::Y, true)), Color::ZERO);
    }

    #[test]
    fn test_zero_depth_is_black() {
        let mut scene = Scene::new();
        scene.add_sphere(diffuse(Vec3::ZERO, 1.0, Color::ONE));

        let cfg = TraceConfig {
            max_depth: 0,
            ..config(Vec3::Y, true)
        };
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);
        let outcome = trace_path(&ray, &scene, &cfg);

        assert_eq!(outcome.color, Color::ZERO);
        assert_eq!(outcome.termination, Termination::DepthExhausted);
    }

    /// Ground sphere with a unit sphere resting on it, lit from straight above.
    fn ground_and_ball(albedo: Color) -> Scene {
        let mut scene = Scene::new();
        scene.add_sphere(diffuse(Vec3::new(0.0, -1001.0, 0.0), 1000.0, Color::splat(0.9)));
        scene.add_sphere(diffuse(Vec3::ZERO, 1.0, albedo));
        scene
    }

    #[test]
    fn test_ground_and_ball_top_is_fully_lit() {
        let albedo = Color::new(0.2, 0.8, 0.2);
        let scene = ground_and_ball(albedo);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);

        let without_ambient = trace(&ray, &scene, &config(Vec3::Y, false));
        assert!((without_ambient - albedo).length() < EPS);

        let with_ambient = trace(&ray, &scene, &config(Vec3::Y, true));
        assert!((with_ambient - albedo * 1.1).length() < EPS);
    }

    #[test]
    fn test_ground_and_ball_underside_is_ambient_only() {
        let albedo = Color::new(0.2, 0.8, 0.2);
        let scene = ground_and_ball(albedo);
        // Grazes in just above the ground and hits the lower hemisphere
        let ray = Ray::new(Vec3::new(5.0, -0.9, 0.0), -Vec3::X);

        for ambient_always_added in [false, true] {
            let outcome = trace_path(&ray, &scene, &config(Vec3::Y, ambient_always_added));
            assert_eq!(outcome.termination, Termination::Diffuse);
            assert!((outcome.color - albedo * 0.1).length() < EPS);
        }
    }

    #[test]
    fn test_mirror_shows_direct_lit_diffuse_without_attenuation() {
        let albedo = Color::new(0.2, 0.6, 0.4);
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Color::splat(0.3), MaterialKind::Mirror));
        // Behind the camera, only visible through the mirror
        let target = scene.add_sphere(diffuse(Vec3::new(0.0, 0.0, 10.0), 1.0, albedo));

        let cfg = config(Vec3::new(0.0, 1.0, -1.0), false);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let outcome = trace_path(&ray, &scene, &cfg);

        assert_eq!(outcome.termination, Termination::Diffuse);
        assert_eq!(outcome.bounces, 1);

        // Exactly the direct light at the reflected hit point
        let reflected = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
        let hit = scene.intersect(&reflected).unwrap();
        assert_eq!(hit.sphere, target);
        assert_eq!(outcome.color, shade_diffuse(&scene, &hit, &cfg.lighting));
        assert!((outcome.color - albedo * std::f32::consts::FRAC_1_SQRT_2).length() < EPS);
    }

    fn glass_in_front_of_wall(albedo: Color) -> Scene {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Color::ONE, MaterialKind::Glass));
        scene.add_sphere(diffuse(Vec3::new(0.0, 0.0, -10.0), 3.0, albedo));
        scene
    }

    #[test]
    fn test_glass_passes_straight_through_at_normal_incidence() {
        let albedo = Color::new(0.9, 0.5, 0.1);
        let scene = glass_in_front_of_wall(albedo);
        let cfg = config(Vec3::new(0.0, 1.0, 1.0), false);

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let outcome = trace_path(&ray, &scene, &cfg);

        // Enter and leave the glass, then land on the wall
        assert_eq!(outcome.termination, Termination::Diffuse);
        assert_eq!(outcome.bounces, 2);
        assert!((outcome.color - albedo * std::f32::consts::FRAC_1_SQRT_2).length() < EPS);
    }

    #[test]
    fn test_glass_depth_exhausted_is_black() {
        let scene = glass_in_front_of_wall(Color::ONE);
        let cfg = TraceConfig {
            max_depth: 2,
            ..config(Vec3::new(0.0, 1.0, 1.0), true)
        };

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let outcome = trace_path(&ray, &scene, &cfg);

        assert_eq!(outcome.termination, Termination::DepthExhausted);
        assert_eq!(outcome.bounces, 2);
        assert_eq!(outcome.color, Color::ZERO);
    }

    #[test]
    fn test_total_internal_reflection_keeps_path_alive() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Color::ONE, MaterialKind::Glass));

        // Every chord past the critical angle stays past it, so the ray
        // bounces inside the sphere until the depth runs out
        let ray = Ray::new(Vec3::new(0.0, 0.9, 0.0), Vec3::X);
        let cfg = TraceConfig {
            max_depth: 25,
            ..TraceConfig::default()
        };
        let outcome = trace_path(&ray, &scene, &cfg);

        assert_eq!(outcome.termination, Termination::DepthExhausted);
        assert_eq!(outcome.bounces, 25);
        assert_eq!(outcome.color, Color::ZERO);
    }

    #[test]
    fn test_diffuse_result_does_not_depend_on_remaining_depth() {
        let albedo = Color::new(0.2, 0.8, 0.2);
        let scene = ground_and_ball(albedo);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);

        let shallow = TraceConfig {
            max_depth: 1,
            ..config(Vec3::Y, true)
        };
        let deep = config(Vec3::Y, true);

        assert_eq!(trace(&ray, &scene, &shallow), trace(&ray, &scene, &deep));
    }
}
