//! Bounce directions and direct lighting.
//!
//! All directions here follow the same convention: `v` points away from the
//! surface, back toward where the incoming ray came from (the negated ray
//! direction). Inputs are unit length.

use glint_core::{DirectionalLight, IntersectInfo, Scene};
use glint_math::{Ray, Vec3};

/// Color type alias (linear RGB)
pub type Color = Vec3;

/// Mirror `v` about the normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    -v + 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with normal `n` on the same side as `v`.
///
/// Returns `None` under total internal reflection, or when the result
/// cannot be normalized.
pub fn refract(v: Vec3, n: Vec3, ior_from: f32, ior_to: f32) -> Option<Vec3> {
    let eta = ior_from / ior_to;
    let cos_i = v.dot(n);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    (-eta * v + (eta * cos_i - k.sqrt()) * n).try_normalize()
}

/// Next direction at a glass surface.
///
/// `outward_normal` is the sphere's outward normal. A `v` on the far side of
/// it means the ray is leaving the sphere, so the normal and the indices are
/// flipped. When refraction fails the mirror direction is returned, so a
/// glass hit always produces a usable unit direction.
pub fn refract_or_reflect(v: Vec3, outward_normal: Vec3, ior_outside: f32, ior_inside: f32) -> Vec3 {
    let (normal, ior_from, ior_to) = if v.dot(outward_normal) < 0.0 {
        (-outward_normal, ior_inside, ior_outside)
    } else {
        (outward_normal, ior_outside, ior_inside)
    };

    refract(v, normal, ior_from, ior_to).unwrap_or_else(|| reflect(v, normal))
}

/// Light and ambient settings for diffuse shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub light: DirectionalLight,
    /// Constant floor applied as `ambient * albedo`
    pub ambient: Color,
    /// Add the ambient floor on lit points too, not only in shadow
    pub ambient_always_added: bool,
}

impl Lighting {
    pub fn new(light: DirectionalLight, ambient: Color, ambient_always_added: bool) -> Self {
        Self {
            light,
            ambient,
            ambient_always_added,
        }
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::new(DirectionalLight::default(), Color::splat(0.1), true)
    }
}

/// Direct lighting at a diffuse hit, with a shadow test toward the light.
pub fn shade_diffuse(scene: &Scene, info: &IntersectInfo, lighting: &Lighting) -> Color {
    let albedo = scene.sphere(info.sphere).albedo;
    let ambient = lighting.ambient * albedo;
    let to_light = lighting.light.direction();

    let shadow_ray = Ray::new(info.position, to_light);
    if scene.is_occluded(&shadow_ray) {
        return ambient;
    }

    let direct = to_light.dot(info.normal).max(0.0) * albedo;
    if lighting.ambient_always_added {
        direct + ambient
    } else {
        direct
    }
}
