//! Sphere primitive for ray tracing.

use glint_math::{Interval, Ray, Vec3};

use crate::material::MaterialKind;

/// Ray parameters at or below this are rejected so a ray leaving a surface
/// does not re-hit the point it started from.
pub const HIT_EPSILON: f32 = 1e-3;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    /// Must be positive
    pub radius: f32,
    /// Diffuse reflectance (kd)
    pub albedo: Vec3,
    pub material: MaterialKind,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, albedo: Vec3, material: MaterialKind) -> Self {
        Self {
            center,
            radius,
            albedo,
            material,
        }
    }

    /// Nearest accepted ray parameter for a hit against this sphere.
    ///
    /// Assumes a unit-length ray direction, so the quadratic's leading
    /// coefficient is 1. The smaller root wins when it lies past
    /// [`HIT_EPSILON`]; otherwise the larger root is tried.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let ray_t = Interval::forward(HIT_EPSILON);

        let near = -b - sqrtd;
        if ray_t.surrounds(near) {
            return Some(near);
        }
        let far = -b + sqrtd;
        if ray_t.surrounds(far) {
            return Some(far);
        }
        None
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        (p - self.center) / self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Vec3::splat(0.5), MaterialKind::Diffuse)
    }

    #[test]
    fn test_sphere_hit_entry_point() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        // Entry at z = 1, exit at z = -1
        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_tangent() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 5.0).abs() < 1e-4);
        assert!((ray.at(t) - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere();

        // Passes above the sphere
        let ray = Ray::new(Vec3::new(0.0, 1.5, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());

        // Sphere entirely behind the origin
        let behind = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(sphere.intersect(&behind).is_none());
    }

    #[test]
    fn test_sphere_ignores_own_surface() {
        let sphere = unit_sphere();

        // Leaving the surface outward never re-hits the start point
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.2));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_normal_is_outward_unit() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 2.0, Vec3::ONE, MaterialKind::Mirror);
        let n = sphere.normal_at(Vec3::new(1.0, 4.0, 3.0));

        assert!((n - Vec3::Y).length() < 1e-6);
    }
}
