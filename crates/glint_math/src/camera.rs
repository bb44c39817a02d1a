use glam::Vec3;

use crate::Ray;

/// Pinhole camera producing primary rays from normalized image-plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinholeCamera {
    pub position: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    /// Distance from the eye to the image plane (1.0 gives a 90 degree vertical fov)
    pub focal_distance: f32,
}

impl PinholeCamera {
    /// Create a camera at `position` looking along `forward`.
    ///
    /// The basis is built against world +Y, so `forward` must not be parallel to it.
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        let forward = forward.normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward).normalize();

        Self {
            position,
            forward,
            right,
            up,
            focal_distance: 1.0,
        }
    }

    /// Create a camera at `position` looking toward `target`.
    pub fn look_at(position: Vec3, target: Vec3) -> Self {
        Self::new(position, target - position)
    }

    /// Override the image plane distance.
    pub fn with_focal_distance(mut self, focal_distance: f32) -> Self {
        self.focal_distance = focal_distance;
        self
    }

    /// Generate the ray through image-plane point (u, v).
    ///
    /// `u` grows to the right and `v` grows upward, both roughly in [-1, 1]
    /// with the aspect ratio already folded in by the caller.
    pub fn sample_ray(&self, u: f32, v: f32) -> Ray {
        let direction = self.focal_distance * self.forward + u * self.right + v * self.up;
        Ray::new(self.position, direction)
    }
}
