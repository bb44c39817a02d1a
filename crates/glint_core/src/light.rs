//! Directional light source.

use glint_math::Vec3;

/// A light infinitely far away, shining along a single direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3,
}

impl DirectionalLight {
    /// Create a light; `direction` points from the scene toward the light and
    /// is normalized here. Returns `None` for a zero or non-finite vector.
    pub fn new(direction: Vec3) -> Option<Self> {
        direction.try_normalize().map(|direction| Self { direction })
    }

    /// Unit vector from a surface point toward the light.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.5, 1.0, 0.5).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_direction_normalized() {
        let light = DirectionalLight::new(Vec3::new(0.0, 2.0, 0.0)).unwrap();
        assert_eq!(light.direction(), Vec3::Y);
    }

    #[test]
    fn test_zero_direction_rejected() {
        assert!(DirectionalLight::new(Vec3::ZERO).is_none());
        assert!(DirectionalLight::new(Vec3::new(f32::NAN, 1.0, 0.0)).is_none());
    }
}
