//! Scene container and nearest-hit query.
//!
//! The scene is an append-only list of spheres searched linearly. A hit
//! refers back to its sphere by [`SphereId`] rather than by reference, so
//! hit records are plain `Copy` values with no borrow on the scene.

use glint_math::{Ray, Vec3};

use crate::sphere::Sphere;

/// Index of a sphere inside its [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SphereId(pub usize);

/// Result of a successful scene intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectInfo {
    /// Ray parameter of the hit
    pub t: f32,
    /// World-space hit position
    pub position: Vec3,
    /// Outward unit normal; callers compare against the ray to tell inside from outside
    pub normal: Vec3,
    /// Sphere that was hit
    pub sphere: SphereId,
}

/// A collection of spheres.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere and return its id.
    pub fn add_sphere(&mut self, sphere: Sphere) -> SphereId {
        let id = SphereId(self.spheres.len());
        self.spheres.push(sphere);
        id
    }

    /// Look up a sphere by id.
    ///
    /// Ids are only handed out by [`Scene::add_sphere`] and the scene never
    /// shrinks, so an id from this scene is always valid.
    pub fn sphere(&self, id: SphereId) -> &Sphere {
        &self.spheres[id.0]
    }

    /// All spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Find the nearest hit along `ray`, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<IntersectInfo> {
        let mut closest: Option<(f32, usize)> = None;

        for (index, sphere) in self.spheres.iter().enumerate() {
            if let Some(t) = sphere.intersect(ray) {
                if closest.map_or(true, |(best, _)| t < best) {
                    closest = Some((t, index));
                }
            }
        }

        closest.map(|(t, index)| {
            let position = ray.at(t);
            IntersectInfo {
                t,
                position,
                normal: self.spheres[index].normal_at(position),
                sphere: SphereId(index),
            }
        })
    }

    /// True if anything at all lies along `ray`.
    ///
    /// Material and distance are ignored; this is the shadow-ray query.
    pub fn is_occluded(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }
}
