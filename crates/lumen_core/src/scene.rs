//! Scene aggregate.

use crate::{Light, Object};

/// A full scene: geometry plus lighting.
///
/// The scene owns its objects and lights and is immutable once built; one
/// scene is read concurrently by every render thread.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<Object>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a new scene.
    pub fn new(objects: Vec<Object>, lights: Vec<Light>) -> Self {
        Self { objects, lights }
    }

    /// Number of objects in the scene.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Total shadow rays cast per shading point, summed over all lights.
    pub fn light_sample_count(&self) -> usize {
        self.lights.iter().map(Light::sample_count).sum()
    }
}
