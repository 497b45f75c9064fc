//! Ray type.

use lumen_math::{Scalar, Vector};

/// A ray with an origin and a normalized direction.
///
/// Rays are ephemeral: one is created per sample and dropped once traced.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Vector,
    /// Direction vector. Callers construct this normalized.
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Compute the point along the ray at parameter `t`.
    #[inline]
    pub fn at(&self, t: Scalar) -> Vector {
        self.origin + self.direction * t
    }
}
