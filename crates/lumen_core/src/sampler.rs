//! Uniform samplers for jitter and lens apertures.
//!
//! Samplers hold no generator state of their own; the caller threads an
//! explicit RNG through every call so that parallel renders stay
//! reproducible for a fixed seed.

use std::f64::consts::TAU;

use lumen_math::{Scalar, Vector};
use rand::{Rng, RngCore};

/// Draw a scalar uniformly from [0, 1).
#[inline]
pub fn gen_scalar(rng: &mut dyn RngCore) -> Scalar {
    rng.gen::<Scalar>()
}

/// A uniform distribution over a fixed scalar range.
#[derive(Debug, Clone, Copy)]
pub struct UniformSampler {
    min: Scalar,
    max: Scalar,
}

impl UniformSampler {
    /// Create a sampler over `[min, max)`.
    pub fn new(min: Scalar, max: Scalar) -> Self {
        Self { min, max }
    }

    /// Draw the next value.
    #[inline]
    pub fn sample(&self, rng: &mut dyn RngCore) -> Scalar {
        self.min + (self.max - self.min) * gen_scalar(rng)
    }
}

/// A uniform distribution over a disk in the XY plane.
#[derive(Debug, Clone, Copy)]
pub struct DiskSampler {
    radius: Scalar,
}

impl DiskSampler {
    /// Create a sampler over a disk of the given radius.
    pub fn new(radius: Scalar) -> Self {
        Self { radius }
    }

    /// The disk radius.
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    /// Draw a point on the disk. The x and y components carry the
    /// coordinates; z is always 0.
    ///
    /// The square root on the distance keeps the distribution uniform by
    /// area rather than bunched at the centre.
    #[inline]
    pub fn sample(&self, rng: &mut dyn RngCore) -> Vector {
        let theta = TAU * gen_scalar(rng);
        let distance = self.radius * gen_scalar(rng).sqrt();

        Vector::new(distance * theta.cos(), distance * theta.sin(), 0.0)
    }
}
