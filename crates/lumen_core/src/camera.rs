//! Camera and lens geometry.

use lumen_math::{Scalar, Vector};
use rand::RngCore;

use crate::DiskSampler;

/// World up, used to derive the camera basis.
const WORLD_UP: Vector = Vector::new(0.0, 1.0, 0.0);

/// A lens: focal length, aperture, and a relative focus distance.
#[derive(Debug, Clone, Copy)]
pub struct Lens {
    /// Distance from the film back to the lens plane.
    pub focal_length: Scalar,
    /// Scales the camera-to-target distance into the focus distance.
    pub focus: Scalar,
    aperture: DiskSampler,
}

impl Lens {
    /// Create a pinhole lens with the given focal length.
    pub fn new(focal_length: Scalar) -> Self {
        Self {
            focal_length,
            focus: 1.0,
            aperture: DiskSampler::new(0.0),
        }
    }

    /// Set the aperture radius. Non-zero apertures produce depth-of-field
    /// blur.
    pub fn with_aperture(mut self, radius: Scalar) -> Self {
        self.aperture = DiskSampler::new(radius);
        self
    }

    /// Set the relative focus distance.
    pub fn with_focus(mut self, focus: Scalar) -> Self {
        self.focus = focus;
        self
    }

    /// The aperture radius.
    pub fn aperture_radius(&self) -> Scalar {
        self.aperture.radius()
    }

    /// Sample a point on the aperture disk, in camera-space x,y.
    #[inline]
    pub fn sample_aperture(&self, rng: &mut dyn RngCore) -> Vector {
        self.aperture.sample(rng)
    }
}

/// A camera: position, orientation basis, film size, and a lens.
///
/// Every field is derived deterministically from the constructor inputs;
/// the camera is immutable afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vector,
    /// Unit vector from the position toward the look-at target.
    pub direction: Vector,
    /// The point `focal_length` behind the position, where depth-of-field
    /// rays originate.
    pub film_back: Vector,
    pub right: Vector,
    pub up: Vector,
    /// Film width in camera units.
    pub width: Scalar,
    /// Film height in camera units.
    pub height: Scalar,
    pub lens: Lens,
    /// World-space distance to the plane of perfect focus.
    pub focus_distance: Scalar,
}

impl Camera {
    /// Create a new camera looking from `position` toward `look_at`.
    pub fn new(position: Vector, look_at: Vector, width: Scalar, height: Scalar, lens: Lens) -> Self {
        let direction = (look_at - position).normalise();
        let right = direction.cross(WORLD_UP);
        let up = right.cross(direction);

        Self {
            position,
            direction,
            film_back: position - direction * lens.focal_length,
            right,
            up,
            width,
            height,
            lens,
            focus_distance: (position - look_at).magnitude() * lens.focus,
        }
    }
}
