//! Homogeneous vector type.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Scalar;

/// A vector of three coordinates plus a translation component.
///
/// The `w` component only participates in dot products and matrix
/// transforms; cross products, magnitude, normalisation and equality are
/// strictly 3D.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    /// Create a new vector with `w = 0`.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    /// Create a new vector with an explicit translation component.
    #[inline]
    pub const fn with_w(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Dot product. Uses the fourth component.
    #[inline]
    pub fn dot(self, b: Vector) -> Scalar {
        self.x * b.x + self.y * b.y + self.z * b.z + self.w * b.w
    }

    /// Cross product. Ignores the fourth component.
    #[inline]
    pub fn cross(self, b: Vector) -> Vector {
        Vector::new(
            self.y * b.z - self.z * b.y,
            self.z * b.x - self.x * b.z,
            self.x * b.y - self.y * b.x,
        )
    }

    /// Length of the vector: `|A| = sqrt(x^2 + y^2 + z^2)`.
    #[inline]
    pub fn magnitude(self) -> Scalar {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalise: `A' = A / |A|`.
    ///
    /// The zero vector has no direction; its components come out NaN and
    /// propagate to the final pixel clamp rather than aborting the render.
    #[inline]
    pub fn normalise(self) -> Vector {
        self / self.magnitude()
    }
}

/// Equality ignores the translation component.
impl PartialEq for Vector {
    #[inline]
    fn eq(&self, b: &Vector) -> bool {
        self.x == b.x && self.y == b.y && self.z == b.z
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, b: Vector) -> Vector {
        Vector::new(self.x + b.x, self.y + b.y, self.z + b.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, b: Vector) -> Vector {
        Vector::new(self.x - b.x, self.y - b.y, self.z - b.z)
    }
}

impl Mul<Scalar> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, a: Scalar) -> Vector {
        Vector::new(self.x * a, self.y * a, self.z * a)
    }
}

/// Component-wise product.
impl Mul for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, b: Vector) -> Vector {
        Vector::new(self.x * b.x, self.y * b.y, self.z * b.z)
    }
}

impl Div<Scalar> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, a: Scalar) -> Vector {
        Vector::new(self.x / a, self.y / a, self.z / a)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}
