//! 4x4 affine transforms.

use std::ops::Mul;

use crate::{Scalar, Vector};

/// A 4x4 matrix, declared row-wise.
///
/// Both row and column vectors are stored so that multiplication can index
/// either without transposing. Matrices compose right-to-left:
/// `(a * b) * v == a * (b * v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    /// Row-wise vectors.
    pub r: [Vector; 4],
    /// Column-wise vectors.
    pub c: [Vector; 4],
}

impl Matrix {
    /// Create a matrix from four row vectors.
    pub fn new(r1: Vector, r2: Vector, r3: Vector, r4: Vector) -> Self {
        Self {
            r: [r1, r2, r3, r4],
            c: [
                Vector::with_w(r1.x, r2.x, r3.x, r4.x),
                Vector::with_w(r1.y, r2.y, r3.y, r4.y),
                Vector::with_w(r1.z, r2.z, r3.z, r4.z),
                Vector::with_w(r1.w, r2.w, r3.w, r4.w),
            ],
        }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self::scale(1.0, 1.0, 1.0)
    }

    /// A translation matrix.
    pub fn translation(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::new(
            Vector::with_w(1.0, 0.0, 0.0, x),
            Vector::with_w(0.0, 1.0, 0.0, y),
            Vector::with_w(0.0, 0.0, 1.0, z),
            Vector::with_w(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// A scale matrix.
    pub fn scale(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::new(
            Vector::with_w(x, 0.0, 0.0, 0.0),
            Vector::with_w(0.0, y, 0.0, 0.0),
            Vector::with_w(0.0, 0.0, z, 0.0),
            Vector::with_w(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// A rotation about the X axis. `theta` is in degrees.
    pub fn rotation_x(theta: Scalar) -> Self {
        let (sin, cos) = theta.to_radians().sin_cos();
        Self::new(
            Vector::with_w(1.0, 0.0, 0.0, 0.0),
            Vector::with_w(0.0, cos, -sin, 0.0),
            Vector::with_w(0.0, sin, cos, 0.0),
            Vector::with_w(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// A rotation about the Y axis. `theta` is in degrees.
    pub fn rotation_y(theta: Scalar) -> Self {
        let (sin, cos) = theta.to_radians().sin_cos();
        Self::new(
            Vector::with_w(cos, 0.0, sin, 0.0),
            Vector::with_w(0.0, 1.0, 0.0, 0.0),
            Vector::with_w(-sin, 0.0, cos, 0.0),
            Vector::with_w(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// A rotation about the Z axis. `theta` is in degrees.
    pub fn rotation_z(theta: Scalar) -> Self {
        let (sin, cos) = theta.to_radians().sin_cos();
        Self::new(
            Vector::with_w(cos, -sin, 0.0, 0.0),
            Vector::with_w(sin, cos, 0.0, 0.0),
            Vector::with_w(0.0, 0.0, 1.0, 0.0),
            Vector::with_w(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Combined yaw-pitch-roll rotation, `Z * Y * X`. Angles in degrees.
    pub fn rotation(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::rotation_z(z) * Self::rotation_y(y) * Self::rotation_x(x)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, b: Matrix) -> Matrix {
        let row = |i: usize| {
            Vector::with_w(
                self.r[i].dot(b.c[0]),
                self.r[i].dot(b.c[1]),
                self.r[i].dot(b.c[2]),
                self.r[i].dot(b.c[3]),
            )
        };
        Matrix::new(row(0), row(1), row(2), row(3))
    }
}

/// Transform a point. The `w` component is padded to 1 so translations
/// apply.
impl Mul<Vector> for Matrix {
    type Output = Vector;

    #[inline]
    fn mul(self, b: Vector) -> Vector {
        let v = Vector::with_w(b.x, b.y, b.z, 1.0);
        Vector::with_w(
            self.r[0].dot(v),
            self.r[1].dot(v),
            self.r[2].dot(v),
            self.r[3].dot(v),
        )
    }
}
