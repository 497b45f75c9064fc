//! Math primitives for the lumen ray tracer.
//!
//! Vectors, 4x4 affine transforms, and colours. All types are immutable
//! values; operations return new values.

mod colour;
mod matrix;
mod vector;

pub use colour::Colour;
pub use matrix::Matrix;
pub use vector::Vector;

/// Scalar type used throughout the tracer.
///
/// Changing between floating point sizes trades precision for speed.
pub type Scalar = f64;

/// The rounding error to accommodate for when approximating infinite
/// precision real numbers.
pub const SCALAR_PRECISION: Scalar = 1e-6;

/// Clamp a scalar to the range [0, 1].
#[inline]
pub fn clamp01(x: Scalar) -> Scalar {
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_range() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(1.5), 1.0);
    }
}
