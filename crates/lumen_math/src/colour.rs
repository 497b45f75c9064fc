//! Colour arithmetic.

use std::ops::{Add, AddAssign, Div, Mul};

use crate::{clamp01, Scalar};

/// An RGB colour with scalar channels, nominally in [0, 1].
///
/// Shading accumulates additive contributions and is allowed to exceed 1;
/// the range is only clamped when a colour is converted to an output pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
}

impl Colour {
    /// Black, the additive identity.
    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a colour from channel values.
    #[inline]
    pub const fn new(r: Scalar, g: Scalar, b: Scalar) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from a packed 24-bit value, e.g. `0xff00aa`.
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as Scalar / 255.0,
            g: ((hex >> 8) & 0xff) as Scalar / 255.0,
            b: (hex & 0xff) as Scalar / 255.0,
        }
    }

    /// Each channel clamped to [0, 1].
    #[inline]
    pub fn clamped(self) -> Colour {
        Colour::new(clamp01(self.r), clamp01(self.g), clamp01(self.b))
    }

    /// Sum of absolute channel differences against another colour.
    ///
    /// This is the contrast metric the adaptive supersampler thresholds.
    #[inline]
    pub fn diff(self, rhs: Colour) -> Scalar {
        (rhs.r - self.r).abs() + (rhs.g - self.g).abs() + (rhs.b - self.b).abs()
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Add for Colour {
    type Output = Colour;

    #[inline]
    fn add(self, c: Colour) -> Colour {
        Colour::new(self.r + c.r, self.g + c.g, self.b + c.b)
    }
}

impl AddAssign for Colour {
    #[inline]
    fn add_assign(&mut self, c: Colour) {
        *self = *self + c;
    }
}

impl Mul<Scalar> for Colour {
    type Output = Colour;

    #[inline]
    fn mul(self, x: Scalar) -> Colour {
        Colour::new(self.r * x, self.g * x, self.b * x)
    }
}

/// Component-wise combination of two colours.
impl Mul for Colour {
    type Output = Colour;

    #[inline]
    fn mul(self, rhs: Colour) -> Colour {
        Colour::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Div<Scalar> for Colour {
    type Output = Colour;

    #[inline]
    fn div(self, x: Scalar) -> Colour {
        Colour::new(self.r / x, self.g / x, self.b / x)
    }
}
