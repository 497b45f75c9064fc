//! Rendered image buffer.

use lumen_math::{clamp01, Colour, Scalar};

/// Maximum value of a single output colour channel.
pub const PIXEL_COLOUR_MAX: u8 = 255;

/// Convert 2D coordinates to a flat row-major index.
#[inline]
pub fn index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// The x coordinate of a flat row-major index.
#[inline]
pub fn x(index: usize, width: usize) -> usize {
    index % width
}

/// The y coordinate of a flat row-major index.
#[inline]
pub fn y(index: usize, width: usize) -> usize {
    index / width
}

/// A trio of 8-bit R,G,B components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The one lossy step: clamp each channel to [0, 1] and scale to the
/// output integer range.
impl From<Colour> for Pixel {
    #[inline]
    fn from(c: Colour) -> Pixel {
        let scale = |x: Scalar| (clamp01(x) * PIXEL_COLOUR_MAX as Scalar) as u8;
        Pixel {
            r: scale(c.r),
            g: scale(c.g),
            b: scale(c.b),
        }
    }
}

/// A dense width x height pixel buffer.
///
/// The renderer writes colours in pixel by pixel; the buffer is never
/// resized after construction. Gamma and saturation are applied as each
/// colour is set, and vertical inversion (for output formats whose origin
/// is the opposite corner) is folded into the coordinate mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Vec<Pixel>,
    pub width: usize,
    pub height: usize,
    /// Per-channel gamma. 1.0 is linear.
    pub gamma: Colour,
    /// Saturation factor. 1.0 leaves colours untouched.
    pub saturation: Scalar,
    /// Whether rows are stored bottom-up.
    pub inverted: bool,
}

impl Image {
    /// Create a black image. Inversion defaults to on, matching the
    /// row order expected by the pixel-map writer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![Pixel::default(); width * height],
            width,
            height,
            gamma: Colour::new(1.0, 1.0, 1.0),
            saturation: 1.0,
            inverted: true,
        }
    }

    /// Rebuild an image around an existing pixel buffer.
    ///
    /// The buffer is taken as-is in row-major order; post-processing
    /// parameters are the defaults since the pixels are already final.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Pixel>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
            gamma: Colour::new(1.0, 1.0, 1.0),
            saturation: 1.0,
            inverted: true,
        }
    }

    /// Set the per-channel gamma.
    pub fn with_gamma(mut self, gamma: Colour) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the saturation factor.
    pub fn with_saturation(mut self, saturation: Scalar) -> Self {
        self.saturation = saturation;
        self
    }

    /// Enable or disable vertical inversion.
    pub fn with_inversion(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Number of pixels.
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Write a colour to image coordinates (x, y).
    pub fn set(&mut self, x: usize, y: usize, value: Colour) {
        // Fold in the Y axis inversion.
        let row = if self.inverted { self.height - 1 - y } else { y };
        let corrected = self.post_process(value);
        self.data[index(x, row, self.width)] = Pixel::from(corrected);
    }

    /// Write a colour by flat index.
    pub fn set_index(&mut self, i: usize, value: Colour) {
        self.set(x(i, self.width), y(i, self.width), value);
    }

    /// The pixel at buffer coordinates (x, y), in stored row order.
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.data[index(x, y, self.width)]
    }

    /// The pixel at a flat row-major index, in stored row order.
    pub fn pixel(&self, index: usize) -> Pixel {
        self.data[index]
    }

    /// The full buffer, row-major in stored row order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Gamma correction followed by a saturation adjustment about the
    /// channel mean.
    fn post_process(&self, value: Colour) -> Colour {
        let corrected = Colour::new(
            value.r.powf(1.0 / self.gamma.r),
            value.g.powf(1.0 / self.gamma.g),
            value.b.powf(1.0 / self.gamma.b),
        );

        if self.saturation == 1.0 {
            return corrected;
        }

        let grey = (corrected.r + corrected.g + corrected.b) / 3.0;
        Colour::new(
            grey + (corrected.r - grey) * self.saturation,
            grey + (corrected.g - grey) * self.saturation,
            grey + (corrected.b - grey) * self.saturation,
        )
    }
}
