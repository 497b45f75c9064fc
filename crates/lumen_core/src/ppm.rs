//! Plain-text pixel map (PPM `P3`) serialization.
//!
//! The writer takes any `io::Write`; opening and closing the output file
//! is the caller's job. The parser exists mainly so renders can be
//! round-tripped and inspected in tests and tools.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::image::{Image, Pixel, PIXEL_COLOUR_MAX};

/// Format tag on the first line of the file.
const MAGIC: &str = "P3";

/// Errors from parsing a pixel map.
#[derive(Debug, Error)]
pub enum PpmError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("bad format tag `{0}`, expected `P3`")]
    BadMagic(String),

    #[error("malformed value `{0}`")]
    Malformed(String),

    #[error("unsupported max channel value {0}, expected {PIXEL_COLOUR_MAX}")]
    UnsupportedMaxValue(u32),

    #[error("file ended before {expected} pixels were read")]
    Truncated { expected: usize },
}

/// Write an image as a plain-text pixel map.
///
/// Rows come out in stored buffer order; any vertical inversion was
/// already folded in when the renderer set the pixels.
pub fn write(image: &Image, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{MAGIC}")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    writeln!(out, "{}", PIXEL_COLOUR_MAX)?;

    for y in 0..image.height {
        for x in 0..image.width {
            let pixel = image.get(x, y);
            write!(out, "{} {} {} ", pixel.r, pixel.g, pixel.b)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Parse a plain-text pixel map back into an image buffer.
pub fn read(input: &mut dyn BufRead) -> Result<Image, PpmError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let magic = tokens.next().unwrap_or_default();
    if magic != MAGIC {
        return Err(PpmError::BadMagic(magic.to_string()));
    }

    let mut next_value = |expected: usize| -> Result<u32, PpmError> {
        let token = tokens.next().ok_or(PpmError::Truncated { expected })?;
        token
            .parse::<u32>()
            .map_err(|_| PpmError::Malformed(token.to_string()))
    };

    let width = next_value(0)? as usize;
    let height = next_value(0)? as usize;

    let max_value = next_value(0)?;
    if max_value != PIXEL_COLOUR_MAX as u32 {
        return Err(PpmError::UnsupportedMaxValue(max_value));
    }

    let size = width * height;
    let mut channel = || -> Result<u8, PpmError> {
        let value = next_value(size)?;
        if value > PIXEL_COLOUR_MAX as u32 {
            return Err(PpmError::Malformed(value.to_string()));
        }
        Ok(value as u8)
    };

    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        data.push(Pixel {
            r: channel()?,
            g: channel()?,
            b: channel()?,
        });
    }

    Ok(Image::from_pixels(width, height, data))
}
