//! Surface material properties.

use lumen_math::{Colour, Scalar};

/// Properties that describe how a surface responds to light.
///
/// Materials are immutable and shared by reference: a checkerboard holds
/// two, and many objects may point at the same one.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base surface colour.
    pub colour: Colour,
    /// Ambient coefficient, in [0, 1].
    pub ambient: Scalar,
    /// Diffuse coefficient, in [0, 1].
    pub diffuse: Scalar,
    /// Specular coefficient, in [0, 1].
    pub specular: Scalar,
    /// Phong exponent, >= 0.
    pub shininess: Scalar,
    /// Reflected fraction of incoming light, in [0, 1).
    pub reflectivity: Scalar,
}

impl Material {
    /// Create a new material.
    pub fn new(
        colour: Colour,
        ambient: Scalar,
        diffuse: Scalar,
        specular: Scalar,
        shininess: Scalar,
        reflectivity: Scalar,
    ) -> Self {
        Self {
            colour,
            ambient,
            diffuse,
            specular,
            shininess,
            reflectivity,
        }
    }
}
