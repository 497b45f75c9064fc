//! Render configuration.

use lumen_math::{Colour, Scalar};

/// Debug visualisation toggles.
///
/// When enabled, pixels that the adaptive supersampler refines are
/// painted with `colour` instead of being rendered, which makes the
/// refinement pattern visible in the output.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    /// Paint pixels selected for supersampling.
    pub supersampled_pixels: bool,
    /// Paint subregions selected for recursive supersampling.
    pub recursive_supersampled_pixels: bool,
    /// The paint colour.
    pub colour: Colour,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            supersampled_pixels: false,
            recursive_supersampled_pixels: false,
            colour: Colour::new(1.0, 1.0, 1.0),
        }
    }
}

/// Per-render configuration.
///
/// One value of this struct fully determines a render of a given scene
/// and camera: the sampler seed lives here, so repeated renders with the
/// same configuration are bit-identical.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Rays fired per sample point for depth of field. 1 disables blur.
    pub num_dof_samples: usize,
    /// Maximum depth to trace reflected rays to.
    pub max_ray_depth: usize,
    /// Seed for every sampler stream used by the render.
    pub seed: u64,
    /// Contrast threshold against a pixel's neighbours before it is
    /// supersampled.
    pub max_pixel_diff: Scalar,
    /// Contrast threshold against the region mean before a subregion is
    /// recursively supersampled.
    pub max_subpixel_diff: Scalar,
    /// Maximum recursive supersample depth.
    pub max_subpixel_depth: usize,
    /// Debug visualisation toggles.
    pub highlight: Highlight,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            num_dof_samples: 1,
            max_ray_depth: 5,
            seed: 0x7564231,
            max_pixel_diff: 0.040,
            max_subpixel_diff: 0.008,
            max_subpixel_depth: 3,
            highlight: Highlight::default(),
        }
    }
}

impl RenderConfig {
    /// Set the sampler seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of depth-of-field samples per point.
    pub fn with_dof_samples(mut self, samples: usize) -> Self {
        self.num_dof_samples = samples;
        self
    }

    /// Set the maximum reflection recursion depth.
    pub fn with_max_ray_depth(mut self, depth: usize) -> Self {
        self.max_ray_depth = depth;
        self
    }
}
