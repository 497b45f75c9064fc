//! The lumen renderer.
//!
//! Takes a [`lumen_core::Scene`] and [`lumen_core::Camera`], traces it with
//! recursive Whitted-style ray tracing, and writes the result into a
//! [`lumen_core::Image`]. Sampling is adaptive: flat areas get one ray per
//! pixel, high-contrast areas are recursively supersampled.

pub mod config;
pub mod renderer;

pub use config::{Highlight, RenderConfig};
pub use renderer::Renderer;
