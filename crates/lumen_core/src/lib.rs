//! Scene model for the lumen ray tracer.
//!
//! Geometry, materials, lights, the camera/lens model, the image buffer,
//! samplers, profiling counters, and pixel-map serialization. Everything a
//! renderer reads is immutable once constructed and safe to share across
//! worker threads.

mod camera;
pub mod image;
mod light;
mod material;
mod object;
pub mod ppm;
pub mod profile;
mod ray;
mod sampler;
mod scene;

pub use camera::{Camera, Lens};
pub use image::{Image, Pixel};
pub use light::{Light, PointLight, SoftLight};
pub use material::Material;
pub use object::{CheckerBoard, Object, Plane, Sphere};
pub use ppm::PpmError;
pub use profile::{Counters, Timer};
pub use ray::Ray;
pub use sampler::{gen_scalar, DiskSampler, UniformSampler};
pub use scene::Scene;
