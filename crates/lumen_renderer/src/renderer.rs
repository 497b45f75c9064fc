//! The recursive ray tracer and its adaptive supersampler.
//!
//! Rendering runs in two parallel phases over a bordered sample grid:
//! first a single centre sample per cell, then a refinement pass that
//! re-renders any pixel whose centre sample contrasts with a neighbour.
//! Each sample index owns its own counter-based random stream, so renders
//! are bit-identical regardless of thread count or scheduling.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use lumen_core::{image, Camera, Counters, Image, Object, Ray, Scene};
use lumen_math::{Colour, Matrix, Scalar, Vector};

use crate::config::RenderConfig;

/// Random stream tag for the first sampling phase.
const SAMPLE_STREAM: u64 = 1;
/// Random stream tag for the refinement phase.
const REFINE_STREAM: u64 = 2;

/// A renderer bound to one scene and camera.
pub struct Renderer {
    pub scene: Arc<Scene>,
    pub camera: Arc<Camera>,
    pub config: RenderConfig,
    counters: Counters,
}

impl Renderer {
    /// Create a renderer.
    pub fn new(scene: Arc<Scene>, camera: Arc<Camera>, config: RenderConfig) -> Self {
        let counters = Counters::new();
        counters.inc_objects(scene.object_count() as u64);
        counters.inc_lights(scene.light_sample_count() as u64);

        Self {
            scene,
            camera,
            config,
            counters,
        }
    }

    /// The render statistics accumulated so far.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Render the scene into `image`.
    pub fn render(&self, image: &mut Image) {
        let transform = self.image_to_camera(image);

        info!(
            "rendering {}x{} pixels, {} objects, {} light samples",
            image.width,
            image.height,
            self.counters.objects(),
            self.counters.lights()
        );

        // Sample on a grid with a one cell border so that every image
        // pixel has a full set of eight neighbours in the second phase.
        let border_width = image.width + 2;
        let border_size = border_width * (image.height + 2);

        let sampled: Vec<Colour> = (0..border_size)
            .into_par_iter()
            .map(|i| {
                let x = image::x(i, border_width) as Scalar;
                let y = image::y(i, border_width) as Scalar;
                let mut rng = self.stream(SAMPLE_STREAM, i);
                // Bordered cell (x, y) holds the centre sample of image
                // pixel (x - 1, y - 1), whose centre sits at (x - 0.5,
                // y - 0.5) after the border offset.
                self.render_point(x - 0.5, y - 0.5, &transform, &mut rng)
            })
            .collect();

        let refined = AtomicU64::new(0);
        let output: Vec<Colour> = (0..image.size())
            .into_par_iter()
            .map(|i| {
                let x = image::x(i, image.width);
                let y = image::y(i, image.width);

                let pixel = sampled[image::index(x + 1, y + 1, border_width)];

                // Supersample if any of the eight neighbouring samples is
                // in noticeable contrast with this one.
                let flat = |dx: usize, dy: usize| image::index(x + dx, y + dy, border_width);
                let neighbours = [
                    flat(0, 0),
                    flat(1, 0),
                    flat(2, 0),
                    flat(0, 1),
                    flat(2, 1),
                    flat(0, 2),
                    flat(1, 2),
                    flat(2, 2),
                ];

                let contrast = neighbours
                    .iter()
                    .any(|&n| pixel.diff(sampled[n]) > self.config.max_pixel_diff);
                if !contrast {
                    return pixel;
                }

                refined.fetch_add(1, Ordering::Relaxed);
                if self.config.highlight.supersampled_pixels {
                    return self.config.highlight.colour;
                }

                let mut rng = self.stream(REFINE_STREAM, i);
                self.render_region(x as Scalar, y as Scalar, 1.0, &transform, 0, &mut rng)
            })
            .collect();

        for (i, colour) in output.into_iter().enumerate() {
            image.set_index(i, colour);
        }

        debug!(
            "supersampled {} of {} pixels",
            refined.load(Ordering::Relaxed),
            image.size()
        );
    }

    /// Transform from image pixel coordinates to camera film coordinates,
    /// with the origin moved to the film centre.
    fn image_to_camera(&self, image: &Image) -> Matrix {
        let scale = Matrix::scale(
            self.camera.width / image.width as Scalar,
            self.camera.height / image.height as Scalar,
            1.0,
        );
        let centre = Matrix::translation(
            image.width as Scalar * -0.5,
            image.height as Scalar * -0.5,
            0.0,
        );
        scale * centre
    }

    /// A deterministic random stream for one sample index.
    fn stream(&self, phase: u64, index: usize) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        rng.set_stream((phase << 56) | index as u64);
        rng
    }

    /// Render a square region of the image plane by averaging a 2x2 grid
    /// of sub-samples, recursing into high-contrast subregions.
    fn render_region(
        &self,
        x: Scalar,
        y: Scalar,
        size: Scalar,
        transform: &Matrix,
        depth: usize,
        rng: &mut ChaCha8Rng,
    ) -> Colour {
        let subregion = size / 2.0;
        let offset = subregion / 2.0;

        let mut origins = [(0.0, 0.0); 4];
        let mut samples = [Colour::BLACK; 4];
        let mut mean = Colour::BLACK;

        for i in 0..4 {
            let sx = x + (i % 2) as Scalar * subregion;
            let sy = y + (i / 2) as Scalar * subregion;
            origins[i] = (sx, sy);
            samples[i] = self.render_point(sx + offset, sy + offset, transform, rng);
            mean += samples[i] / 4.0;
        }

        if depth < self.config.max_subpixel_depth {
            for i in 0..4 {
                if mean.diff(samples[i]) <= self.config.max_subpixel_diff {
                    continue;
                }

                if self.config.highlight.recursive_supersampled_pixels {
                    return self.config.highlight.colour;
                }

                let (sx, sy) = origins[i];
                samples[i] = self.render_region(sx, sy, subregion, transform, depth + 1, rng);
            }
        }

        let mut output = Colour::BLACK;
        for sample in samples {
            output += sample / 4.0;
        }
        output
    }

    /// Render one point on the image plane, averaging depth-of-field
    /// samples across the lens aperture.
    fn render_point(
        &self,
        x: Scalar,
        y: Scalar,
        transform: &Matrix,
        rng: &mut ChaCha8Rng,
    ) -> Colour {
        let camera = &self.camera;

        // The point on the camera film, in camera space.
        let film = *transform * Vector::new(x, y, 0.0);

        // Project through the film back to find the in-focus point for
        // this pixel.
        let film_world = camera.right * film.x + camera.up * film.y + camera.position;
        let focal_direction = (film_world - camera.film_back).normalise();
        let focus_point = camera.film_back + focal_direction * camera.focus_distance;

        let samples = self.config.num_dof_samples.max(1);
        let mut output = Colour::BLACK;
        for _ in 0..samples {
            // Jitter the ray origin within the aperture. A pinhole lens
            // always returns the zero offset, collapsing this to a single
            // deterministic ray.
            let jitter = camera.lens.sample_aperture(rng);
            let origin =
                camera.right * (film.x + jitter.x) + camera.up * (film.y + jitter.y) + camera.position;
            let ray = Ray::new(origin, (focus_point - origin).normalise());

            output += self.trace(&ray, 0, rng) / samples as Scalar;
        }
        output
    }

    /// Trace a ray through the scene.
    fn trace(&self, ray: &Ray, depth: usize, rng: &mut ChaCha8Rng) -> Colour {
        self.counters.inc_traces(1);

        let Some((object, distance)) = closest_intersect(ray, &self.scene.objects) else {
            return Colour::BLACK;
        };

        let point = ray.at(distance);
        let normal = object.normal(point);
        let to_ray = (ray.origin - point).normalise();
        let material = object.surface(point);

        let mut colour = material.colour * material.ambient;
        for light in &self.scene.lights {
            colour += light.shade(
                point,
                normal,
                to_ray,
                material,
                &self.scene.objects,
                &self.counters,
                rng,
            );
        }

        if material.reflectivity > 0.0 && depth < self.config.max_ray_depth {
            let direction = (normal * (2.0 * normal.dot(to_ray)) - to_ray).normalise();
            let reflection = Ray::new(point, direction);
            colour += self.trace(&reflection, depth + 1, rng) * material.reflectivity;
        }

        colour
    }
}

/// The nearest object hit by `ray`, with its intersection distance.
///
/// Ties keep the earlier object in the scene list.
fn closest_intersect<'a>(ray: &Ray, objects: &'a [Object]) -> Option<(&'a Object, Scalar)> {
    let mut closest: Option<(&Object, Scalar)> = None;
    for object in objects {
        if let Some(t) = object.intersect(ray) {
            if closest.map_or(true, |(_, nearest)| t < nearest) {
                closest = Some((object, t));
            }
        }
    }
    closest
}
