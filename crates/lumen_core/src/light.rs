//! Light sources and shading.
//!
//! Lights compute additive shading contributions, not full radiance: the
//! renderer starts from the ambient term and sums each light's `shade`
//! result. A fully occluded light contributes exactly black.

use lumen_math::{Colour, Scalar, Vector};
use rand::RngCore;

use crate::{profile::Counters, Material, Object, Ray, UniformSampler};

/// Base sample count for a soft light of radius 0.
const SAMPLE_BASE: Scalar = 3.0;
/// Radius weighting in the sample count derivation.
const SAMPLE_FACTOR: Scalar = 0.075;

/// A light source.
#[derive(Debug, Clone)]
pub enum Light {
    Point(PointLight),
    Soft(SoftLight),
}

impl Light {
    /// Shading contribution of this light at a surface point.
    ///
    /// `to_ray` is the unit direction from the point back to the viewing
    /// ray's origin. `objects` is the full scene list, used for shadow
    /// tests.
    pub fn shade(
        &self,
        point: Vector,
        normal: Vector,
        to_ray: Vector,
        material: &Material,
        objects: &[Object],
        counters: &Counters,
        rng: &mut dyn RngCore,
    ) -> Colour {
        match self {
            Light::Point(l) => l.shade(point, normal, to_ray, material, objects, counters),
            Light::Soft(l) => l.shade(point, normal, to_ray, material, objects, counters, rng),
        }
    }

    /// Number of shadow rays this light casts per shading point.
    pub fn sample_count(&self) -> usize {
        match self {
            Light::Point(_) => 1,
            Light::Soft(l) => l.samples,
        }
    }
}

/// Lambert diffuse plus Blinn-Phong specular for one unoccluded light
/// sample.
#[inline]
fn illuminate(
    illumination: Colour,
    normal: Vector,
    to_light: Vector,
    to_ray: Vector,
    material: &Material,
) -> Colour {
    // Lambert (diffuse) shading.
    let lambert = normal.dot(to_light).max(0.0);
    let mut output = illumination * (material.diffuse * lambert);

    // Blinn-Phong (specular) shading.
    let bisector = (to_ray + to_light).normalise();
    let phong = normal.dot(bisector).max(0.0).powf(material.shininess);
    output += illumination * (material.specular * phong);

    output
}

/// Whether a ray hits any object at a positive distance below `distance`.
fn intersects(ray: &Ray, objects: &[Object], distance: Scalar) -> bool {
    objects
        .iter()
        .filter_map(|object| object.intersect(ray))
        .any(|t| t < distance)
}

/// A point light source with binary shadows.
#[derive(Debug, Clone)]
pub struct PointLight {
    pub position: Vector,
    pub colour: Colour,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: Vector, colour: Colour) -> Light {
        Light::Point(Self { position, colour })
    }

    fn shade(
        &self,
        point: Vector,
        normal: Vector,
        to_ray: Vector,
        material: &Material,
        objects: &[Object],
        counters: &Counters,
    ) -> Colour {
        let to_light = (self.position - point).normalise();

        // A single shadow ray; any occluder at a positive distance blocks
        // the light completely.
        let shadow_ray = Ray::new(point, to_light);
        if intersects(&shadow_ray, objects, Scalar::INFINITY) {
            return Colour::BLACK;
        }

        counters.inc_rays(1);

        let illumination = self.colour * material.colour;
        illuminate(illumination, normal, to_light, to_ray, material)
    }
}

/// A round light source producing soft shadows.
#[derive(Debug, Clone)]
pub struct SoftLight {
    pub position: Vector,
    pub colour: Colour,
    pub radius: Scalar,
    /// Shadow rays cast per shading point, fixed at construction.
    pub samples: usize,
    jitter: UniformSampler,
}

impl SoftLight {
    /// Create a new soft light.
    ///
    /// The sample count grows with the cube of the radius so that shadow
    /// noise stays roughly constant as the light gets larger.
    pub fn new(position: Vector, colour: Colour, radius: Scalar) -> Light {
        let samples = (SAMPLE_BASE + (radius * SAMPLE_FACTOR).powi(3)).round() as usize;

        Light::Soft(Self {
            position,
            colour,
            radius,
            samples,
            jitter: UniformSampler::new(-radius, radius),
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn shade(
        &self,
        point: Vector,
        normal: Vector,
        to_ray: Vector,
        material: &Material,
        objects: &[Object],
        counters: &Counters,
        rng: &mut dyn RngCore,
    ) -> Colour {
        let mut output = Colour::BLACK;

        // Each sample carries an equal share of the illumination.
        let illumination = (self.colour * material.colour) / self.samples as Scalar;

        // Cast shadow rays toward positions jittered about the light's
        // centre. Occluded samples contribute nothing; the others are
        // independent.
        for _ in 0..self.samples {
            let origin = Vector::new(
                self.position.x + self.jitter.sample(rng),
                self.position.y + self.jitter.sample(rng),
                self.position.z + self.jitter.sample(rng),
            );

            let to_light = origin - point;
            let distance = to_light.magnitude();
            let direction = to_light / distance;

            let shadow_ray = Ray::new(point, direction);
            if intersects(&shadow_ray, objects, distance) {
                continue;
            }

            counters.inc_rays(1);

            output += illuminate(illumination, normal, direction, to_ray, material);
        }

        output
    }
}
