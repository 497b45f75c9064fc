//! Scene geometry.
//!
//! The object set is closed (spheres, planes, checkerboards), so geometry
//! is a plain enum with exhaustive matches rather than trait objects; the
//! intersection loop is the hottest code in the tracer and stays free of
//! indirect dispatch.

use std::sync::Arc;

use lumen_math::{Scalar, Vector, SCALAR_PRECISION};

use crate::{Material, Ray};

/// A physical object that light interacts with.
#[derive(Debug, Clone)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
    CheckerBoard(CheckerBoard),
}

impl Object {
    /// World-space anchor of the object.
    pub fn position(&self) -> Vector {
        match self {
            Object::Sphere(s) => s.position,
            Object::Plane(p) => p.position,
            Object::CheckerBoard(c) => c.position,
        }
    }

    /// Unit surface normal at `point`, which is assumed to lie on the
    /// surface.
    pub fn normal(&self, point: Vector) -> Vector {
        match self {
            Object::Sphere(s) => s.normal(point),
            Object::Plane(p) => p.direction,
            Object::CheckerBoard(c) => c.direction,
        }
    }

    /// Distance along `ray` to the nearest valid surface crossing, or
    /// `None` if the ray misses.
    pub fn intersect(&self, ray: &Ray) -> Option<Scalar> {
        match self {
            Object::Sphere(s) => s.intersect(ray),
            Object::Plane(p) => p.intersect(ray),
            Object::CheckerBoard(c) => c.intersect(ray),
        }
    }

    /// Material visible at `point` on the surface.
    pub fn surface(&self, point: Vector) -> &Material {
        match self {
            Object::Sphere(s) => &s.material,
            Object::Plane(p) => &p.material,
            Object::CheckerBoard(c) => c.surface(point),
        }
    }
}

/// Pick the smallest root clear of the precision band.
///
/// Rays frequently start exactly on a surface (shadow and reflection
/// rays); roots inside the band are floating-point echoes of that surface,
/// not genuine crossings.
#[inline]
fn nearest_root(t0: Scalar, t1: Scalar) -> Option<Scalar> {
    if t0 > SCALAR_PRECISION {
        Some(t0)
    } else if t1 > SCALAR_PRECISION {
        Some(t1)
    } else {
        None
    }
}

/// A sphere: a position and a radius.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub position: Vector,
    pub radius: Scalar,
    pub material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(position: Vector, radius: Scalar, material: Arc<Material>) -> Object {
        Object::Sphere(Self {
            position,
            radius,
            material,
        })
    }

    fn normal(&self, p: Vector) -> Vector {
        (p - self.position).normalise()
    }

    fn intersect(&self, ray: &Ray) -> Option<Scalar> {
        // Quadratic from the ray-sphere geometry.
        let distance = self.position - ray.origin;
        let b = ray.direction.dot(distance);
        let d = b * b + self.radius * self.radius - distance.dot(distance);

        // Negative discriminant, no solution.
        if d < 0.0 {
            return None;
        }

        let sqrt_d = d.sqrt();
        nearest_root(b - sqrt_d, b + sqrt_d)
    }
}

/// An infinite plane.
#[derive(Debug, Clone)]
pub struct Plane {
    pub position: Vector,
    /// Unit surface normal.
    pub direction: Vector,
    pub material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. `direction` is normalised on construction.
    pub fn new(position: Vector, direction: Vector, material: Arc<Material>) -> Object {
        Object::Plane(Self {
            position,
            direction: direction.normalise(),
            material,
        })
    }

    fn intersect(&self, ray: &Ray) -> Option<Scalar> {
        let f = (self.position - ray.origin).dot(self.direction);
        let g = ray.direction.dot(self.direction);
        let t = f / g;

        // A parallel ray divides by ~0; treat the non-finite result as a
        // miss rather than a hit at infinity.
        if !t.is_finite() {
            return None;
        }

        // Widen by half the precision band to absorb rounding either way.
        nearest_root(t - SCALAR_PRECISION / 2.0, t + SCALAR_PRECISION / 2.0)
    }
}

/// A plane tiled with two materials in a checker pattern.
#[derive(Debug, Clone)]
pub struct CheckerBoard {
    pub position: Vector,
    /// Unit surface normal.
    pub direction: Vector,
    pub checker_width: Scalar,
    pub material1: Arc<Material>,
    pub material2: Arc<Material>,
}

impl CheckerBoard {
    /// Create a new checkerboard. `direction` is normalised on
    /// construction.
    pub fn new(
        position: Vector,
        direction: Vector,
        checker_width: Scalar,
        material1: Arc<Material>,
        material2: Arc<Material>,
    ) -> Object {
        Object::CheckerBoard(Self {
            position,
            direction: direction.normalise(),
            checker_width,
            material1,
            material2,
        })
    }

    fn intersect(&self, ray: &Ray) -> Option<Scalar> {
        let f = (self.position - ray.origin).dot(self.direction);
        let g = ray.direction.dot(self.direction);
        let t = f / g;

        if !t.is_finite() {
            return None;
        }

        nearest_root(t - SCALAR_PRECISION / 2.0, t + SCALAR_PRECISION / 2.0)
    }

    /// Alternate the two materials over x,z tiles of `checker_width`.
    fn surface(&self, point: Vector) -> &Material {
        let ix = (point.x / self.checker_width).floor() as i64;
        let iz = (point.z / self.checker_width).floor() as i64;

        if (ix + iz).rem_euclid(2) == 0 {
            &self.material1
        } else {
            &self.material2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lumen_math::Colour;

    fn grey() -> Arc<Material> {
        Arc::new(Material::new(Colour::new(0.5, 0.5, 0.5), 0.1, 1.0, 0.2, 10.0, 0.0))
    }

    fn red() -> Arc<Material> {
        Arc::new(Material::new(Colour::from_hex(0xff0000), 0.1, 1.0, 0.2, 10.0, 0.0))
    }

    #[test]
    fn sphere_hit_head_on() {
        let sphere = Sphere::new(Vector::new(0.0, 0.0, 0.0), 2.0, grey());
        let ray = Ray::new(Vector::new(0.0, 0.0, -10.0), Vector::new(0.0, 0.0, 1.0));

        let t = sphere.intersect(&ray).unwrap();
        assert_relative_eq!(t, 8.0, epsilon = 1e-9);

        // Surface point and normal properties.
        let point = ray.at(t);
        let normal = sphere.normal(point);
        assert_relative_eq!(normal.magnitude(), 1.0, epsilon = 1e-9);
        assert_relative_eq!((point - sphere.position()).dot(normal), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn sphere_miss() {
        let sphere = Sphere::new(Vector::new(0.0, 0.0, 0.0), 2.0, grey());
        let ray = Ray::new(Vector::new(0.0, 0.0, -10.0), Vector::new(0.0, 1.0, 0.0));

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn sphere_ray_on_surface_does_not_self_intersect() {
        let sphere = Sphere::new(Vector::new(0.0, 0.0, 0.0), 2.0, grey());
        // A ray leaving the surface along the normal.
        let ray = Ray::new(Vector::new(0.0, 0.0, -2.0), Vector::new(0.0, 0.0, -1.0));

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn sphere_interior_hit_uses_far_root() {
        let sphere = Sphere::new(Vector::new(0.0, 0.0, 0.0), 2.0, grey());
        let ray = Ray::new(Vector::new(0.0, 0.0, 0.0), Vector::new(0.0, 0.0, 1.0));

        let t = sphere.intersect(&ray).unwrap();
        assert_relative_eq!(t, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn plane_hit_and_parallel_miss() {
        let plane = Plane::new(
            Vector::new(0.0, -1.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
            grey(),
        );

        let down = Ray::new(Vector::new(0.0, 4.0, 0.0), Vector::new(0.0, -1.0, 0.0));
        let t = plane.intersect(&down).unwrap();
        assert_relative_eq!(t, 5.0, epsilon = 1e-6);

        // Parallel ray never crosses.
        let along = Ray::new(Vector::new(0.0, 4.0, 0.0), Vector::new(1.0, 0.0, 0.0));
        assert_eq!(plane.intersect(&along), None);
    }

    #[test]
    fn plane_behind_ray_misses() {
        let plane = Plane::new(
            Vector::new(0.0, -1.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
            grey(),
        );
        let up = Ray::new(Vector::new(0.0, 4.0, 0.0), Vector::new(0.0, 1.0, 0.0));

        assert_eq!(plane.intersect(&up), None);
    }

    #[test]
    fn checkerboard_tiling_period() {
        let board = CheckerBoard::new(
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
            4.0,
            grey(),
            red(),
        );

        let at = |x: f64, z: f64| board.surface(Vector::new(x, 0.0, z)).colour;

        // Adjacent tiles alternate; a full period along either axis repeats.
        assert_ne!(at(1.0, 1.0), at(5.0, 1.0));
        assert_ne!(at(1.0, 1.0), at(1.0, 5.0));
        assert_eq!(at(1.0, 1.0), at(9.0, 1.0));
        assert_eq!(at(1.0, 1.0), at(1.0, 9.0));
        // Diagonal neighbours share a material.
        assert_eq!(at(1.0, 1.0), at(5.0, 5.0));
    }

    #[test]
    fn checkerboard_tiling_is_stable_across_negative_coordinates() {
        let board = CheckerBoard::new(
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
            4.0,
            grey(),
            red(),
        );

        let at = |x: f64, z: f64| board.surface(Vector::new(x, 0.0, z)).colour;

        assert_eq!(at(-7.0, 1.0), at(1.0, 1.0));
        assert_ne!(at(-3.0, 1.0), at(1.0, 1.0));
    }
}
