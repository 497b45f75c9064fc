//! Built-in demonstration scenes.

use std::sync::Arc;

use lumen_core::{
    Camera, CheckerBoard, Lens, Material, Plane, PointLight, Scene, SoftLight, Sphere,
};
use lumen_math::{Colour, Vector};

/// Names of the built-in scenes, in help-text order.
pub fn names() -> &'static [&'static str] {
    &["showcase", "spheres"]
}

/// Build a scene and its camera by name.
pub fn build(name: &str) -> Option<(Arc<Scene>, Arc<Camera>)> {
    match name {
        "showcase" => Some(showcase()),
        "spheres" => Some(spheres()),
        _ => None,
    }
}

fn material(
    hex: u32,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    shininess: f64,
    reflectivity: f64,
) -> Arc<Material> {
    Arc::new(Material::new(
        Colour::from_hex(hex),
        ambient,
        diffuse,
        specular,
        shininess,
        reflectivity,
    ))
}

/// Three spheres over a checkerboard, lit by a warm key light and a large
/// soft fill, with a mirror sphere in the middle.
fn showcase() -> (Arc<Scene>, Arc<Camera>) {
    let green = material(0x6bbb6b, 0.3, 0.8, 0.6, 40.0, 0.0);
    let blue = material(0x5588ee, 0.25, 0.9, 0.7, 60.0, 0.1);
    let mirror = material(0xfafafa, 0.05, 0.2, 0.8, 200.0, 0.7);
    let white = material(0xffffff, 0.35, 0.8, 0.2, 10.0, 0.05);
    let black = material(0x222222, 0.35, 0.8, 0.2, 10.0, 0.05);

    let scene = Scene::new(
        vec![
            Sphere::new(Vector::new(-58.0, 20.0, 15.0), 20.0, green),
            Sphere::new(Vector::new(0.0, 25.0, 0.0), 25.0, mirror),
            Sphere::new(Vector::new(52.0, 15.0, -20.0), 15.0, blue),
            CheckerBoard::new(
                Vector::ZERO,
                Vector::new(0.0, 1.0, 0.0),
                30.0,
                white,
                black,
            ),
        ],
        vec![
            SoftLight::new(
                Vector::new(-120.0, 200.0, -180.0),
                Colour::from_hex(0xfff1d8) * 0.75,
                30.0,
            ),
            SoftLight::new(
                Vector::new(150.0, 120.0, -120.0),
                Colour::from_hex(0xd8e8ff) * 0.35,
                50.0,
            ),
        ],
    );

    let camera = Camera::new(
        Vector::new(0.0, 65.0, -270.0),
        Vector::new(0.0, 25.0, 0.0),
        80.0,
        60.0,
        Lens::new(50.0).with_aperture(1.0),
    );

    (Arc::new(scene), Arc::new(camera))
}

/// A row of matte spheres above a plain floor, lit by a single point
/// light. Renders quickly; useful for smoke tests.
fn spheres() -> (Arc<Scene>, Arc<Camera>) {
    let floor = material(0x999999, 0.3, 0.9, 0.1, 10.0, 0.0);

    let mut objects = vec![Plane::new(
        Vector::ZERO,
        Vector::new(0.0, 1.0, 0.0),
        floor,
    )];
    let hues = [0xdd4444, 0xddaa33, 0x44bb44, 0x4477dd];
    for (i, hue) in hues.into_iter().enumerate() {
        let x = (i as f64 - 1.5) * 45.0;
        objects.push(Sphere::new(
            Vector::new(x, 18.0, 0.0),
            18.0,
            material(hue, 0.3, 0.9, 0.4, 30.0, 0.0),
        ));
    }

    let scene = Scene::new(
        objects,
        vec![PointLight::new(
            Vector::new(0.0, 220.0, -150.0),
            Colour::from_hex(0xffffff) * 0.85,
        )],
    );

    let camera = Camera::new(
        Vector::new(0.0, 55.0, -240.0),
        Vector::new(0.0, 18.0, 0.0),
        80.0,
        60.0,
        Lens::new(50.0),
    );

    (Arc::new(scene), Arc::new(camera))
}
