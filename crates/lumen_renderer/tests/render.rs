//! End to end render tests on small scenes.

use std::sync::Arc;

use lumen_core::{
    Camera, CheckerBoard, Image, Lens, Material, Pixel, Plane, PointLight, Scene, SoftLight,
    Sphere,
};
use lumen_math::{Colour, Vector};
use lumen_renderer::{RenderConfig, Renderer};

fn material(colour: Colour, ambient: f64, reflectivity: f64) -> Arc<Material> {
    Arc::new(Material::new(colour, ambient, 0.6, 0.3, 30.0, reflectivity))
}

/// A small scene with every sampler in play: soft shadows, reflections,
/// and a checkerboard with hard tile edges.
fn busy_scene() -> Arc<Scene> {
    let white = material(Colour::new(1.0, 1.0, 1.0), 0.3, 0.0);
    let red = material(Colour::new(0.9, 0.2, 0.2), 0.2, 0.4);
    let grey = material(Colour::new(0.4, 0.4, 0.4), 0.2, 0.0);

    Arc::new(Scene::new(
        vec![
            Sphere::new(Vector::new(0.0, 10.0, 0.0), 10.0, red),
            CheckerBoard::new(
                Vector::ZERO,
                Vector::new(0.0, 1.0, 0.0),
                15.0,
                white,
                grey,
            ),
        ],
        vec![
            PointLight::new(Vector::new(50.0, 80.0, -40.0), Colour::new(0.8, 0.8, 0.8)),
            SoftLight::new(
                Vector::new(-40.0, 100.0, 0.0),
                Colour::new(0.3, 0.3, 0.3),
                20.0,
            ),
        ],
    ))
}

fn overhead_camera(lens: Lens) -> Arc<Camera> {
    Arc::new(Camera::new(
        Vector::new(0.0, 40.0, -100.0),
        Vector::new(0.0, 10.0, 0.0),
        50.0,
        40.0,
        lens,
    ))
}

fn render(scene: Arc<Scene>, camera: Arc<Camera>, config: RenderConfig) -> Image {
    let mut image = Image::new(16, 12);
    Renderer::new(scene, camera, config).render(&mut image);
    image
}

#[test]
fn renders_are_bit_identical_across_runs() {
    let config = RenderConfig::default().with_seed(117).with_dof_samples(3);
    let camera = overhead_camera(Lens::new(50.0).with_aperture(2.0));

    let first = render(busy_scene(), camera.clone(), config);
    let second = render(busy_scene(), camera, config);

    assert_eq!(first.pixels(), second.pixels());
}

#[test]
fn empty_scene_renders_black() {
    let camera = overhead_camera(Lens::new(50.0));
    let image = render(Arc::new(Scene::default()), camera, RenderConfig::default());

    assert!(image.pixels().iter().all(|p| *p == Pixel::default()));
}

#[test]
fn pinhole_render_ignores_dof_sample_count() {
    // With a zero aperture every depth-of-field sample fires the same
    // ray, so averaging more of them changes nothing.
    let scene = Arc::new(Scene::new(
        vec![Sphere::new(
            Vector::new(0.0, 10.0, 0.0),
            10.0,
            material(Colour::new(0.9, 0.2, 0.2), 0.2, 0.0),
        )],
        vec![PointLight::new(
            Vector::new(50.0, 80.0, -40.0),
            Colour::new(0.8, 0.8, 0.8),
        )],
    ));

    let one = render(
        scene.clone(),
        overhead_camera(Lens::new(50.0)),
        RenderConfig::default(),
    );
    let eight = render(
        scene,
        overhead_camera(Lens::new(50.0)),
        RenderConfig::default().with_dof_samples(8),
    );

    assert_eq!(one.pixels(), eight.pixels());
}

#[test]
fn each_pixel_keeps_its_own_centre_sample() {
    // A sphere small enough that only the centre pixel's centre sample
    // hits it, with contrast refinement disabled. The bright sample must
    // land on the pixel it was taken for, not a neighbour's slot.
    let white = Arc::new(Material::new(
        Colour::new(1.0, 1.0, 1.0),
        1.0,
        0.0,
        0.0,
        10.0,
        0.0,
    ));
    let scene = Arc::new(Scene::new(
        vec![Sphere::new(Vector::ZERO, 10.0, white)],
        vec![],
    ));
    let camera = Arc::new(Camera::new(
        Vector::new(0.0, 0.0, -100.0),
        Vector::ZERO,
        50.0,
        50.0,
        Lens::new(50.0),
    ));

    let mut config = RenderConfig::default();
    config.max_pixel_diff = f64::INFINITY;

    let mut image = Image::new(3, 3);
    Renderer::new(scene, camera, config).render(&mut image);

    let white = Pixel {
        r: 255,
        g: 255,
        b: 255,
    };
    assert_eq!(image.get(1, 1), white);
    for (i, pixel) in image.pixels().iter().enumerate() {
        if i != 4 {
            assert_eq!(*pixel, Pixel::default());
        }
    }
}

#[test]
fn dof_average_approaches_the_pinhole_render() {
    // An out-of-focus floor with a strong shading gradient: every lens
    // sample lands on the same smooth surface, so the average over more
    // aperture samples settles toward the pinhole image.
    let floor = Arc::new(Material::new(
        Colour::new(0.9, 0.9, 0.9),
        0.2,
        1.0,
        0.0,
        10.0,
        0.0,
    ));
    let scene = Arc::new(Scene::new(
        vec![Plane::new(Vector::ZERO, Vector::new(0.0, 1.0, 0.0), floor)],
        vec![PointLight::new(
            Vector::new(40.0, 60.0, 0.0),
            Colour::new(1.0, 1.0, 1.0),
        )],
    ));
    let camera = |aperture: f64| {
        Arc::new(Camera::new(
            Vector::new(0.0, 100.0, -100.0),
            Vector::new(0.0, 0.0, 20.0),
            50.0,
            50.0,
            Lens::new(50.0).with_aperture(aperture).with_focus(0.5),
        ))
    };

    let mut base = RenderConfig::default().with_seed(33);
    // One sample point per pixel isolates the lens average.
    base.max_pixel_diff = f64::INFINITY;

    let render_with = |camera: Arc<Camera>, config: RenderConfig| {
        let mut image = Image::new(20, 20);
        Renderer::new(scene.clone(), camera, config).render(&mut image);
        image
    };

    let pinhole = render_with(camera(0.0), base);
    let coarse = render_with(camera(4.0), base.with_dof_samples(2));
    let fine = render_with(camera(4.0), base.with_dof_samples(128));

    let distance_to_pinhole = |image: &Image| -> u64 {
        image
            .pixels()
            .iter()
            .zip(pinhole.pixels())
            .map(|(a, b)| {
                u64::from(a.r.abs_diff(b.r))
                    + u64::from(a.g.abs_diff(b.g))
                    + u64::from(a.b.abs_diff(b.b))
            })
            .sum()
    };

    assert!(distance_to_pinhole(&fine) <= distance_to_pinhole(&coarse));
}

#[test]
fn centred_sphere_fills_the_middle_of_the_frame() {
    let white = Arc::new(Material::new(
        Colour::new(1.0, 1.0, 1.0),
        1.0,
        0.0,
        0.0,
        10.0,
        0.0,
    ));
    let scene = Arc::new(Scene::new(
        vec![Sphere::new(Vector::ZERO, 20.0, white)],
        vec![],
    ));
    let camera = Arc::new(Camera::new(
        Vector::new(0.0, 0.0, -100.0),
        Vector::ZERO,
        50.0,
        50.0,
        Lens::new(50.0),
    ));

    let mut image = Image::new(15, 15);
    Renderer::new(scene, camera, RenderConfig::default()).render(&mut image);

    let white = Pixel {
        r: 255,
        g: 255,
        b: 255,
    };
    assert_eq!(image.get(7, 7), white);
    assert_eq!(image.get(0, 0), Pixel::default());
    assert_eq!(image.get(14, 14), Pixel::default());
}

#[test]
fn highlight_paints_supersampled_silhouette_pixels() {
    let white = Arc::new(Material::new(
        Colour::new(1.0, 1.0, 1.0),
        1.0,
        0.0,
        0.0,
        10.0,
        0.0,
    ));
    let scene = Arc::new(Scene::new(
        vec![Sphere::new(Vector::ZERO, 20.0, white)],
        vec![],
    ));
    let camera = Arc::new(Camera::new(
        Vector::new(0.0, 0.0, -100.0),
        Vector::ZERO,
        50.0,
        50.0,
        Lens::new(50.0),
    ));

    let mut config = RenderConfig::default();
    config.highlight.supersampled_pixels = true;
    config.highlight.colour = Colour::new(1.0, 0.0, 1.0);

    let mut image = Image::new(16, 16);
    Renderer::new(scene, camera, config).render(&mut image);

    // The sphere's silhouette contrasts with the background, so some
    // pixels must have been selected for refinement and painted.
    let magenta = Pixel {
        r: 255,
        g: 0,
        b: 255,
    };
    assert!(image.pixels().iter().any(|p| *p == magenta));
}
