//! End-to-end rendering tests.

use std::sync::Arc;

use phong_tracer::{
    render, render_image, Camera, Color, Material, Plane, PointLight, RenderConfig, Scene, Sphere,
    TracerError, Triangle, Vec3, ViewPlane,
};

fn looking_down(width: u32, height: u32) -> Camera {
    Camera::new(
        Vec3::new(0.0, 10.0, 0.0),
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -1.0),
        ViewPlane::from_aspect(width, height, 1.0),
        width,
        height,
    )
}

#[test]
fn empty_scene_renders_background() {
    let background = Color::new(0.2, 0.3, 0.5);
    let scene = Scene::new(looking_down(16, 9)).with_background(background);

    let output = render(&scene, &RenderConfig::default());
    assert!(output.image.pixels.iter().all(|c| *c == background));
}

#[test]
fn plane_under_overhead_light_is_flat_diffuse() {
    let k_d = Color::new(0.6, 0.3, 0.2);
    let mut scene = Scene::new(looking_down(1, 1));
    let matte = scene.add_material(Material::new(k_d));
    scene.add_surface(Plane::new(0.0, 1.0, 0.0, 0.0, matte));
    scene.add_light(PointLight::new(Vec3::new(0.0, 20.0, 0.0), Color::ONE));

    let output = render(&scene, &RenderConfig::default());
    assert!((output.image.get(0, 0) - k_d).length() < 1e-12);
}

#[test]
fn distant_overhead_light_lights_plane_evenly() {
    let k_d = Color::new(0.6, 0.3, 0.2);
    let mut scene = Scene::new(looking_down(8, 8));
    let matte = scene.add_material(Material::new(k_d));
    scene.add_surface(Plane::new(0.0, 1.0, 0.0, 0.0, matte));
    scene.add_light(PointLight::new(Vec3::new(0.0, 1e7, 0.0), Color::ONE));

    let output = render(&scene, &RenderConfig::default());
    for color in &output.image.pixels {
        assert!((*color - k_d).length() < 1e-6, "{:?} != {:?}", color, k_d);
    }
}

#[test]
fn sphere_shows_against_background() {
    let background = Color::new(0.0, 0.0, 1.0);
    let camera = Camera::new(
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::ZERO,
        Vec3::Y,
        ViewPlane::from_aspect(9, 9, 2.0),
        9,
        9,
    );
    let mut scene = Scene::new(camera)
        .with_background(background)
        .with_ambient(Color::ONE);
    let red = scene.add_material(Material::new(Color::new(1.0, 0.0, 0.0)));
    scene.add_surface(Sphere::new(Vec3::ZERO, 1.0, red));

    let output = render(&scene, &RenderConfig::default());
    assert_eq!(output.image.get(4, 4), Color::new(1.0, 0.0, 0.0));
    assert_eq!(output.image.get(0, 0), background);
}

#[test]
fn triangle_casts_shadow_on_plane() {
    let mut scene = Scene::new(looking_down(1, 1));
    let matte = scene.add_material(Material::new(Color::ONE));
    scene.add_surface(Plane::new(0.0, 1.0, 0.0, 0.0, Arc::clone(&matte)));
    // Horizontal triangle between the plane and the light
    scene.add_surface(Triangle::new(
        Vec3::new(1.0, 5.0, -1.0),
        Vec3::new(-1.0, 5.0, -1.0),
        Vec3::new(0.0, 5.0, 1.0),
        matte,
    ));
    scene.add_light(PointLight::new(Vec3::new(0.0, 8.0, 0.0), Color::ONE));

    // Look at the origin from below the triangle
    scene.camera = Camera::new(
        Vec3::new(6.0, 3.0, 0.0),
        Vec3::ZERO,
        Vec3::Y,
        ViewPlane::from_aspect(1, 1, 1.0),
        1,
        1,
    );

    let shadowed = render(&scene, &RenderConfig::default());
    assert_eq!(shadowed.image.get(0, 0), Color::ZERO);

    let lit = render(
        &scene,
        &RenderConfig {
            has_shadow: false,
            ..Default::default()
        },
    );
    assert!(lit.image.get(0, 0).x > 0.0);
}

#[test]
fn render_image_writes_png() {
    let path = std::env::temp_dir()
        .join("phong_tracer_it")
        .join("render_image_writes_png.png");
    let scene = Scene::new(looking_down(4, 3)).with_background(Color::new(1.0, 0.0, 0.0));

    let stats = render_image(&path, &scene, &RenderConfig::default()).unwrap();
    assert_eq!(stats.pixels, 12);

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (4, 3));
    assert!(decoded.pixels().all(|p| p.0 == [255, 0, 0]));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn render_image_rejects_empty_camera() {
    let path = std::env::temp_dir().join("phong_tracer_never_written.png");
    let scene = Scene::new(looking_down(0, 0));

    let err = render_image(&path, &scene, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, TracerError::InvalidScene(_)));
}

#[test]
fn unwritable_output_reports_path() {
    // A regular file cannot be used as a directory
    let blocker = std::env::temp_dir().join("phong_tracer_blocker_file");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let path = blocker.join("out.png");

    let scene = Scene::new(looking_down(2, 2));
    let err = render_image(&path, &scene, &RenderConfig::default()).unwrap_err();

    assert!(matches!(err, TracerError::OutputDir { .. }));
    assert!(err.to_string().contains("phong_tracer_blocker_file"));

    let _ = std::fs::remove_file(&blocker);
}
