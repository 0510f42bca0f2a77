//! The two demo scenes rendered by the binary.

use std::sync::Arc;

use phong_math::glam::DMat3;
use phong_tracer::{
    Camera, Color, Material, Plane, PointLight, RenderConfig, Scene, Sphere, Triangle, Vec3,
    ViewPlane,
};

/// A scene together with the settings it is rendered with.
pub struct DemoScene {
    pub name: &'static str,
    pub output: &'static str,
    pub width: u32,
    pub height: u32,
    pub config: RenderConfig,
    pub build: fn(u32, u32) -> Scene,
}

/// Every demo, in render order.
pub fn all() -> Vec<DemoScene> {
    vec![
        DemoScene {
            name: "Scene 1",
            output: "out1.png",
            width: 640,
            height: 480,
            config: RenderConfig {
                reflect_levels: 2,
                has_shadow: false,
                ..Default::default()
            },
            build: scene1,
        },
        DemoScene {
            name: "Scene 2",
            output: "out2.png",
            width: 640,
            height: 480,
            config: RenderConfig {
                reflect_levels: 2,
                has_shadow: true,
                ..Default::default()
            },
            build: scene2,
        },
    ]
}

fn demo_camera(eye: Vec3, width: u32, height: u32) -> Camera {
    Camera::new(
        eye,
        Vec3::new(45.0, 22.0, 55.0),
        Vec3::Y,
        ViewPlane::from_aspect(width, height, 3.0),
        width,
        height,
    )
}

/// Glossy material in the style shared by most demo surfaces.
fn glossy(k_d: Color, k_r: Color, k_rg: Color, n: f64) -> Material {
    Material::new(k_d)
        .with_specular(k_r, n)
        .with_reflection(k_rg)
}

/// Two spheres and a cube in the corner of three planes.
pub fn scene1(width: u32, height: u32) -> Scene {
    let mut scene = Scene::new(demo_camera(Vec3::new(150.0, 120.0, 150.0), width, height))
        .with_background(Color::new(0.2, 0.3, 0.5))
        .with_ambient(Color::ONE * 0.25);

    let spec = Color::splat(0.8) / 1.5;
    let mirror = Color::splat(0.8) / 3.0;
    let light_red = scene.add_material(glossy(Color::new(0.8, 0.4, 0.4), spec, mirror, 64.0));
    let light_green = scene.add_material(glossy(Color::new(0.4, 0.8, 0.4), spec, mirror, 64.0));
    let light_blue = scene.add_material(glossy(
        Color::new(0.4, 0.4, 0.8) * 0.9,
        spec,
        Color::splat(0.8) / 2.5,
        64.0,
    ));
    let yellow = scene.add_material(glossy(Color::new(0.6, 0.6, 0.2), spec, mirror, 64.0));
    let gray = scene.add_material(glossy(Color::splat(0.6), Color::splat(0.6), mirror, 128.0));

    scene.add_light(PointLight::new(Vec3::new(100.0, 120.0, 10.0), Color::ONE * 0.6));
    scene.add_light(PointLight::new(Vec3::new(5.0, 80.0, 60.0), Color::ONE * 0.6));

    // Floor and the two walls
    scene.add_surface(Plane::new(0.0, 1.0, 0.0, 0.0, light_blue));
    scene.add_surface(Plane::new(1.0, 0.0, 0.0, 0.0, Arc::clone(&gray)));
    scene.add_surface(Plane::new(0.0, 0.0, 1.0, 0.0, gray));

    scene.add_surface(Sphere::new(Vec3::new(40.0, 20.0, 42.0), 22.0, light_red));
    scene.add_surface(Sphere::new(Vec3::new(75.0, 10.0, 40.0), 12.0, light_green));

    // Cube spanning x 30..50, y 0..20, z 70..90. The bottom face is on the floor.
    let v = |x: f64, y: f64, z: f64| Vec3::new(x, y, z);
    let faces = [
        // +x
        [v(50.0, 0.0, 70.0), v(50.0, 20.0, 70.0), v(50.0, 20.0, 90.0)],
        [v(50.0, 0.0, 70.0), v(50.0, 20.0, 90.0), v(50.0, 0.0, 90.0)],
        // +y
        [v(50.0, 20.0, 90.0), v(50.0, 20.0, 70.0), v(30.0, 20.0, 70.0)],
        [v(50.0, 20.0, 90.0), v(30.0, 20.0, 70.0), v(30.0, 20.0, 90.0)],
        // +z
        [v(50.0, 0.0, 90.0), v(50.0, 20.0, 90.0), v(30.0, 20.0, 90.0)],
        [v(50.0, 0.0, 90.0), v(30.0, 20.0, 90.0), v(30.0, 0.0, 90.0)],
        // -x
        [v(30.0, 0.0, 90.0), v(30.0, 20.0, 90.0), v(30.0, 20.0, 70.0)],
        [v(30.0, 0.0, 90.0), v(30.0, 20.0, 70.0), v(30.0, 0.0, 70.0)],
        // -z
        [v(30.0, 0.0, 70.0), v(30.0, 20.0, 70.0), v(50.0, 20.0, 70.0)],
        [v(30.0, 0.0, 70.0), v(50.0, 20.0, 70.0), v(50.0, 0.0, 70.0)],
    ];
    for [a, b, c] in faces {
        scene.add_surface(Triangle::new(a, b, c, Arc::clone(&yellow)));
    }

    scene
}

/// Axis a tetrahedron is turned about before placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    X,
    Y,
    Z,
}

/// Fixed turn applied by [`Rotation`], in radians.
const STAR_ROTATION: f64 = 180.0;

/// Four triangles of a regular-ish tetrahedron centred on `center`.
///
/// A negative `scale` mirrors it through the centre, which is how the star
/// shapes are made from two tetrahedra.
pub fn tetrahedron(
    center: Vec3,
    scale: f64,
    rotation: Rotation,
    material: &Arc<Material>,
) -> [Triangle; 4] {
    let k = 1.0 / 2.0_f64.sqrt();
    let corners = [
        Vec3::new(1.0, 0.0, -k),
        Vec3::new(-1.0, 0.0, -k),
        Vec3::new(0.0, 1.0, k),
        Vec3::new(0.0, -1.0, k),
    ];

    let turn = match rotation {
        Rotation::X => DMat3::from_rotation_x(STAR_ROTATION),
        Rotation::Y => DMat3::from_rotation_y(STAR_ROTATION),
        Rotation::Z => DMat3::from_rotation_z(STAR_ROTATION),
    };
    let [v1, v2, v3, v4] = corners.map(|c| turn * (c * scale) + center);

    [
        Triangle::new(v1, v2, v3, Arc::clone(material)),
        Triangle::new(v1, v3, v4, Arc::clone(material)),
        Triangle::new(v2, v3, v4, Arc::clone(material)),
        Triangle::new(v1, v2, v4, Arc::clone(material)),
    ]
}

/// Night sky: a moon and tetrahedral stars over midnight-blue planes.
pub fn scene2(width: u32, height: u32) -> Scene {
    let mut scene = Scene::new(demo_camera(Vec3::new(200.0, 120.0, 200.0), width, height))
        .with_background(Color::new(0.098, 0.098, 0.439))
        .with_ambient(Color::splat(0.6) * 0.25);

    let bright_yellow =
        scene.add_material(glossy(Color::new(1.0, 1.0, 0.0), Color::ONE, Color::ONE, 0.0));
    let midnight_blue = scene.add_material(glossy(
        Color::new(0.098, 0.098, 0.439),
        Color::splat(0.8) / 1.5,
        Color::splat(0.8) / 3.0,
        128.0,
    ));
    let yellow = scene.add_material(glossy(Color::new(1.0, 1.0, 0.0), Color::ONE, Color::ONE, 8.0));

    scene.add_light(PointLight::new(Vec3::new(100.0, 120.0, 10.0), Color::ONE * 0.3));
    scene.add_light(PointLight::new(Vec3::new(5.0, 80.0, 60.0), Color::ONE * 0.3));

    scene.add_surface(Plane::new(0.0, 1.0, 0.0, 0.0, Arc::clone(&midnight_blue)));
    scene.add_surface(Plane::new(1.0, 0.0, 0.0, 0.0, Arc::clone(&midnight_blue)));
    scene.add_surface(Plane::new(0.0, 0.0, 1.0, 0.0, midnight_blue));

    // Moon
    scene.add_surface(Sphere::new(Vec3::new(70.0, 40.0, 80.0), 30.0, yellow));

    let stars = [
        (Vec3::new(35.0, 75.0, 100.0), 15.0, Rotation::X),
        (Vec3::new(120.0, 23.0, 70.0), 5.0, Rotation::Z),
        (Vec3::new(45.0, 50.0, 130.0), 5.0, Rotation::Z),
        (Vec3::new(120.0, 80.0, 70.0), 5.0, Rotation::X),
        (Vec3::new(35.0, 70.0, 20.0), 10.0, Rotation::Y),
        (Vec3::new(56.0, 11.0, 130.0), 10.0, Rotation::X),
    ];
    for (center, size, rotation) in stars {
        for scale in [size, -size] {
            for triangle in tetrahedron(center, scale, rotation, &bright_yellow) {
                scene.add_surface(triangle);
            }
        }
    }

    scene
}
