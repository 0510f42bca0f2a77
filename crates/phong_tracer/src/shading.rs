//! Recursive Phong shading with hard shadows and mirror reflection.

use crate::{Hittable, Material, PointLight, Scene};
use phong_math::{mirror_reflect, Color, Interval, Ray, Vec3};

/// Smallest accepted ray parameter. Keeps secondary rays from hitting the
/// surface they start on (shadow acne).
pub const DEFAULT_TMIN: f64 = 1e-5;

/// Upper bound for primary and reflected rays.
pub const DEFAULT_TMAX: f64 = f64::INFINITY;

/// Compute the color seen along `ray`.
///
/// `reflect_levels` is the number of mirror bounces still allowed; 0 means
/// reflected rays are never traced. The result is not clamped, channels may
/// exceed 1.0.
pub fn trace_ray(ray: &Ray, scene: &Scene, reflect_levels: u32, has_shadow: bool) -> Color {
    let ray = ray.unit_direction();

    let rec = match scene.hit(&ray, Interval::new(DEFAULT_TMIN, DEFAULT_TMAX)) {
        Some(rec) => rec,
        None => return scene.background,
    };

    let n = rec.normal.normalize_or_zero();
    let v = -ray.direction();

    let mut result = Color::ZERO;

    for light in &scene.lights {
        let l = (light.position - rec.p).normalize_or_zero();

        if has_shadow && is_occluded(scene, rec.p, light) {
            continue;
        }

        result += phong_lighting(l, n, v, rec.material, light);
    }

    result += scene.ambient.intensity * rec.material.k_a;

    if reflect_levels > 0 {
        let reflected = Ray::new(rec.p, mirror_reflect(v, n));
        result += rec.material.k_rg * trace_ray(&reflected, scene, reflect_levels - 1, has_shadow);
    }

    result
}

/// I_light * (k_d * max(0, N.L) + k_r * max(0, R.V)^n).
///
/// L, N and V are unit vectors pointing away from the surface.
fn phong_lighting(l: Vec3, n: Vec3, v: Vec3, material: &Material, light: &PointLight) -> Color {
    let r = mirror_reflect(l, n);

    let n_dot_l = n.dot(l).max(0.0);
    let r_dot_v = r.dot(v).max(0.0);

    light.intensity * (material.k_d * n_dot_l + material.k_r * r_dot_v.powf(material.n))
}

/// Whether any surface lies between `point` and the light.
fn is_occluded(scene: &Scene, point: Vec3, light: &PointLight) -> bool {
    let to_light = light.position - point;
    let shadow_ray = Ray::new(point, to_light.normalize_or_zero());

    scene.shadow_hit(&shadow_ray, Interval::new(DEFAULT_TMIN, to_light.length()))
}
