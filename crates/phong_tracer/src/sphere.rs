//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use phong_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Solve |o + t·d - c|² = r² and pick the candidate root.
    ///
    /// The smaller root wins when it is non-negative, otherwise the larger
    /// one is used. The candidate is then checked against `ray_t`.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);
        let t = if t1 >= 0.0 { t1 } else { t2 };

        ray_t.contains(t).then_some(t)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let t = self.intersect(ray, ray_t)?;
        let p = ray.at(t);

        Some(HitRecord {
            t,
            p,
            normal: p - self.center,
            material: &self.material,
        })
    }

    fn shadow_hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.intersect(ray, ray_t).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> Arc<Material> {
        Arc::new(Material::new(Vec3::splat(0.5)))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 2.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(1e-5, f64::INFINITY))
            .expect("ray aimed at the sphere should hit");

        assert!((rec.t - 3.0).abs() < 1e-9);
        assert!(((rec.p - sphere.center()).length() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_normal_not_normalized() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 2.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(1e-5, f64::INFINITY)).unwrap();
        assert!((rec.normal - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-9);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let interval = Interval::new(1e-5, f64::INFINITY);

        assert!(sphere.hit(&ray, interval).is_none());
        assert!(!sphere.shadow_hit(&ray, interval));
    }

    #[test]
    fn test_sphere_respects_tmax() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 2.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(!sphere.shadow_hit(&ray, Interval::new(1e-5, 2.5)));
        assert!(sphere.shadow_hit(&ray, Interval::new(1e-5, 3.5)));
    }

    #[test]
    fn test_ray_from_inside_takes_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, Interval::new(1e-5, f64::INFINITY)).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_direction_misses() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);

        assert!(sphere.hit(&ray, Interval::UNIVERSE).is_none());
    }
}
