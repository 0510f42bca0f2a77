//! Infinite plane primitive in implicit form a·x + b·y + c·z + d = 0.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use phong_math::{Interval, Ray, Vec3};

/// Denominators below this are treated as a ray parallel to the plane.
const PARALLEL_EPSILON: f64 = 1e-12;

/// An infinite plane.
#[derive(Debug, Clone)]
pub struct Plane {
    /// (a, b, c), also the constant surface normal
    normal: Vec3,
    d: f64,
    material: Arc<Material>,
}

impl Plane {
    /// Create the plane a·x + b·y + c·z + d = 0.
    pub fn new(a: f64, b: f64, c: f64, d: f64, material: Arc<Material>) -> Self {
        Self {
            normal: Vec3::new(a, b, c),
            d,
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = -(self.normal.dot(ray.origin()) + self.d) / denom;
        ray_t.contains(t).then_some(t)
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let t = self.intersect(ray, ray_t)?;

        Some(HitRecord {
            t,
            p: ray.at(t),
            normal: self.normal,
            material: &self.material,
        })
    }

    fn shadow_hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.intersect(ray, ray_t).is_some()
    }
}
