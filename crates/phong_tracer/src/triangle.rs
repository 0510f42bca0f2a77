//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use phong_math::{Interval, Ray, Vec3};

/// Determinants below this mean the ray is parallel to the triangle or the
/// triangle is degenerate.
const PARALLEL_EPSILON: f64 = 1e-12;

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices, counter-clockwise when seen from the front
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Face normal, (v1 - v0) × (v2 - v0), not normalized
    normal: Vec3,
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<Material>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0);

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Möller-Trumbore. Points on an edge or vertex count as inside.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        ray_t.contains(t).then_some(t)
    }
}

impl Hittable for Triangle {
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
